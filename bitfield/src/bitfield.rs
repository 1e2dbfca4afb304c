use crate::word::{BitAccessor, WORD_BIT_LEN, Word, significant_len, trim, word_count};
use crate::{BitfieldError, Result};
use std::hash::{Hash, Hasher};

/// An immutable bit vector of unbounded length.
///
/// `Bitfield` stores a finite prefix of [`Word`]s and an inversion flag. The
/// logical bit at position `i` is the stored bit XOR the flag while `i` lies
/// inside the stored prefix, and the flag itself beyond it. In other words the
/// stored prefix is padded to infinity with the value of the flag.
///
/// Every operation returns a new value; nothing mutates an existing
/// `Bitfield`, so values may be shared freely between threads.
///
/// # Construction
///
/// ```
/// use bitfield::Bitfield;
///
/// // Zero-filled
/// let zeros = Bitfield::new(100)?;
/// assert!(!zeros.get_bit(42));
///
/// // One-filled
/// let ones = Bitfield::with_fill(100, true)?;
/// assert!(ones.get_bit(1_000_000));
///
/// // From bytes, least significant bit first
/// let bytes = Bitfield::from_bytes(&[0b0000_0101])?;
/// assert!(bytes.get_bit(0) && !bytes.get_bit(1) && bytes.get_bit(2));
///
/// // From booleans
/// let bools = Bitfield::from_bools(&[false, true])?;
/// assert!(bools.get_bit(1));
/// # Ok::<(), bitfield::BitfieldError>(())
/// ```
///
/// # Equality
///
/// Two values are equal when they agree at every position, regardless of how
/// many words each one stores:
///
/// ```
/// use bitfield::Bitfield;
///
/// let short = Bitfield::new(1)?;
/// let long = Bitfield::new(1000)?;
/// assert_eq!(short, long);
/// assert_ne!(short, short.not());
/// # Ok::<(), bitfield::BitfieldError>(())
/// ```
#[must_use]
#[derive(Clone)]
pub struct Bitfield {
    pub(crate) words: Box<[Word]>,
    pub(crate) inverted: bool,
}

fn ensure_positive(length: usize, constructor: &'static str) -> Result<()> {
    if length == 0 {
        tracing::debug!(constructor, "rejected zero bit length");
        return Err(BitfieldError::InvalidArgument("length must be positive"));
    }
    Ok(())
}

impl Bitfield {
    pub(crate) fn from_parts(words: Vec<Word>, inverted: bool) -> Self {
        debug_assert!(!words.is_empty());
        Self {
            words: words.into_boxed_slice(),
            inverted,
        }
    }

    /// Creates a zero-filled bitfield with room for `length` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        Self::with_fill(length, false)
    }

    /// Creates a bitfield with room for `length` bits in which every position,
    /// including those beyond `length`, reads as `inverted`.
    ///
    /// `length` only sizes the initial storage; it does not bound reads.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `length` is zero.
    pub fn with_fill(length: usize, inverted: bool) -> Result<Self> {
        ensure_positive(length, "with_fill")?;
        Ok(Self::from_parts(vec![0; word_count(length)], inverted))
    }

    /// Creates a non-inverted bitfield holding every bit of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, false, bytes.len() * 8)
    }

    /// Creates a bitfield from the first `length` bits of `bytes`.
    ///
    /// Bit `k` of byte `b` becomes position `b * 8 + k`. Only
    /// `min(length, bytes.len() * 8)` bits are copied. When `inverted` is set
    /// the copied bits are read complemented and the padding reads as one.
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let bitfield = Bitfield::from_bytes_with(&[0xFF, 0xFF], false, 12)?;
    /// assert!(bitfield.get_bit(11));
    /// assert!(!bitfield.get_bit(12));
    /// # Ok::<(), bitfield::BitfieldError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `length` is zero.
    pub fn from_bytes_with(bytes: &[u8], inverted: bool, length: usize) -> Result<Self> {
        ensure_positive(length, "from_bytes_with")?;
        let copied = length.min(bytes.len() * 8);
        let mut words = vec![0; word_count(copied).max(1)];
        let whole_bytes = copied / 8;
        for (byte_index, &byte) in bytes[..whole_bytes].iter().enumerate() {
            words[byte_index / 8] |= Word::from(byte) << ((byte_index % 8) * 8);
        }
        let remainder = copied % 8;
        if remainder != 0 {
            let partial = bytes[whole_bytes] & (u8::MAX >> (8 - remainder));
            words[whole_bytes / 8] |= Word::from(partial) << ((whole_bytes % 8) * 8);
        }
        Ok(Self::from_parts(words, inverted))
    }

    /// Creates a non-inverted bitfield with bit `i` set exactly when `bits[i]` is.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `bits` is empty.
    pub fn from_bools(bits: &[bool]) -> Result<Self> {
        Self::from_bools_with(bits, false, bits.len())
    }

    /// Creates a bitfield from the first `length` entries of `bits`.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::InvalidArgument`] if `length` is zero.
    pub fn from_bools_with(bits: &[bool], inverted: bool, length: usize) -> Result<Self> {
        ensure_positive(length, "from_bools_with")?;
        let copied = length.min(bits.len());
        let mut words = vec![0; word_count(copied).max(1)];
        for (index, &bit) in bits[..copied].iter().enumerate() {
            BitAccessor::for_index(index).set_value_of(&mut words, bit);
        }
        Ok(Self::from_parts(words, inverted))
    }

    /// The raw stored words, before the inversion flag is applied.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of stored words; always at least one.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Number of positions covered by stored words.
    #[must_use]
    pub fn stored_bit_len(&self) -> usize {
        self.words.len() * WORD_BIT_LEN
    }

    /// The value of every position beyond the stored words.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The logical value of word `index`, with the inversion flag applied.
    ///
    /// Words past the stored range read as all zeros or, for an inverted
    /// bitfield, all ones.
    #[inline]
    #[must_use]
    pub fn effective_word(&self, index: usize) -> Word {
        let raw = self.words.get(index).copied().unwrap_or(0);
        if self.inverted { !raw } else { raw }
    }

    /// The logical value of position `index`.
    ///
    /// Never fails: positions past the stored words read as [`is_inverted`](Self::is_inverted).
    #[inline]
    #[must_use]
    pub fn get_bit(&self, index: usize) -> bool {
        BitAccessor::for_index(index).value_of(&self.words) != self.inverted
    }

    /// Returns a copy with position `index` set to one.
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let bitfield = Bitfield::new(8)?.set_bit(200);
    /// assert!(bitfield.get_bit(200));
    /// assert!(!bitfield.get_bit(199));
    /// # Ok::<(), bitfield::BitfieldError>(())
    /// ```
    pub fn set_bit(&self, index: usize) -> Self {
        self.with_stored_bit(index, !self.inverted)
    }

    /// Returns a copy with position `index` set to zero.
    pub fn unset_bit(&self, index: usize) -> Self {
        self.with_stored_bit(index, self.inverted)
    }

    /// Returns a copy with position `index` complemented.
    pub fn flip_bit(&self, index: usize) -> Self {
        if self.get_bit(index) {
            self.unset_bit(index)
        } else {
            self.set_bit(index)
        }
    }

    // New high words are zero, which keeps their logical value at the padding.
    // Clearing a bit past the stored words changes nothing and never grows.
    fn with_stored_bit(&self, index: usize, to: bool) -> Self {
        let accessor = BitAccessor::for_index(index);
        if !to && accessor.word_index >= self.words.len() {
            return Self::from_parts(trim(self.words.to_vec()), self.inverted);
        }
        let word_len = self.words.len().max(accessor.word_index + 1);
        if word_len > self.words.len() {
            tracing::trace!(from = self.words.len(), to = word_len, "growing bitfield storage");
        }
        let mut words = Vec::with_capacity(word_len);
        words.extend_from_slice(&self.words);
        words.resize(word_len, 0);
        accessor.set_value_of(&mut words, to);
        Self::from_parts(trim(words), self.inverted)
    }
}

impl Default for Bitfield {
    fn default() -> Self {
        Self::from_parts(vec![0], false)
    }
}

impl FromIterator<bool> for Bitfield {
    fn from_iter<Bits: IntoIterator<Item = bool>>(bits: Bits) -> Self {
        let mut words = vec![0];
        for (index, bit) in bits.into_iter().enumerate() {
            let accessor = BitAccessor::for_index(index);
            if accessor.word_index == words.len() {
                words.push(0);
            }
            accessor.set_value_of(&mut words, bit);
        }
        Self::from_parts(words, false)
    }
}

impl PartialEq for Bitfield {
    fn eq(&self, other: &Self) -> bool {
        let word_len = self.word_len().max(other.word_len());
        self.inverted == other.inverted
            && (0..word_len).all(|index| self.effective_word(index) == other.effective_word(index))
    }
}

impl Eq for Bitfield {}

impl Hash for Bitfield {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inverted.hash(state);
        self.words[..significant_len(&self.words)].hash(state);
    }
}
