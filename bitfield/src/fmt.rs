use crate::Bitfield;
use crate::word::{WORD_BIT_LEN, Word};
use std::fmt::{Debug, Display, Formatter, Write};

/// Order in which [`Bitfield::to_bit_string`] lists bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Lowest position first.
    #[default]
    LittleEndian,
    /// Highest stored position first.
    BigEndian,
}

// Binary digits of `word` without leading zeros; zero still has one digit.
fn digit_count(word: Word) -> usize {
    (WORD_BIT_LEN - word.leading_zeros() as usize).max(1)
}

impl Bitfield {
    /// Renders the stored words, inversion applied, as `'0'`/`'1'` characters.
    ///
    /// Each word contributes its binary digits without leading zeros, so the
    /// string is a debugging aid and cannot be parsed back.
    ///
    /// ```
    /// use bitfield::{BitOrder, Bitfield};
    ///
    /// let bitfield = Bitfield::from_bytes(&[0b0000_0110])?;
    /// assert_eq!(bitfield.to_bit_string(BitOrder::BigEndian), "110");
    /// assert_eq!(bitfield.to_bit_string(BitOrder::LittleEndian), "011");
    /// # Ok::<(), bitfield::BitfieldError>(())
    /// ```
    #[must_use]
    pub fn to_bit_string(&self, order: BitOrder) -> String {
        match order {
            BitOrder::LittleEndian => format!("{self}"),
            BitOrder::BigEndian => format!("{self:#}"),
        }
    }
}

/// Little-endian by default, big-endian with `{:#}`.
impl Display for Bitfield {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            for index in (0..self.word_len()).rev() {
                write!(f, "{:b}", self.effective_word(index))?;
            }
        } else {
            for index in 0..self.word_len() {
                let word = self.effective_word(index);
                for bit in 0..digit_count(word) {
                    f.write_char(if (word >> bit) & 1 == 1 { '1' } else { '0' })?;
                }
            }
        }
        Ok(())
    }
}

impl Debug for Bitfield {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitfield(inverted={:?},value={})", self.inverted, self)
    }
}
