use crate::Bitfield;
use crate::word::{Word, trim};
use std::ops::{BitAnd, BitOr, BitXor};

impl Bitfield {
    /// Returns the complement. Runs in O(1) bit operations: the stored words
    /// are copied unchanged and only the inversion flag flips.
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let bitfield = Bitfield::new(8)?.set_bit(3);
    /// let complement = bitfield.not();
    /// assert!(!complement.get_bit(3));
    /// assert!(complement.get_bit(4));
    /// assert!(complement.get_bit(100));
    /// # Ok::<(), bitfield::BitfieldError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Bitfield {
        Bitfield::from_parts(self.words.to_vec(), !self.inverted)
    }

    /// Returns the logical AND.
    ///
    /// The result keeps only as many words as the shorter operand stores and
    /// is padded with ones only when both operands are.
    pub fn and(&self, other: &Bitfield) -> Bitfield {
        let word_len = self.word_len().min(other.word_len());
        let inverted = self.inverted && other.inverted;
        Bitfield::from_parts(self.combined_words(other, word_len, inverted, |left, right| left & right), inverted)
    }

    /// Returns the logical OR.
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let zeros = Bitfield::new(4)?;
    /// let ones = Bitfield::with_fill(4, true)?;
    /// let either = zeros.or(&ones);
    /// assert!(either.get_bit(0) && either.get_bit(1000));
    /// # Ok::<(), bitfield::BitfieldError>(())
    /// ```
    pub fn or(&self, other: &Bitfield) -> Bitfield {
        let word_len = self.word_len().max(other.word_len());
        let inverted = self.inverted || other.inverted;
        Bitfield::from_parts(self.combined_words(other, word_len, inverted, |left, right| left | right), inverted)
    }

    /// Returns the logical XOR, with trailing zero words trimmed.
    pub fn xor(&self, other: &Bitfield) -> Bitfield {
        let word_len = self.word_len().max(other.word_len());
        let inverted = self.inverted ^ other.inverted;
        Bitfield::from_parts(trim(self.combined_words(other, word_len, inverted, |left, right| left ^ right)), inverted)
    }

    // Applies `operation` to the effective words and stores the complement of
    // the outcome when the result is inverted. For AND of two inverted operands
    // this is `!(!a & !b)` over the raw words.
    fn combined_words(
        &self,
        other: &Bitfield,
        word_len: usize,
        inverted: bool,
        operation: impl Fn(Word, Word) -> Word,
    ) -> Vec<Word> {
        (0..word_len)
            .map(|index| {
                let word = operation(self.effective_word(index), other.effective_word(index));
                if inverted { !word } else { word }
            })
            .collect()
    }
}

impl std::ops::Not for &Bitfield {
    type Output = Bitfield;

    fn not(self) -> Bitfield {
        Bitfield::not(self)
    }
}

impl std::ops::Not for Bitfield {
    type Output = Bitfield;

    fn not(self) -> Bitfield {
        Bitfield::from_parts(self.words.into_vec(), !self.inverted)
    }
}

macro_rules! implement_binary_operator {
    ($operator:ident, $operator_method:ident, $method:ident) => {
        impl $operator<&Bitfield> for &Bitfield {
            type Output = Bitfield;

            fn $operator_method(self, other: &Bitfield) -> Bitfield {
                Bitfield::$method(self, other)
            }
        }

        impl $operator for Bitfield {
            type Output = Bitfield;

            fn $operator_method(self, other: Bitfield) -> Bitfield {
                Bitfield::$method(&self, &other)
            }
        }
    };
}

implement_binary_operator!(BitAnd, bitand, and);
implement_binary_operator!(BitOr, bitor, or);
implement_binary_operator!(BitXor, bitxor, xor);
