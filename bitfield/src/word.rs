//! Addressing of single bits inside a sequence of [`Word`]s.
//!
//! Bit `k` of word `j` holds logical position `j * 64 + k`: bit order is
//! little-endian both within a word and across words.

pub type Word = u64;

pub const WORD_BIT_LEN: usize = Word::BITS as usize;

/// Location of one bit: the word that holds it and a single-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitAccessor {
    pub word_index: usize,
    pub bitmask: Word,
}

impl BitAccessor {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self {
            word_index: index / WORD_BIT_LEN,
            bitmask: 1 << (index % WORD_BIT_LEN),
        }
    }

    /// Reads the bit from `words`, treating words past the end as zero.
    #[must_use]
    pub fn value_of(&self, words: &[Word]) -> bool {
        words.get(self.word_index).is_some_and(|word| word & self.bitmask != 0)
    }

    /// # Panics
    ///
    /// Will panic if `words` does not contain `self.word_index`.
    pub fn set_value_of(&self, words: &mut [Word], to: bool) {
        let word = &mut words[self.word_index];
        if to {
            *word |= self.bitmask;
        } else {
            *word &= !self.bitmask;
        }
    }
}

/// Number of words needed to hold `bit_length` bits.
#[must_use]
pub fn word_count(bit_length: usize) -> usize {
    bit_length.div_ceil(WORD_BIT_LEN)
}

/// Drops trailing zero words, always keeping the word at index 0.
pub fn trim(mut words: Vec<Word>) -> Vec<Word> {
    words.truncate(significant_len(&words).max(1));
    words
}

/// Length of `words` once trailing zero words are ignored.
#[must_use]
pub fn significant_len(words: &[Word]) -> usize {
    words.iter().rposition(|&word| word != 0).map_or(0, |last| last + 1)
}
