//! Immutable bit vectors that extend to infinity.
//!
//! A [`Bitfield`] stores a finite prefix of words together with a single
//! inversion flag. Every position past the stored prefix reads as the value of
//! that flag, which makes complementing a value O(1): [`Bitfield::not`] copies
//! the words and flips the flag.
//!
//! ```
//! use bitfield::Bitfield;
//!
//! let zeros = Bitfield::new(8)?;
//! let with_three = zeros.set_bit(3);
//! assert!(with_three.get_bit(3));
//!
//! let complement = with_three.not();
//! assert!(!complement.get_bit(3));
//! assert!(complement.get_bit(100));
//! # Ok::<(), bitfield::BitfieldError>(())
//! ```

pub mod error;
pub use error::{BitfieldError, Result};

mod word;
pub use word::{WORD_BIT_LEN, Word};

mod bitfield;
pub use bitfield::Bitfield;

mod fmt;
pub use fmt::BitOrder;

mod ops;
