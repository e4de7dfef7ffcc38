//! Classical shift and repeating-key ciphers, with key recovery from
//! ciphertext alone using English letter-frequency statistics.
//!
//! ```
//! use cipherbreak::{key_break, key_encrypt};
//!
//! let plaintext = "It was the best of times, it was the worst of times, it was the age of wisdom, \
//!   it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, \
//!   it was the season of Light, it was the season of Darkness, it was the spring of hope, \
//!   it was the winter of despair, we had everything before us, we had nothing before us, \
//!   we were all going direct to Heaven, we were all going direct the other way.";
//! let ciphertext = key_encrypt(plaintext, "lemon").unwrap();
//!
//! let best = key_break(&ciphertext, 10).unwrap();
//! assert_eq!(best.key.to_string(), "lemon");
//! assert_eq!(best.plaintext, plaintext);
//! ```

pub mod alphabet;
pub mod breaker;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;

pub use breaker::{
  key_break, shift_break, KeyLengthBreaker, ScoredCandidate, ShiftBreaker, DEFAULT_MAX_KEY_LENGTH,
  MIN_LETTERS,
};
pub use codec::{key_decrypt, key_encrypt, shift_decrypt, shift_encrypt, Key};
pub use config::BreakConfig;
pub use error::{CipherError, Result};
pub use scoring::Scorer;
