use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
  #[error("Key must contain alphabetic characters")]
  InvalidKey,

  #[error("Ciphertext too short to break: {letters} letters, need at least {minimum}")]
  TextTooShort { letters: usize, minimum: usize },

  #[error("Maximum key length must be at least 1")]
  InvalidMaxKeyLength,
}

impl CipherError {
  pub fn text_too_short(letters: usize, minimum: usize) -> Self {
    Self::TextTooShort { letters, minimum }
  }
}
