//! Encryption and decryption for the shift cipher and the repeating-key cipher.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::alphabet::{self, letter, letter_index};
use crate::{CipherError, Result};

pub fn shift_encrypt(text: &str, shift: i64) -> String {
  text.chars().map(|c| alphabet::shift(c, shift)).collect()
}

pub fn shift_decrypt(text: &str, shift: i64) -> String {
  shift_encrypt(text, -shift)
}

pub fn key_encrypt(text: &str, key: &str) -> Result<String> {
  Ok(Key::parse(key)?.encrypt(text))
}

pub fn key_decrypt(text: &str, key: &str) -> Result<String> {
  Ok(Key::parse(key)?.decrypt(text))
}

/// A repeating key: one shift per position, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
  shifts: Vec<u8>,
}

impl Key {
  /// Normalize `key` by dropping everything that is not a letter.
  pub fn parse(key: &str) -> Result<Self> {
    let shifts: Vec<u8> = key.chars().filter_map(letter_index).collect();
    Self::from_shifts(shifts)
  }

  pub fn from_shifts(shifts: Vec<u8>) -> Result<Self> {
    if shifts.is_empty() {
      return Err(CipherError::InvalidKey);
    }
    Ok(Self { shifts: shifts.into_iter().map(|s| s % alphabet::ALPHABET_SIZE as u8).collect() })
  }

  pub fn shifts(&self) -> &[u8] {
    &self.shifts
  }

  pub fn len(&self) -> usize {
    self.shifts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.shifts.is_empty()
  }

  pub fn encrypt(&self, text: &str) -> String {
    self.apply(text, 1)
  }

  pub fn decrypt(&self, text: &str) -> String {
    self.apply(text, -1)
  }

  // The key position only advances on letters.
  fn apply(&self, text: &str, direction: i64) -> String {
    let mut position = 0;
    text
      .chars()
      .map(|c| {
        if letter_index(c).is_none() {
          return c;
        }
        let amount = self.shifts[position % self.shifts.len()] as i64 * direction;
        position += 1;
        alphabet::shift(c, amount)
      })
      .collect()
  }
}

impl fmt::Display for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &shift in &self.shifts {
      write!(f, "{}", letter(shift))?;
    }
    Ok(())
  }
}

impl Serialize for Key {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
