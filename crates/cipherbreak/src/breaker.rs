//! Key recovery from ciphertext alone
//!
//! [`ShiftBreaker`] tries every rotation of a shift cipher. [`KeyLengthBreaker`]
//! turns a repeating-key cipher into one shift problem per key position: for a
//! guessed key length `L`, letters `i, i+L, i+2L, ...` were all rotated by the
//! same key letter.

use serde::Serialize;
use tracing::debug;

use crate::alphabet::ALPHABET_SIZE;
use crate::codec::{shift_decrypt, Key};
use crate::scoring::Scorer;
use crate::{CipherError, Result};

/// Fewest letters the key-length search will accept.
pub const MIN_LETTERS: usize = 20;

pub const DEFAULT_MAX_KEY_LENGTH: usize = 10;

/// A candidate decryption. Lower scores read more like English.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate<K> {
  pub score: f64,
  pub key: K,
  pub plaintext: String,
}

/// Best shift for `ciphertext`, scored by rank deviation.
pub fn shift_break(ciphertext: &str) -> ScoredCandidate<u8> {
  ShiftBreaker::default().break_shift(ciphertext)
}

/// Best repeating key of length `1..=max_key_length`, scored by chi-squared.
pub fn key_break(ciphertext: &str, max_key_length: usize) -> Result<ScoredCandidate<Key>> {
  KeyLengthBreaker::default().break_key(ciphertext, max_key_length)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftBreaker {
  scorer: Scorer,
}

impl Default for ShiftBreaker {
  fn default() -> Self {
    Self::new(Scorer::RankDeviation)
  }
}

impl ShiftBreaker {
  pub fn new(scorer: Scorer) -> Self {
    Self { scorer }
  }

  pub fn scorer(&self) -> Scorer {
    self.scorer
  }

  /// Lowest-scoring shift. Ties go to the smallest shift.
  pub fn break_shift(&self, ciphertext: &str) -> ScoredCandidate<u8> {
    let mut best = self.candidate(ciphertext, 0);
    for shift in 1..ALPHABET_SIZE as u8 {
      let candidate = self.candidate(ciphertext, shift);
      if candidate.score < best.score {
        best = candidate;
      }
    }
    best
  }

  /// All 26 shifts, best first. The sort is stable, so equal scores keep
  /// ascending shift order.
  pub fn rank(&self, ciphertext: &str) -> Vec<ScoredCandidate<u8>> {
    let mut candidates: Vec<_> =
      (0..ALPHABET_SIZE as u8).map(|shift| self.candidate(ciphertext, shift)).collect();
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

    for candidate in &candidates {
      debug!(shift = candidate.key, score = candidate.score, "shift candidate");
    }
    candidates
  }

  fn candidate(&self, ciphertext: &str, shift: u8) -> ScoredCandidate<u8> {
    let plaintext = shift_decrypt(ciphertext, shift as i64);
    ScoredCandidate { score: self.scorer.score(&plaintext), key: shift, plaintext }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthBreaker {
  scorer: Scorer,
}

impl Default for KeyLengthBreaker {
  fn default() -> Self {
    Self::new(Scorer::ChiSquared)
  }
}

impl KeyLengthBreaker {
  pub fn new(scorer: Scorer) -> Self {
    Self { scorer }
  }

  pub fn scorer(&self) -> Scorer {
    self.scorer
  }

  /// Lowest-scoring key across every length in `1..=max_key_length`.
  /// Ties go to the shorter key.
  pub fn break_key(&self, ciphertext: &str, max_key_length: usize) -> Result<ScoredCandidate<Key>> {
    let letters: Vec<char> = ciphertext.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.len() < MIN_LETTERS {
      return Err(CipherError::text_too_short(letters.len(), MIN_LETTERS));
    }
    if max_key_length == 0 {
      return Err(CipherError::InvalidMaxKeyLength);
    }

    // Past the letter count, extra positions only add `a` shifts and tie.
    let mut best: Option<ScoredCandidate<Key>> = None;
    for key_length in 1..=max_key_length.min(letters.len()) {
      let key = self.recover_key(&letters, key_length)?;
      let plaintext = key.decrypt(ciphertext);
      let score = self.scorer.score(&plaintext);
      debug!(key_length, key = %key, score, "key candidate");

      if best.as_ref().map_or(true, |b| score < b.score) {
        best = Some(ScoredCandidate { score, key, plaintext });
      }
    }

    best.ok_or(CipherError::InvalidMaxKeyLength)
  }

  /// Recover one shift per key position from the interleaved subsequences.
  pub fn recover_key(&self, letters: &[char], key_length: usize) -> Result<Key> {
    let shifts = (0..key_length)
      .map(|position| {
        let column = interleaved(letters, position, key_length);
        ShiftBreaker::new(self.scorer).break_shift(&column).key
      })
      .collect();
    Key::from_shifts(shifts)
  }
}

/// Letters at `offset, offset + step, offset + 2*step, ...`.
pub fn interleaved(letters: &[char], offset: usize, step: usize) -> String {
  letters.iter().skip(offset).step_by(step).collect()
}
