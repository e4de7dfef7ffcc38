//! English-likeness scoring
//!
//! Both strategies return a non-negative score where lower means closer to
//! English, and `f64::INFINITY` for text without letters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::alphabet::{letter_index, ALPHABET_SIZE};

/// Letters ordered from most to least frequent in English text.
pub const ENGLISH_FREQ_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Published single-letter frequencies for English, indexed `a..z`.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
  0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
  0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
  0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

// 1 + 2 + ... + 26
const RANK_WEIGHT_TOTAL: f64 = 351.0;

/// Selects which statistic the breakers minimize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scorer {
  /// L1 distance from a linear model of the English rank order
  RankDeviation,
  /// Chi-squared against published English letter frequencies
  ChiSquared,
}

impl Scorer {
  pub fn score(&self, text: &str) -> f64 {
    match self {
      Scorer::RankDeviation => rank_deviation(text),
      Scorer::ChiSquared => chi_squared(text),
    }
  }
}

/// Case-folded letter counts, indexed `a..z`.
pub fn letter_counts(text: &str) -> [usize; ALPHABET_SIZE] {
  let mut counts = [0; ALPHABET_SIZE];
  for index in text.chars().filter_map(letter_index) {
    counts[index as usize] += 1;
  }
  counts
}

/// Expected share of each letter under the rank-order model, indexed `a..z`.
pub fn rank_expected_shares() -> [f64; ALPHABET_SIZE] {
  let mut shares = [0.0; ALPHABET_SIZE];
  for (rank, c) in ENGLISH_FREQ_ORDER.chars().enumerate() {
    if let Some(index) = letter_index(c) {
      shares[index as usize] = (ALPHABET_SIZE - rank) as f64 / RANK_WEIGHT_TOTAL;
    }
  }
  shares
}

pub fn rank_deviation(text: &str) -> f64 {
  let counts = letter_counts(text);
  let total: usize = counts.iter().sum();
  if total == 0 {
    return f64::INFINITY;
  }

  let expected = rank_expected_shares();
  let mut score = 0.0;
  for (count, share) in counts.iter().zip(expected.iter()) {
    let observed = *count as f64 / total as f64;
    score += (observed - share).abs();
  }
  score
}

pub fn chi_squared(text: &str) -> f64 {
  let counts = letter_counts(text);
  let total: usize = counts.iter().sum();
  if total == 0 {
    return f64::INFINITY;
  }

  let mut score = 0.0;
  for (count, frequency) in counts.iter().zip(ENGLISH_FREQUENCIES.iter()) {
    let expected = frequency * total as f64;
    let observed = *count as f64;
    score += (observed - expected).powi(2) / expected;
  }
  score
}

#[cfg(test)]
mod tests {
  use super::*;

  const ENGLISH: &str = "It was the best of times, it was the worst of times, it was the age of wisdom";
  const GIBBERISH: &str = "Qz xjk vqz bxqj zj kvxq, zj qzx vjkq xz qkvz, qz xjk zqv jx xvkqzjzqx";

  #[test]
  fn test_letter_counts_case_folded() {
    let counts = letter_counts("aAb, Z!");
    assert_eq!(counts[0], 2);
    assert_eq!(counts[1], 1);
    assert_eq!(counts[25], 1);
    assert_eq!(counts.iter().sum::<usize>(), 4);
  }

  #[test]
  fn test_reference_tables_are_valid() {
    let total: f64 = ENGLISH_FREQUENCIES.iter().sum();
    assert!((total - 1.0).abs() < 1e-3);
    assert!(ENGLISH_FREQUENCIES.iter().all(|f| *f > 0.0));

    let shares = rank_expected_shares();
    assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert_eq!(shares[4], 26.0 / 351.0); // e
    assert_eq!(shares[25], 1.0 / 351.0); // z
  }

  #[test]
  fn test_unscorable_text_is_infinite() {
    assert_eq!(rank_deviation(""), f64::INFINITY);
    assert_eq!(chi_squared("123 ...!"), f64::INFINITY);
    assert_eq!(Scorer::ChiSquared.score("   "), f64::INFINITY);
  }

  #[test]
  fn test_english_beats_gibberish() {
    for scorer in [Scorer::RankDeviation, Scorer::ChiSquared] {
      let english = scorer.score(ENGLISH);
      let gibberish = scorer.score(GIBBERISH);
      assert!(english < gibberish, "{scorer:?}: {english} >= {gibberish}");
    }
  }

  #[test]
  fn test_scores_are_non_negative() {
    for scorer in [Scorer::RankDeviation, Scorer::ChiSquared] {
      assert!(scorer.score(ENGLISH) >= 0.0);
      assert!(scorer.score("zzzz") >= 0.0);
    }
  }

  #[test]
  fn test_scores_ignore_case_and_punctuation() {
    assert_eq!(chi_squared("Hello, World"), chi_squared("helloworld"));
    assert_eq!(rank_deviation("HELLO world!"), rank_deviation("helloworld"));
  }

  #[test]
  fn test_scorer_serde_names() {
    assert_eq!(serde_json::to_string(&Scorer::RankDeviation).unwrap(), "\"rank-deviation\"");
    let scorer: Scorer = serde_json::from_str("\"chi-squared\"").unwrap();
    assert_eq!(scorer, Scorer::ChiSquared);
  }
}
