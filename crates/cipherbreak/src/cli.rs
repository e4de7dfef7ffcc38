use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::breaker::{KeyLengthBreaker, ScoredCandidate, ShiftBreaker};
use crate::codec::{key_decrypt, key_encrypt, shift_decrypt, shift_encrypt};
use crate::report::Report;
use crate::{BreakConfig, Scorer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
  /// Print search diagnostics to stderr
  #[arg(short, long, global = true)]
  pub verbose: bool,
  /// Configuration file path
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(about = "Shift cipher: encrypt, decrypt, or recover the shift from ciphertext alone")]
#[command(version)]
pub struct CaesarCli {
  #[command(subcommand)]
  pub command: CaesarCommand,
  #[command(flatten)]
  pub global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum CaesarCommand {
  /// Rotate every letter forward by SHIFT
  Encrypt {
    #[arg(allow_negative_numbers = true)]
    shift: i64,
    /// Text to encrypt (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
  /// Rotate every letter back by SHIFT
  Decrypt {
    #[arg(allow_negative_numbers = true)]
    shift: i64,
    /// Text to decrypt (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
  /// Recover the shift by letter-frequency analysis
  Break {
    /// Scoring strategy (defaults to rank-deviation)
    #[arg(short, long)]
    scorer: Option<Scorer>,
    /// Show this many ranked candidates
    #[arg(short, long)]
    top: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
    /// Ciphertext (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
}

#[derive(Parser, Debug)]
#[command(name = "vigenere")]
#[command(about = "Repeating-key cipher: encrypt, decrypt, or recover the key from ciphertext alone")]
#[command(version)]
pub struct VigenereCli {
  #[command(subcommand)]
  pub command: VigenereCommand,
  #[command(flatten)]
  pub global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum VigenereCommand {
  /// Encrypt with a repeating KEY
  Encrypt {
    /// Key letters; anything else is ignored
    key: String,
    /// Text to encrypt (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
  /// Decrypt with a repeating KEY
  Decrypt {
    /// Key letters; anything else is ignored
    key: String,
    /// Text to decrypt (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
  /// Recover the key by letter-frequency analysis
  Break {
    /// Longest key length to try (defaults to 10)
    #[arg(short, long)]
    max_key_length: Option<usize>,
    /// Scoring strategy (defaults to chi-squared)
    #[arg(short, long)]
    scorer: Option<Scorer>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
    /// Ciphertext (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,
  },
}

#[derive(Serialize)]
struct ShiftReport<'a> {
  best: &'a ScoredCandidate<u8>,
  candidates: &'a [ScoredCandidate<u8>],
}

/// Handle a caesar command
pub fn handle_caesar(command: CaesarCommand, config: &BreakConfig, report: Report) -> Result<()> {
  match command {
    CaesarCommand::Encrypt { shift, text } => println!("{}", shift_encrypt(&text.join(" "), shift)),
    CaesarCommand::Decrypt { shift, text } => println!("{}", shift_decrypt(&text.join(" "), shift)),
    CaesarCommand::Break { scorer, top, format, text } => {
      let breaker = ShiftBreaker::new(scorer.unwrap_or(config.shift_scorer));
      let top = top.unwrap_or(config.top).max(1);
      report.verbose(&format!("Trying all 26 shifts with {:?} scoring", breaker.scorer()));

      let ranked = breaker.rank(&text.join(" "));
      let shown = &ranked[..top.min(ranked.len())];
      if !ranked[0].score.is_finite() {
        report.warn("Ciphertext contains no letters; nothing to analyze");
      }

      match format {
        OutputFormat::Pretty => print!("{}", render_shift_result(shown)),
        OutputFormat::Json => {
          let body = ShiftReport { best: &shown[0], candidates: shown };
          println!("{}", serde_json::to_string_pretty(&body)?);
        }
      }
    }
  }
  Ok(())
}

/// Handle a vigenere command
pub fn handle_vigenere(command: VigenereCommand, config: &BreakConfig, report: Report) -> Result<()> {
  match command {
    VigenereCommand::Encrypt { key, text } => println!("{}", key_encrypt(&text.join(" "), &key)?),
    VigenereCommand::Decrypt { key, text } => println!("{}", key_decrypt(&text.join(" "), &key)?),
    VigenereCommand::Break { max_key_length, scorer, format, text } => {
      let breaker = KeyLengthBreaker::new(scorer.unwrap_or(config.key_scorer));
      let max_key_length = max_key_length.unwrap_or(config.max_key_length);
      report.verbose(&format!(
        "Trying key lengths 1..={max_key_length} with {:?} scoring",
        breaker.scorer()
      ));

      let best = breaker.break_key(&text.join(" "), max_key_length)?;
      report.verbose(&format!("Best key length: {}", best.key.len()));

      match format {
        OutputFormat::Pretty => print!("{}", render_key_result(&best)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&best)?),
      }
    }
  }
  Ok(())
}

/// Pretty output for ranked shift candidates, best first
pub fn render_shift_result(ranked: &[ScoredCandidate<u8>]) -> String {
  let mut out = String::new();
  let Some(best) = ranked.first() else {
    return out;
  };

  out.push_str(&format!("[+] Best shift: {}\n", best.key));
  out.push_str(&format!("[+] Plaintext: {}\n", best.plaintext));
  out.push_str(&format!("[+] Score: {:.4}\n", best.score));

  for candidate in ranked.iter().skip(1) {
    out.push_str(&format!(
      "[-] Shift {:>2} ({:.4}): {}\n",
      candidate.key, candidate.score, candidate.plaintext
    ));
  }
  out
}

pub fn render_key_result(best: &ScoredCandidate<crate::Key>) -> String {
  format!(
    "[+] Key: {}\n[+] Plaintext: {}\n[+] Score: {:.4}\n",
    best.key, best.plaintext, best.score
  )
}

/// Load configuration for either binary
pub fn load_config(global: &GlobalArgs, report: Report) -> Result<BreakConfig> {
  let config = BreakConfig::load(global.config.as_deref())?;
  report.verbose(&format!(
    "Config: max_key_length={}, shift_scorer={:?}, key_scorer={:?}, top={}",
    config.max_key_length, config.shift_scorer, config.key_scorer, config.top
  ));
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{shift_break, shift_encrypt, Key};
  use clap::CommandFactory;

  #[test]
  fn test_cli_definitions_are_valid() {
    CaesarCli::command().debug_assert();
    VigenereCli::command().debug_assert();
  }

  #[test]
  fn test_caesar_accepts_negative_shift() {
    let cli = CaesarCli::try_parse_from(["caesar", "encrypt", "-3", "abc"]).unwrap();
    match cli.command {
      CaesarCommand::Encrypt { shift, text } => {
        assert_eq!(shift, -3);
        assert_eq!(text, vec!["abc".to_string()]);
      }
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn test_caesar_rejects_missing_text() {
    assert!(CaesarCli::try_parse_from(["caesar", "encrypt", "3"]).is_err());
    assert!(CaesarCli::try_parse_from(["caesar", "encrypt", "three", "abc"]).is_err());
    assert!(CaesarCli::try_parse_from(["caesar", "rotate", "3", "abc"]).is_err());
  }

  #[test]
  fn test_vigenere_break_options() {
    let cli = VigenereCli::try_parse_from([
      "vigenere",
      "break",
      "--max-key-length",
      "6",
      "--scorer",
      "rank-deviation",
      "--format",
      "json",
      "lxfopv",
      "efrnhr",
    ])
    .unwrap();
    match cli.command {
      VigenereCommand::Break { max_key_length, scorer, format, text } => {
        assert_eq!(max_key_length, Some(6));
        assert_eq!(scorer, Some(Scorer::RankDeviation));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(text.join(" "), "lxfopv efrnhr");
      }
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn test_global_flags_after_subcommand() {
    let cli = VigenereCli::try_parse_from(["vigenere", "encrypt", "key", "text", "--verbose"]).unwrap();
    assert!(cli.global.verbose);
    assert!(cli.global.config.is_none());
  }

  #[test]
  fn test_render_shift_result() {
    let plaintext = "Hello World is a classic phrase in programming. It serves as demonstration that some text can be printed.";
    let best = shift_break(&shift_encrypt(plaintext, 3));
    let rendered = render_shift_result(&[best]);
    assert!(rendered.starts_with("[+] Best shift: 3\n"));
    assert!(rendered.contains(&format!("[+] Plaintext: {plaintext}\n")));
    assert!(!rendered.contains("[-]"));
  }

  #[test]
  fn test_render_key_result() {
    let best = ScoredCandidate {
      score: 1.5,
      key: Key::parse("lemon").unwrap(),
      plaintext: "ATTACKATDAWN".to_string(),
    };
    assert_eq!(
      render_key_result(&best),
      "[+] Key: lemon\n[+] Plaintext: ATTACKATDAWN\n[+] Score: 1.5000\n"
    );
  }
}
