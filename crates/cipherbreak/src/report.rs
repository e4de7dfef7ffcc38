//! Diagnostics on stderr
//!
//! Prefixed, colored lines in the same shape as the other workspace tools.
//! Results belong on stdout; everything here goes to stderr so output can be
//! piped.

use colored::*;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Where diagnostics go and how chatty they are
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
  verbose: bool,
}

impl Report {
  pub fn new(verbose: bool) -> Self {
    Self { verbose }
  }

  pub fn is_verbose(&self) -> bool {
    self.verbose
  }

  /// Install the global tracing subscriber. Call once, from `main`.
  /// Candidate-level events are only shown when verbose.
  pub fn init_tracing(&self) {
    let filter = if self.verbose { EnvFilter::new("cipherbreak=debug,warn") } else { EnvFilter::new("warn") };
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
  }

  pub fn verbose(&self, message: &str) {
    if self.verbose {
      emit(Color::Cyan, "verb", message);
    }
  }

  pub fn warn(&self, message: &str) {
    emit(Color::Yellow, "warn", message);
  }

  pub fn error(&self, message: &str) {
    emit(Color::Red, "error", message);
  }
}

fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]", prefix.color(color).bold())
}

fn emit(color: Color, prefix: &str, message: &str) {
  let prefix = format_prefix(color, prefix);
  for line in message.lines() {
    eprintln!("{prefix} {line}");
  }
}
