use clap::Parser;
use std::process;

use cipherbreak::cli::{handle_vigenere, load_config, VigenereCli};
use cipherbreak::report::Report;

fn main() {
  let cli = VigenereCli::parse();
  let report = Report::new(cli.global.verbose);
  report.init_tracing();

  let result =
    load_config(&cli.global, report).and_then(|config| handle_vigenere(cli.command, &config, report));
  if let Err(e) = result {
    report.error(&format!("{e:#}"));
    process::exit(1);
  }
}
