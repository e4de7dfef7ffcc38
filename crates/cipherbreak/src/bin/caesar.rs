use clap::Parser;
use std::process;

use cipherbreak::cli::{handle_caesar, load_config, CaesarCli};
use cipherbreak::report::Report;

fn main() {
  let cli = CaesarCli::parse();
  let report = Report::new(cli.global.verbose);
  report.init_tracing();

  let result = load_config(&cli.global, report).and_then(|config| handle_caesar(cli.command, &config, report));
  if let Err(e) = result {
    report.error(&format!("{e:#}"));
    process::exit(1);
  }
}
