//! Hash strings or stdin with one of the nchash algorithms.
//!
//! Usage:
//!   cargo run -p nchash
//!   cargo run -p nchash -- --algo fnv1a-64 foo bar
//!   printf 'data' | cargo run -p nchash -- --stdin --format dec

use std::{
  env,
  io::{self, Write},
  process::ExitCode,
};

use nchash::cli::{self, ALGO_ENV, Args, DEMO_INPUT, HELP};

fn run(args: &Args) -> Result<(), String> {
  let env_algo = env::var(ALGO_ENV).ok();
  let algo = args.resolve_algo(env_algo.as_deref())?;

  let mut out = io::stdout().lock();
  let mut emit = |label: &str, data: &[u8]| -> Result<(), String> {
    if args.verbose {
      eprintln!("{algo}: {} byte(s)", data.len());
    }
    writeln!(out, "{}", cli::format_line(algo, label, data, args.format)).map_err(|e| format!("stdout: {e}"))
  };

  if args.is_demo() {
    return emit(DEMO_INPUT, DEMO_INPUT.as_bytes());
  }

  for input in &args.inputs {
    emit(input, input.as_bytes())?;
  }

  if args.stdin {
    let (hash, n) = algo.hash_reader(io::stdin().lock()).map_err(|e| format!("stdin: {e}"))?;
    if args.verbose {
      eprintln!("{algo}: {n} byte(s) from stdin");
    }
    let value = cli::format_value(algo, hash, args.format);
    writeln!(out, "{algo}(<stdin>) = {value}").map_err(|e| format!("stdout: {e}"))?;
  }

  Ok(())
}

fn main() -> ExitCode {
  let args = match cli::parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("error: {msg}");
      eprintln!();
      eprint!("{HELP}");
      return ExitCode::from(2);
    }
  };

  if args.help {
    eprint!("{HELP}");
    return ExitCode::SUCCESS;
  }

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(msg) => {
      eprintln!("error: {msg}");
      ExitCode::FAILURE
    }
  }
}
