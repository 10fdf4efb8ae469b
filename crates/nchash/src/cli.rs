//! Argument parsing and output formatting for the `nchash` binary.
//!
//! Kept in the library so the parsing rules are unit-testable; the binary only
//! wires these to `std::env`, stdin and stdout.

use std::{
  fmt,
  io::{self, Read},
};

use traits::io::HashReader;

use crate::{Djb2_32, Djb2_64, FastHash as _, Fnv1_32, Fnv1_64, Fnv1a32, Fnv1a64, StreamingHash, djb2_bytes};

/// Environment variable naming the default algorithm.
pub const ALGO_ENV: &str = "NCHASH_ALGO";

/// Input hashed when no strings and no `--stdin` are given.
pub const DEMO_INPUT: &str = "hello";

/// Selectable algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
  /// djb2 in machine-word arithmetic, stopping at NUL.
  Djb2,
  Djb2_32,
  Djb2_64,
  Fnv1a32,
  Fnv1a64,
  Fnv1_32,
  Fnv1_64,
}

impl Algo {
  pub const ALL: [Self; 7] =
    [Self::Djb2, Self::Djb2_32, Self::Djb2_64, Self::Fnv1a32, Self::Fnv1a64, Self::Fnv1_32, Self::Fnv1_64];

  /// Parse a CLI name. Case-insensitive; `_` and `-` are interchangeable.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
    Self::ALL.into_iter().find(|a| a.name() == normalized)
  }

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Djb2 => "djb2",
      Self::Djb2_32 => "djb2-32",
      Self::Djb2_64 => "djb2-64",
      Self::Fnv1a32 => "fnv1a-32",
      Self::Fnv1a64 => "fnv1a-64",
      Self::Fnv1_32 => "fnv1-32",
      Self::Fnv1_64 => "fnv1-64",
    }
  }

  /// Output width in bits.
  #[must_use]
  pub const fn width(self) -> u32 {
    match self {
      Self::Djb2 => usize::BITS,
      Self::Djb2_32 | Self::Fnv1a32 | Self::Fnv1_32 => 32,
      Self::Djb2_64 | Self::Fnv1a64 | Self::Fnv1_64 => 64,
    }
  }

  /// Hash `data`, widened to `u64`.
  #[must_use]
  pub fn hash(self, data: &[u8]) -> u64 {
    match self {
      Self::Djb2 => djb2_bytes(data) as u64,
      Self::Djb2_32 => u64::from(Djb2_32::hash(data)),
      Self::Djb2_64 => Djb2_64::hash(data),
      Self::Fnv1a32 => u64::from(Fnv1a32::hash(data)),
      Self::Fnv1a64 => Fnv1a64::hash(data),
      Self::Fnv1_32 => u64::from(Fnv1_32::hash(data)),
      Self::Fnv1_64 => Fnv1_64::hash(data),
    }
  }
}

/// Drain `reader` through `H`, returning the hash and the byte count.
fn stream<H, R>(reader: R) -> io::Result<(H::Output, u64)>
where
  H: StreamingHash,
  R: Read,
{
  let mut r = HashReader::<_, H>::new(reader);
  io::copy(&mut r, &mut io::sink())?;
  Ok((r.hash(), r.bytes_read()))
}

impl Algo {
  /// Hash everything `reader` yields, widened to `u64`. Also returns the byte count.
  ///
  /// The word-width djb2 has no streaming form (it stops at NUL), so its input
  /// is buffered.
  ///
  /// # Errors
  ///
  /// Propagates read errors.
  pub fn hash_reader<R: Read>(self, mut reader: R) -> io::Result<(u64, u64)> {
    match self {
      Self::Djb2 => {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok((djb2_bytes(&data) as u64, data.len() as u64))
      }
      Self::Djb2_32 => stream::<Djb2_32, _>(reader).map(|(h, n)| (u64::from(h), n)),
      Self::Djb2_64 => stream::<Djb2_64, _>(reader),
      Self::Fnv1a32 => stream::<Fnv1a32, _>(reader).map(|(h, n)| (u64::from(h), n)),
      Self::Fnv1a64 => stream::<Fnv1a64, _>(reader),
      Self::Fnv1_32 => stream::<Fnv1_32, _>(reader).map(|(h, n)| (u64::from(h), n)),
      Self::Fnv1_64 => stream::<Fnv1_64, _>(reader),
    }
  }
}

impl fmt::Display for Algo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// How hash values are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
  /// Zero-padded lowercase hex with `0x` prefix.
  #[default]
  Hex,
  /// Unsigned decimal.
  Dec,
}

impl OutputFormat {
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "hex" => Some(Self::Hex),
      "dec" | "decimal" => Some(Self::Dec),
      _ => None,
    }
  }
}

/// CLI arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
  /// Algorithm given by `--algo`, if any.
  pub algo: Option<Algo>,

  /// Output format.
  pub format: OutputFormat,

  /// Hash stdin as one input.
  pub stdin: bool,

  /// Verbose output on stderr.
  pub verbose: bool,

  /// Show help.
  pub help: bool,

  /// Strings to hash, in order.
  pub inputs: Vec<String>,
}

impl Args {
  /// Resolve the algorithm: `--algo`, then `env_default`, then djb2.
  ///
  /// # Errors
  ///
  /// Returns a message if `env_default` is set but not a known algorithm.
  pub fn resolve_algo(&self, env_default: Option<&str>) -> Result<Algo, String> {
    if let Some(algo) = self.algo {
      return Ok(algo);
    }
    match env_default {
      Some(name) if !name.trim().is_empty() => {
        Algo::parse(name).ok_or_else(|| std::format!("Unknown algorithm in {ALGO_ENV}: {name}"))
      }
      _ => Ok(Algo::Djb2),
    }
  }

  /// True when nothing was supplied and the demonstration input is used.
  #[must_use]
  pub fn is_demo(&self) -> bool {
    self.inputs.is_empty() && !self.stdin
  }
}

/// Parse arguments (without the program name).
///
/// # Errors
///
/// Returns a usage message for unknown flags or bad values.
pub fn parse_args<I>(args: I) -> Result<Args, String>
where
  I: IntoIterator<Item = String>,
{
  let mut out = Args::default();
  let mut iter = args.into_iter();
  let mut only_inputs = false;

  while let Some(arg) = iter.next() {
    if only_inputs {
      out.inputs.push(arg);
      continue;
    }
    match arg.as_str() {
      "--" => only_inputs = true,
      "--stdin" | "-s" => out.stdin = true,
      "--verbose" | "-v" => out.verbose = true,
      "--help" | "-h" => out.help = true,
      "--algo" | "-a" => {
        let Some(value) = iter.next() else {
          return Err("--algo requires a value".into());
        };
        out.algo = Some(Algo::parse(&value).ok_or_else(|| std::format!("Unknown algorithm: {value}"))?);
      }
      "--format" | "-f" => {
        let Some(value) = iter.next() else {
          return Err("--format requires a value".into());
        };
        out.format = OutputFormat::parse(&value).ok_or_else(|| std::format!("Unknown format: {value}"))?;
      }
      other if other.starts_with('-') && other.len() > 1 => {
        return Err(std::format!("Unknown argument: {other}"));
      }
      _ => out.inputs.push(arg),
    }
  }

  Ok(out)
}

/// Render one hash value.
#[must_use]
pub fn format_value(algo: Algo, value: u64, format: OutputFormat) -> String {
  match format {
    OutputFormat::Hex => {
      let digits = (algo.width() / 4) as usize;
      std::format!("0x{value:0digits$x}")
    }
    OutputFormat::Dec => value.to_string(),
  }
}

/// One output line: `ALGO("label") = VALUE`.
#[must_use]
pub fn format_line(algo: Algo, label: &str, data: &[u8], format: OutputFormat) -> String {
  std::format!("{algo}({label:?}) = {}", format_value(algo, algo.hash(data), format))
}

pub const HELP: &str = "\
nchash: non-cryptographic hashes of strings or stdin

USAGE:
    nchash [OPTIONS] [STRING...]

OPTIONS:
    -a, --algo ALGO       djb2 (default), djb2-32, djb2-64, fnv1a-32, fnv1a-64, fnv1-32, fnv1-64
    -f, --format FORMAT   hex (default) or dec
    -s, --stdin           Hash all of stdin as one input
    -v, --verbose         Report algorithm and input sizes on stderr
    -h, --help            Show this help message

ENVIRONMENT:
    NCHASH_ALGO           Default algorithm when --algo is not given

With no STRING and no --stdin, hashes \"hello\".
";
