//! Command-line definition for the `xorpar` binary

use crate::display::ChunkFormat;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Default number of data chunks
pub const DEFAULT_CHUNKS: usize = 3;

/// Default upper bound on chunks accepted from the command line
pub const DEFAULT_MAX_CHUNKS: usize = 10;

/// Arguments shared by every subcommand
fn input_args() -> [Arg; 6] {
    [
        Arg::new("data")
            .long("data")
            .help("Data to encode (reads stdin if neither --data nor --file is given)")
            .value_name("TEXT")
            .conflicts_with("file"),
        Arg::new("file")
            .long("file")
            .help("Read the data to encode from a file")
            .value_name("PATH")
            .value_parser(|input: &str| {
                let path = PathBuf::from(input);
                if path.is_file() {
                    Ok(path)
                } else {
                    Err(String::from("Input file does not exist"))
                }
            }),
        Arg::new("chunks")
            .short('n')
            .long("chunks")
            .help("Number of data chunks")
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .default_value("3"),
        Arg::new("max-chunks")
            .long("max-chunks")
            .help("Largest chunk count accepted from the command line")
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .default_value("10"),
        Arg::new("format")
            .short('f')
            .long("format")
            .help("How chunks are displayed")
            .value_name("FORMAT")
            .value_parser(["ascii", "binary", "hex"])
            .default_value("ascii"),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .help("Quiet mode - minimal output")
            .action(ArgAction::SetTrue),
    ]
}

/// Build the full command tree
pub fn build_cli() -> Command {
    Command::new("xorpar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Single-parity XOR erasure coding (RAID-5 style)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Split data into chunks and show the parity")
                .args(input_args()),
        )
        .subcommand(
            Command::new("recover")
                .visible_alias("r")
                .about("Simulate losing one chunk and recover it")
                .args(input_args())
                .arg(
                    Arg::new("lost")
                        .short('l')
                        .long("lost")
                        .help("Index of the data chunk to lose")
                        .value_name("INDEX")
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("parity")
                        .long("parity")
                        .help("Lose the parity chunk instead of a data chunk")
                        .action(ArgAction::SetTrue),
                )
                .group(
                    ArgGroup::new("target")
                        .args(["lost", "parity"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Encode, then reassemble the data from its chunks")
                .args(input_args()),
        )
        .subcommand(
            Command::new("verify")
                .visible_alias("v")
                .about("Check that every single-chunk loss is recoverable")
                .args(input_args())
                .arg(
                    Arg::new("threads")
                        .short('t')
                        .long("threads")
                        .help("Number of CPU threads for the sweep (0 = auto-detect)")
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("no-parallel")
                        .long("no-parallel")
                        .help("Disable all parallel processing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .visible_alias("i")
                .about("Recover every chunk, then read indices to lose from stdin")
                .args(input_args()),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

/// Where the data to encode comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Data(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Read the input bytes
    ///
    /// Stdin has a single trailing newline stripped so piped text encodes
    /// the same as `--data`.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            InputSource::Data(text) => Ok(text.as_bytes().to_vec()),
            InputSource::File(path) => fs::read(path),
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(strip_newline(buf))
            }
        }
    }
}

/// Drop one trailing `\n` or `\r\n`
pub fn strip_newline(mut buf: Vec<u8>) -> Vec<u8> {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    buf
}

/// Options shared by every subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: InputSource,
    pub chunks: usize,
    pub max_chunks: usize,
    pub format: ChunkFormat,
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            chunks: DEFAULT_CHUNKS,
            max_chunks: DEFAULT_MAX_CHUNKS,
            format: ChunkFormat::default(),
            quiet: false,
        }
    }
}

impl CliConfig {
    pub fn from_args(matches: &ArgMatches) -> Self {
        let input = if let Some(text) = matches.get_one::<String>("data") {
            InputSource::Data(text.clone())
        } else if let Some(path) = matches.get_one::<PathBuf>("file") {
            InputSource::File(path.clone())
        } else {
            InputSource::Stdin
        };

        let format = matches
            .get_one::<String>("format")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            input,
            chunks: matches
                .get_one::<usize>("chunks")
                .copied()
                .unwrap_or(DEFAULT_CHUNKS),
            max_chunks: matches
                .get_one::<usize>("max-chunks")
                .copied()
                .unwrap_or(DEFAULT_MAX_CHUNKS),
            format,
            quiet: matches.get_flag("quiet"),
        }
    }

    /// The chunk count is within the command-line cap
    ///
    /// This is a caller-side limit; the codec itself accepts any count of 2 or more.
    pub fn chunks_within_limit(&self) -> bool {
        self.chunks <= self.max_chunks
    }
}
