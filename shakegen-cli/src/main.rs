// ShakeGen, a test generator for CAVP SHAKE byte test vectors
// Copyright (C) 2025 A. Russon
// 
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
// 
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use shakegen_core::{
    Config,
    LengthUnit,
    DEFAULT_PER_LINE
};

use clap::{
    Arg,
    ArgAction,
    ArgMatches,
    Command,
    value_parser,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SHAKEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");

enum ShakeGenError {
    Io(std::io::Error),
    CoreError(shakegen_core::errors::Error),
    CliError(&'static str),
    FileAlreadyExists(PathBuf),
}

impl From<std::io::Error> for ShakeGenError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<shakegen_core::errors::Error> for ShakeGenError {
    fn from(value: shakegen_core::errors::Error) -> Self {
        Self::CoreError(value)
    }
}

impl std::fmt::Display for ShakeGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::CliError(s) => write!(f, "{s}"),
            Self::CoreError(e) => write!(f, "{e}"),
            Self::FileAlreadyExists(p) => write!(
                f, "File \"{}\" already exists.", p.display()
            ),
        }
    }
}

type Result<T> = core::result::Result<T, ShakeGenError>;

fn main() -> ExitCode {
    let cmd = Command::new("shakegen")
        .version(SHAKEGEN_VERSION)
        .about(format!(
            "ShakeGen: SHAKE128/SHAKE256 C tests from CAVP byte test vectors \
            (version {SHAKEGEN_VERSION})\n\
            Copyright (C) 2025 A. Russon"))
        .arg(
            Arg::new("archive")
                .help("Path to the test vectors archive (shakebytetestvectors.zip)")
                .value_parser(value_parser!(PathBuf))
                .required(true)
        )
        .arg(
            Arg::new("output")
                .help("Output file path (default: standard output)")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("algorithm")
                .help("Algorithm to generate tests for: shake128 or shake256 (default: both)")
                .long("algorithm")
                .short('a')
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("len unit")
                .help("Unit of Len and OutputLen fields (default: items)")
                .long("len-unit")
                .value_parser(["items", "bits"])
        )
        .arg(
            Arg::new("per line")
                .help(format!("Number of bytes per line of test data (default: {DEFAULT_PER_LINE})"))
                .long("per-line")
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("verbose")
                .help("Log progress on standard error (repeat for more details)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
        );

    let mut matches = cmd.get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&mut matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {err}");
            ExitCode::FAILURE
        }
    }
}

// logs go to stderr, generated code may go to stdout
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn get_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::new();

    if let Some(names) = matches.get_many::<String>("algorithm") {
        let names: Vec<&String> = names.collect();
        config.set_algorithms(names.as_slice())?;
    }

    if let Some(unit) = matches.get_one::<String>("len unit") {
        config.set_len_unit(unit.parse::<LengthUnit>()?);
    }

    if let Some(per_line) = matches.get_one::<usize>("per line") {
        config.set_per_line(*per_line)?;
    }

    Ok(config)
}

fn run(matches: &mut ArgMatches) -> Result<()> {
    let config = get_config(matches)?;

    let archive = matches.remove_one::<PathBuf>("archive")
        .ok_or(ShakeGenError::CliError("no archive provided"))?;

    let total = match matches.remove_one::<PathBuf>("output") {
        Some(output) => {
            if output.exists() {
                return Err(ShakeGenError::FileAlreadyExists(output));
            }
            let mut writer = BufWriter::new(File::create(&output)?);
            shakegen_core::generate(&archive, &config, &mut writer)?
        },
        None => {
            let mut writer = BufWriter::new(std::io::stdout().lock());
            shakegen_core::generate(&archive, &config, &mut writer)?
        }
    };

    info!(tests = total, "test functions generated");
    Ok(())
}
