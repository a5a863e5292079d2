//! nestest CLI - convert a CPU trace log into test vectors

use clap::{Parser, ValueEnum};
use nestest_core::{convert_file, ConvertOptions, LengthMode, TraceError, DEFAULT_OUTPUT};
use std::path::PathBuf;

/// Instruction length classification, as exposed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LengthModeArg {
    /// Same output as the legacy converter (three-byte instructions show as 2)
    Compatible,
    /// Report three-byte instructions as 3
    Corrected,
}

impl From<LengthModeArg> for LengthMode {
    fn from(arg: LengthModeArg) -> Self {
        match arg {
            LengthModeArg::Compatible => LengthMode::Compatible,
            LengthModeArg::Corrected => LengthMode::Corrected,
        }
    }
}

/// nestest trace to test vector converter
#[derive(Parser, Debug)]
#[command(name = "nestest-vectors", version)]
#[command(
    about = "Convert a nestest-style CPU trace into fixed-column test vectors",
    long_about = None
)]
struct Args {
    /// Path to the trace log
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How instruction length is classified
    #[arg(long, value_enum, default_value_t = LengthModeArg::Compatible)]
    length_mode: LengthModeArg,

    /// Log each parsed record
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            output: self.output.clone(),
            length_mode: self.length_mode.into(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let summary = match convert_file(&args.input, &args.options()) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            std::process::exit(1);
        }
    };
    log::debug!("{} records -> {}", summary.records, summary.output.display());
}

fn failure_message(err: &TraceError) -> String {
    format!("Failed to convert trace: {}", err)
}
