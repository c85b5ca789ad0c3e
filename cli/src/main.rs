//! Runs the four-by-four matrix fixture

#[macro_use]
mod util;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use four_by_four_matrix::{fixture_product, Error, Matrix, OverflowPolicy};

use std::io::{self, Write};
use strum::{Display, EnumString, EnumVariantNames};

#[derive(Clone, Copy, EnumString, EnumVariantNames, Display)]
pub enum OverflowArgument {
    #[strum(serialize = "wrapping")]
    Wrapping,
    #[strum(serialize = "saturating")]
    Saturating,
    #[strum(serialize = "checked")]
    Checked,
}

impl OverflowArgument {
    pub fn as_policy(&self) -> OverflowPolicy {
        match self {
            OverflowArgument::Wrapping => OverflowPolicy::Wrapping,
            OverflowArgument::Saturating => OverflowPolicy::Saturating,
            OverflowArgument::Checked => OverflowPolicy::Checked,
        }
    }
}

#[derive(Parser)]
#[command(name = "four-by-four-matrix", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Print the product matrix to stdout.
    #[arg(short, long)]
    #[arg(default_value_t = false)]
    verbose: bool,

    /// How signed sums behave when they leave the 32-bit range.
    #[arg(long)]
    #[arg(default_value_t = OverflowArgument::Wrapping)]
    #[arg(value_parser = clap_enum_variants!(OverflowArgument))]
    overflow: OverflowArgument,
}

/// Runtime settings of a single fixture run.
#[derive(Clone, Copy, Debug, Default)]
struct Config {
    verbose: bool,
    overflow: OverflowPolicy,
}

impl From<&Cli> for Config {
    fn from(args: &Cli) -> Self {
        Config {
            verbose: args.verbose,
            overflow: args.overflow.as_policy(),
        }
    }
}

#[allow(clippy::print_stderr)]
fn main() {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    let config = Config::from(&args);
    let stdout = io::stdout();
    if let Err(error) = run(&config, &mut stdout.lock()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

/// Multiplies the fixed inputs and, in verbose mode, writes the product to
/// `out`.
fn run(config: &Config, out: &mut impl Write) -> Result<Matrix, RunError> {
    log::info!("Multiplying fixed 4x4 inputs");
    let c = fixture_product(config.overflow)?;
    if config.verbose {
        write!(out, "{}", c.display_as("c"))?;
        out.flush()?;
    }
    Ok(c)
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Product(#[from] Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    const EXPECTED_BLOCK: &str = "c = {
\t{  152,  158,  164,  170 },
\t{  504,  526,  548,  570 },
\t{  856,  894,  932,  970 },
\t{ 1208, 1262, 1316, 1370 },
}
";

    #[test]
    fn quiet_by_default() {
        let args = Cli::parse_from(["four-by-four-matrix"]);
        let config = Config::from(&args);
        assert!(!config.verbose);
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn verbose_prints_product() {
        let args = Cli::parse_from(["four-by-four-matrix", "--verbose"]);
        let mut out = Vec::new();
        run(&Config::from(&args), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_BLOCK);
    }

    #[test]
    fn overflow_argument() {
        for (value, policy) in [
            ("wrapping", OverflowPolicy::Wrapping),
            ("saturating", OverflowPolicy::Saturating),
            ("checked", OverflowPolicy::Checked),
        ] {
            let args = Cli::parse_from(["four-by-four-matrix", "-v", "--overflow", value]);
            let config = Config::from(&args);
            assert_eq!(config.overflow, policy);

            let mut out = Vec::new();
            run(&config, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_BLOCK);
        }
    }

    #[test]
    fn unknown_overflow_argument() {
        assert!(Cli::try_parse_from(["four-by-four-matrix", "--overflow", "trap"]).is_err());
    }

    #[test]
    fn log_level_argument() {
        let args = Cli::parse_from(["four-by-four-matrix", "--log-level", "trace"]);
        assert_eq!(args.log_level, LevelFilter::Trace);
    }
}
