#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{fmt::Display, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use pixsort::{ErrorRange, SortPipeline, ZeroRange};

#[derive(Copy, Clone, ValueEnum)]
enum CliZeroRange {
    Exact,
    Default,
}

impl From<CliZeroRange> for ZeroRange {
    fn from(value: CliZeroRange) -> Self {
        match value {
            CliZeroRange::Exact => ZeroRange::Exact,
            CliZeroRange::Default => ZeroRange::Default,
        }
    }
}

impl Display for CliZeroRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CliZeroRange::Exact => "exact",
                CliZeroRange::Default => "default",
            }
        )
    }
}

/// Sort the pixels of an image into runs of similar color.
#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    /// Per-channel tolerance (0-255) for two colors to land in the same run
    #[arg(short, long, default_value_t = ErrorRange::DEFAULT.into_inner())]
    error_range: u8,

    /// How to interpret an error range of 0
    #[arg(long, default_value_t = CliZeroRange::Exact)]
    zero_range: CliZeroRange,

    /// Log the time taken by each step
    #[arg(long)]
    verbose: bool,

    /// Image to sort
    input: PathBuf,

    /// Where to write the sorted image, the format is taken from the extension
    #[arg(default_value = "output.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let Options { error_range, zero_range, verbose, input, output } = Options::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    macro_rules! timed {
        ($name: literal, $val: expr) => {{
            let time = Instant::now();
            let value = $val;
            info!("{} took {}ms", $name, time.elapsed().as_millis());
            value
        }};
    }

    let image = timed!(
        "read image",
        image::open(&input).with_context(|| format!("failed to decode {}", input.display()))?
    )
    .into_rgba8();

    let sorted = timed!("sort", {
        SortPipeline::try_from(&image)
            .with_context(|| format!("cannot sort {}", input.display()))?
            .error_range(error_range)
            .zero_range(zero_range.into())
            .sorted_rgbaimage()
    });

    timed!(
        "write image",
        sorted
            .save(&output)
            .with_context(|| format!("failed to write {}", output.display()))?
    );

    println!("Saved → {}", output.display());
    Ok(())
}
