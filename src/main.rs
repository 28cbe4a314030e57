extern crate env_logger;
#[macro_use]
extern crate log;
use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod error;
mod io;
mod lengths;
mod options;
mod reader;
mod record;
mod stats;
mod summary;

use cli::Cli;
use error::SeqLenError;
use stats::LengthStats;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = cli.options();
    debug!("seqlen v{} with {:?}", cli::VERSION, opts);

    let lengths = {
        // both handles are closed when this scope ends, on success or on error
        let input = io::open_input(&cli.input)?;
        let mut writer = io::get_writer(cli.output.as_deref())?;

        let lengths = lengths::collect_lengths(
            reader::records(input, opts.format),
            &mut writer,
            opts.keep_annotation,
            &cli.input,
        )?;

        writer
            .flush()
            .map_err(|source| SeqLenError::OutputWriteFailure { source })?;
        lengths
    };
    let stats = LengthStats::from_lengths(&lengths)
        .with_context(|| format!("Could not summarise {}", cli.input.display()))?;
    info!(
        "Read {} records ({} bases) from {}",
        stats.count,
        stats.total,
        cli.input.display()
    );

    let mut out = stdout().lock();
    summary::write_summary(&mut out, &stats, opts.report)
        .and_then(|_| out.flush())
        .map_err(|source| SeqLenError::OutputWriteFailure { source })?;

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
