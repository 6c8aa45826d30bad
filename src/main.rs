use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches};
use log::info;
use os_str_bytes::OsStrBytesExt;
use took::Timer;

use crate::config::Settings;
use crate::session::Session;
use crate::utils::logging::format_log_summary;

mod cli;
mod command;
mod config;
mod io;
mod session;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = cli::ProgramArguments::from_arg_matches(
        &cli::ProgramArguments::command()
            .get_matches_from(args.iter().flat_map(|it| {
                it.split(" ").into_iter().collect::<Vec<_>>()
            }))
    )?;
    info!("{:?}", &args);

    let settings = Settings::resolve(&args)?;
    info!(
        "initial vertices: {}, vertex limit: {}, frontier order: {:?}",
        settings.initial_vertices, settings.max_vertices, settings.frontier_order
    );

    let commands = io::open_commands(settings.commands.as_str())?;
    let output = File::create(&settings.output)
        .with_context(|| format!("could not create output file {}", settings.output))?;
    let mut output = BufWriter::new(output);

    let run_timer = Timer::new();
    let mut session = Session::new(settings.initial_vertices, settings.frontier_order)
        .with_max_vertices(settings.max_vertices);
    let summary = session.run(commands, &mut output)?;
    output.flush()?;

    info!("{} after {}", format_log_summary(&summary), run_timer.took());
    info!("results written to {}", settings.output);
    Ok(())
}
