//! # Tickline Main Entry Point

use anyhow::Result;
use tickline::cmd_args::CommandLineArgs;
use tickline::todo::io::{TerminalEventStream, TerminalRenderStream};
use tickline::{config, logging, AppController};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    logging::init(&config::get_log_level(args.verbose()));

    let mut app = AppController::with_io_streams(
        args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run()
}
