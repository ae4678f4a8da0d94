//! Prints the ticket for a shopping cart.
//!
//! Use `-f` to load the cart from a YAML fixture instead of the sample cart.

use std::io::{self, Write};

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cart_ticket::{
    fixtures::{CartFixture, sample_cart},
    utils::TicketArgs,
};

fn main() -> Result<()> {
    let args = TicketArgs::parse();

    init_logging(&args.log_level)?;

    let cart = match args.fixture.as_deref() {
        Some(path) => CartFixture::load(path)?.into_cart()?,
        None => sample_cart()?,
    };

    let ticket = cart.format_ticket();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{}", ticket.trim_end_matches('\n'))?;

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_err| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
