//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the ticket printer
#[derive(Debug, Parser)]
#[command(about = "Print the ticket for a shopping cart")]
pub struct TicketArgs {
    /// YAML cart fixture to print; the built-in sample cart when omitted
    #[clap(short, long)]
    pub fixture: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set
    #[clap(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults() -> TestResult {
        let args = TicketArgs::try_parse_from(["cart-ticket"])?;

        assert!(args.fixture.is_none());
        assert_eq!(args.log_level, "warn");

        Ok(())
    }

    #[test]
    fn fixture_path() -> TestResult {
        let args =
            TicketArgs::try_parse_from(["cart-ticket", "-f", "fixtures/carts/sample.yml"])?;

        assert_eq!(
            args.fixture,
            Some(PathBuf::from("fixtures/carts/sample.yml"))
        );

        Ok(())
    }
}
