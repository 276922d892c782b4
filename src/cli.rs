//! Command line options.

use clap::Parser;

/// Scrape aftercredits.com stinger ratings into a keyed YAML store.
#[derive(Debug, Parser)]
#[command(name = "aftercredits", version, about)]
pub struct Cli {
    /// Run with extra trace logs.
    #[arg(long, env = "TRACE")]
    pub trace: bool,

    /// Run with every request logged.
    #[arg(long, env = "LOG_REQUESTS")]
    pub log_requests: bool,
}
