use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// urlscan, a web front-end for external URL scanning tools
#[derive(Parser, Debug)]
#[command(name = "urlscan", version, about = "Web front-end for nmap, assetfinder, nuclei and whatweb")]
pub struct Args {
    /// Address to serve the web interface on
    #[arg(long = "listen", value_name = "ADDR", default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,

    /// Path to the SQLite result log
    #[arg(long = "db-path", value_name = "FILE", default_value = "urlscan.db")]
    pub db_path: PathBuf,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
