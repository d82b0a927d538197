/// CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::utils::AppConfig;

// Build timestamp injected at compile time
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");
pub const VERSION_WITH_BUILD: &str = concat!(env!("CARGO_PKG_VERSION"), " (built: ", env!("BUILD_TIMESTAMP"), ")");

#[derive(Debug, Parser)]
#[command(name = "starwatch")]
#[command(author, version = VERSION_WITH_BUILD, about, long_about = None)]
pub struct Cli {
    /// Enable CSV logging from startup (toggle at runtime with 'L')
    #[arg(short, long)]
    pub log: bool,

    /// CSV log destination [default: starwatch-log.csv]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Dish gRPC address [default: 192.168.100.1:9200]
    #[arg(short, long, value_name = "HOST:PORT")]
    pub address: Option<String>,

    /// Configuration file [default: ~/.config/starwatch/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line values win over the configuration file
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(address) = &self.address {
            config.dish_address = address.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }
    }
}
