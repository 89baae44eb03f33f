use std::path::PathBuf;

use clap::Parser;

/// Convert HEX keys from/to PEM and generate an agreed shared secret.
///
/// Key arguments are classified by suffix: anything ending in `.pem` is
/// read as a key container, anything else is parsed as literal hex.
#[derive(Parser, Debug, Clone)]
#[command(name = "eckex", version, about)]
pub struct Args {
    /// Generate a fresh key pair and save both keys as PEM files
    #[arg(short, long)]
    pub generate: bool,

    /// Private key: a 64-character hex scalar or a .pem file path
    #[arg(short, long, value_name = "FILE/HEX")]
    pub private: Option<String>,

    /// Public key: a 64 or 128-character hex point or a .pem file path
    #[arg(short = 'b', long, value_name = "FILE/HEX")]
    pub public: Option<String>,

    /// Output file when saving a single key (defaults to a fixed name)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
