use clap::{Parser, Subcommand};

pub const DEFAULT_FOLDER: &str = "Тест комтех";
pub const DEFAULT_BASE: &str = "/Тест комтех";
pub const DEFAULT_SUFFIX: &str = "_Обработанный";

#[derive(Parser)]
#[command(name = "yadisk-folders")]
#[command(about = "Check and clean up folders on Yandex Disk")]
#[command(version = "1.0")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// OAuth token (overrides env YANDEX_DISK_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL (overrides env YANDEX_DISK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Maximum number of entries fetched per listing
    #[arg(long, global = true, default_value_t = 1000)]
    pub limit: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a folder exists
    Check {
        #[arg(default_value = DEFAULT_FOLDER)]
        name: String,
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// List folders under a path
    List {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Permanently delete folders whose name ends with a suffix
    Purge {
        #[arg(long, default_value = DEFAULT_BASE)]
        base: String,
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
