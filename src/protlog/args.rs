use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "protlog", version = get_version())]
#[command(
    about = "Log protein stability observations from the command line",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the data files (defaults to the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a protein sequence by UniProt ID
    #[command(alias = "f")]
    Fetch {
        /// UniProt accession (e.g. P12345)
        id: String,
    },

    /// Record an observation
    #[command(alias = "a")]
    Add {
        /// Amino-acid sequence
        #[arg(long, default_value = "", conflicts_with = "from_uniprot")]
        sequence: String,

        /// Fetch the sequence for this UniProt ID as part of the submission
        #[arg(long, value_name = "ID")]
        from_uniprot: Option<String>,

        /// pH of the sample, stored exactly as typed
        #[arg(long, default_value = "")]
        ph: String,

        /// Temperature in degrees Celsius, stored exactly as typed
        #[arg(long, default_value = "")]
        temperature: String,

        /// Solvent description
        #[arg(long, default_value = "")]
        solvent: String,
    },

    /// List saved observations
    #[command(alias = "ls")]
    List,

    /// Write the download snapshot of the saved data
    Export,

    /// Hand the exported snapshot to the system share mechanism
    Share,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., fetch-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
