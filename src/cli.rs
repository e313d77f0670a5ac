use cefr_client::Locale;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cefr")]
#[command(
    author,
    version,
    about = "Estimate the CEFR level of an English text"
)]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Configuration file path (defaults to cefr.toml)
    #[clap(long, global = true, default_value = "cefr.toml")]
    pub config: String,

    /// Base URL of the classification service, overriding the config file and CEFR_API_URL
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Language of messages and metric labels
    #[clap(long, global = true, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Enable verbose output with request diagnostics on stderr
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a text to the classifier and show its CEFR level
    Analyze {
        #[clap(flatten)]
        source: InputArgs,

        /// Print the raw prediction as JSON
        #[clap(long, default_value_t = false)]
        json: bool,

        /// Show the linguistic metrics behind the prediction
        #[clap(short, long, default_value_t = false)]
        metrics: bool,

        /// Show the probability of every level
        #[clap(short, long, default_value_t = false)]
        probabilities: bool,
    },

    /// Show how many texts the service has analysed, per level
    Stats {
        /// Print the statistics as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Count characters, words and sentences without contacting the service
    #[clap(name = "text-stats")]
    TextStats {
        #[clap(flatten)]
        source: InputArgs,

        /// Print the counts as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// List the metrics the classifier reports
    Metrics,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file without asking
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

/// Where the text comes from; stdin when neither is given
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Text to analyse
    #[clap(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Path to a .txt file to analyse
    #[clap(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleArg {
    /// English
    En,

    /// Ukrainian
    Uk,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Uk => Locale::Uk,
        }
    }
}
