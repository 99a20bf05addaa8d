//! Command line arguments for the terminal presenter.

use clap::{Parser, ValueEnum};
use unifinder_lib::modules::search::FilterCategory;

#[derive(Parser, Debug)]
#[command(
    name = "unifinder",
    version,
    about = "Find universities by country",
    long_about = "Search the public university directory by country name and refine\n\
                  the results by state/province and a public/private heuristic."
)]
pub struct Cli {
    /// Country to search for (falls back to a name search when nothing matches)
    #[arg(value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Keep only results from this state/province (must be one of the listed values)
    #[arg(long, value_name = "STATE")]
    pub state: Option<String>,

    /// Public/private refinement
    #[arg(long, value_enum, default_value = "all")]
    pub category: CategoryArg,

    /// Print the session snapshot as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// List country suggestions matching COUNTRY and exit
    #[arg(long)]
    pub suggest: bool,

    /// Override the directory endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    All,
    Public,
    Private,
}

impl From<CategoryArg> for FilterCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => FilterCategory::All,
            CategoryArg::Public => FilterCategory::Public,
            CategoryArg::Private => FilterCategory::Private,
        }
    }
}
