pub mod check;

use clap::{ArgAction, Parser};

pub const DEFAULT_NAME: &str = "billy";
pub const DEFAULT_FAVORITE_BAND: &str = "paul simon";
pub const DEFAULT_BANDS: [&str; 2] = ["paul simon", "the kooks"];

#[derive(Parser, Debug)]
#[command(name = "bandmatch")]
#[command(about = "Look for a user's favorite band in a list of bands.")]
#[command(version)]
pub struct CommandLine {
    /// Name of the user
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// The band the user likes most
    #[arg(short, long, default_value = DEFAULT_FAVORITE_BAND)]
    pub favorite_band: String,

    /// Bands to search, in order
    #[arg(default_values_t = DEFAULT_BANDS.map(String::from))]
    pub bands: Vec<String>,

    /// Reduce output; repeat for less
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show scope diagnostics; repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
