//! Command-line argument definitions
//!
//! Usage errors (missing username, unknown flags, unparsable numbers) are
//! reported by clap; the driver maps them to exit code 64 (EX_USAGE).

use clap::Parser;

/// Show a GitHub user's recent public activity
#[derive(Debug, Parser)]
#[command(name = "gh-activity", version, about)]
pub struct Cli {
    /// GitHub username whose public activity to fetch
    pub username: String,

    /// Maximum number of events to print (clamped to 1..=100)
    #[arg(long, default_value_t = 20, value_parser = parse_limit, allow_negative_numbers = true)]
    pub limit: usize,

    /// Bearer token for the GitHub API (falls back to GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Disable ANSI colors in output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse `--limit`, clamping out-of-range values instead of rejecting them
fn parse_limit(raw: &str) -> Result<usize, String> {
    let n: i64 = raw
        .parse()
        .map_err(|_| format!("invalid limit '{raw}': expected an integer"))?;
    Ok(n.clamp(1, 100) as usize)
}
