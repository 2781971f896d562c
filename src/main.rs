#![forbid(unsafe_code)]

//! Driver: argument handling, the one network call, and exit-code mapping.
//!
//! Exit codes: 0 success (including an empty feed), 1 API error, 2 network
//! error, 3 unparsable response body, 64 usage error.

use std::env;
use std::io::{self, IsTerminal};
use std::process;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use serde_json::Value;

use gh_activity::api::GithubClient;
use gh_activity::cli::Cli;
use gh_activity::error::{Error, EXIT_USAGE};
use gh_activity::event::NormalizedEvent;
use gh_activity::output::{describe_event, paint, Style};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive as clap "errors" but are not usage
            // errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = err.print();
            process::exit(code);
        }
    };
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let use_color =
        io::stdout().is_terminal() && !cli.no_color && env::var_os("NO_COLOR").is_none();

    match fetch_and_print(cli, use_color) {
        Ok(()) => 0,
        Err(err) => {
            report(&err, use_color);
            err.exit_code()
        }
    }
}

fn fetch_and_print(cli: &Cli, use_color: bool) -> Result<(), Error> {
    let token = resolve_token(cli.token.as_deref());
    let client = GithubClient::new(Duration::from_secs(cli.timeout), token.as_deref())?;
    let body = client.fetch_events(&cli.username)?;

    let feed: Value = serde_json::from_str(&body)?;
    let Some(events) = feed.as_array().filter(|a| !a.is_empty()) else {
        println!("No recent public activity found.");
        return Ok(());
    };

    for raw in events.iter().take(cli.limit) {
        let event = NormalizedEvent::from_value(raw);
        println!("{}", describe_event(&event, use_color));
    }

    Ok(())
}

/// The `--token` flag wins over `GITHUB_TOKEN`; blank values count as unset.
fn resolve_token(flag: Option<&str>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| env::var("GITHUB_TOKEN").ok())
        .filter(|t| !t.trim().is_empty())
}

fn report(err: &Error, use_color: bool) {
    eprintln!("{}{err}", paint("Error: ", Style::Red, use_color));
    if let Error::Api { status, .. } = err {
        match status {
            404 => eprintln!("Tip: check if the username is correct."),
            401 => eprintln!("Tip: If using a token, ensure it is valid."),
            403 => eprintln!(
                "Tip: Provide a token via --token or GITHUB_TOKEN to raise rate limits."
            ),
            _ => {}
        }
    }
}
