#![forbid(unsafe_code)]

//! gh-activity: a GitHub public-activity feed viewer for the terminal
//!
//! Fetches one page of a user's public events from the GitHub REST API and
//! renders each event as a single human-readable line, optionally colorized.

pub mod api;
pub mod cli;
pub mod error;
pub mod event;
pub mod output;
