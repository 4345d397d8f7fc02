//! SEDA Sales Race: the dashboard core.
//!
//! Everything the runner needs lives here: the domain model, the pure
//! stages (scoring, filter, leaderboard, admission, export), the session
//! state with its command surface, and the Gemini client.

pub mod admission;
pub mod auth;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod gemini;
pub mod leaderboard;
pub mod model;
pub mod scoring;
pub mod state;
pub mod types;
