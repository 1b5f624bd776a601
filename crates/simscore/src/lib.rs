#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod config;
mod dispatch;
mod engine;
mod error;
mod modes;
mod stack;

pub mod sets;
pub mod vectors;

pub use config::Config;
pub use dispatch::score;
pub use engine::{Engine, MismatchModeGuard, SimModeGuard};
pub use error::{ParseModeError, Sample, ScoreError, SENTINEL};
pub use modes::{MismatchMode, SimilarityMode};
pub use stack::ModeStack;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
