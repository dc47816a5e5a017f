//! # Bracket Scorer
//!
//! Scores a single-elimination tournament bracket prediction game: given a
//! fixed draw, a set of submitted picks per participant, and the results
//! recorded so far, it computes each participant's current score, the
//! maximum score still reachable, and a tie-aware rank, then assembles a
//! denormalized viewer document for rendering.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (entrants, brackets, match refs, participants)
//! - **engine**: Occupant resolution, elimination inference, scoring, ranking
//! - **viewer**: Denormalized viewer document assembly
//! - **ingest**: Entrants text file parsing
//! - **config**: Configuration loading and validation

pub mod config;
pub mod engine;
pub mod ingest;
pub mod models;
pub mod viewer;

pub use models::*;
