//! Noun Road (workspace facade crate).
//!
//! A two-player word-chain game: each word must start with the last letter of
//! the previous one. The implementation lives in dedicated crates under
//! `crates/`; this package re-exports them as `noun_road::{core,input,term,types}`
//! and adds the [`app::App`] presenter that the terminal binary drives.

pub mod app;

pub use noun_road_core as core;
pub use noun_road_input as input;
pub use noun_road_term as term;
pub use noun_road_types as types;
