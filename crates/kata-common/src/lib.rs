//! Common utilities for the kata exercise crates.
//!
//! This crate provides shared infrastructure used by the exercise crates:
//! - **Warning System** - colored terminal output for lenient inputs that
//!   are accepted but probably not what the caller meant

pub mod warning;
