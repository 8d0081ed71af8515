//! Platform abstraction layer.
//!
//! Provides access to the version control metadata the checks need.

pub mod git;
