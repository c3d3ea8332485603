//! Terminal output helpers for sffuzzy tools
//!
//! Provides shared CLI functionality:
//! - Status messages on stderr
//! - Duration and count formatting
//! - Result tables

#![warn(missing_docs)]

pub mod output;
