//! Utility functions shared across layers.
//!
//! - [`date_parser`] - Strict `YYYY-MM-DD` date parsing

pub mod date_parser;
