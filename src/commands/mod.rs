//! Command implementations for the CLI
//!
//! - start: Start the pricing server
//! - test: Test configuration validity
//! - config: Configuration display
//! - calc: Price a pizza from the command line

pub mod calc;
pub mod config;
pub mod start;
