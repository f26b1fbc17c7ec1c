//! property-sim: Real estate renovation and resale investment simulator
//!
//! This library provides:
//! - A stateless valuation engine: package cost, transaction fees, resale
//!   scenarios, profit split, share returns and value projections
//! - A simulation runner that validates inputs and assembles a full report
//! - TOML configuration of every policy constant
//! - Structured logging

pub mod cli;
pub mod config;
pub mod engine;
pub mod simulation;
pub mod telemetry;
