pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod holdings;
pub mod logging;
pub mod provider;
pub mod session;
pub mod valuation;
