// seximal-cli/src/logging.rs
//
// Logging setup for the CLI. The application uses the standard `log` crate
// with `env_logger` as the backend, honoring the RUST_LOG environment
// variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: conversion-level detail
// - RUST_LOG=trace: very verbose debugging information

use env_logger::Env;

/// Initializes the global logger. Safe to call once at startup.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
