//! Calculator Module
//!
//! Stateless arithmetic over 32-bit signed integers (two's-complement
//! wraparound on overflow) plus a floating-point square root.
//!
//! ## Architecture
//!
//! - `domain/arithmetic.rs` - Pure arithmetic primitives
//! - `domain/service.rs` - `CalculatorClientV1` implementation
//! - `config.rs` - Layered configuration for the binary
//! - `logging.rs` - `tracing` subscriber setup
//! - `cli.rs` - Command-line parsing, dispatch and rendering
//!
//! External consumers should depend on the `calculator-sdk` trait and
//! obtain an implementation from `Service::new()`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;

pub use domain::{DomainError, Service};
