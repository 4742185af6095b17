//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Error types (`CalculatorError`)
//! - Operation names (`Operation`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorClientV1;
//!
//! let client: Arc<dyn CalculatorClientV1> = Arc::new(calculator::Service::new());
//! let quotient = client.divide(6, 3)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::CalculatorClientV1;

// === TYPES ===
mod error;
mod operation;
pub use error::CalculatorError;
pub use operation::Operation;
