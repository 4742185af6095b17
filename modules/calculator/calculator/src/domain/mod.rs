//! Domain layer for calculator module
//!
//! Contains the arithmetic primitives and the service exposing them.

pub mod arithmetic;
pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
