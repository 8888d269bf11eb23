//! Calculator Module
//!
//! A stateless arithmetic engine with a single dispatch entry point.
//!
//! ## Architecture
//!
//! - `domain/arithmetic.rs` - Pure arithmetic functions
//! - `domain/service.rs` - Operation dispatcher
//! - `client.rs` - In-process `CalculatorClient` implementation
//!
//! External consumers should depend on `calculator-sdk` for the API trait and
//! use [`wire_client`] to obtain an implementation.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;
pub use domain::Service;

mod client;
mod wiring;
pub use wiring::wire_client;
