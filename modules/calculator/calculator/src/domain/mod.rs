//! Domain layer for calculator module
//!
//! Contains the arithmetic functions and the operation dispatcher.

pub mod arithmetic;
pub mod service;

pub use service::Service;

#[cfg(test)]
mod service_test;
