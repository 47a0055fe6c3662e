//! Base types and error handling.
//!
//! - [`MapError`](maperror::MapError): registration and configuration errors
//! - [`difference`](collections::difference): ordered set difference used when
//!   reconciling override tokens with the registered device groups

pub mod collections;
pub mod maperror;

#[cfg(test)]
mod tests;
