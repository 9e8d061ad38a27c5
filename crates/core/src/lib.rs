//! Domain types and pure logic for the kite record service.
//!
//! Nothing in this crate touches the database or the network.

pub mod catalog;
pub mod error;
pub mod kite;
pub mod types;
