//! Domain layer
//!
//! Contains the feed model with no external dependencies.
//! - `entities`: The decoded RSS document
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
