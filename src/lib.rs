//! External debug file identity.
//!
//! This library reads the information an ELF binary carries about its separate debug file.
//! It is organized into several modules:
//! - `config`: CLI configuration.
//! - `extract`: Debug-link and build-ID extractor traits, with an `object` backed ELF backend.
//! - `identity`: The `DebugIdentity` record and its factory.
//! - `loader`: Memory-mapped input loading, including static archives.

pub mod config;
pub mod extract;
pub mod identity;
pub mod loader;
pub mod utils;

pub use identity::DebugIdentity;
