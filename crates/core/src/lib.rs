//! # inGen Core
//!
//! Domain types, traits, and error definitions for the inGen explanation
//! generator. The other crates implement against what is defined here:
//! configuration lookups, backend adapters, and the explanation pipeline.
//!
//! ## Design Philosophy
//!
//! The text-generation capability is a single trait ([`Backend`]). Concrete
//! adapters live in `ingen-providers`, which lets the pipeline stay ignorant of
//! which service actually answers and keeps tests free of network access.

pub mod backend;
pub mod error;
pub mod prompt;

// Re-export key types at crate root for ergonomics
pub use backend::Backend;
pub use error::{BackendError, ConfigError, Error, FileAccessError, Result};
pub use prompt::Prompt;
