//! configgen renders proxy configuration files from templates.
//! Each template is rendered against a context, validated as a JSON document
//! and written back out with stable formatting.

/// Command-line interface module for the configgen application
pub mod cli;

/// Ordered template context
pub mod context;

/// Demo cluster, external host and mongo tables, and the jobs built from them
pub mod demo;

/// Parsed JSON documents and their stable serialization
pub mod document;

/// Error types and handling for the configgen application
pub mod error;

/// Render, validate and write orchestration
pub mod generator;

/// Template loading and rendering
pub mod renderer;

pub use context::Context;
pub use document::Document;
pub use error::{Error, Result};
pub use generator::{generate_config, ConfigRenderer, Job};
