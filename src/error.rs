//! Error handling for configgen.
//! Defines the error taxonomy shared by every stage of a render call.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while rendering a configuration file.
///
/// Every variant aborts the current render call; none of them is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The template root does not exist or the named template is not found under it.
    #[error("Template '{template}' was not found in '{}'.", .template_root.display())]
    TemplateNotFound { template: String, template_root: PathBuf },

    /// The template referenced a value the context does not provide.
    #[error("Template '{template}' references an undefined value: {source}.")]
    UndefinedValue {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Any other failure while parsing or evaluating a template.
    #[error("Failed to render template '{template}': {source}.")]
    TemplateError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// The template rendered text that is not a valid JSON document.
    #[error("Template '{template}' produced invalid JSON: {source}.")]
    InvalidOutput {
        template: String,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write '{}': {source}.", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parsed document could not be serialized back to text.
    #[error("Serialization error: {0}.")]
    SerializationError(#[source] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
