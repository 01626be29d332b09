use thiserror::Error;

/// Rejected user input, caught before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide study input before activation.")]
    EmptyNotes,
}
