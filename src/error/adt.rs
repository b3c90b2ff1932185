//! Container error module.
//!
//! Every container operation that can fail reports an [`AdtError`]. Each
//! variant records the component and the operation that raised it, so the
//! rendered message reads `Error in ArrayList.get_element: ...` without the
//! caller having to add context.

use thiserror::Error;

/// Result type for container operations.
pub type AdtResult<T> = Result<T, AdtError>;

/// Coarse classification of an [`AdtError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Position out of bounds, or the operation is invalid on an empty container.
    Index,
    /// Incompatible container configurations.
    Type,
    /// Unknown implementation name or invalid configuration value.
    Value,
}

/// Errors raised by the containers and the selection layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdtError {
    /// The operation needs at least one element.
    #[error("Error in {component}.{operation}: empty data structure")]
    Empty {
        /// Container that raised the error
        component: &'static str,
        /// Operation that raised the error
        operation: &'static str,
    },

    /// A position lies outside the valid range of the container.
    #[error("Error in {component}.{operation}: index {index} is out of range for size {size}")]
    IndexOutOfRange {
        /// Container that raised the error
        component: &'static str,
        /// Operation that raised the error
        operation: &'static str,
        /// The offending position
        index: usize,
        /// Size of the container at the time of the call
        size: usize,
    },

    /// An inclusive `[start, end]` range is reversed or exceeds the container.
    #[error("Error in {component}.{operation}: invalid range [{start}, {end}] for size {size}")]
    InvalidRange {
        /// Container that raised the error
        component: &'static str,
        /// Operation that raised the error
        operation: &'static str,
        /// First position of the range
        start: usize,
        /// Last position of the range
        end: usize,
        /// Size of the container at the time of the call
        size: usize,
    },

    /// Two containers cannot be combined.
    #[error("Error in {component}.{operation}: {reason}")]
    Incompatible {
        /// Container that raised the error
        component: &'static str,
        /// Operation that raised the error
        operation: &'static str,
        /// Why the containers are incompatible
        reason: String,
    },

    /// The selection layer was asked for an implementation it does not know.
    #[error("Error in {family}.from_name: unknown implementation '{name}'")]
    UnknownImplementation {
        /// Family of containers searched ("List" or "Map")
        family: &'static str,
        /// The unknown name
        name: String,
    },

    /// A container configuration value is invalid.
    #[error("Error in {component}.with_config: invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Container that rejected the configuration
        component: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl AdtError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdtError::Empty { .. }
            | AdtError::IndexOutOfRange { .. }
            | AdtError::InvalidRange { .. } => ErrorKind::Index,
            AdtError::Incompatible { .. } => ErrorKind::Type,
            AdtError::UnknownImplementation { .. } | AdtError::InvalidConfiguration { .. } => {
                ErrorKind::Value
            }
        }
    }

    /// Returns the component that raised the error.
    pub fn component(&self) -> &str {
        match self {
            AdtError::Empty { component, .. }
            | AdtError::IndexOutOfRange { component, .. }
            | AdtError::InvalidRange { component, .. }
            | AdtError::Incompatible { component, .. }
            | AdtError::InvalidConfiguration { component, .. } => component,
            AdtError::UnknownImplementation { family, .. } => family,
        }
    }
}
