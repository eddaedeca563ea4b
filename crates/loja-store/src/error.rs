//! # Store Error Types
//!
//! Error types for record-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  Collection miss / invalid record                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  TerminalError (loja-terminal) ← joined with CoreError              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use loja_core::ValidationError;

/// Record store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A record with the same id already exists in the collection.
    ///
    /// Ids are caller-assigned and must be unique per collection.
    #[error("Duplicate id: {id}")]
    DuplicateId { id: String },

    /// Deleting this employee would leave the store with no active
    /// administrator.
    #[error("Cannot delete the only active administrator")]
    LastAdmin,

    /// Record failed validation before it reached a collection.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
