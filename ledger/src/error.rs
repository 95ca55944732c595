//! # Ledger Error Taxonomy
//!
//! Every way an operation can fail, as a typed, inspectable enum. Failures
//! abort the enclosing operation atomically — there is no partial state to
//! clean up and no recovery-in-place. Retry policy belongs to the caller.

use thiserror::Error;

use crate::address::RecordAddress;
use crate::identity::Identity;

/// Errors returned by ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The owner singleton already exists. Initialization happens once.
    #[error("owner account is already initialized")]
    AlreadyInitialized,

    /// The signer is not the current ledger owner.
    #[error("unauthorized: {signer} is not the ledger owner")]
    Unauthorized {
        /// The identity that attempted the operation.
        signer: Identity,
    },

    /// A transfer record already exists at the derived address.
    #[error("duplicate record at {address}")]
    DuplicateRecord {
        /// The derived address of the existing record.
        address: RecordAddress,
    },

    /// No transfer record exists at the given address.
    #[error("no record at {address}")]
    RecordNotFound {
        /// The address that was looked up.
        address: RecordAddress,
    },

    /// The proposed owner is the zero identity, which can never hold
    /// authority.
    #[error("invalid owner: the zero identity cannot own the ledger")]
    InvalidOwner,

    /// A composite-key part exceeds the length the derivation accepts.
    #[error("invalid input: composite-key part {part} is {len} bytes (limit {max})")]
    InvalidInput {
        /// 1-based index of the offending signature part.
        part: usize,
        /// Its length in bytes.
        len: usize,
        /// The permitted maximum.
        max: usize,
    },

    /// The storage engine failed. Not a ledger-semantic error; surfaces
    /// disk and serialization problems from the persistence layer.
    #[error("storage failure: {0}")]
    Storage(#[from] crate::db::DbError),
}

/// Shorthand result type used throughout the crate.
pub type LedgerResult<T> = Result<T, LedgerError>;
