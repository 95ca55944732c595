//! # TrackerDb — Persisted Ledger State
//!
//! The persistence layer, built on sled's embedded key-value store. The
//! ledger keeps no in-memory cache: every read and write is a direct
//! interaction with the trees below.
//!
//! ## Tree Layout
//!
//! | Tree      | Key                    | Value                      |
//! |-----------|------------------------|----------------------------|
//! | `owner`   | fixed (`owner`)        | `bincode(OwnerAccount)`    |
//! | `records` | derived address (32B)  | `bincode(TransferRecord)`  |
//!
//! ## Atomicity
//!
//! Creation paths (`init_owner`, `insert_record`) go through sled's
//! `compare_and_swap` against an absent key, so exactly one of any set of
//! concurrent creators commits; the rest observe the existing value and
//! fail without writing. Overwrites (`put_owner`, `put_record`) are single
//! atomic inserts. There is never a partially written value on disk.

use sled::{Db, Tree};
use std::path::Path;
use thiserror::Error;

use crate::address::RecordAddress;
use crate::owner::OwnerAccount;
use crate::record::TransferRecord;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Fixed key of the owner singleton within the `owner` tree.
const OWNER_KEY: &[u8] = b"owner";

/// Persistent storage engine for the transfer tracker.
///
/// # Thread Safety
///
/// sled is inherently thread-safe — trees support lock-free concurrent
/// reads and serialized writes, so `TrackerDb` can be shared across threads
/// behind an `Arc` without external locking. Read-modify-write sequences
/// (record updates, ownership transfer) are serialized by the calling
/// layer; see [`crate::ledger::Ledger`].
#[derive(Debug, Clone)]
pub struct TrackerDb {
    /// The underlying sled database handle.
    db: Db,
    /// The owner singleton under its fixed key.
    owner: Tree,
    /// Transfer records keyed by derived address.
    records: Tree,
}

impl TrackerDb {
    /// Open or create a database at the given filesystem path.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Create a temporary database that lives in memory and is cleaned up
    /// when dropped. Ideal for tests — no filesystem residue.
    pub fn open_temporary() -> DbResult<Self> {
        let config = sled::Config::new().temporary(true);
        let db = config.open()?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> DbResult<Self> {
        let owner = db.open_tree("owner")?;
        let records = db.open_tree("records")?;
        Ok(Self { db, owner, records })
    }

    // -- Owner operations ---------------------------------------------------

    /// Retrieve the owner singleton, or `None` before initialization.
    pub fn get_owner(&self) -> DbResult<Option<OwnerAccount>> {
        match self.owner.get(OWNER_KEY)? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// First-writer creation of the owner singleton.
    ///
    /// Returns `true` if this call created the account, `false` if one
    /// already existed (in which case nothing was written).
    pub fn init_owner(&self, account: &OwnerAccount) -> DbResult<bool> {
        let bytes = encode(account)?;
        let swap = self
            .owner
            .compare_and_swap(OWNER_KEY, None as Option<&[u8]>, Some(bytes))?;
        self.db.flush()?;
        Ok(swap.is_ok())
    }

    /// Overwrite the owner singleton. Used by ownership transfer, after
    /// the caller has authorized against the current value.
    pub fn put_owner(&self, account: &OwnerAccount) -> DbResult<()> {
        let bytes = encode(account)?;
        self.owner.insert(OWNER_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    // -- Record operations --------------------------------------------------

    /// Retrieve the record at an address, or `None`.
    pub fn get_record(&self, address: &RecordAddress) -> DbResult<Option<TransferRecord>> {
        match self.records.get(address.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// First-writer creation of a record.
    ///
    /// Returns `true` if this call created the record, `false` if the
    /// address was already occupied (nothing overwritten).
    pub fn insert_record(
        &self,
        address: &RecordAddress,
        record: &TransferRecord,
    ) -> DbResult<bool> {
        let bytes = encode(record)?;
        let swap =
            self.records
                .compare_and_swap(address.as_bytes(), None as Option<&[u8]>, Some(bytes))?;
        self.db.flush()?;
        Ok(swap.is_ok())
    }

    /// Overwrite the record at an address. Used by the update path after
    /// the caller has loaded and modified the existing record.
    pub fn put_record(&self, address: &RecordAddress, record: &TransferRecord) -> DbResult<()> {
        let bytes = encode(record)?;
        self.records.insert(address.as_bytes(), bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Number of stored transfer records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Block until all pending writes are durable on disk.
    pub fn flush(&self) -> DbResult<()> {
        self.db.flush()?;
        Ok(())
    }
}

fn encode<T: serde::Serialize>(value: &T) -> DbResult<Vec<u8>> {
    bincode::serialize(value).map_err(|e| DbError::Serialization(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> DbResult<T> {
    bincode::deserialize(bytes).map_err(|e| DbError::Serialization(e.to_string()))
}
