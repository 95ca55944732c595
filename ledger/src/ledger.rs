//! # Ledger Operations
//!
//! The typed command surface of the tracker. Callers get exactly five
//! operations — owner initialization, ownership transfer, record creation,
//! record update, and an ungated read — and each one is an atomic
//! commit-or-abort transition against the persisted state.
//!
//! Every mutating handler follows the same shape: authorize first, then
//! validate, then write. The guard runs before any state is touched, so a
//! rejection of any kind leaves the ledger exactly as it was.
//!
//! ## Serialization Contract
//!
//! Creation paths are safe under concurrency on their own (first writer
//! wins via compare-and-swap in [`TrackerDb`]). The two read-modify-write
//! paths — `update_transfer` and `transfer_ownership` — rely on the
//! surrounding execution layer to serialize mutating submissions, which the
//! bundled node does by holding the ledger behind a write lock. The core
//! performs no internal retries; a caller that loses a race resubmits.

use crate::address::{derive_record_address, RecordAddress};
use crate::db::TrackerDb;
use crate::error::{LedgerError, LedgerResult};
use crate::identity::Identity;
use crate::owner::{authorize, OwnerAccount};
use crate::record::{NewTransfer, TransferRecord, TransferUpdate};

/// The transfer-tracker state machine over persisted storage.
pub struct Ledger {
    db: TrackerDb,
}

impl Ledger {
    /// Open (or create) a ledger at the given filesystem path.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> LedgerResult<Self> {
        Ok(Self {
            db: TrackerDb::open(path)?,
        })
    }

    /// Open a throwaway in-memory ledger. For tests.
    pub fn open_temporary() -> LedgerResult<Self> {
        Ok(Self {
            db: TrackerDb::open_temporary()?,
        })
    }

    // -- Owner operations ---------------------------------------------------

    /// Create the owner singleton with `signer` as the initial owner.
    ///
    /// The one operation with no authorization guard: whoever commits the
    /// first initialization holds authority. Exactly one caller can ever
    /// win this — the creation is a compare-and-swap against an absent
    /// singleton.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidOwner`] if `signer` is the zero identity
    /// (the singleton must never hold an empty owner, including at birth).
    /// [`LedgerError::AlreadyInitialized`] if the singleton exists; the
    /// stored owner is unchanged.
    pub fn initialize_owner(&self, signer: Identity) -> LedgerResult<OwnerAccount> {
        if signer.is_zero() {
            return Err(LedgerError::InvalidOwner);
        }

        let account = OwnerAccount::new(signer);
        if !self.db.init_owner(&account)? {
            return Err(LedgerError::AlreadyInitialized);
        }

        tracing::info!(owner = %account.owner, "owner initialized");
        Ok(account)
    }

    /// Replace the owner with `new_owner`, authorized by the current owner.
    ///
    /// After commit the prior owner immediately loses all authorization;
    /// there is no grace period and no dual-authority window.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Unauthorized`] if `signer` is not the current owner
    /// (or the registry was never initialized — nobody is authorized
    /// against an absent singleton).
    /// [`LedgerError::InvalidOwner`] if `new_owner` is the zero identity.
    pub fn transfer_ownership(
        &self,
        signer: Identity,
        new_owner: Identity,
    ) -> LedgerResult<OwnerAccount> {
        let current = self.require_owner(signer)?;
        authorize(signer, &current)?;

        if new_owner.is_zero() {
            return Err(LedgerError::InvalidOwner);
        }

        let account = OwnerAccount::new(new_owner);
        self.db.put_owner(&account)?;

        tracing::info!(old_owner = %current.owner, new_owner = %account.owner, "ownership transferred");
        Ok(account)
    }

    /// Read the owner singleton, if initialized. Ungated.
    pub fn owner(&self) -> LedgerResult<Option<OwnerAccount>> {
        Ok(self.db.get_owner()?)
    }

    // -- Record operations --------------------------------------------------

    /// Create a transfer record at the address derived from its composite
    /// key, authorized by the current owner.
    ///
    /// All fields are persisted verbatim — no normalization of amounts or
    /// prices beyond their exact decimal values.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Unauthorized`] if the guard rejects `signer`.
    /// [`LedgerError::InvalidInput`] if a composite-key part is oversized.
    /// [`LedgerError::DuplicateRecord`] if the derived address is occupied;
    /// no field of the existing record is overwritten.
    pub fn add_transfer(
        &self,
        signer: Identity,
        transfer: NewTransfer,
    ) -> LedgerResult<(RecordAddress, TransferRecord)> {
        let current = self.require_owner(signer)?;
        authorize(signer, &current)?;

        let address = derive_record_address(
            &transfer.signature_1,
            &transfer.signature_2,
            &transfer.signature_3,
        )?;

        let record = transfer.into_record();
        if !self.db.insert_record(&address, &record)? {
            return Err(LedgerError::DuplicateRecord { address });
        }

        tracing::info!(
            %address,
            from = %record.from,
            to = %record.to,
            amount = %record.amount,
            timestamp = record.timestamp,
            "transfer added"
        );
        Ok((address, record))
    }

    /// Replace the three mutable fields of the record at `address`,
    /// authorized by the current owner. Immutable fields are untouched.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Unauthorized`] if the guard rejects `signer`.
    /// [`LedgerError::RecordNotFound`] if no record exists at `address`.
    pub fn update_transfer(
        &self,
        signer: Identity,
        address: RecordAddress,
        update: TransferUpdate,
    ) -> LedgerResult<TransferRecord> {
        let current = self.require_owner(signer)?;
        authorize(signer, &current)?;

        let mut record = self
            .db
            .get_record(&address)?
            .ok_or(LedgerError::RecordNotFound { address })?;

        record.apply_update(&update);
        self.db.put_record(&address, &record)?;

        tracing::info!(
            %address,
            wallet_balance = %record.wallet_balance,
            sol_price = %record.sol_price,
            token_price = %record.token_price,
            "transfer updated"
        );
        Ok(record)
    }

    /// Read the record at `address`, or `None`. Ungated — reads require
    /// no authority.
    pub fn get_transfer(&self, address: RecordAddress) -> LedgerResult<Option<TransferRecord>> {
        Ok(self.db.get_record(&address)?)
    }

    /// Number of stored transfer records.
    pub fn record_count(&self) -> usize {
        self.db.record_count()
    }

    // -- Internals ----------------------------------------------------------

    /// Load the owner singleton for a gated operation. An uninitialized
    /// registry authorizes nobody, so absence is `Unauthorized` rather
    /// than a distinct state the caller could probe.
    fn require_owner(&self, signer: Identity) -> LedgerResult<OwnerAccount> {
        self.db
            .get_owner()?
            .ok_or(LedgerError::Unauthorized { signer })
    }
}
