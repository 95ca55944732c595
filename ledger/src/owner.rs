//! # Owner Registry & Authorization Guard
//!
//! The ledger has exactly one privileged identity at any time. That fact is
//! modeled as an explicitly addressed singleton account — never an ambient
//! process global — and every mutation of it routes through the typed
//! operations on [`crate::ledger::Ledger`].
//!
//! [`authorize`] is the single reusable guard. Every mutating operation
//! except owner initialization calls it first, before touching any state,
//! so a failed check guarantees zero partial mutation. It is a pure
//! predicate: no clocks, no I/O, no side effects.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::identity::Identity;

/// The owner singleton.
///
/// Exists in exactly zero or one state: absent before initialization, and
/// holding a non-zero identity forever after. There is no terminal state —
/// ownership moves between identities but is never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerAccount {
    /// The identity currently holding ledger authority.
    pub owner: Identity,
}

impl OwnerAccount {
    /// Wrap an identity as the owner account.
    pub fn new(owner: Identity) -> Self {
        Self { owner }
    }
}

/// The authorization guard: succeeds iff `signer` is the current owner.
///
/// # Errors
///
/// Returns [`LedgerError::Unauthorized`] carrying the rejected signer.
pub fn authorize(signer: Identity, account: &OwnerAccount) -> LedgerResult<()> {
    if signer == account.owner {
        Ok(())
    } else {
        Err(LedgerError::Unauthorized { signer })
    }
}
