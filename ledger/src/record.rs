//! # Transfer Records
//!
//! A [`TransferRecord`] is the unit of storage: the metadata of one
//! observed token transfer, located solely by the address derived from its
//! three-part signature key.
//!
//! The fields split into two classes and the split is load-bearing:
//!
//! - **Immutable** — the composite key, the endpoints, the amount, and the
//!   timestamp. Written once at creation, byte-for-byte stable afterwards.
//! - **Mutable** — the wallet balance and the two price marks. Replaceable
//!   as a unit through [`TransferUpdate`], which cannot name any other
//!   field, so "update touches only the three mutable fields" holds by
//!   construction rather than by discipline.

use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::identity::Identity;

/// One recorded token transfer.
///
/// Field names follow the upstream chain data: `signature_1..3` are the
/// fragments of the transfer's signature used as the composite key, and
/// `sol_price`/`token_price` are the market prices observed when the
/// transfer was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// First composite-key fragment. Immutable.
    pub signature_1: String,
    /// Second composite-key fragment. Immutable.
    pub signature_2: String,
    /// Third composite-key fragment. Immutable.
    pub signature_3: String,
    /// Sending account. Immutable.
    pub from: Identity,
    /// Receiving account. Immutable.
    pub to: Identity,
    /// Transferred amount, stored verbatim. Immutable.
    pub amount: Decimal,
    /// Transfer time as Unix seconds. Immutable.
    pub timestamp: i64,
    /// Observed wallet balance. Mutable via update.
    pub wallet_balance: Decimal,
    /// Observed SOL price. Mutable via update.
    pub sol_price: Decimal,
    /// Observed token price. Mutable via update.
    pub token_price: Decimal,
}

impl TransferRecord {
    /// Overwrite the three mutable fields. Everything else is untouched —
    /// this method is the only mutation path a record has.
    pub fn apply_update(&mut self, update: &TransferUpdate) {
        self.wallet_balance = update.wallet_balance;
        self.sol_price = update.sol_price;
        self.token_price = update.token_price;
    }
}

/// Typed creation payload for a transfer record.
///
/// Replaces the upstream "method name plus account list" calling style with
/// an explicit command: every field the record will hold, validated and
/// typed before the operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransfer {
    /// First composite-key fragment.
    pub signature_1: String,
    /// Second composite-key fragment.
    pub signature_2: String,
    /// Third composite-key fragment.
    pub signature_3: String,
    /// Sending account.
    pub from: Identity,
    /// Receiving account.
    pub to: Identity,
    /// Transferred amount.
    pub amount: Decimal,
    /// Transfer time as Unix seconds.
    pub timestamp: i64,
    /// Initial wallet balance observation.
    pub wallet_balance: Decimal,
    /// Initial SOL price observation.
    pub sol_price: Decimal,
    /// Initial token price observation.
    pub token_price: Decimal,
}

impl NewTransfer {
    /// Materialize the record this payload describes.
    pub fn into_record(self) -> TransferRecord {
        TransferRecord {
            signature_1: self.signature_1,
            signature_2: self.signature_2,
            signature_3: self.signature_3,
            from: self.from,
            to: self.to,
            amount: self.amount,
            timestamp: self.timestamp,
            wallet_balance: self.wallet_balance,
            sol_price: self.sol_price,
            token_price: self.token_price,
        }
    }
}

/// The replacement values for a record's mutable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferUpdate {
    /// New token price.
    pub token_price: Decimal,
    /// New SOL price.
    pub sol_price: Decimal,
    /// New wallet balance.
    pub wallet_balance: Decimal,
}
