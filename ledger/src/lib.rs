// Copyright (c) 2026 TurboChainx Labs. MIT License.
// See LICENSE for details.

//! # Transfer Tracker — Core Ledger
//!
//! A single-owner ledger for token-transfer metadata. One designated
//! identity registers transfer records, amends a small set of price/balance
//! fields on them, and may hand the whole authority to a successor. Nothing
//! else ever mutates state — every privileged path funnels through the same
//! authorization guard.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of the
//! ledger:
//!
//! - **identity** — 32-byte account identifiers. Lookup keys and authority
//!   holders, nothing more.
//! - **address** — deterministic record addressing. A record's location is
//!   a pure function of its composite signature key; there is no index.
//! - **decimal** — fixed-point money. Floating point never touches a
//!   monetary field in this codebase.
//! - **owner** — the owner singleton and the authorization guard.
//! - **record** — transfer records and their typed mutation payloads.
//! - **db** — sled-backed persistence. Every read and write goes straight
//!   to disk; there is no cache to get out of sync.
//! - **ledger** — the typed operations callers actually invoke.
//! - **config** — protocol constants.
//! - **error** — the failure taxonomy. Typed results, never a panic.
//!
//! ## Design Rules
//!
//! 1. Authorization is checked before any state write. A failed guard means
//!    zero partial mutation, always.
//! 2. Immutable record fields are immutable. Updates replace exactly three
//!    fields and cannot touch the rest by construction.
//! 3. First writer wins. Owner initialization and record creation use
//!    compare-and-swap inserts, so a losing concurrent attempt fails with a
//!    typed error instead of clobbering committed state.

pub mod address;
pub mod config;
pub mod db;
pub mod decimal;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod owner;
pub mod record;
