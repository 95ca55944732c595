//! # Ledger Configuration & Constants
//!
//! Every magic number in the tracker lives here. If you're hardcoding a
//! constant somewhere else, you're doing it wrong and you owe the team
//! coffee.
//!
//! The addressing constants are consensus-critical: changing the derivation
//! context or the key-part limit after records exist strands every address
//! already handed out. Choose once, then leave them alone.

/// Crate-level protocol version, assembled at compile time.
pub const LEDGER_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Identities & Addresses
// ---------------------------------------------------------------------------

/// Length of an account identity in bytes. 32 bytes — the universal size of
/// a public-key-shaped identifier, and exactly what the surrounding
/// submission layer hands us.
pub const IDENTITY_LENGTH: usize = 32;

/// Length of a derived record address in bytes. BLAKE3 output size.
pub const ADDRESS_LENGTH: usize = 32;

/// Domain-separation context for record address derivation.
///
/// Fed to BLAKE3's `derive_key` mode so that record addresses can never
/// collide with any other hash computed anywhere else, even over identical
/// input bytes. The string itself is arbitrary but permanent.
pub const RECORD_ADDRESS_CONTEXT: &str = "turbochainx transfer-tracker 2026 record address v1";

/// Maximum length of a single composite-key part in bytes.
///
/// The composite key is three signature fragments; 32 bytes per fragment is
/// the seed-length limit the original derivation accepted, and nothing
/// legitimate has ever needed more.
pub const MAX_KEY_PART_BYTES: usize = 32;

// ---------------------------------------------------------------------------
// Money
// ---------------------------------------------------------------------------

/// Number of fractional decimal digits in a [`crate::decimal::Decimal`].
/// 8 decimals, same as Bitcoin. We're not reinventing this wheel.
pub const DECIMAL_SCALE: u32 = 8;

// ---------------------------------------------------------------------------
// Network Defaults
// ---------------------------------------------------------------------------

/// Default port for the HTTP API.
pub const DEFAULT_RPC_PORT: u16 = 8871;

/// Default port for the Prometheus metrics endpoint.
pub const DEFAULT_METRICS_PORT: u16 = 8872;
