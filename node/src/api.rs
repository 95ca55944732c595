//! # REST API
//!
//! Builds the axum router that exposes the tracker node's HTTP interface.
//! All endpoints share application state through axum's `State` extractor.
//!
//! ## Endpoints
//!
//! | Method | Path                   | Description                           |
//! |--------|------------------------|---------------------------------------|
//! | GET    | `/health`              | Liveness probe                        |
//! | GET    | `/status`              | Node status summary                   |
//! | POST   | `/owner/initialize`    | Claim ledger ownership (first writer) |
//! | POST   | `/owner/transfer`      | Hand ownership to a new identity      |
//! | POST   | `/transfers`           | Create a transfer record              |
//! | POST   | `/transfers/derive`    | Derive the address for a key          |
//! | PUT    | `/transfers/:address`  | Update a record's mutable fields      |
//! | GET    | `/transfers/:address`  | Read a record (no authority required) |
//!
//! Mutating endpoints take the write half of the ledger lock, which is what
//! serializes the read-modify-write operations (updates, ownership
//! transfer); creation races are additionally safe at the storage layer.

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tracker_ledger::address::{derive_record_address, RecordAddress};
use tracker_ledger::error::LedgerError;
use tracker_ledger::identity::Identity;
use tracker_ledger::ledger::Ledger;
use tracker_ledger::record::{NewTransfer, TransferRecord, TransferUpdate};

use crate::metrics::SharedMetrics;

// ---------------------------------------------------------------------------
// Application State
// ---------------------------------------------------------------------------

/// Shared application state available to all request handlers.
///
/// Cheap to clone — everything behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The node's reported version string.
    pub version: String,
    /// When this node process started.
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// The ledger. Writers take the write half, which serializes mutations.
    pub ledger: Arc<RwLock<Ledger>>,
    /// Reference to Prometheus metrics for in-handler recording.
    pub metrics: SharedMetrics,
}

// ---------------------------------------------------------------------------
// Router Construction
// ---------------------------------------------------------------------------

/// Builds the full axum [`Router`] with all API routes, CORS, and tracing.
///
/// The returned router is ready to be served on the configured RPC port.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/owner/initialize", post(initialize_owner_handler))
        .route("/owner/transfer", post(transfer_ownership_handler))
        .route("/transfers", post(add_transfer_handler))
        .route("/transfers/derive", post(derive_address_handler))
        .route("/transfers/:address", put(update_transfer_handler))
        .route("/transfers/:address", get(get_transfer_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request / Response Types
// ---------------------------------------------------------------------------

/// Response payload for `GET /status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Node software version.
    pub version: String,
    /// Hex-encoded current owner, or `null` before initialization.
    pub owner: Option<Identity>,
    /// Number of stored transfer records.
    pub record_count: usize,
    /// Seconds since process start.
    pub uptime_seconds: i64,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
}

/// Request body for `POST /owner/initialize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct InitializeOwnerRequest {
    /// Hex-encoded identity claiming ownership.
    pub signer: Identity,
}

/// Request body for `POST /owner/transfer`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransferOwnershipRequest {
    /// Hex-encoded current owner authorizing the handoff.
    pub signer: Identity,
    /// Hex-encoded identity receiving ownership.
    pub new_owner: Identity,
}

/// Response payload for the two owner endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct OwnerResponse {
    /// Hex-encoded identity now holding ownership.
    pub owner: Identity,
}

/// Request body for `POST /transfers`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddTransferRequest {
    /// Hex-encoded owner authorizing the creation.
    pub signer: Identity,
    /// The record to create.
    pub transfer: NewTransfer,
}

/// Request body for `PUT /transfers/:address`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTransferRequest {
    /// Hex-encoded owner authorizing the update.
    pub signer: Identity,
    /// Replacement values for the mutable fields.
    pub update: TransferUpdate,
}

/// Request body for `POST /transfers/derive`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeriveAddressRequest {
    pub signature_1: String,
    pub signature_2: String,
    pub signature_3: String,
}

/// Response payload carrying a record together with its address.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransferResponse {
    /// Hex-encoded derived address of the record.
    pub address: RecordAddress,
    /// The record itself.
    pub record: TransferRecord,
}

/// Response payload for `POST /transfers/derive`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeriveAddressResponse {
    /// Hex-encoded derived address for the composite key.
    pub address: RecordAddress,
}

/// Generic error body returned by REST endpoints on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Error Mapping
// ---------------------------------------------------------------------------

/// Maps a ledger rejection to an HTTP response.
///
/// Conflicting creations are 409, authorization failures 403, missing
/// records 404, malformed input 400. Only storage faults surface as 500.
fn error_response(err: &LedgerError) -> Response {
    let status = match err {
        LedgerError::AlreadyInitialized | LedgerError::DuplicateRecord { .. } => {
            StatusCode::CONFLICT
        }
        LedgerError::Unauthorized { .. } => StatusCode::FORBIDDEN,
        LedgerError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        LedgerError::InvalidOwner | LedgerError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse {
        error: err.to_string(),
    };
    (status, Json(body)).into_response()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /health` — returns 200 if the node is alive.
///
/// This is the liveness probe for orchestrators (k8s, systemd, etc.).
/// It intentionally does not check internal subsystem health — that
/// belongs in `/status`.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// `GET /status` — returns node status summary.
async fn status_handler(State(state): State<AppState>) -> Response {
    let ledger = state.ledger.read().await;
    let owner = match ledger.owner() {
        Ok(account) => account.map(|a| a.owner),
        Err(e) => return error_response(&e),
    };
    let record_count = ledger.record_count();
    drop(ledger);

    let now = chrono::Utc::now();
    let resp = StatusResponse {
        version: state.version.clone(),
        owner,
        record_count,
        uptime_seconds: (now - state.started_at).num_seconds(),
        timestamp: now.to_rfc3339(),
    };
    Json(resp).into_response()
}

/// `POST /owner/initialize` — claim ledger ownership.
///
/// First writer wins. Returns 409 once an owner exists, with the stored
/// owner untouched.
async fn initialize_owner_handler(
    State(state): State<AppState>,
    Json(req): Json<InitializeOwnerRequest>,
) -> Response {
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let ledger = state.ledger.write().await;
    let result = ledger.initialize_owner(req.signer);
    drop(ledger);
    timer.observe_duration();

    match result {
        Ok(account) => (StatusCode::OK, Json(OwnerResponse { owner: account.owner }))
            .into_response(),
        Err(e) => {
            state.metrics.rejected_operations_total.inc();
            error_response(&e)
        }
    }
}

/// `POST /owner/transfer` — hand ownership to a new identity.
///
/// Authorized by the current owner; the prior owner loses all authority
/// the moment this returns 200.
async fn transfer_ownership_handler(
    State(state): State<AppState>,
    Json(req): Json<TransferOwnershipRequest>,
) -> Response {
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let ledger = state.ledger.write().await;
    let result = ledger.transfer_ownership(req.signer, req.new_owner);
    drop(ledger);
    timer.observe_duration();

    match result {
        Ok(account) => {
            state.metrics.ownership_transfers_total.inc();
            (StatusCode::OK, Json(OwnerResponse { owner: account.owner })).into_response()
        }
        Err(e) => {
            state.metrics.rejected_operations_total.inc();
            error_response(&e)
        }
    }
}

/// `POST /transfers` — create a transfer record.
///
/// Returns 201 with the derived address and the stored record. A second
/// creation under the same composite key returns 409 and leaves the first
/// record untouched.
async fn add_transfer_handler(
    State(state): State<AppState>,
    Json(req): Json<AddTransferRequest>,
) -> Response {
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let ledger = state.ledger.write().await;
    let result = ledger.add_transfer(req.signer, req.transfer);
    let record_count = ledger.record_count();
    drop(ledger);
    timer.observe_duration();

    match result {
        Ok((address, record)) => {
            state.metrics.transfers_added_total.inc();
            state.metrics.stored_records.set(record_count as i64);
            (StatusCode::CREATED, Json(TransferResponse { address, record })).into_response()
        }
        Err(e) => {
            state.metrics.rejected_operations_total.inc();
            error_response(&e)
        }
    }
}

/// `PUT /transfers/:address` — update a record's mutable fields.
async fn update_transfer_handler(
    Path(address): Path<RecordAddress>,
    State(state): State<AppState>,
    Json(req): Json<UpdateTransferRequest>,
) -> Response {
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let ledger = state.ledger.write().await;
    let result = ledger.update_transfer(req.signer, address, req.update);
    drop(ledger);
    timer.observe_duration();

    match result {
        Ok(record) => {
            state.metrics.transfers_updated_total.inc();
            (StatusCode::OK, Json(TransferResponse { address, record })).into_response()
        }
        Err(e) => {
            state.metrics.rejected_operations_total.inc();
            error_response(&e)
        }
    }
}

/// `GET /transfers/:address` — read a record. No authority required.
async fn get_transfer_handler(
    Path(address): Path<RecordAddress>,
    State(state): State<AppState>,
) -> Response {
    let ledger = state.ledger.read().await;
    let result = ledger.get_transfer(address);
    drop(ledger);

    match result {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(TransferResponse { address, record })).into_response()
        }
        Ok(None) => {
            let err = ErrorResponse {
                error: format!("no record at address {}", address),
            };
            (StatusCode::NOT_FOUND, Json(err)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `POST /transfers/derive` — derive the address for a composite key.
///
/// Pure computation, no state touched: lets clients locate a record
/// before creating or fetching it.
async fn derive_address_handler(Json(req): Json<DeriveAddressRequest>) -> Response {
    match derive_record_address(&req.signature_1, &req.signature_2, &req.signature_3) {
        Ok(address) => (StatusCode::OK, Json(DeriveAddressResponse { address })).into_response(),
        Err(e) => error_response(&e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn alice_hex() -> String {
        hex::encode([0xA1u8; 32])
    }

    fn bob_hex() -> String {
        hex::encode([0xB0u8; 32])
    }

    /// Creates a test AppState backed by a temporary in-memory ledger.
    fn test_app_state() -> AppState {
        let ledger = Ledger::open_temporary().expect("temp ledger");
        AppState {
            version: "0.1.0-test".into(),
            started_at: chrono::Utc::now(),
            ledger: Arc::new(RwLock::new(ledger)),
            metrics: Arc::new(crate::metrics::TrackerMetrics::new()),
        }
    }

    /// JSON body for a record creation signed by `signer`.
    fn add_transfer_body(signer: &str, tag: &str) -> serde_json::Value {
        serde_json::json!({
            "signer": signer,
            "transfer": {
                "signature_1": tag,
                "signature_2": "frag2",
                "signature_3": "frag3",
                "from": hex::encode([3u8; 32]),
                "to": hex::encode([4u8; 32]),
                "amount": "100.23",
                "timestamp": 1_724_000_000i64,
                "wallet_balance": "5000",
                "sol_price": "0.02",
                "token_price": "1.5",
            },
        })
    }

    /// Sends a GET request and returns (status, body_bytes).
    async fn get(router: &Router, path: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        (status, body)
    }

    /// Sends a request with JSON body and returns (status, body_bytes).
    async fn send_json(
        router: &Router,
        method: &str,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        (status, body)
    }

    // -- 1. Health endpoint ---------------------------------------------------

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let router = create_router(test_app_state());
        let (status, body) = get(&router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    // -- 2. Status reflects ledger state --------------------------------------

    #[tokio::test]
    async fn status_reflects_owner_and_record_count() {
        let state = test_app_state();
        let router = create_router(state);

        // Before initialization: no owner, no records.
        let (status, body) = get(&router, "/status").await;
        assert_eq!(status, StatusCode::OK);
        let resp: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert!(resp.owner.is_none());
        assert_eq!(resp.record_count, 0);

        // After claiming ownership and adding a record.
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;
        send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "t1")).await;

        let (_, body) = get(&router, "/status").await;
        let resp: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(resp.owner.map(|o| o.to_hex()), Some(alice_hex()));
        assert_eq!(resp.record_count, 1);
    }

    // -- 3. Owner initialization is first-writer-wins --------------------------

    #[tokio::test]
    async fn owner_initialize_conflicts_on_second_claim() {
        let router = create_router(test_app_state());

        let first = serde_json::json!({ "signer": alice_hex() });
        let (status, body) = send_json(&router, "POST", "/owner/initialize", first).await;
        assert_eq!(status, StatusCode::OK);
        let resp: OwnerResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(resp.owner.to_hex(), alice_hex());

        let second = serde_json::json!({ "signer": bob_hex() });
        let (status, body) = send_json(&router, "POST", "/owner/initialize", second).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(err.error.contains("already initialized"));
    }

    // -- 4. Zero identity rejected at initialization ---------------------------

    #[tokio::test]
    async fn owner_initialize_rejects_zero_identity() {
        let router = create_router(test_app_state());
        let zero = serde_json::json!({ "signer": hex::encode([0u8; 32]) });
        let (status, _) = send_json(&router, "POST", "/owner/initialize", zero).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // -- 5. Transfer creation round-trips --------------------------------------

    #[tokio::test]
    async fn add_transfer_then_read_back() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let (status, body) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "t1")).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: TransferResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.record.signature_1, "t1");

        let (status, body) =
            get(&router, &format!("/transfers/{}", created.address.to_hex())).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: TransferResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.record, created.record);
    }

    // -- 6. Unauthorized creation is 403 ---------------------------------------

    #[tokio::test]
    async fn add_transfer_by_non_owner_is_forbidden() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let (status, _) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&bob_hex(), "t1")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    // -- 7. Duplicate creation is 409 ------------------------------------------

    #[tokio::test]
    async fn duplicate_transfer_is_conflict() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "dup")).await;
        let (status, _) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "dup")).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    // -- 8. Update path ---------------------------------------------------------

    #[tokio::test]
    async fn update_transfer_replaces_mutable_fields() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let (_, body) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "u1")).await;
        let created: TransferResponse = serde_json::from_slice(&body).unwrap();

        let update = serde_json::json!({
            "signer": alice_hex(),
            "update": {
                "token_price": "1.8",
                "sol_price": "0.025",
                "wallet_balance": "4899.77",
            },
        });
        let (status, body) = send_json(
            &router,
            "PUT",
            &format!("/transfers/{}", created.address.to_hex()),
            update,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let updated: TransferResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.record.token_price, "1.8".parse().unwrap());
        assert_eq!(updated.record.amount, created.record.amount);
        assert_eq!(updated.record.timestamp, created.record.timestamp);
    }

    // -- 9. Update of a missing record is 404 -----------------------------------

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let update = serde_json::json!({
            "signer": alice_hex(),
            "update": {
                "token_price": "1.8",
                "sol_price": "0.025",
                "wallet_balance": "4899.77",
            },
        });
        let missing = hex::encode([0xFFu8; 32]);
        let (status, _) =
            send_json(&router, "PUT", &format!("/transfers/{}", missing), update).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // -- 10. Ownership handoff via the API --------------------------------------

    #[tokio::test]
    async fn ownership_transfer_moves_authority() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let handoff = serde_json::json!({ "signer": alice_hex(), "new_owner": bob_hex() });
        let (status, body) = send_json(&router, "POST", "/owner/transfer", handoff).await;
        assert_eq!(status, StatusCode::OK);
        let resp: OwnerResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(resp.owner.to_hex(), bob_hex());

        // The prior owner is now rejected.
        let (status, _) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "t")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // The successor can write.
        let (status, _) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&bob_hex(), "t")).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // -- 11. Address derivation matches record placement -------------------------

    #[tokio::test]
    async fn derive_endpoint_matches_stored_address() {
        let router = create_router(test_app_state());
        let init = serde_json::json!({ "signer": alice_hex() });
        send_json(&router, "POST", "/owner/initialize", init).await;

        let (_, body) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "d1")).await;
        let created: TransferResponse = serde_json::from_slice(&body).unwrap();

        let derive = serde_json::json!({
            "signature_1": "d1",
            "signature_2": "frag2",
            "signature_3": "frag3",
        });
        let (status, body) = send_json(&router, "POST", "/transfers/derive", derive).await;
        assert_eq!(status, StatusCode::OK);
        let resp: DeriveAddressResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(resp.address, created.address);
    }

    // -- 12. Oversized key part rejected with 400 --------------------------------

    #[tokio::test]
    async fn derive_rejects_oversized_part() {
        let router = create_router(test_app_state());
        let derive = serde_json::json!({
            "signature_1": "x".repeat(64),
            "signature_2": "b",
            "signature_3": "c",
        });
        let (status, body) = send_json(&router, "POST", "/transfers/derive", derive).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(err.error.contains("part 1"));
    }

    // -- 13. Missing record read is 404 ------------------------------------------

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let router = create_router(test_app_state());
        let missing = hex::encode([0xABu8; 32]);
        let (status, _) = get(&router, &format!("/transfers/{}", missing)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // -- 14. Reads work without ownership -----------------------------------------

    #[tokio::test]
    async fn reads_require_no_ownership() {
        // Uninitialized ledger: reads respond normally, writes 403.
        let router = create_router(test_app_state());

        let missing = hex::encode([0x01u8; 32]);
        let (status, _) = get(&router, &format!("/transfers/{}", missing)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send_json(&router, "POST", "/transfers", add_transfer_body(&alice_hex(), "t")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
