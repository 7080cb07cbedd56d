//! Request client for the Human API service.
//!
//! This module provides the `ApiClient` for issuing typed auth and matching
//! requests, the closed `ApiError` taxonomy every failure is normalized to,
//! and the `PendingRequest`/`ActionSlot` pair that enforces per-action
//! request lifecycle guarantees (deadline, cancellation, at most one in
//! flight).

pub mod client;
pub mod error;
pub mod pending;

pub use client::{ApiClient, ProfileUpdate, RegisterRequest};
pub use error::ApiError;
pub use pending::{ActionSlot, PendingRequest, REQUEST_DEADLINE};
