//! Client-side session and request layer for the Human API matching service.
//!
//! This crate provides the two components an interactive front end needs to
//! talk to the Human API service:
//!
//! - [`ApiClient`]: typed register/login/profile/matching requests with a
//!   bounded deadline and a closed error taxonomy ([`ApiError`])
//! - [`SessionStore`]: the single authenticated identity, persisted across
//!   restarts, with an explicit `Uninitialized`/`Anonymous`/`Authenticated`
//!   lifecycle
//!
//! Rendering, routing, and form validation beyond the request layer's own
//! preconditions are left to the embedding application.

pub mod api;
pub mod config;
pub mod models;
pub mod session;

pub use api::{ActionSlot, ApiClient, ApiError, PendingRequest};
pub use config::Config;
pub use models::{Availability, Identity, MatchCandidate, MatchTier, SkillLevel};
pub use session::{SessionState, SessionStore};
