//! Session management: the single authenticated identity and its durable
//! persistence.
//!
//! The store starts `Uninitialized`, resolves to `Anonymous` or
//! `Authenticated` once storage has been read, and stays live for the
//! process lifetime. Only a fully resolved successful request may mutate it;
//! cancelled or timed-out requests never do.

pub mod store;

pub use store::{SessionState, SessionStore};
