//! Data models for the Human API service.
//!
//! - `Identity`, `Availability`: the authenticated user record
//! - `MatchCandidate`, `SkillLevel`, `MatchTier`: one entry of a matching
//!   result, produced transiently by a matching request and never persisted

pub mod identity;
pub mod matching;

pub use identity::{Availability, Identity};
pub use matching::{MatchCandidate, MatchTier, SkillLevel};
