//! Database entity models and DTOs.
//!
//! Companies and employee profiles are only ever read as scalar/projection
//! shapes, so they have no full-row model here.

pub mod founder_profile;
pub mod status_update;
pub mod user;

pub use founder_profile::{
    Education, Experience, FounderProfile, ProfileDisplay, TalentSearchHit,
};
pub use status_update::{EnrichedStatusUpdate, Role, StatusUpdate};
pub use user::{Session, User, UserInfo};
