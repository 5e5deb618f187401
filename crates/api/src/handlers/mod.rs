//! HTTP handlers, one module per resource.

pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod founders;
pub mod status_updates;
pub mod talent_search;
