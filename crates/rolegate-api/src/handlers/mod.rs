//! HTTP handlers grouped by access level.

pub mod admin;
pub mod auth;
pub mod health;
pub mod moderation;
