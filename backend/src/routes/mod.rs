//! HTTP routes for the shell, the commercial page and the session.

pub mod auth;
pub mod commercial;
pub mod dashboard;
pub mod health;
pub mod theme;
