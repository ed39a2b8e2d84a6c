//! Commercial dashboard common types
//!
//! Shared types used by both the dashboard service and the connectivity probe.

pub mod firebase;
pub mod firestore;
pub mod month;
pub mod theme;
pub mod user;

pub use firebase::{FirebaseConfig, MissingEnvVar};
pub use firestore::{Document, DocumentPage};
pub use month::{ParseYearMonthError, YearMonth};
pub use theme::Theme;
pub use user::{ProfileDocument, User};
