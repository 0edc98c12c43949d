//! # Pressroom Admin
//!
//! Application services behind the admin surfaces: the post editor, the
//! manage-posts listing, editor-account management, and subscriber
//! notifications. Validation lives here - the post store deliberately
//! performs none.

pub mod accounts;
pub mod config;
pub mod context;
pub mod error;
pub mod posts;
pub mod telemetry;
pub mod workspace;

pub use config::AdminConfig;
pub use context::AdminContext;
pub use error::{AdminError, AdminResult};
