//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod advisor;
pub mod dashboard;
pub mod goals;
pub mod investing;
pub mod notifications;
pub mod profile;
pub mod session;
pub mod spending;
pub mod subscriptions;

// Re-export all handlers for use in router
pub use advisor::*;
pub use dashboard::*;
pub use goals::*;
pub use investing::*;
pub use notifications::*;
pub use profile::*;
pub use session::*;
pub use spending::*;
pub use subscriptions::*;
