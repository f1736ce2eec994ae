//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom::NewTabOpener`] - Opens file resources in a new tab
//! - [`dom::reload`] - Page reload for the error fallback

pub mod dom;
