//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (nosniff, frame and referrer policy)
//!     → Send to client
//! ```
//!
//! Request body size limits live in the server's layer stack.

pub mod headers;
