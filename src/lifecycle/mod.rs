//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load snapshot → fresh? publish
//!                  → missing / stale / corrupt → build → compile → store → publish
//!
//! Reload (reload.rs):
//!     Clear cache → rebuild → swap the published tree atomically
//! ```
//!
//! # Design Decisions
//! - Fail fast: tree errors at startup are fatal
//! - A snapshot compiled with different settings is never served
//! - Readers hold an `Arc` to the tree they started with; swaps never block them

pub mod reload;
pub mod startup;

pub use reload::TreeHandle;
pub use startup::{boot, build, StartupError};
