//! Authentication adapters. Only the mock exists; no real backend yet.

mod mock;

pub use mock::MockAuthService;
