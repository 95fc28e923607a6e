//! Interop helpers for external sparse formats

pub mod formats;

pub use formats::{from_sprs, to_sprs};
