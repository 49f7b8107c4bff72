//! Networking modules for the learning-assistant REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the typed HTTP client and its errors, `types` defines the
//! response envelopes every endpoint shares.

pub mod api;
pub mod types;
