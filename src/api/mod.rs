//! API Layer
//!
//! HTTP client and the wire types shared by every view.

pub mod client;
pub mod types;

pub use client::*;
