//! Configuration layer of the Maya documentation site.
//!
//! The records live in `maya_site_config`, the content store checks in
//! `maya_site_core`. This crate adds the host-facing export.

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::export::*;

pub mod error;

mod export;
