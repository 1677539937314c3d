//! Checklist export cores shared by the CLI wrappers.

pub mod markdown;

#[cfg(feature = "excel")]
pub mod excel_core;
