//! Utility modules shared across the crate.
//!
//! - [`datetime`] - Clock access and date formatting for record timestamps
//! - [`text`] - Slug generation and video link normalization

pub mod datetime;
pub mod text;
