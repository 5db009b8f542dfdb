//! Showcase Store - content storage for a performer showcase site
//!
//! This library keeps the site's editable content (acts, reviews, news,
//! gallery, contact requests and more) behind one repository contract with
//! two interchangeable backends: process-local memory and SQLite via SeaORM.
//!
//! # Modules
//!
//! * [`backend`] - Repository contract, storage errors and both backends
//! * [`content`] - Content kinds and the record trait the backends are generic over
//! * [`entities`] - SeaORM models, one per content table
//! * [`defaults`] - Fallback values applied on create
//! * [`visibility`] - Public filtering, sorting and category views
//! * [`ordering`] - Move up/down and active toggles
//! * [`validation`] - Request body schemas for the validated operations
//! * [`api`] - Maps requests to repository calls and status codes
//! * [`config`] - Application configuration management
//! * [`utils`] - Utility functions and helpers

/// Request dispatch and status mapping
pub mod api;

/// Storage abstraction layer with memory and database backends
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Content kinds and the shared record trait
pub mod content;

/// Default-injection rules for newly created records
pub mod defaults;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Manual ordering and activation of records
pub mod ordering;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Request body validation
pub mod validation;

/// Public visibility rules
pub mod visibility;

pub use backend::{ContentStore, DatabaseStore, MemoryStore, Repository, StoreError, StoreResult};
pub use content::{ContentKind, Record};
