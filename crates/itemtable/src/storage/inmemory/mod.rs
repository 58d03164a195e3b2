//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `ItemRepository` that
//! keeps every item in a map wrapped in `Arc<RwLock<_>>`. Data is lost when
//! the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
