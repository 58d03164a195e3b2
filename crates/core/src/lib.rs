//! Pure domain logic for the itemtable handlers.
//!
//! Nothing in this crate performs I/O. Storage access is expressed through the
//! [`storage::ItemRepository`] trait and implemented by the server crate.

pub mod items;
pub mod storage;
