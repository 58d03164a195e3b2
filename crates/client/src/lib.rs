//! itemtable_client - CLI client for the itemtable API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ItemtableClient;
pub use error::{ClientError, Result};
