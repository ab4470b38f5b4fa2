//! marksheet-core — Record store, validated input, and command handlers.
//!
//! This crate holds everything the `marksheet` binary does except binding
//! to the real terminal: the data model, the in-memory store, the prompting
//! reader, the table renderer, and the menu-driven session.

pub mod config;
pub mod error;
pub mod input;
pub mod lookup;
pub mod menu;
pub mod model;
pub mod render;
pub mod session;
pub mod store;

pub use config::{load_config_from, MarksheetConfig};
pub use error::{InputError, StoreError};
pub use session::{Session, SessionEnd};
pub use store::RecordStore;
