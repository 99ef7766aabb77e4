//! Address Book - a personal contact directory.
//!
//! Stores named contacts with validated phone numbers and an optional
//! birthday, supports partial name/phone search and paginated listing, and
//! persists the whole book to a single file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the name-keyed `AddressBook`
//! - **persistence**: Save/load gateway (`BookStore`, `JsonFileStore`)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive text session over the core types

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod persistence;

pub use cli::{ConsoleUi, Session, UserInterface};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, PersistenceError, RecordError};
pub use models::{AddressBook, Pages, Record};
pub use persistence::{BookStore, JsonFileStore};
