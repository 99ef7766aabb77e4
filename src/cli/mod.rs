//! Interactive text front end.
//!
//! A thin loop that collects raw strings from the user, hands them to the
//! core types and prints the results. Nothing here holds business rules.

pub mod session;
pub mod ui;

pub use session::{Command, Session};
pub use ui::{ConsoleUi, UserInterface};
