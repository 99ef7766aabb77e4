//! Field value types.
//!
//! Validated scalar wrappers for the three kinds of contact data. Each type
//! checks its format when constructed (and when reassigned, where that is
//! allowed), so an invalid value is never representable inside a `Record`.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
