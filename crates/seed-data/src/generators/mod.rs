//! Row value generators for seed data.
//!
//! One generator per target table shape:
//! - [`PersonGenerator`]: fake name/email pairs for `users`
//! - [`AccountGenerator`]: fake owner/contact pairs for `accounts`
//!
//! Generators are stateless across calls and make no uniqueness guarantee;
//! see the module docs on each generator.

pub mod account;
pub mod person;

pub use account::{AccountGenerator, GeneratedAccount};
pub use person::{GeneratedPerson, PersonGenConfig, PersonGenerator};
