//! Record store for bookmark records on top of the `models` entities.
//! - Single-statement CRUD; each operation touches one row or is a pure read.
//! - Validation lives in the HTTP layer; this crate only reports what the
//!   backing table did.

pub mod bookmark;
pub mod db;
pub mod errors;
#[cfg(test)]
pub mod test_support;
