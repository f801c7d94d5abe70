//! Data models for the employee CRUD application.
//!
//! Field names serialize in camelCase to match the frontend's form and table bindings.

mod department;
mod employee;
mod page;

pub use department::*;
pub use employee::*;
pub use page::*;
