//! Framework-free domain logic for the petchat service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on the types and rules defined here.

pub mod adv_chat;
pub mod error;
pub mod pagination;
pub mod pets;
pub mod roles;
pub mod types;
