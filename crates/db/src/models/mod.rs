//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod adv_character;
pub mod adv_dialogue;
pub mod adv_scenario;
pub mod adv_session;
pub mod bot;
pub mod cat;
pub mod dog;
pub mod role;
pub mod session;
pub mod user;
