//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod adv_character_repo;
pub mod adv_scenario_repo;
pub mod bot_repo;
pub mod cat_repo;
pub mod chat_session_repo;
pub mod choice_repo;
pub mod dialogue_line_repo;
pub mod dog_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use adv_character_repo::AdvCharacterRepo;
pub use adv_scenario_repo::AdvScenarioRepo;
pub use bot_repo::ChatBotRepo;
pub use cat_repo::CatRepo;
pub use chat_session_repo::ChatSessionRepo;
pub use choice_repo::ChoiceRepo;
pub use dialogue_line_repo::DialogueLineRepo;
pub use dog_repo::DogRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
