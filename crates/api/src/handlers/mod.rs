pub mod adv_chat;
pub mod auth;
pub mod bot;
pub mod cat;
pub mod cat_image;
pub mod dog;
pub mod hello;
pub mod search;
