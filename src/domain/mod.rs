pub mod article;
pub mod author;
pub mod errors;
pub mod language;
pub mod section;
pub mod translation;
pub mod user;
pub mod widget;
