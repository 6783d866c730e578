pub mod notification;
pub mod post;
pub mod profile;
pub mod user;
