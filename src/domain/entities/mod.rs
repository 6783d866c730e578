pub mod comment;
pub mod follow;
pub mod id;
pub mod like;
pub mod notification;
pub mod post;
pub mod profile;
pub mod user;
