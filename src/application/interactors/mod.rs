pub mod notifications;
pub mod posts;
pub mod profile;
pub mod users;
