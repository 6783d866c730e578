pub mod clerk;
pub mod local;
pub mod token;
