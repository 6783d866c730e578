use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("User synchronization failed")]
    UserSyncFailed,

    #[error("You cannot follow yourself")]
    SelfFollow,

    #[error("Post not found")]
    PostNotFound,

    #[error("Post must have content or an image")]
    EmptyPost,

    #[error("Comment must not be empty")]
    EmptyComment,

    #[error("Access denied")]
    AccessDenied,

    #[error("Invalid notification type: {0}")]
    InvalidNotificationType(String),

    #[error("Identity provider error: {0}")]
    IdentityProviderError(String),
}

pub type AppResult<T> = Result<T, AppError>;
