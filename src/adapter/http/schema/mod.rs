pub mod id;
pub mod notification;
pub mod post;
pub mod profile;
pub mod user;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub message: String,
}
