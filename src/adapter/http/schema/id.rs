use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf13")]
    pub id: String,
}
