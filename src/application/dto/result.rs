/// Outcome of an action whose failures are reported instead of raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResultDTO {
    pub success: bool,
    pub message: Option<String>,
}

impl ActionResultDTO {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
        }
    }
}
