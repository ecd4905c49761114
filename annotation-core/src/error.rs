use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("No item result at index {index}")]
    ItemNotFound { index: usize },

    #[error("Item result {index} has no term results")]
    NoTermResults { index: usize },

    #[error("Invalid search result document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

impl AnnotationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } | Self::NoTermResults { .. } => {
                "ClarifyAnnotations: Unable to locate search results."
            }
            Self::InvalidDocument(_) => "ClarifyAnnotations: Search results could not be read.",
        }
    }
}
