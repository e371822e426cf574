use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrsaError>;

#[derive(Error, Debug, Clone)]
pub enum DrsaError {
    #[error("model configuration is inconsistent: {message}")]
    Configuration { message: String },

    #[error("input tensor shape doesn't match: {message}")]
    Shape { message: String },

    #[error("categorical value outside embedding vocabulary: {message}")]
    Index { message: String },
}

impl DrsaError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }
}
