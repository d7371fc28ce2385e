use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not read {field} from {input:?}")]
    Parse { field: String, input: String },

    #[error("No product ids left to allocate")]
    IdSpaceExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockError {
    /// True for errors caused by what the user typed, as opposed to the
    /// environment failing underneath us.
    pub fn is_input_error(&self) -> bool {
        matches!(self, StockError::InvalidArgument(_) | StockError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
