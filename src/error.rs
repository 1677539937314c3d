use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackwiseError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Gemini API key is not set. Run `packwise config --set-api-key YOUR_KEY` or export GEMINI_API_KEY")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Trip description is empty")]
    EmptyTrip,

    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("Failed to parse API response: {0}")]
    ApiParse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("CLI execution failed: {0}")]
    CliExecution(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<packwise_common::Error> for PackwiseError {
    fn from(err: packwise_common::Error) -> Self {
        match err {
            packwise_common::Error::Io(e) => PackwiseError::Io(e),
            packwise_common::Error::Json(e) => PackwiseError::JsonParse(e),
            packwise_common::Error::Parse(msg) => PackwiseError::ApiParse(msg),
            packwise_common::Error::Export(msg) => PackwiseError::Export(msg),
        }
    }
}

impl From<dialoguer::Error> for PackwiseError {
    fn from(err: dialoguer::Error) -> Self {
        PackwiseError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PackwiseError>;
