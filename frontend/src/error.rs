use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Proxy answered {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Could not read spellbook: {0}")]
    Read(#[from] std::io::Error),
}

/// Blocking messages shown to the user, wording kept from the web pages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    #[error("Oops! The magic scroll failed. Try again later.")]
    CastFailed,

    #[error("Please select a YAML file.")]
    NoFileSelected,

    #[error("Invalid YAML structure. Ensure it contains a 'spells' array with 'name' and 'spell' fields.")]
    InvalidStructure,

    #[error("Failed to upload YAML file. Ensure the file is valid.")]
    UploadFailed,
}
