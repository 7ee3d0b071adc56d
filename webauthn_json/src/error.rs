use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
#[error("{error}")]
pub struct CodecError {
    pub error: CodecErrorType,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum CodecErrorType {
    /// Text is not valid base64 once `-` and `_` are mapped back to `+` and `/`.
    #[error("DecodeError")]
    DecodeError,
    #[error("SerializationError")]
    SerializationError,
    #[error("DeserializationError")]
    DeserializationError,
}
