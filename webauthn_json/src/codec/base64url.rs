use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use tracing::warn;

use crate::error::{CodecError, CodecErrorType};

pub type Base64UrlString = String;

/// How the decoder treats trailing `=` characters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Padding {
    /// Padded and unpadded text are both accepted.
    #[default]
    Indifferent,
    /// Text must be padded to a multiple of four characters.
    Required,
    /// Any `=` is rejected.
    Forbidden,
}

const INDIFFERENT: GeneralPurpose = standard_engine(DecodePaddingMode::Indifferent);
const REQUIRED: GeneralPurpose = standard_engine(DecodePaddingMode::RequireCanonical);
const FORBIDDEN: GeneralPurpose = standard_engine(DecodePaddingMode::RequireNone);

const fn standard_engine(padding_mode: DecodePaddingMode) -> GeneralPurpose {
    GeneralPurpose::new(
        &alphabet::STANDARD,
        GeneralPurposeConfig::new().with_decode_padding_mode(padding_mode),
    )
}

/// Base64url decoder with an explicit padding policy.
///
/// The URL-safe characters are mapped back onto the standard alphabet before
/// decoding, so text mixing `-`/`_` with `+`/`/` is accepted. Whitespace and
/// non-zero trailing bits are rejected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Base64UrlDecoder {
    padding: Padding,
}

impl Base64UrlDecoder {
    pub const fn new(padding: Padding) -> Base64UrlDecoder {
        Base64UrlDecoder { padding }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn decode(&self, base64url: &str) -> Result<Vec<u8>, CodecError> {
        let base64 = base64url.replace('-', "+").replace('_', "/");
        let engine = match self.padding {
            Padding::Indifferent => &INDIFFERENT,
            Padding::Required => &REQUIRED,
            Padding::Forbidden => &FORBIDDEN,
        };

        match engine.decode(base64) {
            Ok(buffer) => Ok(buffer),
            Err(_) => {
                warn!(
                    padding = ?self.padding,
                    length = base64url.len(),
                    "base64url decoding error",
                );

                Err(CodecError {
                    error: CodecErrorType::DecodeError,
                })
            }
        }
    }
}

pub fn decode_base64url(base64url: &str) -> Result<Vec<u8>, CodecError> {
    Base64UrlDecoder::default().decode(base64url)
}

pub fn encode_base64url(buffer: impl AsRef<[u8]>) -> Base64UrlString {
    URL_SAFE_NO_PAD.encode(buffer)
}
