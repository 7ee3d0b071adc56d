//! Conversions between the binary structures of the WebAuthn API and the
//! base64url JSON exchanged with a relying party.
//!
//! Server issued options are normalized into binary options before they reach
//! an authenticator, and the authenticator's credential is serialized back into
//! JSON text with every binary member base64url encoded.

pub mod api;
pub mod client;
pub mod codec;
pub mod error;
pub mod relying_party;
pub mod security;

#[cfg(test)]
mod test_support;

pub use client::request_normalizer::{
    normalize_credential_request, normalize_credential_request_with, Normalize,
};
pub use client::response_serializer::serialize_credential_response;
pub use codec::{decode_base64url, encode_base64url, Base64UrlDecoder, Padding};
pub use error::{CodecError, CodecErrorType};
pub use relying_party::options_encoder::encode_credential_options;
pub use relying_party::response_parser::{
    parse_credential_response, parse_credential_response_with,
};
