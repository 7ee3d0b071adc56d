use tracing::{debug, warn};

use crate::api::authenticator_responses::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, AuthenticatorResponse,
    AuthenticatorResponseJSON,
};
use crate::api::public_key_credential::{PublicKeyCredential, PublicKeyCredentialJSON};
use crate::client::request_normalizer::Normalize;
use crate::codec::Base64UrlDecoder;
use crate::error::{CodecError, CodecErrorType};

impl Normalize for AuthenticatorResponseJSON {
    type Normalized = AuthenticatorResponse;

    fn normalize_with(&self, decoder: &Base64UrlDecoder) -> Result<AuthenticatorResponse, CodecError> {
        match self {
            AuthenticatorResponseJSON::AuthenticatorAttestationResponse(response) => {
                Ok(AuthenticatorResponse::AuthenticatorAttestationResponse(
                    AuthenticatorAttestationResponse {
                        client_data_json: decoder.decode(&response.client_data_json)?,
                        authenticator_data: decoder.decode(&response.authenticator_data)?,
                        attestation_object: decoder.decode(&response.attestation_object)?,
                    },
                ))
            }
            AuthenticatorResponseJSON::AuthenticatorAssertionResponse(response) => {
                let user_handle = match &response.user_handle {
                    Some(user_handle) => Some(decoder.decode(user_handle)?),
                    None => None,
                };

                Ok(AuthenticatorResponse::AuthenticatorAssertionResponse(
                    AuthenticatorAssertionResponse {
                        client_data_json: decoder.decode(&response.client_data_json)?,
                        authenticator_data: decoder.decode(&response.authenticator_data)?,
                        signature: decoder.decode(&response.signature)?,
                        user_handle,
                    },
                ))
            }
        }
    }
}

impl Normalize for PublicKeyCredentialJSON {
    type Normalized = PublicKeyCredential;

    fn normalize_with(&self, decoder: &Base64UrlDecoder) -> Result<PublicKeyCredential, CodecError> {
        Ok(PublicKeyCredential {
            id: self.id.to_owned(),
            raw_id: decoder.decode(&self.raw_id)?,
            response: self.response.normalize_with(decoder)?,
            r#type: self.r#type,
            client_extension_results: self.client_extension_results.to_owned(),
        })
    }
}

pub fn parse_credential_response(json: &str) -> Result<PublicKeyCredential, CodecError> {
    parse_credential_response_with(json, &Base64UrlDecoder::default())
}

pub fn parse_credential_response_with(
    json: &str,
    decoder: &Base64UrlDecoder,
) -> Result<PublicKeyCredential, CodecError> {
    let credential_json: PublicKeyCredentialJSON = match serde_json::from_str(json) {
        Ok(credential_json) => credential_json,
        Err(error) => {
            warn!(
                category = ?error.classify(),
                line = error.line(),
                column = error.column(),
                "credential response deserialization error",
            );

            return Err(CodecError {
                error: CodecErrorType::DeserializationError,
            });
        }
    };

    let credential = credential_json.normalize_with(decoder)?;

    debug!(
        registration = matches!(
            credential.response,
            AuthenticatorResponse::AuthenticatorAttestationResponse(_)
        ),
        raw_id_length = credential.raw_id.len(),
        "parsed credential response",
    );

    Ok(credential)
}
