use tracing::{debug, warn};

use crate::api::authenticator_responses::{
    AuthenticatorAssertionResponseJSON, AuthenticatorAttestationResponseJSON,
    AuthenticatorResponse, AuthenticatorResponseJSON,
};
use crate::api::public_key_credential::{PublicKeyCredential, PublicKeyCredentialJSON};
use crate::codec::encode_base64url;
use crate::error::{CodecError, CodecErrorType};

impl From<&AuthenticatorResponse> for AuthenticatorResponseJSON {
    fn from(response: &AuthenticatorResponse) -> AuthenticatorResponseJSON {
        match response {
            AuthenticatorResponse::AuthenticatorAttestationResponse(response) => {
                AuthenticatorResponseJSON::AuthenticatorAttestationResponse(
                    AuthenticatorAttestationResponseJSON {
                        client_data_json: encode_base64url(&response.client_data_json),
                        authenticator_data: encode_base64url(&response.authenticator_data),
                        attestation_object: encode_base64url(&response.attestation_object),
                    },
                )
            }
            AuthenticatorResponse::AuthenticatorAssertionResponse(response) => {
                AuthenticatorResponseJSON::AuthenticatorAssertionResponse(
                    AuthenticatorAssertionResponseJSON {
                        client_data_json: encode_base64url(&response.client_data_json),
                        authenticator_data: encode_base64url(&response.authenticator_data),
                        signature: encode_base64url(&response.signature),
                        user_handle: response.user_handle.as_ref().map(encode_base64url),
                    },
                )
            }
        }
    }
}

impl From<&PublicKeyCredential> for PublicKeyCredentialJSON {
    fn from(credential: &PublicKeyCredential) -> PublicKeyCredentialJSON {
        PublicKeyCredentialJSON {
            id: credential.id.to_owned(),
            r#type: credential.r#type,
            raw_id: encode_base64url(&credential.raw_id),
            client_extension_results: credential.client_extension_results.to_owned(),
            response: AuthenticatorResponseJSON::from(&credential.response),
        }
    }
}

/// Flattens a credential into the JSON text a relying party expects.
pub fn serialize_credential_response(credential: &PublicKeyCredential) -> Result<String, CodecError> {
    let credential_json = PublicKeyCredentialJSON::from(credential);

    match serde_json::to_string(&credential_json) {
        Ok(json) => {
            debug!(
                registration = matches!(
                    credential.response,
                    AuthenticatorResponse::AuthenticatorAttestationResponse(_)
                ),
                length = json.len(),
                "serialized credential response",
            );

            Ok(json)
        }
        Err(error) => {
            warn!(
                category = ?error.classify(),
                "credential response serialization error",
            );

            Err(CodecError {
                error: CodecErrorType::SerializationError,
            })
        }
    }
}
