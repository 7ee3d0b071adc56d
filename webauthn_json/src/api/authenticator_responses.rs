use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::codec::Base64UrlString;
use crate::security::user_handle::UserHandle;

pub type ClientDataJSON = Vec<u8>;
pub type AuthenticatorData = Vec<u8>;
pub type AttestationObject = Vec<u8>;
pub type Signature = Vec<u8>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthenticatorResponse {
    AuthenticatorAttestationResponse(AuthenticatorAttestationResponse),
    AuthenticatorAssertionResponse(AuthenticatorAssertionResponse),
}

impl AuthenticatorResponse {
    pub fn client_data_json(&self) -> &[u8] {
        match self {
            AuthenticatorResponse::AuthenticatorAttestationResponse(response) => {
                &response.client_data_json
            }
            AuthenticatorResponse::AuthenticatorAssertionResponse(response) => {
                &response.client_data_json
            }
        }
    }

    pub fn authenticator_data(&self) -> &[u8] {
        match self {
            AuthenticatorResponse::AuthenticatorAttestationResponse(response) => {
                &response.authenticator_data
            }
            AuthenticatorResponse::AuthenticatorAssertionResponse(response) => {
                &response.authenticator_data
            }
        }
    }
}

/// Returned by `navigator.credentials.create()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthenticatorAttestationResponse {
    pub client_data_json: ClientDataJSON,
    pub authenticator_data: AuthenticatorData,
    pub attestation_object: AttestationObject,
}

/// Returned by `navigator.credentials.get()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthenticatorAssertionResponse {
    pub client_data_json: ClientDataJSON,
    pub authenticator_data: AuthenticatorData,
    pub signature: Signature,
    pub user_handle: Option<UserHandle>,
}

/// Read as an attestation when `attestationObject` is present and as an
/// assertion when `signature` is present. A response carrying both, or
/// neither, is rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuthenticatorResponseJSON {
    AuthenticatorAttestationResponse(AuthenticatorAttestationResponseJSON),
    AuthenticatorAssertionResponse(AuthenticatorAssertionResponseJSON),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomingResponseJSON {
    #[serde(rename = "clientDataJSON")]
    client_data_json: Base64UrlString,
    authenticator_data: Base64UrlString,
    attestation_object: Option<Base64UrlString>,
    signature: Option<Base64UrlString>,
    user_handle: Option<Base64UrlString>,
}

impl<'de> Deserialize<'de> for AuthenticatorResponseJSON {
    fn deserialize<D>(deserializer: D) -> Result<AuthenticatorResponseJSON, D::Error>
    where
        D: Deserializer<'de>,
    {
        let response = IncomingResponseJSON::deserialize(deserializer)?;

        match (response.attestation_object, response.signature) {
            (Some(attestation_object), None) => Ok(
                AuthenticatorResponseJSON::AuthenticatorAttestationResponse(
                    AuthenticatorAttestationResponseJSON {
                        client_data_json: response.client_data_json,
                        authenticator_data: response.authenticator_data,
                        attestation_object,
                    },
                ),
            ),
            (None, Some(signature)) => Ok(
                AuthenticatorResponseJSON::AuthenticatorAssertionResponse(
                    AuthenticatorAssertionResponseJSON {
                        client_data_json: response.client_data_json,
                        authenticator_data: response.authenticator_data,
                        signature,
                        user_handle: response.user_handle,
                    },
                ),
            ),
            (Some(_), Some(_)) => Err(de::Error::custom(
                "response has both attestationObject and signature",
            )),
            (None, None) => Err(de::Error::custom(
                "response has neither attestationObject nor signature",
            )),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAttestationResponseJSON {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: Base64UrlString,
    pub authenticator_data: Base64UrlString,
    pub attestation_object: Base64UrlString,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAssertionResponseJSON {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: Base64UrlString,
    pub authenticator_data: Base64UrlString,
    pub signature: Base64UrlString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<Base64UrlString>,
}
