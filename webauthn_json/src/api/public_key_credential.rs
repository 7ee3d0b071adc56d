use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::api::assertion_generation_options::{
    PublicKeyCredentialRequestOptions, PublicKeyCredentialRequestOptionsJSON,
};
use crate::api::authenticator_responses::{AuthenticatorResponse, AuthenticatorResponseJSON};
use crate::api::credential_creation_options::{
    PublicKeyCredentialCreationOptions, PublicKeyCredentialCreationOptionsJSON,
};
use crate::api::extensions_inputs_and_outputs::AuthenticationExtensionsClientOutputs;
use crate::api::supporting_data_structures::PublicKeyCredentialType;
use crate::codec::Base64UrlString;
use crate::error::{CodecError, CodecErrorType};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub response: AuthenticatorResponse,
    pub r#type: PublicKeyCredentialType,
    pub client_extension_results: AuthenticationExtensionsClientOutputs,
}

/// `RegistrationResponseJSON` / `AuthenticationResponseJSON`, depending on the response.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialJSON {
    pub id: String,
    pub r#type: PublicKeyCredentialType,
    pub raw_id: Base64UrlString,
    #[serde(default)]
    pub client_extension_results: AuthenticationExtensionsClientOutputs,
    pub response: AuthenticatorResponseJSON,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialCreationOptions {
    pub public_key: PublicKeyCredentialCreationOptions,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCreationOptionsJSON {
    pub public_key: PublicKeyCredentialCreationOptionsJSON,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialRequestOptions {
    pub public_key: PublicKeyCredentialRequestOptions,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequestOptionsJSON {
    pub public_key: PublicKeyCredentialRequestOptionsJSON,
}

/// Options for either ceremony, ready for an authenticator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CredentialOptions {
    Creation(CredentialCreationOptions),
    Request(CredentialRequestOptions),
}

/// Options for either ceremony as sent by the relying party.
///
/// A `publicKey` member carrying `rp`, `user` or `pubKeyCredParams` is read as
/// creation options and nothing else; any other document is read as request
/// options.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CredentialOptionsJSON {
    Creation(CredentialCreationOptionsJSON),
    Request(CredentialRequestOptionsJSON),
}

const CREATION_MEMBERS: [&str; 3] = ["rp", "user", "pubKeyCredParams"];

impl<'de> Deserialize<'de> for CredentialOptionsJSON {
    fn deserialize<D>(deserializer: D) -> Result<CredentialOptionsJSON, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let creation = value.get("publicKey").map_or(false, |public_key| {
            CREATION_MEMBERS
                .iter()
                .any(|member| public_key.get(*member).is_some())
        });

        if creation {
            serde_json::from_value(value)
                .map(CredentialOptionsJSON::Creation)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(CredentialOptionsJSON::Request)
                .map_err(de::Error::custom)
        }
    }
}

impl CredentialOptionsJSON {
    pub fn from_json(json: &str) -> Result<CredentialOptionsJSON, CodecError> {
        match serde_json::from_str(json) {
            Ok(options) => Ok(options),
            Err(error) => {
                warn!(
                    category = ?error.classify(),
                    line = error.line(),
                    column = error.column(),
                    "credential options deserialization error",
                );

                Err(CodecError {
                    error: CodecErrorType::DeserializationError,
                })
            }
        }
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        match serde_json::to_string(self) {
            Ok(json) => Ok(json),
            Err(error) => {
                warn!(
                    category = ?error.classify(),
                    "credential options serialization error",
                );

                Err(CodecError {
                    error: CodecErrorType::SerializationError,
                })
            }
        }
    }

    pub fn challenge(&self) -> &str {
        match self {
            CredentialOptionsJSON::Creation(options) => &options.public_key.challenge,
            CredentialOptionsJSON::Request(options) => &options.public_key.challenge,
        }
    }
}
