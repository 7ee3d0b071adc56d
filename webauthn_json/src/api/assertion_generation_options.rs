use serde::{Deserialize, Serialize};

use crate::api::extensions_inputs_and_outputs::AuthenticationExtensionsClientInputs;
use crate::api::supporting_data_structures::{
    PublicKeyCredentialDescriptor, PublicKeyCredentialDescriptorJSON, UserVerificationRequirement,
};
use crate::api::DEFAULT_TIMEOUT;
use crate::codec::Base64UrlString;
use crate::security::challenge::generate_challenge;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredentialRequestOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u64>,
    pub rp_id: Option<String>,
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub user_verification: Option<UserVerificationRequirement>,
    pub extensions: Option<AuthenticationExtensionsClientInputs>,
}

impl PublicKeyCredentialRequestOptions {
    pub fn generate(rp_id: Option<&str>) -> PublicKeyCredentialRequestOptions {
        let challenge = generate_challenge().to_vec();

        PublicKeyCredentialRequestOptions {
            challenge,
            timeout: Some(DEFAULT_TIMEOUT),
            rp_id: rp_id.map(str::to_string),
            allow_credentials: Some(Vec::with_capacity(5)),
            user_verification: Some(UserVerificationRequirement::Preferred),
            extensions: None,
        }
    }
}

/// Wire form of [`PublicKeyCredentialRequestOptions`], binary members as base64url.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptionsJSON {
    pub challenge: Base64UrlString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptorJSON>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<AuthenticationExtensionsClientInputs>,
}
