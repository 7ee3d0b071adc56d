use serde::{Deserialize, Serialize};

use crate::api::credential_generation_parameters::{
    PublicKeyCredentialParameters, EDDSA, ES256, RS256,
};
use crate::api::extensions_inputs_and_outputs::AuthenticationExtensionsClientInputs;
use crate::api::supporting_data_structures::{
    PublicKeyCredentialDescriptor, PublicKeyCredentialDescriptorJSON, UserVerificationRequirement,
};
use crate::api::DEFAULT_TIMEOUT;
use crate::codec::Base64UrlString;
use crate::security::challenge::generate_challenge;
use crate::security::user_handle::{generate_user_handle, UserHandle};

/// Binary creation options. The wire form is
/// [`PublicKeyCredentialCreationOptionsJSON`], produced by
/// `encode_credential_options`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: Vec<u8>,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: Option<u64>,
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: Option<AttestationConveyancePreference>,
    pub extensions: Option<AuthenticationExtensionsClientInputs>,
}

impl PublicKeyCredentialCreationOptions {
    pub fn generate(
        rp: PublicKeyCredentialRpEntity,
        user: PublicKeyCredentialUserEntity,
    ) -> PublicKeyCredentialCreationOptions {
        let challenge = generate_challenge().to_vec();

        let mut pub_key_cred_params = Vec::with_capacity(3);

        pub_key_cred_params.push(PublicKeyCredentialParameters::public_key(EDDSA));
        pub_key_cred_params.push(PublicKeyCredentialParameters::public_key(ES256));
        pub_key_cred_params.push(PublicKeyCredentialParameters::public_key(RS256));

        let authenticator_selection = AuthenticatorSelectionCriteria {
            authenticator_attachment: None,
            resident_key: Some(ResidentKeyRequirement::Preferred),
            require_resident_key: Some(false),
            user_verification: Some(UserVerificationRequirement::Preferred),
        };

        PublicKeyCredentialCreationOptions {
            rp,
            user,
            challenge,
            pub_key_cred_params,
            timeout: Some(DEFAULT_TIMEOUT),
            exclude_credentials: None,
            authenticator_selection: Some(authenticator_selection),
            attestation: Some(AttestationConveyancePreference::None),
            extensions: None,
        }
    }
}

/// Wire form of [`PublicKeyCredentialCreationOptions`], binary members as base64url.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptionsJSON {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntityJSON,
    pub challenge: Base64UrlString,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptorJSON>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationConveyancePreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<AuthenticationExtensionsClientInputs>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialRpEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredentialUserEntity {
    pub name: String,
    pub id: UserHandle,
    pub display_name: String,
}

impl PublicKeyCredentialUserEntity {
    pub fn generate(name: String, display_name: String) -> PublicKeyCredentialUserEntity {
        let id = generate_user_handle();

        PublicKeyCredentialUserEntity {
            name,
            id,
            display_name,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntityJSON {
    pub name: String,
    pub id: Base64UrlString,
    pub display_name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelectionCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<ResidentKeyRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AuthenticatorAttachment {
    #[serde(rename = "platform")]
    Platform,
    #[serde(rename = "cross-platform")]
    CrossPlatform,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ResidentKeyRequirement {
    #[serde(rename = "discouraged")]
    Discouraged,
    #[serde(rename = "preferred")]
    Preferred,
    #[serde(rename = "required")]
    Required,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AttestationConveyancePreference {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "indirect")]
    Indirect,
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "enterprise")]
    Enterprise,
}
