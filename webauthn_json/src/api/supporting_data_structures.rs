use serde::{Deserialize, Serialize};

use crate::codec::Base64UrlString;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PublicKeyCredentialType {
    #[serde(rename = "public-key")]
    PublicKey,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredentialDescriptor {
    pub r#type: PublicKeyCredentialType,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialDescriptorJSON {
    pub r#type: PublicKeyCredentialType,
    pub id: Base64UrlString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

pub type COSEAlgorithmIdentifier = i32;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum UserVerificationRequirement {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "preferred")]
    Preferred,
    #[serde(rename = "discouraged")]
    Discouraged,
}
