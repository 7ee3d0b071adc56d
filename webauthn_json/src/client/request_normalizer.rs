use tracing::debug;

use crate::api::assertion_generation_options::{
    PublicKeyCredentialRequestOptions, PublicKeyCredentialRequestOptionsJSON,
};
use crate::api::credential_creation_options::{
    PublicKeyCredentialCreationOptions, PublicKeyCredentialCreationOptionsJSON,
    PublicKeyCredentialUserEntity, PublicKeyCredentialUserEntityJSON,
};
use crate::api::public_key_credential::{
    CredentialCreationOptions, CredentialCreationOptionsJSON, CredentialOptions,
    CredentialOptionsJSON, CredentialRequestOptions, CredentialRequestOptionsJSON,
};
use crate::api::supporting_data_structures::{
    PublicKeyCredentialDescriptor, PublicKeyCredentialDescriptorJSON,
};
use crate::codec::Base64UrlDecoder;
use crate::error::CodecError;

/// Wire structures whose base64url members decode into a binary counterpart.
///
/// The wire value is left untouched, a new value is returned.
pub trait Normalize {
    type Normalized;

    fn normalize_with(&self, decoder: &Base64UrlDecoder) -> Result<Self::Normalized, CodecError>;

    fn normalize(&self) -> Result<Self::Normalized, CodecError> {
        self.normalize_with(&Base64UrlDecoder::default())
    }
}

pub fn normalize_credential_request(
    options: &CredentialOptionsJSON,
) -> Result<CredentialOptions, CodecError> {
    options.normalize()
}

pub fn normalize_credential_request_with(
    options: &CredentialOptionsJSON,
    decoder: &Base64UrlDecoder,
) -> Result<CredentialOptions, CodecError> {
    options.normalize_with(decoder)
}

fn normalize_descriptors(
    descriptors: Option<&Vec<PublicKeyCredentialDescriptorJSON>>,
    decoder: &Base64UrlDecoder,
) -> Result<Option<Vec<PublicKeyCredentialDescriptor>>, CodecError> {
    descriptors
        .map(|descriptors| {
            descriptors
                .iter()
                .map(|descriptor| descriptor.normalize_with(decoder))
                .collect()
        })
        .transpose()
}

impl Normalize for PublicKeyCredentialDescriptorJSON {
    type Normalized = PublicKeyCredentialDescriptor;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<PublicKeyCredentialDescriptor, CodecError> {
        Ok(PublicKeyCredentialDescriptor {
            r#type: self.r#type,
            id: decoder.decode(&self.id)?,
            transports: self.transports.to_owned(),
        })
    }
}

impl Normalize for PublicKeyCredentialUserEntityJSON {
    type Normalized = PublicKeyCredentialUserEntity;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<PublicKeyCredentialUserEntity, CodecError> {
        Ok(PublicKeyCredentialUserEntity {
            name: self.name.to_owned(),
            id: decoder.decode(&self.id)?,
            display_name: self.display_name.to_owned(),
        })
    }
}

impl Normalize for PublicKeyCredentialCreationOptionsJSON {
    type Normalized = PublicKeyCredentialCreationOptions;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<PublicKeyCredentialCreationOptions, CodecError> {
        Ok(PublicKeyCredentialCreationOptions {
            rp: self.rp.to_owned(),
            user: self.user.normalize_with(decoder)?,
            challenge: decoder.decode(&self.challenge)?,
            pub_key_cred_params: self.pub_key_cred_params.to_owned(),
            timeout: self.timeout,
            exclude_credentials: normalize_descriptors(self.exclude_credentials.as_ref(), decoder)?,
            authenticator_selection: self.authenticator_selection.to_owned(),
            attestation: self.attestation,
            extensions: self.extensions.to_owned(),
        })
    }
}

impl Normalize for PublicKeyCredentialRequestOptionsJSON {
    type Normalized = PublicKeyCredentialRequestOptions;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<PublicKeyCredentialRequestOptions, CodecError> {
        Ok(PublicKeyCredentialRequestOptions {
            challenge: decoder.decode(&self.challenge)?,
            timeout: self.timeout,
            rp_id: self.rp_id.to_owned(),
            allow_credentials: normalize_descriptors(self.allow_credentials.as_ref(), decoder)?,
            user_verification: self.user_verification,
            extensions: self.extensions.to_owned(),
        })
    }
}

impl Normalize for CredentialCreationOptionsJSON {
    type Normalized = CredentialCreationOptions;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<CredentialCreationOptions, CodecError> {
        let public_key = self.public_key.normalize_with(decoder)?;

        debug!(
            exclude_credentials = public_key
                .exclude_credentials
                .as_ref()
                .map_or(0, |credentials| credentials.len()),
            "normalized credential creation options",
        );

        Ok(CredentialCreationOptions { public_key })
    }
}

impl Normalize for CredentialRequestOptionsJSON {
    type Normalized = CredentialRequestOptions;

    fn normalize_with(
        &self,
        decoder: &Base64UrlDecoder,
    ) -> Result<CredentialRequestOptions, CodecError> {
        let public_key = self.public_key.normalize_with(decoder)?;

        debug!(
            allow_credentials = public_key
                .allow_credentials
                .as_ref()
                .map_or(0, |credentials| credentials.len()),
            "normalized credential request options",
        );

        Ok(CredentialRequestOptions { public_key })
    }
}

impl Normalize for CredentialOptionsJSON {
    type Normalized = CredentialOptions;

    fn normalize_with(&self, decoder: &Base64UrlDecoder) -> Result<CredentialOptions, CodecError> {
        match self {
            CredentialOptionsJSON::Creation(options) => {
                Ok(CredentialOptions::Creation(options.normalize_with(decoder)?))
            }
            CredentialOptionsJSON::Request(options) => {
                Ok(CredentialOptions::Request(options.normalize_with(decoder)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::credential_creation_options::{
        AttestationConveyancePreference, AuthenticatorSelectionCriteria, ResidentKeyRequirement,
    };
    use crate::api::supporting_data_structures::{
        PublicKeyCredentialType, UserVerificationRequirement,
    };
    use crate::codec::Padding;
    use crate::error::CodecErrorType;
    use hex_literal::hex;

    const TEST_CREATE_JSON: &str = r#"
        {
            "publicKey": {
                "rp": { "name": "Vaadin WebAuthn Example", "id": "example.org" },
                "user": { "name": "alice", "displayName": "Alice", "id": "3q2-7w" },
                "challenge": "AQID",
                "pubKeyCredParams": [ { "type": "public-key", "alg": -7 }, { "type": "public-key", "alg": -257 } ],
                "timeout": 60000,
                "excludeCredentials": [ { "type": "public-key", "id": "AP8", "transports": [ "usb" ] } ],
                "authenticatorSelection": { "residentKey": "required", "userVerification": "required" },
                "attestation": "none",
                "extensions": { "credProps": true }
            }
        }
    "#;

    const TEST_GET_JSON: &str = r#"
        {
            "publicKey": {
                "challenge": "AQID",
                "rpId": "example.org",
                "allowCredentials": [
                    { "type": "public-key", "id": "AP8" },
                    { "type": "public-key", "id": "-_8", "transports": [ "internal", "hybrid" ] }
                ],
                "userVerification": "preferred"
            }
        }
    "#;

    #[test]
    fn normalize_creation_options() -> Result<(), Box<dyn std::error::Error>> {
        let test_options_json = CredentialOptionsJSON::from_json(TEST_CREATE_JSON)?;
        let test_options = normalize_credential_request(&test_options_json)?;

        let CredentialOptions::Creation(test_options) = test_options else {
            panic!("expected credential creation options");
        };

        let test_public_key = test_options.public_key;

        assert_eq!(test_public_key.challenge, [1, 2, 3]);
        assert_eq!(test_public_key.user.id, hex!("deadbeef"));
        assert_eq!(test_public_key.user.name, "alice");
        assert_eq!(test_public_key.user.display_name, "Alice");
        assert_eq!(test_public_key.rp.id.as_deref(), Some("example.org"));
        assert_eq!(test_public_key.pub_key_cred_params.len(), 2);
        assert_eq!(test_public_key.timeout, Some(60000));
        assert_eq!(
            test_public_key.exclude_credentials,
            Some(vec![PublicKeyCredentialDescriptor {
                r#type: PublicKeyCredentialType::PublicKey,
                id: hex!("00ff").to_vec(),
                transports: Some(vec![String::from("usb")]),
            }]),
        );
        assert_eq!(
            test_public_key.authenticator_selection,
            Some(AuthenticatorSelectionCriteria {
                authenticator_attachment: None,
                resident_key: Some(ResidentKeyRequirement::Required),
                require_resident_key: None,
                user_verification: Some(UserVerificationRequirement::Required),
            }),
        );
        assert_eq!(
            test_public_key.attestation,
            Some(AttestationConveyancePreference::None),
        );
        assert_eq!(
            test_public_key
                .extensions
                .as_ref()
                .and_then(|extensions| extensions.get("credProps")),
            Some(&serde_json::Value::Bool(true)),
        );

        Ok(())
    }

    #[test]
    fn normalize_request_options() -> Result<(), Box<dyn std::error::Error>> {
        let test_options_json = CredentialOptionsJSON::from_json(TEST_GET_JSON)?;
        let test_options = normalize_credential_request(&test_options_json)?;

        let CredentialOptions::Request(test_options) = test_options else {
            panic!("expected credential request options");
        };

        let test_public_key = test_options.public_key;

        assert_eq!(test_public_key.challenge, [1, 2, 3]);
        assert_eq!(test_public_key.rp_id.as_deref(), Some("example.org"));
        assert!(test_public_key.timeout.is_none());
        assert_eq!(
            test_public_key.user_verification,
            Some(UserVerificationRequirement::Preferred),
        );
        assert!(test_public_key.extensions.is_none());

        let test_allow_credentials = test_public_key.allow_credentials.unwrap_or_default();

        assert_eq!(test_allow_credentials.len(), 2);
        assert_eq!(test_allow_credentials[0].id, hex!("00ff"));
        assert!(test_allow_credentials[0].transports.is_none());
        assert_eq!(test_allow_credentials[1].id, hex!("fbff"));
        assert_eq!(
            test_allow_credentials[1].transports,
            Some(vec![String::from("internal"), String::from("hybrid")]),
        );

        Ok(())
    }

    #[test]
    fn normalize_without_descriptors() -> Result<(), Box<dyn std::error::Error>> {
        let test_options_json =
            CredentialOptionsJSON::from_json(r#"{"publicKey":{"challenge":"AQID"}}"#)?;

        assert_eq!(
            normalize_credential_request(&test_options_json)?,
            CredentialOptions::Request(CredentialRequestOptions {
                public_key: PublicKeyCredentialRequestOptions {
                    challenge: vec![1, 2, 3],
                    timeout: None,
                    rp_id: None,
                    allow_credentials: None,
                    user_verification: None,
                    extensions: None,
                },
            }),
        );

        Ok(())
    }

    #[test]
    fn normalize_leaves_wire_options_untouched() -> Result<(), Box<dyn std::error::Error>> {
        let test_options_json = CredentialOptionsJSON::from_json(TEST_GET_JSON)?;
        let test_options_json_before = test_options_json.to_owned();

        normalize_credential_request(&test_options_json)?;
        normalize_credential_request(&test_options_json)?;

        assert_eq!(test_options_json, test_options_json_before);
        assert_eq!(test_options_json.challenge(), "AQID");

        Ok(())
    }

    #[test]
    fn normalize_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let test_decode_error = CodecError {
            error: CodecErrorType::DecodeError,
        };

        let test_bad_challenge =
            CredentialOptionsJSON::from_json(r#"{"publicKey":{"challenge":"AQ!D"}}"#)?;

        assert_eq!(
            normalize_credential_request(&test_bad_challenge),
            Err(test_decode_error),
        );

        let test_bad_descriptor = CredentialOptionsJSON::from_json(
            r#"{"publicKey":{"challenge":"AQID","allowCredentials":[{"type":"public-key","id":"AP8"},{"type":"public-key","id":"A"}]}}"#,
        )?;

        assert_eq!(
            normalize_credential_request(&test_bad_descriptor),
            Err(test_decode_error),
        );

        let test_bad_user_id = CredentialOptionsJSON::from_json(
            r#"{"publicKey":{"rp":{"name":"rp"},"user":{"name":"a","displayName":"a","id":"%%"},"challenge":"AQID","pubKeyCredParams":[]}}"#,
        )?;

        assert_eq!(
            normalize_credential_request(&test_bad_user_id),
            Err(test_decode_error),
        );

        Ok(())
    }

    #[test]
    fn normalize_with_padding() -> Result<(), Box<dyn std::error::Error>> {
        let test_options_json =
            CredentialOptionsJSON::from_json(r#"{"publicKey":{"challenge":"AP8="}}"#)?;

        let test_options = normalize_credential_request(&test_options_json)?;

        let CredentialOptions::Request(test_options) = test_options else {
            panic!("expected credential request options");
        };

        assert_eq!(test_options.public_key.challenge, hex!("00ff"));

        let test_forbidden = Base64UrlDecoder::new(Padding::Forbidden);

        assert!(normalize_credential_request_with(&test_options_json, &test_forbidden).is_err());

        Ok(())
    }
}
