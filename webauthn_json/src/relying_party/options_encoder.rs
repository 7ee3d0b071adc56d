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
use crate::codec::encode_base64url;

fn encode_descriptors(
    descriptors: Option<&Vec<PublicKeyCredentialDescriptor>>,
) -> Option<Vec<PublicKeyCredentialDescriptorJSON>> {
    descriptors.map(|descriptors| {
        descriptors
            .iter()
            .map(PublicKeyCredentialDescriptorJSON::from)
            .collect()
    })
}

impl From<&PublicKeyCredentialDescriptor> for PublicKeyCredentialDescriptorJSON {
    fn from(descriptor: &PublicKeyCredentialDescriptor) -> PublicKeyCredentialDescriptorJSON {
        PublicKeyCredentialDescriptorJSON {
            r#type: descriptor.r#type,
            id: encode_base64url(&descriptor.id),
            transports: descriptor.transports.to_owned(),
        }
    }
}

impl From<&PublicKeyCredentialUserEntity> for PublicKeyCredentialUserEntityJSON {
    fn from(user: &PublicKeyCredentialUserEntity) -> PublicKeyCredentialUserEntityJSON {
        PublicKeyCredentialUserEntityJSON {
            name: user.name.to_owned(),
            id: encode_base64url(&user.id),
            display_name: user.display_name.to_owned(),
        }
    }
}

impl From<&PublicKeyCredentialCreationOptions> for PublicKeyCredentialCreationOptionsJSON {
    fn from(options: &PublicKeyCredentialCreationOptions) -> PublicKeyCredentialCreationOptionsJSON {
        PublicKeyCredentialCreationOptionsJSON {
            rp: options.rp.to_owned(),
            user: PublicKeyCredentialUserEntityJSON::from(&options.user),
            challenge: encode_base64url(&options.challenge),
            pub_key_cred_params: options.pub_key_cred_params.to_owned(),
            timeout: options.timeout,
            exclude_credentials: encode_descriptors(options.exclude_credentials.as_ref()),
            authenticator_selection: options.authenticator_selection.to_owned(),
            attestation: options.attestation,
            extensions: options.extensions.to_owned(),
        }
    }
}

impl From<&PublicKeyCredentialRequestOptions> for PublicKeyCredentialRequestOptionsJSON {
    fn from(options: &PublicKeyCredentialRequestOptions) -> PublicKeyCredentialRequestOptionsJSON {
        PublicKeyCredentialRequestOptionsJSON {
            challenge: encode_base64url(&options.challenge),
            timeout: options.timeout,
            rp_id: options.rp_id.to_owned(),
            allow_credentials: encode_descriptors(options.allow_credentials.as_ref()),
            user_verification: options.user_verification,
            extensions: options.extensions.to_owned(),
        }
    }
}

impl From<&CredentialCreationOptions> for CredentialCreationOptionsJSON {
    fn from(options: &CredentialCreationOptions) -> CredentialCreationOptionsJSON {
        CredentialCreationOptionsJSON {
            public_key: PublicKeyCredentialCreationOptionsJSON::from(&options.public_key),
        }
    }
}

impl From<&CredentialRequestOptions> for CredentialRequestOptionsJSON {
    fn from(options: &CredentialRequestOptions) -> CredentialRequestOptionsJSON {
        CredentialRequestOptionsJSON {
            public_key: PublicKeyCredentialRequestOptionsJSON::from(&options.public_key),
        }
    }
}

impl From<&CredentialOptions> for CredentialOptionsJSON {
    fn from(options: &CredentialOptions) -> CredentialOptionsJSON {
        match options {
            CredentialOptions::Creation(options) => {
                CredentialOptionsJSON::Creation(CredentialCreationOptionsJSON::from(options))
            }
            CredentialOptions::Request(options) => {
                CredentialOptionsJSON::Request(CredentialRequestOptionsJSON::from(options))
            }
        }
    }
}

/// Wire form of `options`, as sent to the client for `navigator.credentials`.
pub fn encode_credential_options(options: &CredentialOptions) -> CredentialOptionsJSON {
    CredentialOptionsJSON::from(options)
}
