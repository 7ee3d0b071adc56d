use serde::{Deserialize, Serialize};

use crate::api::supporting_data_structures::{COSEAlgorithmIdentifier, PublicKeyCredentialType};

pub const EDDSA: COSEAlgorithmIdentifier = -8;
pub const ES256: COSEAlgorithmIdentifier = -7;
pub const RS256: COSEAlgorithmIdentifier = -257;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialParameters {
    pub r#type: PublicKeyCredentialType,
    pub alg: COSEAlgorithmIdentifier,
}

impl PublicKeyCredentialParameters {
    pub fn public_key(alg: COSEAlgorithmIdentifier) -> PublicKeyCredentialParameters {
        PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_credential_parameters() -> Result<(), Box<dyn std::error::Error>> {
        let test_parameters = PublicKeyCredentialParameters::public_key(RS256);

        assert_eq!(test_parameters.r#type, PublicKeyCredentialType::PublicKey);
        assert_eq!(test_parameters.alg, -257);
        assert_eq!(
            serde_json::to_string(&test_parameters)?,
            r#"{"type":"public-key","alg":-257}"#,
        );
        assert_eq!(
            serde_json::from_str::<PublicKeyCredentialParameters>(r#"{"alg":-8,"type":"public-key"}"#)?,
            PublicKeyCredentialParameters::public_key(EDDSA),
        );

        Ok(())
    }
}
