use serde_json::{Map, Value};

/// Extension inputs are handed to the authenticator untouched.
pub type AuthenticationExtensionsClientInputs = Map<String, Value>;

/// Extension outputs are handed back to the relying party untouched.
pub type AuthenticationExtensionsClientOutputs = Map<String, Value>;
