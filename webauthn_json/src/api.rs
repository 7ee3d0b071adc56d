pub mod assertion_generation_options;
pub mod authenticator_responses;
pub mod credential_creation_options;
pub mod credential_generation_parameters;
pub mod extensions_inputs_and_outputs;
pub mod public_key_credential;
pub mod supporting_data_structures;

/// Milliseconds the client waits for the authenticator.
pub const DEFAULT_TIMEOUT: u64 = 300000;
