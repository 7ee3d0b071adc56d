pub mod options_encoder;
pub mod response_parser;
