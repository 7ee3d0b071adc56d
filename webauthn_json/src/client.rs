pub mod request_normalizer;
pub mod response_serializer;
