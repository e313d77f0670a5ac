pub mod client;
pub mod form;
mod response_converter;

pub use client::HttpGateway;
pub use form::{FormPart, FormPayload};
