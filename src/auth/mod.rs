pub mod token;

pub use token::{decode_token, TokenPayload};
