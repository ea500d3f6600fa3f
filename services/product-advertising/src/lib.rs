//! Signers and client for the Product Advertising API.
//!
//! Every request is authenticated by a base64 HMAC-SHA256 signature over a
//! canonical form of its query. [`RequestSigner`] builds that signature,
//! [`Client`] wraps it with the `ItemLookup` and `ItemSearch` operations.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod region;
pub use region::Region;

mod encode;
pub use encode::{is_unreserved, percent_decode, percent_encode, percent_encode_bytes};

mod sign_request;
pub use sign_request::{canonicalize_query, string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};

mod client;
pub use client::Client;

pub mod constants;
