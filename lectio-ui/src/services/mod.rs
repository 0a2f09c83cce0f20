//! Upstream service clients

pub mod aelf_client;

pub use aelf_client::{AelfClient, FetchError};
