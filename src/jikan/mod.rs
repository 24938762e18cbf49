//! Jikan (MyAnimeList) REST API access: request building, transport and
//! response mapping.

pub mod client;
pub mod envelope;
pub mod extract;
pub mod request;

pub use client::JikanClient;
pub use envelope::FromRecord;
pub use extract::Record;
pub use request::{Endpoint, Query};
