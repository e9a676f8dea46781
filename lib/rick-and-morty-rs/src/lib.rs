mod character;
mod client;
mod episode;

pub use crate::character::Character;
pub use crate::character::NamedResource;
pub use crate::client::Client;
pub use crate::episode::Episode;

/// The public api root
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/";

/// The error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A HTTP error, including non-success statuses
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Failed to build an endpoint url
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if the server responded with a 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Reqwest(error) => error.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::InvalidUrl(_) => false,
        }
    }
}
