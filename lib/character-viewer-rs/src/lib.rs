mod badge;
mod id;
mod record;
mod source;
mod state;
#[cfg(test)]
mod test_util;
mod viewer;

pub use self::badge::StatusBadge;
pub use self::id::CharacterId;
pub use self::id::ParseIdError;
pub use self::record::CharacterRecord;
pub use self::record::EpisodeRecord;
pub use self::source::load_character;
pub use self::source::CharacterSource;
pub use self::state::Completion;
pub use self::state::Controls;
pub use self::state::FetchTicket;
pub use self::state::ViewerState;
pub use self::viewer::CharacterViewer;
pub use self::viewer::DEFAULT_EPISODE_CONCURRENCY;
pub use rick_and_morty;
use url::Url;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed character load
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The character request failed
    #[error("failed to get character {id}")]
    Character {
        id: CharacterId,

        #[source]
        source: BoxError,
    },

    /// One of the episode requests failed.
    ///
    /// `index` is the position of the episode in the character's episode list.
    #[error("failed to get episode {index} at \"{url}\"")]
    Episode {
        index: usize,
        url: Url,

        #[source]
        source: BoxError,
    },
}

/// The viewer error type
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The character or one of its episodes could not be fetched
    #[error("character {id} was not found")]
    NotFound {
        id: CharacterId,

        #[source]
        source: FetchError,
    },

    /// Navigation or input went below the first id
    #[error("there is no character with an id below 1")]
    OutOfRange,

    /// The input field does not hold an id
    #[error(transparent)]
    InvalidId(ParseIdError),

    /// A fetch is already in flight
    #[error("a character is already loading")]
    Busy,
}

impl From<ParseIdError> for ViewerError {
    fn from(error: ParseIdError) -> Self {
        match error {
            ParseIdError::BelowOne => Self::OutOfRange,
            error => Self::InvalidId(error),
        }
    }
}
