use std::num::NonZeroU64;
use std::num::ParseIntError;

/// Error that may occur while parsing a [`CharacterId`] from user input
#[derive(Debug, thiserror::Error)]
pub enum ParseIdError {
    /// The input is not an integer
    #[error("\"{input}\" is not a valid character id")]
    Invalid {
        input: String,

        #[source]
        source: ParseIntError,
    },

    /// The input is an integer, but it is zero or negative
    #[error("there is no character with an id below 1")]
    BelowOne,
}

/// A character id.
///
/// Ids start at 1.
/// There is no known upper bound, the server decides what exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterId(NonZeroU64);

impl CharacterId {
    /// The first character id
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Make a new id, returning `None` for 0.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// Get the raw id
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Get the id before this one, or `None` if this is the first id.
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// Parse the integer in the id input field, without checking that it is a valid id.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse_raw(input: &str) -> Result<i64, ParseIdError> {
        let input = input.trim();
        input.parse().map_err(|source| ParseIdError::Invalid {
            input: input.to_string(),
            source,
        })
    }

    /// Make an id from a raw integer.
    pub fn from_raw(value: i64) -> Result<Self, ParseIdError> {
        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ParseIdError::BelowOne)
    }

    /// Parse an id from the raw contents of the id input field.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse_input(input: &str) -> Result<Self, ParseIdError> {
        Self::from_raw(Self::parse_raw(input)?)
    }
}

impl From<NonZeroU64> for CharacterId {
    fn from(id: NonZeroU64) -> Self {
        Self(id)
    }
}

impl From<CharacterId> for NonZeroU64 {
    fn from(id: CharacterId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
