/// The display class of a character's status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusBadge {
    /// The character is alive
    Success,

    /// The character is dead
    Danger,

    /// The status is unknown or unrecognized
    Neutral,
}

impl StatusBadge {
    /// Get the badge for a status string.
    ///
    /// Matching is case-insensitive.
    /// This is total, anything that is not "alive" or "dead" is [`StatusBadge::Neutral`].
    pub fn from_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("alive") {
            Self::Success
        } else if status.eq_ignore_ascii_case("dead") {
            Self::Danger
        } else {
            Self::Neutral
        }
    }

    /// Get this as a str.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}
