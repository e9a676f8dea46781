use crate::CharacterId;
use crate::StatusBadge;
use url::Url;

/// A character, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,

    /// The name of the place of origin
    pub origin: String,

    /// The name of the last known location
    pub location: String,

    pub image_url: Url,

    /// Episodes, in the order the character lists them
    pub episodes: Vec<EpisodeRecord>,
}

impl CharacterRecord {
    /// Flatten an api character with its resolved episodes.
    pub fn new(character: rick_and_morty::Character, episodes: Vec<EpisodeRecord>) -> Self {
        Self {
            id: character.id.into(),
            name: character.name,
            status: character.status,
            species: character.species,
            gender: character.gender,
            origin: character.origin.name,
            location: character.location.name,
            image_url: character.image,
            episodes,
        }
    }

    /// Get the status badge
    pub fn badge(&self) -> StatusBadge {
        StatusBadge::from_status(&self.status)
    }
}

/// An episode, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub id: u64,
    pub name: String,

    /// The episode code, like "S01E01"
    pub episode_code: String,
}

impl EpisodeRecord {
    /// Get the display label, like "Pilot (SS01E01)".
    pub fn label(&self) -> String {
        format!("{} (S{})", self.name, self.episode_code)
    }
}

impl From<rick_and_morty::Episode> for EpisodeRecord {
    fn from(episode: rick_and_morty::Episode) -> Self {
        Self {
            id: episode.id.get(),
            name: episode.name,
            episode_code: episode.episode,
        }
    }
}
