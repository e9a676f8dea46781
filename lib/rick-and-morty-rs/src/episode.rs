use std::num::NonZeroU64;
use url::Url;

/// An episode
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Episode {
    /// The unique id
    pub id: NonZeroU64,

    /// The name
    pub name: String,

    /// The date the episode aired, like "December 2, 2013"
    pub air_date: String,

    /// The episode code, like "S01E01"
    pub episode: String,

    /// The urls of characters that appear in this episode
    pub characters: Vec<Url>,

    /// The url of this episode's endpoint
    pub url: Url,

    /// The time this episode was created in the database
    pub created: String,
}
