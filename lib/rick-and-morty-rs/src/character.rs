use std::num::NonZeroU64;
use url::Url;

/// A character
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Character {
    /// The unique id
    pub id: NonZeroU64,

    /// The name
    pub name: String,

    /// The status.
    ///
    /// The api uses "Alive", "Dead" and "unknown",
    /// but this is kept as a string since the casing is not stable.
    pub status: String,

    /// The species
    pub species: String,

    /// The subspecies or type.
    ///
    /// This is usually empty.
    #[serde(rename = "type")]
    pub kind: String,

    /// The gender
    pub gender: String,

    /// The place of origin
    pub origin: NamedResource,

    /// The last known location
    pub location: NamedResource,

    /// The avatar image.
    ///
    /// Images are 300x300.
    pub image: Url,

    /// The urls of episodes this character appeared in
    pub episode: Vec<Url>,

    /// The url of this character's endpoint
    pub url: Url,

    /// The time this character was created in the database
    pub created: String,
}

/// A reference to another resource, by name and url.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NamedResource {
    /// The display name
    pub name: String,

    /// The resource url.
    ///
    /// This is an empty string for unknown origins and locations,
    /// so it is not parsed as a [`Url`].
    pub url: String,
}

impl NamedResource {
    /// Try to get the url of this resource, if it is known.
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }
}
