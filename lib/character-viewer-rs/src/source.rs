use crate::CharacterId;
use crate::CharacterRecord;
use crate::EpisodeRecord;
use crate::FetchError;
use futures::stream::StreamExt;
use futures::stream::TryStreamExt;
use rick_and_morty::Character;
use rick_and_morty::Episode;
use std::future::Future;
use std::num::NonZeroUsize;
use tracing::debug;
use tracing::info;
use url::Url;

/// Where characters and their episodes come from.
pub trait CharacterSource {
    /// The error for a failed lookup.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get a character by id.
    fn get_character(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Character, Self::Error>> + Send;

    /// Get an episode by the url listed on a character.
    fn get_episode(&self, url: &Url) -> impl Future<Output = Result<Episode, Self::Error>> + Send;
}

impl CharacterSource for rick_and_morty::Client {
    type Error = rick_and_morty::Error;

    async fn get_character(&self, id: CharacterId) -> Result<Character, Self::Error> {
        rick_and_morty::Client::get_character(self, id.into()).await
    }

    async fn get_episode(&self, url: &Url) -> Result<Episode, Self::Error> {
        self.get_episode_by_url(url).await
    }
}

/// Load a character and resolve all of its episodes.
///
/// At most `episode_concurrency` episode requests are in flight at once.
/// Episodes are returned in the order the character lists them.
/// If any episode fails, the whole load fails with that episode's error.
pub async fn load_character<S>(
    source: &S,
    id: CharacterId,
    episode_concurrency: NonZeroUsize,
) -> Result<CharacterRecord, FetchError>
where
    S: CharacterSource + ?Sized,
{
    let character = source
        .get_character(id)
        .await
        .map_err(|error| FetchError::Character {
            id,
            source: Box::new(error),
        })?;

    info!(
        "resolving {} episodes for character {id}",
        character.episode.len()
    );

    let episodes: Vec<EpisodeRecord> = futures::stream::iter(character.episode.iter().enumerate())
        .map(|(index, url)| async move {
            debug!("getting episode {index} at \"{url}\"");
            source
                .get_episode(url)
                .await
                .map(EpisodeRecord::from)
                .map_err(|error| FetchError::Episode {
                    index,
                    url: url.clone(),
                    source: Box::new(error),
                })
        })
        .buffered(episode_concurrency.get())
        .try_collect()
        .await?;

    Ok(CharacterRecord::new(character, episodes))
}
