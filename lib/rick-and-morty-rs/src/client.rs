use crate::Character;
use crate::Episode;
use crate::Error;
use crate::DEFAULT_BASE_URL;
use std::num::NonZeroU64;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// The rick and morty api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The api root, like "https://rickandmortyapi.com/api/".
    ///
    /// This must end with a '/' so that endpoints can be joined onto it.
    base_url: Url,
}

impl Client {
    /// Make a new client against the public api
    pub fn new() -> Self {
        Self::with_base_url(Url::parse(DEFAULT_BASE_URL).expect("invalid default base url"))
    }

    /// Make a new client against the given api root.
    pub fn with_base_url(base_url: Url) -> Self {
        Self::from_parts(reqwest::Client::new(), base_url)
    }

    /// Make a new client against the given api root, with a total request timeout.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::from_parts(client, base_url))
    }

    /// Make a new client from an existing http client and an api root.
    pub fn from_parts(client: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { client, base_url }
    }

    /// Get the api root
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the url as json
    async fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("GET \"{url}\"");
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    /// Get a character by id.
    ///
    /// A missing character is reported as an http error with a 404 status.
    pub async fn get_character(&self, id: NonZeroU64) -> Result<Character, Error> {
        let url = self.base_url.join(&format!("character/{id}"))?;
        self.get_json(url.as_str()).await
    }

    /// Get an episode by id.
    pub async fn get_episode(&self, id: NonZeroU64) -> Result<Episode, Error> {
        let url = self.base_url.join(&format!("episode/{id}"))?;
        self.get_json(url.as_str()).await
    }

    /// Get an episode by its endpoint url, as listed on a [`Character`].
    pub async fn get_episode_by_url(&self, url: &Url) -> Result<Episode, Error> {
        self.get_json(url.as_str()).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::with_base_url(Url::parse("http://localhost:8080/api").unwrap());
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");

        let client = Client::with_base_url(Url::parse("http://localhost:8080/api/").unwrap());
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn endpoints_join_onto_base() {
        let client = Client::new();
        let url = client.base_url().join("character/42").unwrap();
        assert_eq!(url.as_str(), "https://rickandmortyapi.com/api/character/42");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn get_character() {
        let client = Client::new();
        let character = client
            .get_character(NonZeroU64::new(1).unwrap())
            .await
            .expect("failed to get character");
        dbg!(&character);
        assert_eq!(character.id.get(), 1);
        assert_eq!(character.name, "Rick Sanchez");

        let episode_url = character.episode.first().expect("missing episodes");
        let episode = client
            .get_episode_by_url(episode_url)
            .await
            .expect("failed to get episode");
        dbg!(&episode);
        assert_eq!(episode.episode, "S01E01");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn missing_character_is_404() {
        let client = Client::new();
        let error = client
            .get_character(NonZeroU64::new(u32::MAX.into()).unwrap())
            .await
            .expect_err("character should not exist");
        assert!(error.is_not_found(), "{error:?}");
    }
}
