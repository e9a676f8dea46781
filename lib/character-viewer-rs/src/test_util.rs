use crate::CharacterId;
use crate::CharacterSource;
use rick_and_morty::Character;
use rick_and_morty::Episode;
use rick_and_morty::NamedResource;
use std::collections::HashMap;
use std::collections::HashSet;
use std::num::NonZeroU64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use url::Url;

const BASE_URL: &str = "https://rickandmortyapi.com/api/";

#[derive(Debug, thiserror::Error)]
#[error("{0} not found")]
pub struct MemorySourceError(String);

/// An in-memory character source that counts its calls.
#[derive(Debug, Default)]
pub struct MemorySource {
    characters: HashMap<u64, Character>,
    episode_delays: HashMap<u64, Duration>,
    failing_episodes: HashSet<u64>,

    character_calls: AtomicUsize,
    episode_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episode_url(id: u64) -> Url {
        Url::parse(BASE_URL)
            .unwrap()
            .join(&format!("episode/{id}"))
            .unwrap()
    }

    pub fn with_character(mut self, id: u64, name: &str, status: &str, episodes: &[u64]) -> Self {
        let base_url = Url::parse(BASE_URL).unwrap();
        let character = Character {
            id: NonZeroU64::new(id).unwrap(),
            name: name.to_string(),
            status: status.to_string(),
            species: "Human".to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
            origin: NamedResource {
                name: "Earth (C-137)".to_string(),
                url: base_url.join("location/1").unwrap().into(),
            },
            location: NamedResource {
                name: "Citadel of Ricks".to_string(),
                url: base_url.join("location/3").unwrap().into(),
            },
            image: base_url
                .join(&format!("character/avatar/{id}.jpeg"))
                .unwrap(),
            episode: episodes.iter().map(|id| Self::episode_url(*id)).collect(),
            url: base_url.join(&format!("character/{id}")).unwrap(),
            created: "2017-11-04T18:48:46.250Z".to_string(),
        };
        self.characters.insert(id, character);
        self
    }

    pub fn with_episode_delay(mut self, id: u64, delay: Duration) -> Self {
        self.episode_delays.insert(id, delay);
        self
    }

    pub fn with_failing_episode(mut self, id: u64) -> Self {
        self.failing_episodes.insert(id);
        self
    }

    pub fn character_calls(&self) -> usize {
        self.character_calls.load(Ordering::SeqCst)
    }

    pub fn episode_calls(&self) -> usize {
        self.episode_calls.load(Ordering::SeqCst)
    }
}

impl CharacterSource for MemorySource {
    type Error = MemorySourceError;

    async fn get_character(&self, id: CharacterId) -> Result<Character, Self::Error> {
        self.character_calls.fetch_add(1, Ordering::SeqCst);
        self.characters
            .get(&id.get())
            .cloned()
            .ok_or_else(|| MemorySourceError(format!("character {id}")))
    }

    async fn get_episode(&self, url: &Url) -> Result<Episode, Self::Error> {
        self.episode_calls.fetch_add(1, Ordering::SeqCst);

        let id: u64 = url
            .path_segments()
            .and_then(|segments| segments.last())
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| MemorySourceError(format!("episode \"{url}\"")))?;

        if let Some(delay) = self.episode_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_episodes.contains(&id) {
            return Err(MemorySourceError(format!("episode {id}")));
        }

        Ok(Episode {
            id: NonZeroU64::new(id).ok_or_else(|| MemorySourceError("episode 0".to_string()))?,
            name: format!("Episode {id}"),
            air_date: "December 2, 2013".to_string(),
            episode: format!("S01E{id:02}"),
            characters: Vec::new(),
            url: url.clone(),
            created: "2017-11-10T12:56:33.798Z".to_string(),
        })
    }
}
