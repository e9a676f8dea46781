use crate::load_character;
use crate::CharacterId;
use crate::CharacterSource;
use crate::ViewerError;
use crate::ViewerState;
use std::num::NonZeroUsize;

/// The default number of episode requests in flight at once
pub const DEFAULT_EPISODE_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// A character viewer.
///
/// Every operation takes `&mut self`, so only one fetch can run at a time.
/// If an operation's future is dropped before it finishes,
/// [`CharacterViewer::cancel_fetch`] must be called to re-enable the controls.
#[derive(Debug)]
pub struct CharacterViewer<S> {
    source: S,
    state: ViewerState,
    episode_concurrency: NonZeroUsize,
}

impl<S> CharacterViewer<S>
where
    S: CharacterSource,
{
    /// Make a new viewer, with nothing loaded.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewerState::new(),
            episode_concurrency: DEFAULT_EPISODE_CONCURRENCY,
        }
    }

    /// Set the number of episode requests that may be in flight at once.
    pub fn with_episode_concurrency(mut self, episode_concurrency: NonZeroUsize) -> Self {
        self.episode_concurrency = episode_concurrency;
        self
    }

    /// Get the ui state
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Get the character source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Edit the id input field.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.set_input(input);
    }

    /// Load the first character.
    ///
    /// This only fetches the first time it is called.
    pub async fn mount(&mut self) -> Result<(), ViewerError> {
        if !self.state.mount() {
            return Ok(());
        }

        self.fetch_character(CharacterId::FIRST).await
    }

    /// Fetch and display a character.
    ///
    /// On failure, the previously displayed character stays.
    pub async fn fetch_character(&mut self, id: CharacterId) -> Result<(), ViewerError> {
        let ticket = self.state.begin_fetch(id)?;
        let result = load_character(&self.source, id, self.episode_concurrency).await;
        self.state.complete_fetch(ticket, result)?;

        Ok(())
    }

    /// Fetch the character after the one in the input field.
    ///
    /// There is no upper bound, the source decides whether the character exists.
    pub async fn go_to_next(&mut self) -> Result<(), ViewerError> {
        let id = self.next_target()?;
        self.fetch_character(id).await
    }

    /// Fetch the character before the one in the input field.
    ///
    /// Fails with [`ViewerError::OutOfRange`] without fetching if there is none.
    pub async fn go_to_previous(&mut self) -> Result<(), ViewerError> {
        match self.previous_target() {
            Ok(id) => self.fetch_character(id).await,
            Err(ViewerError::OutOfRange) => Err(self.state.block_navigation()),
            Err(error) => Err(error),
        }
    }

    /// Fetch the character in the input field.
    pub async fn search_by_id(&mut self) -> Result<(), ViewerError> {
        let id = self.search_target()?;
        self.fetch_character(id).await
    }

    /// Abandon a fetch whose future was dropped.
    ///
    /// Returns `true` if a fetch was in flight.
    pub fn cancel_fetch(&mut self) -> bool {
        self.state.cancel_fetch()
    }

    /// Get the id [`CharacterViewer::go_to_next`] would fetch.
    pub fn next_target(&self) -> Result<CharacterId, ViewerError> {
        let value = self.input_value()?;
        Ok(CharacterId::from_raw(value.saturating_add(1))?)
    }

    /// Get the id [`CharacterViewer::go_to_previous`] would fetch.
    pub fn previous_target(&self) -> Result<CharacterId, ViewerError> {
        let value = self.input_value()?;
        Ok(CharacterId::from_raw(value.saturating_sub(1))?)
    }

    /// Get the id [`CharacterViewer::search_by_id`] would fetch.
    pub fn search_target(&self) -> Result<CharacterId, ViewerError> {
        let value = self.input_value()?;
        Ok(CharacterId::from_raw(value)?)
    }

    fn input_value(&self) -> Result<i64, ViewerError> {
        if self.state.is_loading() {
            return Err(ViewerError::Busy);
        }

        Ok(CharacterId::parse_raw(self.state.input())?)
    }
}
