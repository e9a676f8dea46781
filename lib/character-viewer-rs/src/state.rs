use crate::CharacterId;
use crate::CharacterRecord;
use crate::EpisodeRecord;
use crate::FetchError;
use crate::ViewerError;
use tracing::info;
use tracing::warn;

/// Proof that a fetch was started.
///
/// Only the ticket from the latest generation may apply its result.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    id: CharacterId,
    generation: u64,
}

impl FetchTicket {
    /// The id being fetched
    pub fn id(&self) -> CharacterId {
        self.id
    }
}

/// What happened to a completed fetch
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The new character is displayed.
    Applied,

    /// The fetch was cancelled or superseded, and its result was discarded.
    Stale,
}

/// Which controls are currently usable
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Controls {
    pub previous: bool,
    pub next: bool,
    pub search: bool,
}

/// The viewer's ui state.
///
/// This is only changed through its transition functions.
#[derive(Debug, Default)]
pub struct ViewerState {
    /// The raw contents of the id input field
    input: String,

    /// The displayed character, with its episodes
    character: Option<CharacterRecord>,

    is_loading: bool,
    generation: u64,
    mounted: bool,
}

impl ViewerState {
    /// Make a new, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw contents of the id input field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The displayed character, if one was loaded
    pub fn character(&self) -> Option<&CharacterRecord> {
        self.character.as_ref()
    }

    /// The displayed episodes.
    ///
    /// These always belong to the displayed character.
    pub fn episodes(&self) -> &[EpisodeRecord] {
        self.character
            .as_ref()
            .map(|character| character.episodes.as_slice())
            .unwrap_or_default()
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The generation of the latest fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the initial fetch was already triggered
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Get which controls are usable.
    ///
    /// Everything is disabled while loading.
    /// Previous is also disabled if the input is not an id above 1.
    pub fn controls(&self) -> Controls {
        let enabled = !self.is_loading;
        let has_previous = CharacterId::parse_input(&self.input)
            .ok()
            .and_then(CharacterId::previous)
            .is_some();

        Controls {
            previous: enabled && has_previous,
            next: enabled,
            search: enabled,
        }
    }

    /// Edit the id input field.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Mark the viewer as mounted.
    ///
    /// Returns `true` only the first time.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Start a fetch.
    ///
    /// Fails with [`ViewerError::Busy`] if a fetch is already in flight.
    pub fn begin_fetch(&mut self, id: CharacterId) -> Result<FetchTicket, ViewerError> {
        if self.is_loading {
            return Err(ViewerError::Busy);
        }

        self.is_loading = true;
        self.generation += 1;

        info!("fetching character {id}");

        Ok(FetchTicket {
            id,
            generation: self.generation,
        })
    }

    /// Finish a fetch.
    ///
    /// On success, the character is replaced wholesale and the input is set to its id.
    /// On failure, only the loading flag is cleared.
    /// Results for stale tickets are discarded without touching anything.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<CharacterRecord, FetchError>,
    ) -> Result<Completion, ViewerError> {
        if ticket.generation != self.generation {
            info!(
                "discarding result for character {} from generation {}, latest is {}",
                ticket.id, ticket.generation, self.generation
            );
            return Ok(Completion::Stale);
        }

        self.is_loading = false;

        match result {
            Ok(character) => {
                info!(
                    "loaded character {} \"{}\" with {} episodes",
                    character.id,
                    character.name,
                    character.episodes.len()
                );
                self.input = character.id.to_string();
                self.character = Some(character);

                Ok(Completion::Applied)
            }
            Err(source) => {
                warn!("failed to load character {}: {source}", ticket.id);
                Err(ViewerError::NotFound {
                    id: ticket.id,
                    source,
                })
            }
        }
    }

    /// Abandon the in-flight fetch, if any.
    ///
    /// Its ticket becomes stale.
    /// Returns `true` if a fetch was in flight.
    pub fn cancel_fetch(&mut self) -> bool {
        if !self.is_loading {
            return false;
        }

        info!("cancelling fetch from generation {}", self.generation);
        self.is_loading = false;
        self.generation += 1;

        true
    }

    /// Refuse to navigate below the first id.
    pub fn block_navigation(&self) -> ViewerError {
        warn!("no character before \"{}\"", self.input);
        ViewerError::OutOfRange
    }
}
