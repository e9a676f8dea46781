use character_viewer::StatusBadge;
use character_viewer::ViewerError;
use character_viewer::ViewerState;
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Renders the viewer state as text.
#[derive(Debug, Copy, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn badge(&self, status: &str) -> String {
        let badge = StatusBadge::from_status(status);
        if !self.color {
            return format!("[{status}]");
        }

        let style = match badge {
            StatusBadge::Success => "\x1b[30;42m",
            StatusBadge::Danger => "\x1b[97;41m",
            StatusBadge::Neutral => "\x1b[97;100m",
        };
        format!("{style} {status} {RESET}")
    }

    /// Render the character card and the controls.
    pub fn render(&self, state: &ViewerState) -> String {
        let mut out = String::new();

        match state.character() {
            Some(character) => {
                let _ = writeln!(out, "Id:       {}", character.id);
                let _ = writeln!(out, "Name:     {}", character.name);
                let _ = writeln!(out, "Status:   {}", self.badge(&character.status));
                let _ = writeln!(out, "Species:  {}", character.species);
                let _ = writeln!(out, "Gender:   {}", character.gender);
                let _ = writeln!(out, "Origin:   {}", character.origin);
                let _ = writeln!(out, "Location: {}", character.location);
                let _ = writeln!(out, "Image:    {}", character.image_url);
                let _ = writeln!(out, "Episodes:");
                for (i, episode) in state.episodes().iter().enumerate() {
                    let _ = writeln!(out, "  {}) {}", i + 1, episode.label());
                }
            }
            None => {
                let _ = writeln!(out, "No character loaded.");
            }
        }

        let controls = state.controls();
        let control = |key: &str, name: &str, enabled: bool| {
            if enabled {
                format!("[{key}] {name}")
            } else {
                format!("[-] {name}")
            }
        };
        let search = if state.is_loading() {
            "loading...".to_string()
        } else {
            control("s", "search", controls.search)
        };
        let _ = writeln!(
            out,
            "{}  {}  {}",
            control("p", "previous", controls.previous),
            search,
            control("n", "next", controls.next),
        );

        out
    }

    /// Render an error as a user-facing alert.
    pub fn alert(&self, error: &ViewerError) -> String {
        match error {
            ViewerError::NotFound { id, .. } => {
                format!("! Character {id} not found. Please enter a valid id.")
            }
            ViewerError::OutOfRange => {
                "! There is no character with an id below 1.".to_string()
            }
            ViewerError::InvalidId(error) => format!("! {error}. Please enter a valid id."),
            ViewerError::Busy => "! A character is already loading.".to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use character_viewer::CharacterId;
    use character_viewer::CharacterRecord;
    use character_viewer::EpisodeRecord;
    use character_viewer::FetchError;
    use url::Url;

    fn loaded_state(id: u64, status: &str) -> ViewerState {
        let id = CharacterId::new(id).unwrap();
        let mut state = ViewerState::new();
        let ticket = state.begin_fetch(id).unwrap();
        let record = CharacterRecord {
            id,
            name: "Rick Sanchez".to_string(),
            status: status.to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            origin: "Earth (C-137)".to_string(),
            location: "Citadel of Ricks".to_string(),
            image_url: Url::parse("https://rickandmortyapi.com/api/character/avatar/1.jpeg")
                .unwrap(),
            episodes: vec![
                EpisodeRecord {
                    id: 1,
                    name: "Pilot".to_string(),
                    episode_code: "S01E01".to_string(),
                },
                EpisodeRecord {
                    id: 2,
                    name: "Lawnmower Dog".to_string(),
                    episode_code: "S01E02".to_string(),
                },
            ],
        };
        state.complete_fetch(ticket, Ok(record)).unwrap();
        state
    }

    #[test]
    fn render_card() {
        let renderer = Renderer::new(false);
        let text = renderer.render(&loaded_state(1, "Alive"));
        let expected = "\
Id:       1
Name:     Rick Sanchez
Status:   [Alive]
Species:  Human
Gender:   Male
Origin:   Earth (C-137)
Location: Citadel of Ricks
Image:    https://rickandmortyapi.com/api/character/avatar/1.jpeg
Episodes:
  1) Pilot (SS01E01)
  2) Lawnmower Dog (SS01E02)
[-] previous  [s] search  [n] next
";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_previous_enabled_above_first() {
        let renderer = Renderer::new(false);
        let text = renderer.render(&loaded_state(2, "Dead"));
        assert!(text.ends_with("[p] previous  [s] search  [n] next\n"));
    }

    #[test]
    fn render_empty_and_loading() {
        let renderer = Renderer::new(false);
        let mut state = ViewerState::new();
        assert_eq!(
            renderer.render(&state),
            "No character loaded.\n[-] previous  [s] search  [n] next\n"
        );

        let _ticket = state.begin_fetch(CharacterId::FIRST).unwrap();
        assert_eq!(
            renderer.render(&state),
            "No character loaded.\n[-] previous  loading...  [-] next\n"
        );
    }

    #[test]
    fn colored_badges() {
        let renderer = Renderer::new(true);
        assert!(renderer.badge("Alive").contains("42m"));
        assert!(renderer.badge("dead").contains("41m"));
        assert!(renderer.badge("unknown").contains("100m"));
        assert!(renderer.badge("").contains("100m"));
    }

    #[test]
    fn alerts() {
        let renderer = Renderer::new(false);
        let id = CharacterId::new(900).unwrap();
        let error = ViewerError::NotFound {
            id,
            source: FetchError::Character {
                id,
                source: "404 Not Found".into(),
            },
        };
        assert_eq!(
            renderer.alert(&error),
            "! Character 900 not found. Please enter a valid id."
        );
        assert_eq!(
            renderer.alert(&ViewerError::OutOfRange),
            "! There is no character with an id below 1."
        );

        let error = ViewerError::from(CharacterId::parse_input("abc").unwrap_err());
        assert_eq!(
            renderer.alert(&error),
            "! \"abc\" is not a valid character id. Please enter a valid id."
        );
    }
}
