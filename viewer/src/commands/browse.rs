use crate::render::Renderer;
use anyhow::Context;
use character_viewer::CharacterId;
use character_viewer::CharacterSource;
use character_viewer::CharacterViewer;
use character_viewer::ViewerError;
use std::io::Write;
use tokio::sync::mpsc::Receiver;

const HELP: &str = "\
Commands:
  <id>              search for a character by id
  s, search, Enter  search for the id in the input field
  n, next           show the next character
  p, prev           show the previous character
  h, help           show this message
  q, quit           exit
Press Ctrl+C to cancel a search in progress.";

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "browse",
    description = "browse characters interactively"
)]
pub struct Options {}

/// A line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Load the first character.
    ///
    /// This is not typed by the user.
    Mount,

    /// Search, optionally replacing the input field first
    Search(Option<String>),
    Next,
    Previous,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Anything that is not a known command is typed into the id input field.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" | "s" | "search" => Self::Search(None),
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Search(Some(line.to_string())),
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Done(Result<(), ViewerError>),
    Interrupted(std::io::Result<()>),
}

async fn dispatch<S>(viewer: &mut CharacterViewer<S>, command: Command) -> Result<(), ViewerError>
where
    S: CharacterSource,
{
    match command {
        Command::Mount => viewer.mount().await,
        Command::Search(Some(input)) => {
            viewer.set_input(input);
            viewer.search_by_id().await
        }
        Command::Search(None) => viewer.search_by_id().await,
        Command::Next => viewer.go_to_next().await,
        Command::Previous => viewer.go_to_previous().await,
        Command::Help | Command::Quit => Ok(()),
    }
}

/// Get the id a command will fetch.
///
/// Returns `None` if the command will be rejected without a request.
fn pending_fetch<S>(viewer: &CharacterViewer<S>, command: &Command) -> Option<CharacterId>
where
    S: CharacterSource,
{
    match command {
        Command::Mount => (!viewer.state().is_mounted()).then_some(CharacterId::FIRST),
        Command::Search(Some(input)) => {
            if viewer.state().is_loading() {
                return None;
            }
            CharacterId::parse_input(input).ok()
        }
        Command::Search(None) => viewer.search_target().ok(),
        Command::Next => viewer.next_target().ok(),
        Command::Previous => viewer.previous_target().ok(),
        Command::Help | Command::Quit => None,
    }
}

/// Run a command, cancelling it on ctrl+c.
async fn run<S>(
    viewer: &mut CharacterViewer<S>,
    renderer: &Renderer,
    command: Command,
) -> anyhow::Result<()>
where
    S: CharacterSource,
{
    if let Some(id) = pending_fetch(viewer, &command) {
        println!("Loading character {id}...");
    }

    let outcome = tokio::select! {
        result = dispatch(viewer, command) => Outcome::Done(result),
        result = tokio::signal::ctrl_c() => Outcome::Interrupted(result),
    };

    match outcome {
        Outcome::Done(Ok(())) => {}
        Outcome::Done(Err(error)) => {
            println!("{}", renderer.alert(&error));
        }
        Outcome::Interrupted(result) => {
            result.context("failed to listen for ctrl+c")?;
            if viewer.cancel_fetch() {
                println!("! Search cancelled.");
            }
        }
    }

    print!("{}", renderer.render(viewer.state()));

    Ok(())
}

/// Read stdin lines on a dedicated thread.
///
/// Tokio's stdin would keep the runtime alive at exit while blocked on a read.
fn spawn_input_thread() -> Receiver<std::io::Result<String>> {
    let (tx, rx) = tokio::sync::mpsc::channel(1);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

pub async fn exec<S>(
    mut viewer: CharacterViewer<S>,
    renderer: Renderer,
    _options: Options,
) -> anyhow::Result<()>
where
    S: CharacterSource,
{
    let mut input = spawn_input_thread();

    run(&mut viewer, &renderer, Command::Mount).await?;

    loop {
        print!("id> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let line = tokio::select! {
            line = input.recv() => line,
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for ctrl+c")?;
                println!();
                None
            }
        };
        let line = match line {
            Some(line) => line.context("failed to read input")?,
            None => break,
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
            }
            command => {
                run(&mut viewer, &renderer, command).await?;
            }
        }
    }

    Ok(())
}
