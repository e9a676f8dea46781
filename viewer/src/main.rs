mod commands;
mod config;
mod logger;
mod render;

pub use self::config::Config;
use self::render::Renderer;
use anyhow::Context;
use character_viewer::CharacterViewer;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, argh::FromArgs)]
#[argh(description = "browse characters from the rick and morty api")]
struct Options {
    #[argh(
        option,
        description = "the config file to use, defaults to \"config.toml\" if it exists"
    )]
    config: Option<PathBuf>,

    #[argh(switch, long = "no-color", description = "disable colored output")]
    no_color: bool,

    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Browse(self::commands::browse::Options),
    Show(self::commands::show::Options),
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    let config = Config::load(options.config.as_deref()).context("failed to load config")?;
    crate::logger::init(&config).context("failed to init logger")?;

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    tokio_rt.block_on(async_main(options, config))
}

async fn async_main(options: Options, config: Config) -> anyhow::Result<()> {
    info!("using api at \"{}\"", config.api_base_url);

    let client =
        rick_and_morty::Client::with_timeout(config.api_base_url.clone(), config.request_timeout())
            .context("failed to build api client")?;
    let viewer = CharacterViewer::new(client).with_episode_concurrency(config.episode_concurrency);
    let renderer = Renderer::new(config.color && !options.no_color);

    match options.subcommand {
        Subcommand::Browse(options) => {
            self::commands::browse::exec(viewer, renderer, options).await?;
        }
        Subcommand::Show(options) => {
            self::commands::show::exec(viewer, renderer, options).await?;
        }
    }

    Ok(())
}
