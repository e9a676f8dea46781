use anyhow::ensure;
use anyhow::Context;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// The config path used when none is given
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    #[serde(rename = "api-base-url", default = "default_api_base_url")]
    pub api_base_url: Url,

    #[serde(
        rename = "episode-concurrency",
        default = "default_episode_concurrency"
    )]
    pub episode_concurrency: NonZeroUsize,

    /// The total timeout of a single request, in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub logging: ConfigLogging,
}

impl Config {
    /// Load and validate a config.
    ///
    /// If no path is given and the default config file does not exist,
    /// the default config is used.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                let exists = path.try_exists().with_context(|| {
                    format!("failed to check if \"{}\" exists", path.display())
                })?;

                if exists {
                    Self::load_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a config.
    pub fn load_path<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to load config file at \"{}\"", path.display()))?;
        let config = Self::parse(&data)
            .with_context(|| format!("failed to parse config file at \"{}\"", path.display()))?;

        Ok(config)
    }

    /// Parse and validate a config.
    pub fn parse(data: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(data)?;

        let scheme = config.api_base_url.scheme();
        ensure!(
            scheme == "http" || scheme == "https",
            "the api base url \"{}\" must be http or https",
            config.api_base_url
        );
        ensure!(
            !config.api_base_url.cannot_be_a_base(),
            "the api base url \"{}\" cannot be a base",
            config.api_base_url
        );
        ensure!(
            config.request_timeout > 0,
            "the request timeout must be at least 1 second"
        );

        Ok(config)
    }

    /// Get the request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            episode_concurrency: default_episode_concurrency(),
            request_timeout: default_request_timeout(),
            color: default_color(),
            logging: ConfigLogging::default(),
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ConfigLogging {
    #[serde(default)]
    pub directives: Vec<String>,
}

fn default_api_base_url() -> Url {
    Url::parse(rick_and_morty::DEFAULT_BASE_URL).expect("invalid default base url")
}

fn default_episode_concurrency() -> NonZeroUsize {
    character_viewer::DEFAULT_EPISODE_CONCURRENCY
}

fn default_request_timeout() -> u64 {
    30
}

fn default_color() -> bool {
    true
}
