use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizPolicy;
use services::{CatalogSource, StaticSource, source_for};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidData { raw: String },
    InvalidRewardUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidData { raw } => write!(f, "invalid --data value: {raw:?}"),
            ArgsError::InvalidRewardUrl { raw } => {
                write!(f, "invalid --reward-url value (expected http(s)://...): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    source: Arc<dyn CatalogSource>,
    policy: QuizPolicy,
    reward_url: Option<Url>,
}

impl UiApp for DesktopApp {
    fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.source)
    }

    fn policy(&self) -> QuizPolicy {
        self.policy
    }

    fn reward_url(&self) -> Option<Url> {
        self.reward_url.clone()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    data: Option<String>,
    timed: bool,
    reward_url: Option<Url>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <path|url>] [--timed] [--reward-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data        bundled sample catalog");
    eprintln!("  --timed       off (classic mode, no countdown)");
    eprintln!("  --reward-url  none (secret word shown without a link)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA, QUIZ_TIMED=1, QUIZ_REWARD_URL, RUST_LOG");
}

fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Reward links must be absolute `http(s)` URLs with a host.
fn validate_reward_url(raw: String) -> Result<Url, ArgsError> {
    match Url::parse(raw.trim()) {
        Ok(url)
            if matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty()) =>
        {
            Ok(url)
        }
        _ => Err(ArgsError::InvalidRewardUrl { raw }),
    }
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let data = std::env::var("QUIZ_DATA")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let timed = std::env::var("QUIZ_TIMED").is_ok_and(|value| env_flag(&value));
        let reward_url = std::env::var("QUIZ_REWARD_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(validate_reward_url)
            .transpose()?;
        Ok(Self {
            data,
            timed,
            reward_url,
        })
    }

    /// Flags override whatever the environment provided.
    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidData { raw: value });
                    }
                    self.data = Some(value);
                }
                "--timed" => self.timed = true,
                "--reward-url" => {
                    let value = require_value(args, "--reward-url")?;
                    self.reward_url = Some(validate_reward_url(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }

    fn policy(&self) -> QuizPolicy {
        if self.timed {
            QuizPolicy::timed()
        } else {
            QuizPolicy::classic()
        }
    }

    fn source(&self) -> Arc<dyn CatalogSource> {
        match self.data.as_deref() {
            Some(location) => Arc::from(source_for(location)),
            None => Arc::new(StaticSource::bundled()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::from_env()
        .and_then(|args| args.parse(&mut argv))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_tracing();

    let source = parsed.source();
    let policy = parsed.policy();
    tracing::info!(
        source = %source.describe(),
        timed = policy.is_timed(),
        reward = parsed.reward_url.is_some(),
        "starting protocol assessment"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        source,
        policy,
        reward_url: parsed.reward_url,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Protocol Assessment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
