mod logging;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use content::{InMemoryCatalog, seed_catalog};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use humbug_core::game::EffectTimings;
use humbug_core::model::GameRules;
use humbug_core::rng::{RandomSource, SeededRandom, ThreadRandom};
use services::{
    BriefGenerator, CannedBriefGenerator, FallbackBriefGenerator, GameController, GameSettings,
    LlmBriefGenerator,
};
use tokio::runtime::Handle;
use tracing::info;
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Humbug";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidCatalog { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCatalog { raw } => write!(f, "invalid --catalog value: {raw}"),
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
    game: Arc<GameController>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn game(&self) -> Arc<GameController> {
        Arc::clone(&self.game)
    }
}

#[derive(Debug)]
struct Args {
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    fast: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--seed <u64>] [--fast]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in catalog, OS-seeded reactions, standard effect timings");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HUMBUG_CATALOG, HUMBUG_SEED, RUST_LOG");
    eprintln!("  HUMBUG_AI_API_KEY, HUMBUG_AI_BASE_URL, HUMBUG_AI_MODEL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            catalog: std::env::var("HUMBUG_CATALOG")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            seed: std::env::var("HUMBUG_SEED")
                .ok()
                .and_then(|value| value.parse::<u64>().ok()),
            fast: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalog { raw: value });
                    }
                    parsed.catalog = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--fast" => parsed.fast = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn settings(&self) -> GameSettings {
        GameSettings {
            rules: GameRules::standard(),
            timings: if self.fast {
                EffectTimings::instant()
            } else {
                EffectTimings::standard()
            },
        }
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        }
    }
}

async fn load_catalog(
    path: Option<&PathBuf>,
) -> Result<InMemoryCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let catalog = InMemoryCatalog::load(path).await?;
            info!(path = %path.display(), sessions = catalog.sessions().len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(seed_catalog()?),
    }
}

fn brief_generator(seed: Option<u64>) -> Arc<dyn BriefGenerator> {
    let llm = LlmBriefGenerator::from_env();
    if llm.enabled() {
        info!("brief backend configured");
    }
    let canned = match seed {
        Some(seed) => CannedBriefGenerator::new(Box::new(SeededRandom::new(seed))),
        None => CannedBriefGenerator::default(),
    };
    Arc::new(FallbackBriefGenerator::new(Arc::new(llm), canned))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init();

    let catalog = load_catalog(parsed.catalog.as_ref()).await?;
    let game = GameController::new(
        Arc::new(catalog),
        brief_generator(parsed.seed),
        parsed.random_source(),
        parsed.settings(),
        Handle::current(),
    );
    info!(seed = ?parsed.seed, fast = parsed.fast, "launching desktop window");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        game: Arc::new(game),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
