use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizSettings;
use services::QuizSession;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "¿Quién quiere ser millonario? Cultura de Paz";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log-level value: {raw}"),
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
    quiz_session: Arc<QuizSession>,
}

impl UiApp for DesktopApp {
    fn quiz_session(&self) -> Arc<QuizSession> {
        Arc::clone(&self.quiz_session)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--log-level <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --log-level <filter>  tracing filter, e.g. `debug` or `services=debug` (default: info)");
    eprintln!("  -h, --help            show this message");
}

enum Parsed {
    Run(Args),
    Help,
}

struct Args {
    log_filter: EnvFilter,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut log_filter = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-level" => {
                    let value = require_value(args, "--log-level")?;
                    let filter = EnvFilter::try_new(&value)
                        .map_err(|_| ArgsError::InvalidLogFilter { raw: value.clone() })?;
                    log_filter = Some(filter);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            log_filter: log_filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }))
    }
}

fn init_tracing(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing(args.log_filter)?;

    let settings = QuizSettings::default();
    let quiz_session = Arc::new(QuizSession::new(settings)?);
    info!(
        seconds_per_question = settings.seconds_per_question(),
        reveal_delay_ms = settings.reveal_delay().as_millis(),
        "quiz session ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_session });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn no_arguments_runs_with_default_filter() {
        let parsed = parse(&[]).unwrap();
        let Parsed::Run(args) = parsed else {
            panic!("expected a run");
        };
        assert_eq!(args.log_filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_level_sets_filter() {
        let parsed = parse(&["--log-level", "services=debug"]).unwrap();
        let Parsed::Run(args) = parsed else {
            panic!("expected a run");
        };
        assert_eq!(args.log_filter.to_string(), "services=debug");
    }

    #[test]
    fn help_wins_over_other_flags() {
        assert!(matches!(parse(&["--help"]), Ok(Parsed::Help)));
        assert!(matches!(parse(&["--log-level", "warn", "-h"]), Ok(Parsed::Help)));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--verbose"
        ));
        assert!(matches!(
            parse(&["--log-level"]),
            Err(ArgsError::MissingValue { flag: "--log-level" })
        ));
        assert!(matches!(
            parse(&["--log-level", "services=loud"]),
            Err(ArgsError::InvalidLogFilter { raw }) if raw == "services=loud"
        ));
    }
}
