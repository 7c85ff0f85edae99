//! Truth Roulette - Entry Point
//!
//! Sets up logging, config and the async runtime, then runs a line-based
//! game loop over a `GameSession`.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use truth_roulette::core::error::Result;
use truth_roulette::core::GameConfig;
use truth_roulette::game::GameSession;
use truth_roulette::llm::HeadlineProvider;
use truth_roulette::statements::{OfflineProvider, StatementProvider, StatementSet};
use truth_roulette::ui::display::render;
use truth_roulette::ui::{parse_intent, GameUI, Intent};

/// Truth Roulette - spot the fake headline, then pull the trigger
#[derive(Parser, Debug)]
#[command(name = "truth-roulette")]
struct Args {
    /// Game settings file
    #[arg(long, default_value = "data/game.toml")]
    config: PathBuf,

    /// Random seed for shell generation (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Use the built-in headlines even if LLM_API_KEY is set
    #[arg(long)]
    offline: bool,
}

/// What woke the input loop
enum HostEvent {
    Line(io::Result<Option<String>>),
    RoundDue,
}

/// Either headline source, chosen at startup
enum Provider {
    Online(HeadlineProvider),
    Offline(OfflineProvider),
}

impl StatementProvider for Provider {
    async fn fetch(&self) -> Result<StatementSet> {
        match self {
            Provider::Online(p) => p.fetch().await,
            Provider::Offline(p) => p.fetch().await,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("truth_roulette=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = if args.config.exists() {
        GameConfig::load(&args.config)?
    } else {
        tracing::warn!("{} not found - using default settings", args.config.display());
        GameConfig::default()
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let seed = config.seed.unwrap_or_else(|| rand::random());
    tracing::info!("Truth Roulette starting (seed {})", seed);

    let provider = if args.offline {
        Provider::Offline(OfflineProvider::new(seed))
    } else {
        match HeadlineProvider::from_env() {
            Ok(p) => Provider::Online(p),
            Err(_) => {
                tracing::warn!("LLM_API_KEY not set - using built-in headlines");
                Provider::Offline(OfflineProvider::new(seed))
            }
        }
    };

    let rt = Runtime::new()?;
    let max_health = config.max_health;
    let mut session = GameSession::new(config, provider, ChaCha8Rng::seed_from_u64(seed));
    let mut ui = GameUI::new();

    println!("\n=== TRUTH ROULETTE ===");
    println!("Pick the fake headline, then choose where the shotgun points.");
    println!();
    println!("Commands:");
    println!("  start           - Connect and load the first round");
    println!("  1, 2, ...       - Pick a headline");
    println!("  fire me         - Shoot yourself");
    println!("  fire dealer     - Shoot the dealer");
    println!("  restart         - Re-sync after game over (or back to the intro)");
    println!("  log             - Toggle the event log");
    println!("  quit / q        - Exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        ui.observe(session.rounds_started(), session.state());
        print!("{}", render(session.state(), max_health));
        if ui.show_action_log {
            for entry in ui.recent(5) {
                println!("    r{} | {}", entry.round, entry.message);
            }
        }

        print!("> ");
        io::stdout().flush()?;

        // Input and the round-over deadline race; typing during the delay
        // (e.g. `restart`) is handled before the next round loads.
        let event = rt.block_on(async {
            tokio::select! {
                line = lines.next_line() => HostEvent::Line(line),
                _ = session.next_round_due() => HostEvent::RoundDue,
            }
        });

        let input = match event {
            HostEvent::RoundDue => {
                println!();
                rt.block_on(session.advance_if_due());
                continue;
            }
            HostEvent::Line(line) => match line? {
                Some(line) => line,
                None => break,
            },
        };
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "log" {
            ui.toggle_log();
            continue;
        }

        let Some(intent) = parse_intent(input) else {
            println!("Unknown command.");
            continue;
        };

        if intent == Intent::Quit {
            break;
        }

        if let Some(effect) = rt.block_on(session.dispatch(intent))? {
            ui.log_shot(session.rounds_started(), effect);
        }
    }

    println!(
        "\nDisconnected after {} round(s). Final integrity: you {}, dealer {}.",
        session.rounds_started(),
        session.state().player_health(),
        session.state().dealer_health()
    );
    Ok(())
}
