use std::time::Duration;

use clap::Parser;
use snake_arena::config::ConfigManager;
use snake_arena::{log, logger, PlayerAction, Universe, WorldRng, WorldSettings};
use tokio::time::interval;

/// Headless driver for the snake arena engine: steps the universe at the
/// configured frame rate and logs what happens, standing in for the
/// windowing/rendering side.
#[derive(Parser)]
#[command(name = "snake_arena_runner")]
struct Args {
    /// YAML world settings file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<String>,

    #[arg(long, default_value_t = 4)]
    players: u32,

    /// Frames to simulate before exiting.
    #[arg(long, default_value_t = 1800)]
    ticks: u64,

    /// World seed; drawn randomly when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let settings = match &args.config {
        Some(path) => ConfigManager::<_, WorldSettings>::from_yaml_file(path).get_config()?,
        None => WorldSettings::default(),
    };

    let rng = match args.seed {
        Some(seed) => WorldRng::new(seed),
        None => WorldRng::from_random(),
    };
    log!("World seed: {}", rng.seed());

    let mut universe = Universe::new(settings, rng)?;
    for i in 1..=args.players {
        universe.add_player(&format!("player-{}", i));
    }

    let dt = 1.0 / universe.settings.frame_rate as f32;
    let mut ticker = interval(Duration::from_secs_f32(dt));

    for tick in 0..args.ticks {
        ticker.tick().await;

        // Demo steering: every player chases the active item.
        let target = universe.active_item().at;
        let names: Vec<String> = universe.snakes.keys().cloned().collect();
        for name in names {
            universe.handle_player_action(&name, PlayerAction::Redirect(target));
        }

        universe.update(dt);

        if tick % universe.settings.frame_rate as u64 == 0 {
            let lengths: Vec<String> = universe
                .snakes
                .iter()
                .map(|(name, snake)| format!("{}:{}", name, snake.links.len()))
                .collect();
            let item = universe.active_item();
            log!(
                "tick {} | {} | {:?} at ({:.0}, {:.0}) | {} dead links",
                tick,
                lengths.join(" "),
                item.kind,
                item.at.x,
                item.at.y,
                universe.dead_links.len()
            );
        }
    }

    log!("Run complete after {} ticks", args.ticks);
    Ok(())
}
