use std::time::Duration;

use clap::Args;
use stillpoint_core::{find_guide, Config, Event, MeditationTimer, TickDriver, ValidationError};
use tracing::info;

#[derive(Args)]
pub struct MeditateArgs {
    /// Guide title (see `guides list`)
    #[arg(long, conflicts_with = "minutes")]
    guide: Option<String>,
    /// Custom length in minutes (1-60)
    #[arg(long)]
    minutes: Option<u32>,
    /// Print one JSON snapshot per update
    #[arg(long)]
    json: bool,
    /// Tick period in milliseconds
    #[arg(long, default_value_t = 1000, hide = true)]
    tick_ms: u64,
}

fn select_timer(args: &MeditateArgs, config: &Config) -> Result<MeditationTimer, Box<dyn std::error::Error>> {
    if let Some(title) = &args.guide {
        let guide = find_guide(title).ok_or_else(|| ValidationError::UnknownGuide(title.clone()))?;
        return Ok(MeditationTimer::new(guide));
    }
    if let Some(minutes) = args.minutes {
        return Ok(MeditationTimer::custom(minutes));
    }
    Ok(config.meditation_timer()?)
}

pub async fn run(args: MeditateArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let timer = select_timer(&args, config)?;
    info!(title = timer.title(), secs = timer.duration_secs(), "meditation session started");

    let driver = TickDriver::spawn(timer, Duration::from_millis(args.tick_ms));
    let mut snapshots = driver.watch();
    driver.apply(MeditationTimer::toggle_play).await?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                driver.apply(MeditationTimer::pause).await?;
                break;
            }
            changed = snapshots.changed() => {
                changed?;
                let snapshot = snapshots.borrow_and_update().clone();
                if args.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                }
                if let Event::MeditationSnapshot { title, display, running, remaining_secs, .. } = snapshot {
                    if !args.json {
                        println!("{title}  {display}");
                    }
                    if !running && remaining_secs == 0 {
                        break;
                    }
                }
            }
        }
    }

    let timer = driver.shutdown().await?;
    if !args.json {
        if timer.is_finished() {
            println!("Session complete: {}", timer.title());
        } else {
            println!("Paused at {}", timer.display());
        }
    }
    Ok(())
}
