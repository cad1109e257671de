use std::time::Duration;

use clap::Args;
use serde::Serialize;
use stillpoint_core::{BreathPhase, BreathingTimer, Config, Event, TickDriver};
use tracing::info;

#[derive(Args)]
pub struct BreatheArgs {
    /// Stop after this many full cycles (0 = until Ctrl-C; default from breathing.cycles)
    #[arg(long)]
    cycles: Option<u32>,
    /// Print one JSON snapshot per update
    #[arg(long)]
    json: bool,
    /// Tick period in milliseconds
    #[arg(long, default_value_t = 1000, hide = true)]
    tick_ms: u64,
}

#[derive(Serialize)]
struct PhaseRow {
    phase: BreathPhase,
    duration_secs: u32,
    instruction: &'static str,
}

pub fn phases(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<PhaseRow> = BreathPhase::ALL
        .iter()
        .map(|&phase| PhaseRow {
            phase,
            duration_secs: phase.duration_secs(),
            instruction: phase.instruction(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!("{:<7} {:>2}s  {}", row.phase, row.duration_secs, row.instruction);
    }
    println!(
        "cycle   {:>2}s",
        stillpoint_core::breathing::cycle_duration_secs()
    );
    Ok(())
}

pub async fn run(args: BreatheArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let cycles = match args.cycles {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.breathing_cycles(),
    };
    let show_instructions = config.breathing.show_instructions;

    let driver = TickDriver::spawn(BreathingTimer::new(), Duration::from_millis(args.tick_ms));
    let mut snapshots = driver.watch();
    driver.apply(BreathingTimer::toggle).await?;
    info!(?cycles, "breathing exercise started");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
            changed = snapshots.changed() => {
                changed?;
                let snapshot = snapshots.borrow_and_update().clone();
                render(&snapshot, args.json, show_instructions)?;
                if let Event::BreathingSnapshot { cycles_completed, .. } = snapshot {
                    if cycles.is_some_and(|n| cycles_completed >= u64::from(n)) {
                        break;
                    }
                }
            }
        }
    }

    driver.apply(BreathingTimer::stop).await?;
    let timer = driver.shutdown().await?;

    if args.json {
        println!("{}", serde_json::to_string(&timer.snapshot())?);
    } else {
        println!(
            "Stopped at {} {} ({} cycles completed)",
            timer.phase(),
            timer.seconds_remaining(),
            timer.cycles_completed()
        );
    }
    Ok(())
}

fn render(snapshot: &Event, json: bool, show_instructions: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }
    if let Event::BreathingSnapshot {
        phase,
        seconds_remaining,
        instruction,
        ..
    } = snapshot
    {
        if show_instructions {
            println!("{phase:<7} {seconds_remaining:>2}  {instruction}");
        } else {
            println!("{phase:<7} {seconds_remaining:>2}");
        }
    }
    Ok(())
}
