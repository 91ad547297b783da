//! Color Drop entry point
//!
//! The interactive game runs inside a host view that forwards pointer
//! events. Natively this binary plays scripted rounds against the same
//! simulation, which is handy for checking layouts for a given seed.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use color_drop::sim::{DropOutcome, PointerEvent};
use color_drop::{Game, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drag colored circles into the target zone", long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of circles per round
    #[arg(long)]
    circles: Option<usize>,
    /// Play area width
    #[arg(long)]
    width: Option<f32>,
    /// Play area height
    #[arg(long)]
    height: Option<f32>,
    /// Rounds to autoplay
    #[arg(long, default_value_t = 1)]
    rounds: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(n) = args.circles {
        settings.circle_count = n;
    }
    if let Some(w) = args.width {
        settings.area_width = w;
    }
    if let Some(h) = args.height {
        settings.area_height = h;
    }
    settings.validate().context("invalid settings")?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Color Drop (native) starting...");
    let mut game = Game::new(settings, seed).context("laying out the first round")?;

    for round in 1..=args.rounds {
        if round > 1 {
            game.restart().context("laying out the next round")?;
        }
        let drops = autoplay(&mut game);
        let frame = game.frame();
        println!(
            "Round {}: cleared in {} drags ({} vertices, overlay: {})",
            round,
            drops,
            frame.vertices.len(),
            frame.overlay.map(|o| o.text).unwrap_or_default()
        );
    }

    println!("Seed: {}", game.seed());
    Ok(())
}

/// Drag circles until the round is over. Every other drag first misses
/// on purpose, leaving the circle just above the band.
fn autoplay(game: &mut Game) -> u32 {
    let mut drags = 0;
    while !game.board().is_round_over() {
        let Some(target) = game.board().target_circle() else {
            break;
        };
        let (id, center) = (target.id, target.center);
        let zone = game.board().target_zone();

        let drop_at = if drags % 2 == 1 {
            // Just above the band: the body overlaps it but the center does not
            glam::Vec2::new(center.x, zone.min.y - 1.0)
        } else {
            zone.center()
        };

        game.pointer(PointerEvent::Press(center));
        game.pointer(PointerEvent::Move(drop_at));
        let response = game.pointer(PointerEvent::Release(drop_at));
        drags += 1;

        match response.drop {
            Some(DropOutcome::Missed) => log::info!("Circle {} missed the zone", id),
            Some(DropOutcome::Removed { remaining }) => {
                log::info!("Circle {} dropped, {} left", id, remaining)
            }
            Some(DropOutcome::Cleared) => log::info!("Circle {} dropped, round over", id),
            Some(DropOutcome::Ignored) | None => {
                log::warn!("Circle {} could not be picked up", id);
                break;
            }
        }
    }
    drags
}
