//! Headless runner: fast-forward a session under a fixed seed and print a
//! summary plus the tail of the audit log.

use anyhow::{bail, Result};
use clap::Parser;
use market_tycoon_core_rs::{Command, Engine, EngineConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Market Tycoon headless simulation runner", long_about = None)]
struct Args {
    /// RNG seed; the same seed replays the same market trajectory
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of simulated days to fast-forward
    #[arg(short, long, default_value_t = 90)]
    days: u32,

    /// Starting residency (country id from the standard catalog)
    #[arg(long, default_value = "USA")]
    country: String,

    /// Audit log entries to print at the end
    #[arg(long, default_value_t = 15)]
    log_tail: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut engine = Engine::new(EngineConfig::standard(args.seed))?;
    engine.apply(Command::StartGame {
        country_id: args.country.clone(),
    });
    if !engine.state().has_started {
        bail!("could not start in '{}': unknown country id", args.country);
    }

    for _ in 0..args.days {
        engine.apply(Command::NextDay);
        // Events pile up unplayed in a headless run; acknowledge them so
        // their effects reach the market.
        while !engine.state().major_event_queue.is_empty() {
            engine.apply(Command::DismissEventPopup);
        }
    }

    let state = engine.state();
    println!("=== Market Tycoon (seed {}) ===", args.seed);
    println!("Date:       {}", state.date);
    println!("Residency:  {}", state.player.current_residency);
    println!("Cash:       ${:.2}", state.player.cash);

    let holdings_value: f64 = state
        .player
        .portfolio
        .values()
        .filter_map(|item| {
            state
                .assets
                .get(&item.asset_id)
                .map(|asset| asset.price * item.quantity)
        })
        .sum();
    println!("Holdings:   ${holdings_value:.2}");
    println!("Loan:       ${:.2}", state.player.loan.amount);
    println!("Companies:  {}", state.player.companies.len());

    println!("\n--- Market ---");
    for asset in state.assets.values().take(12) {
        let day_move = (asset.price / asset.base_price - 1.0) * 100.0;
        println!(
            "{:<16} {:>14.4}  ({:+.2}% today)",
            asset.id, asset.price, day_move
        );
    }

    println!("\n--- Latest headlines ---");
    for item in state.daily_news.iter().take(5) {
        println!("[{}] {}", item.date, item.headline);
    }

    println!("\n--- Audit log (newest first) ---");
    for entry in state.log.entries().take(args.log_tail) {
        println!("[{}] {:?}: {}", entry.date, entry.category, entry.message);
    }

    Ok(())
}
