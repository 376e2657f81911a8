// ============================================================================
// Live Ticker Example
// ============================================================================
//
// Run with:
//   RUST_LOG=salary_ticker=debug cargo run --example live_ticker --features "async logging"

use rust_decimal_macros::dec;
use salary_ticker::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Salary Ticker Example ===\n");

    let config = SalaryConfig::standard_office(dec!(15000)).with_currency("USD");
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        return;
    }
    println!(
        "Shift {}-{}, {} days/month, showing {}\n",
        config.start_time, config.end_time, config.work_days_per_month, config.currency
    );

    let handle = spawn_ticker(
        config,
        DigitFormatter::default(),
        Arc::new(SystemClock),
        Arc::new(LoggingTickObserver),
        TickerConfig::default(),
    );

    let mut snapshots = handle.subscribe();
    print_snapshot(&handle.latest());

    for _ in 0..5 {
        if snapshots.changed().await.is_err() {
            break;
        }
        let snapshot = snapshots.borrow_and_update().clone();
        print_snapshot(&snapshot);
    }

    println!("\nSwitching display currency to ZWL...");
    handle.update_config(handle.config().with_currency("ZWL"));
    tokio::time::sleep(Duration::from_millis(100)).await;
    print_snapshot(&handle.latest());

    handle.shutdown().await;
    println!("\nTicker stopped");
}

fn print_snapshot(snapshot: &TickSnapshot) {
    let volatile: Vec<String> = snapshot
        .display
        .volatile_positions()
        .iter()
        .map(|p| p.to_string())
        .collect();

    println!(
        "[{}] {:<24} {:?}, worked {}, left {}, rolling [{}]",
        snapshot.at.format("%H:%M:%S"),
        snapshot.display.to_display_string(),
        snapshot.earnings.phase,
        snapshot.time_info.worked_time,
        snapshot.time_info.remaining_time,
        volatile.join(", ")
    );
    println!("    {}", snapshot.title);
}
