//! Text rendering of the dashboard.
//!
//! ```text
//! NEWS_API_KEY=... cargo run --example 01_dashboard -- MSFT 180
//! ```

use esg_pulse::core::config::{DEFAULT_DAYS, DEFAULT_TICKER};
use esg_pulse::{Config, Dashboard, DashboardSnapshot, PulseClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut args = std::env::args().skip(1);
    let ticker = args.next().unwrap_or_else(|| DEFAULT_TICKER.to_string());
    let days = args
        .next()
        .and_then(|d| d.parse().ok())
        .unwrap_or(DEFAULT_DAYS);

    let config = Config::from_env();
    let mut builder = PulseClient::builder();
    if let Some(t) = config.http_timeout {
        builder = builder.timeout(t);
    }
    let client = builder.build()?;

    println!(
        "{}",
        if config.constrained {
            "(constrained deployment)"
        } else {
            "(local development)"
        }
    );

    let snapshot = Dashboard::new(&client, config).render(&ticker, days).await;
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(s: &DashboardSnapshot) {
    println!("=== ESG Analytics - {} ({}) ===", s.company_name, s.ticker);

    match &s.esg {
        Some(esg) => {
            let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.2}"));
            println!("Environment: {}", fmt(esg.environment));
            println!("Social:      {}", fmt(esg.social));
            println!("Governance:  {}", fmt(esg.governance));
            println!("Sentiment:   {:.2}", s.average_sentiment());
        }
        None => println!("No ESG data available for this company"),
    }

    println!("\n--- Financial Performance ({} to {}) ---", s.window.start, s.window.end);
    match (s.prices.first(), s.prices.last()) {
        (Some(first), Some(last)) => {
            println!("{} closes", s.prices.len());
            println!("{}: {:.2}", first.date, first.close);
            println!("{}: {:.2}", last.date, last.close);
            let change = (last.close / first.close - 1.0) * 100.0;
            println!("Change: {change:+.2}%");
        }
        _ => println!("No price data"),
    }

    println!("\n--- News Analysis ---");
    match &s.news {
        Some(news) if news.table.is_empty() => println!("No headlines"),
        Some(news) => {
            for row in &news.table {
                println!(
                    "{:<25} {:<20} {:<8} {:.3}  {}",
                    row.date, row.source, row.label, row.score, row.headline
                );
            }
            println!("Average confidence: {:.3}", news.average);
        }
        None => println!("News analysis is disabled (PULSE_NEWS)"),
    }

    for d in &s.diagnostics {
        eprintln!("warning: {d}");
    }
}
