use clap::Parser;
use headline_tally::ScrapeReport;
use headline_tally::cli::Cli;
use headline_tally::outputs::chart::{BarChart, ChartRenderer, TerminalChart};
use headline_tally::outputs::json::report_to_json;
use headline_tally::outputs::xlsx::XlsxExporter;
use headline_tally::scrapers::fetcher::HttpFetcher;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Renderer used with `--no-chart`.
struct NoChart;

impl ChartRenderer for NoChart {
    fn render(&mut self, _chart: &BarChart) -> headline_tally::Result<()> {
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = args.to_config()?;
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let exporter = XlsxExporter::new(&args.output);
    let mut renderer: Box<dyn ChartRenderer> = if args.no_chart || args.json {
        Box::new(NoChart)
    } else {
        Box::new(TerminalChart::default())
    };

    let report = match headline_tally::scrape_and_analyze(
        &fetcher,
        &config,
        &exporter,
        renderer.as_mut(),
    )
    .await
    {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, url = %config.url, "Scrape failed; nothing was exported");
            return Err(e.into());
        }
    };

    if args.json {
        println!("{}", report_to_json(&report)?);
    } else {
        print_summary(&report);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        titles = report.titles.len(),
        path = %exporter.path().display(),
        "Execution complete"
    );
    Ok(())
}

fn print_summary(report: &ScrapeReport) {
    println!();
    println!("Filtered article titles:");
    for title in &report.titles {
        println!("{title}");
    }
    println!();
    println!("Number of filtered articles: {}", report.titles.len());
    println!();
    println!("Article count by keyword:");
    for entry in report.counts.iter() {
        println!("  {}: {}", entry.keyword, entry.count);
    }
}
