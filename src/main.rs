use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use unifinder_lib::modules::search::application::suggest_countries;
use unifinder_lib::modules::search::{
    FacetSet, FilterCategory, FilterSelection, SessionSnapshot, SessionState,
};
use unifinder_lib::shared::config::DirectoryConfig;
use unifinder_lib::shared::utils::logger::init_logger;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let country = cli.country.clone().unwrap_or_default();

    if cli.suggest {
        for suggestion in suggest_countries(&country) {
            println!("{}", suggestion);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = DirectoryConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let controller =
        unifinder_lib::build_controller(&config).context("failed to set up directory client")?;

    let mut updates = controller.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().state;
            log::debug!("Session state -> {}", state);
        }
    });

    let mut snapshot = match controller.start_search(&country).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::debug!("Search not started: {}", e);
            controller.snapshot().await
        }
    };

    let category = FilterCategory::from(cli.category);
    let wants_filter = cli.state.is_some() || category != FilterCategory::All;
    if snapshot.state == SessionState::Success && wants_filter {
        let facets = snapshot.facets.clone().unwrap_or_default();
        let state = match cli.state.as_deref() {
            Some(input) => match resolve_state(&facets, input) {
                Some(state) => Some(state),
                None => {
                    eprintln!("Unknown state/province '{}'.", input);
                    print_facets(&facets);
                    return Ok(ExitCode::FAILURE);
                }
            },
            None => None,
        };
        snapshot = controller
            .change_filter(FilterSelection::new(state, category))
            .await
            .context("failed to apply filter")?;
    }

    drop(controller);
    if let Err(e) = watcher.await {
        log::debug!("State watcher ended abnormally: {}", e);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?
        );
    } else {
        render(&snapshot);
    }

    Ok(match snapshot.state {
        SessionState::Success | SessionState::Empty => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn init_logging(verbose: u8) {
    let (log_level, trace_level) = match verbose {
        0 => (log::LevelFilter::Warn, tracing::Level::WARN),
        1 => (log::LevelFilter::Debug, tracing::Level::DEBUG),
        _ => (log::LevelFilter::Trace, tracing::Level::TRACE),
    };

    init_logger(log_level);

    // Adapter events go through `tracing`; `log` records stay with env_logger.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(trace_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install tracing subscriber: {}", e);
    }
}

/// Match user input to a facet value, ignoring case.
fn resolve_state(facets: &FacetSet, input: &str) -> Option<String> {
    let input = input.trim().to_lowercase();
    facets
        .iter()
        .find(|facet| facet.to_lowercase() == input)
        .map(str::to_string)
}

fn print_facets(facets: &FacetSet) {
    if facets.is_empty() {
        eprintln!("No state data available");
        return;
    }
    eprintln!("Available states/provinces:");
    for facet in facets.iter() {
        eprintln!("  - {}", facet);
    }
}

fn render(snapshot: &SessionSnapshot) {
    if let Some(message) = &snapshot.message {
        println!("{}", message.text);
    }
    if snapshot.state != SessionState::Success {
        return;
    }

    if let Some(summary) = &snapshot.summary {
        println!("{}", summary);
    }
    if let Some(label) = &snapshot.facet_label {
        println!("{}", label);
    }
    println!();

    for card in snapshot.cards() {
        println!("{}  [{}]", card.name, card.institution_type);
        println!("  Country: {}", card.country);
        if let Some(state) = &card.state_province {
            println!("  State/Province: {}", state);
        }
        if let Some(domain) = &card.domain {
            println!("  Domain: {}", domain);
        }
        if let Some(website) = &card.website {
            println!("  Website: {}", website);
        }
        println!();
    }
}
