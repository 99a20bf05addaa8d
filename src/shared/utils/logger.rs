use log::{debug, info};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Install env_logger once; `level` applies to this crate's modules.
///
/// `RUST_LOG` still wins where it names a module explicitly.
pub fn init_logger(level: log::LevelFilter) {
    INIT.call_once(|| {
        // Module filters match by prefix, so "unifinder" also covers unifinder_lib.
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .filter_module("unifinder", level)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        debug!("Logger ready at {}", level);
    });
}

/// Log lines shared by the directory client and the search controller
pub struct LogContext;

impl LogContext {
    /// One finished upstream query.
    pub fn directory_query(provider: &str, field: &str, records: usize, elapsed_ms: u64) {
        if records == 0 {
            info!("{}: {} query matched nothing ({}ms)", provider, field, elapsed_ms);
        } else {
            info!(
                "{}: {} query returned {} records ({}ms)",
                provider, field, records, elapsed_ms
            );
        }
    }

    /// A session search opening (`found == None`) or settling.
    pub fn search(query: &str, generation: u64, found: Option<usize>) {
        match found {
            Some(n) => info!("Search #{} '{}' settled with {} results", generation, query, n),
            None => debug!("Search #{} '{}' started", generation, query),
        }
    }
}

/// Wall-clock timer for a directory lookup, fallback included
pub struct LookupTimer {
    started: Instant,
    query: String,
}

impl LookupTimer {
    pub fn start(query: &str) -> Self {
        debug!("Lookup '{}' started", query);
        Self {
            started: Instant::now(),
            query: query.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Stop the timer, logging which field produced the answer.
    pub fn finish(self, field: &str) -> u64 {
        let elapsed = self.elapsed_ms();
        debug!("Lookup '{}' answered by {} after {}ms", self.query, field, elapsed);
        elapsed
    }
}
