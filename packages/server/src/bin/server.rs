//! Chat room server with heartbeat-based presence.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin batepapo-server
//! cargo run --bin batepapo-server -- --host 0.0.0.0 --port 5000 --staleness-secs 10
//! ```

use std::{sync::Arc, time::Duration};

use batepapo_server::{
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    scheduler::{Reaper, ReaperConfig},
    ui::{AppState, Server},
    usecase::EvictStaleParticipantsUseCase,
};
use batepapo_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "batepapo-server")]
#[command(about = "Chat room server with heartbeat-based presence", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "5000")]
    port: u16,

    /// Seconds between two eviction passes of the reaper
    #[arg(long, default_value = "15")]
    reaper_interval_secs: u64,

    /// Seconds without heartbeat after which a participant is evicted
    #[arg(long, default_value = "10")]
    staleness_secs: u64,
}

impl Args {
    fn reaper_config(&self) -> ReaperConfig {
        ReaperConfig {
            interval: Duration::from_secs(self.reaper_interval_secs.max(1)),
            staleness_threshold: Duration::from_secs(self.staleness_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let reaper_config = args.reaper_config();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. Clock
    // 3. UseCases (AppState)
    // 4. Reaper
    // 5. Server

    // 1. Create Repositories (in-memory stores)
    let participants = Arc::new(InMemoryParticipantRepository::new());
    let messages = Arc::new(InMemoryMessageRepository::new());

    // 2. Create Clock
    let clock = Arc::new(SystemClock);

    // 3. Create UseCases
    let app_state = AppState::new(participants.clone(), messages.clone(), clock.clone());

    // 4. Create Reaper
    let evict_usecase = Arc::new(EvictStaleParticipantsUseCase::new(
        participants,
        messages,
        clock,
        reaper_config.staleness_threshold,
    ));
    let reaper = Reaper::new(evict_usecase, reaper_config.interval);
    tracing::info!(
        "Participants are evicted after {:?} without heartbeat",
        reaper_config.staleness_threshold
    );

    // 5. Create and run the server
    let server = Server::new(app_state, reaper);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
