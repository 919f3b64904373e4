use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use gamestats_actix::api::api::api_service;
use gamestats_actix::api::structs::api_service_data::ApiServiceData;
use gamestats_actix::common::common::setup_logging;
use gamestats_actix::config::structs::configuration::Configuration;
use gamestats_actix::statistics::structs::statistics_manager::StatisticsManager;
use gamestats_actix::structs::Cli;

/// Seconds between two console statistics lines.
const CONSOLE_INTERVAL: u64 = 60;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let manager = match StatisticsManager::new(config.clone()) {
                Ok(manager) => Arc::new(manager),
                Err(error) => {
                    error!("[BOOT] Unable to open storage: {error}");
                    exit(1);
                }
            };

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install shutdown handler: {error}");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let manager_spawn_stats = manager.clone();
            info!("[BOOT] Starting thread for console updates with {CONSOLE_INTERVAL} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(CONSOLE_INTERVAL));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = manager_spawn_stats.get_stats();
                            info!(
                                "[STATS] Servers: {} - Players: {} | Advertises: {} ({} rejected) - Matches: {} ({} rejected) | API: {} - 404: {} - 500: {}",
                                stats.servers, stats.players,
                                stats.advertises_accepted, stats.advertises_rejected,
                                stats.matches_accepted, stats.matches_rejected,
                                stats.api_requests, stats.api_not_found, stats.internal_errors
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let mut api_handle = None;
            if config.api_server.enabled {
                let address: SocketAddr = match config.api_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[BOOT] Invalid API bind address {}: {error}", config.api_server.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    statistics_manager: manager.clone(),
                    api_server_config: Arc::new(config.api_server.clone()),
                });
                let (handle, future) = match api_service(address, data, Arc::new(config.api_server.clone())).await {
                    Ok(server) => server,
                    Err(error) => {
                        error!("[BOOT] Unable to bind API server on {address}: {error}");
                        exit(1);
                    }
                };
                tokio::spawn(async move {
                    if let Err(error) = future.await {
                        error!("[API] Server stopped with error: {error}");
                    }
                });
                api_handle = Some(handle);
            }

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = api_handle {
                handle.stop(true).await;
            }
            let stats = manager.get_stats();
            info!("[STATS] Final: {} matches accepted, {} servers, {} players", stats.matches_accepted, stats.servers, stats.players);
            info!("Server shutting down completed");
            Ok(())
        })
}
