use clap::Parser;
use hotcert::api::structs::api_service_data::ApiServiceData;
use hotcert::common::common::setup_logging;
use hotcert::config::structs::configuration::Configuration;
use hotcert::http::http::http_service;
use hotcert::reload::reload::{spawn_interval_trigger, spawn_signal_trigger, spawn_watch_trigger};
use hotcert::reload::traits::reloadable::Reloadable;
use hotcert::ssl::ssl::generate_self_signed_files;
use hotcert::ssl::structs::cert_reloader::CertReloader;
use hotcert::structs::Cli;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        match generate_self_signed_files(&args.selfsigned_domain, &args.selfsigned_certfile, &args.selfsigned_keyfile) {
            Ok(()) => exit(0),
            Err(e) => {
                eprintln!("[CERTGEN] {}", e);
                exit(1)
            }
        }
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        })))
    } else {
        None
    };

    let reloader = if config.tls_enabled() {
        let mut reloader = match CertReloader::new(config.tls.cert_path.clone(), config.tls.key_path.clone()) {
            Ok(reloader) => reloader,
            Err(e) => {
                error!("[BOOT] Unable to load the initial certificate ({}): {}", e.kind(), e);
                exit(1);
            }
        };
        if let Some(timeout) = config.reload_timeout() {
            reloader = reloader.with_read_timeout(timeout);
        }
        Some(Arc::new(reloader))
    } else {
        warn!("[BOOT] No certificate configured, TLS and reload triggers are disabled");
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            let mut triggers = Vec::new();

            if let Some(reloader) = &reloader {
                let reloadable: Arc<dyn Reloadable> = reloader.clone();
                if config.reload.interval > 0 {
                    triggers.push(spawn_interval_trigger(
                        reloadable.clone(),
                        Duration::from_secs(config.reload.interval),
                        shutdown_rx.clone()
                    ));
                }
                if config.reload.watch {
                    triggers.push(spawn_watch_trigger(
                        reloadable.clone(),
                        reloader.paths(),
                        Duration::from_secs(config.reload.watch_interval),
                        shutdown_rx.clone()
                    ));
                }
                if config.reload.signal {
                    match spawn_signal_trigger(reloadable.clone(), shutdown_rx.clone()) {
                        Ok(handle) => triggers.push(handle),
                        Err(e) => warn!("[BOOT] Unable to install the reload signal handler: {}", e),
                    }
                }
            }

            let mut server = None;
            if config.http_server.enabled {
                let address: SocketAddr = match config.http_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[BOOT] Invalid bind address {}: {}", config.http_server.bind_address, e);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    cert_reloader: reloader.clone(),
                    config: config.clone(),
                });
                let (handle, future) = http_service(address, data)?;
                tokio::spawn(async move {
                    if let Err(e) = future.await {
                        error!("[HTTP] Server stopped with an error: {}", e);
                    }
                });
                server = Some(handle);
            } else {
                warn!("[BOOT] Listener disabled, only reload triggers are running");
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = server {
                handle.stop(true).await;
            }
            let _ = shutdown_tx.send(true);
            for trigger in triggers {
                let _ = trigger.await;
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
