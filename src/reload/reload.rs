use crate::reload::structs::watch_state::WatchState;
use crate::reload::structs::watched_files::WatchedFiles;
use crate::reload::traits::reloadable::Reloadable;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Runs one reload on the blocking pool. Logs success; failures are returned
/// as their message for the caller to report.
pub async fn attempt_reload(reloadable: Arc<dyn Reloadable>, trigger: &'static str) -> Result<(), String> {
    let description = reloadable.describe();
    match tokio::task::spawn_blocking(move || reloadable.reload_certificates()).await {
        Ok(Ok(installed)) => {
            info!("[RELOAD] {} trigger reloaded {} (generation {})", trigger, description, installed.generation);
            Ok(())
        }
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => {
            error!("[RELOAD] {} trigger reload task for {} did not complete: {}", trigger, description, e);
            Err(e.to_string())
        }
    }
}

/// Logs a failed reload and sends it to sentry.
pub fn report_failure(trigger: &'static str, description: &str, message: &str) {
    warn!("[RELOAD] {} trigger failed to reload {}, keeping the current certificate: {}", trigger, description, message);
    sentry::capture_message(
        &format!("Certificate reload ({}) failed for {}: {}", trigger, description, message),
        sentry::Level::Warning,
    );
}

/// Runs one reload and reports a failure.
///
/// Returns `true` when the new pair was installed.
pub async fn run_reload(reloadable: Arc<dyn Reloadable>, trigger: &'static str) -> bool {
    let description = reloadable.describe();
    match attempt_reload(reloadable, trigger).await {
        Ok(()) => true,
        Err(message) => {
            report_failure(trigger, &description, &message);
            false
        }
    }
}

pub fn spawn_interval_trigger(
    reloadable: Arc<dyn Reloadable>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("[RELOAD] Starting interval trigger every {:?} for {}", period, reloadable.describe());
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    run_reload(Arc::clone(&reloadable), "interval").await;
                }
                _ = shutdown.changed() => {
                    info!("[RELOAD] Shutting down interval trigger...");
                    return;
                }
            }
        }
    })
}

/// Polls the modification times of both files and reloads when either changes.
///
/// The loaded snapshot is only advanced after a successful reload, so a pair
/// that is still half written is retried on the next poll. A failure is
/// reported once per snapshot; repeats are logged at debug level.
pub fn spawn_watch_trigger(
    reloadable: Arc<dyn Reloadable>,
    paths: CertificatePaths,
    poll: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("[RELOAD] Watching {} and {} every {:?}", paths.cert_path, paths.key_path, poll);
        let description = reloadable.describe();
        let mut state = WatchState::new(WatchedFiles::snapshot(&paths).await);
        let mut interval = tokio::time::interval(poll);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let current = WatchedFiles::snapshot(&paths).await;
                    if !state.is_changed(&current) {
                        continue;
                    }
                    match attempt_reload(Arc::clone(&reloadable), "watch").await {
                        Ok(()) => state.mark_loaded(current),
                        Err(message) => {
                            if state.mark_failed(&current) {
                                report_failure("watch", &description, &message);
                            } else {
                                debug!("[RELOAD] watch trigger still failing for {}: {}", description, message);
                            }
                        }
                    }
                }
                _ = shutdown.changed() => {
                    info!("[RELOAD] Shutting down file watch trigger...");
                    return;
                }
            }
        }
    })
}

/// Reloads on SIGHUP.
#[cfg(unix)]
pub fn spawn_signal_trigger(
    reloadable: Arc<dyn Reloadable>,
    mut shutdown: watch::Receiver<bool>,
) -> std::io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    Ok(tokio::spawn(async move {
        info!("[RELOAD] Reloading {} on SIGHUP", reloadable.describe());
        loop {
            tokio::select! {
                received = hangup.recv() => {
                    if received.is_none() {
                        return;
                    }
                    run_reload(Arc::clone(&reloadable), "signal").await;
                }
                _ = shutdown.changed() => {
                    info!("[RELOAD] Shutting down signal trigger...");
                    return;
                }
            }
        }
    }))
}

#[cfg(not(unix))]
pub fn spawn_signal_trigger(
    reloadable: Arc<dyn Reloadable>,
    _shutdown: watch::Receiver<bool>,
) -> std::io::Result<JoinHandle<()>> {
    warn!("[RELOAD] Signal trigger is not available on this platform for {}", reloadable.describe());
    Ok(tokio::spawn(async {}))
}
