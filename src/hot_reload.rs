//! # Hot Reload Module
//!
//! Live reloading of the route configuration without restarting the process.
//!
//! ## Overview
//!
//! The watcher observes the configuration file and, on modification:
//! - reloads and recompiles the configuration
//! - atomically swaps the shared snapshot every router call reads
//! - invokes a reload callback for application-specific updates
//!
//! ## Error Handling
//!
//! If the new file fails to parse, the error is logged and the previous
//! configuration stays active; routing keeps working on the old snapshot.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mcaroute::{hot_reload::watch_config, Router, RouterConfig};
//!
//! let router = Router::new(identity, mcaroute::load_config("routes.yaml")?);
//! let watcher = watch_config("routes.yaml", router.config_handle(), |config| {
//!     println!("reloaded {} rules", config.table.rules().len());
//! })?;
//! // keep `watcher` alive for as long as reloads should apply
//! ```

use crate::config::{load_config, Config};
use arc_swap::ArcSwap;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Watch a configuration file and swap the shared snapshot when it changes.
///
/// The callback receives the freshly loaded configuration after the swap so
/// the caller can log, refresh caches, or re-register hooks. The returned
/// watcher must be kept alive; dropping it stops reloads.
pub fn watch_config<P, F>(
    config_path: P,
    shared: Arc<ArcSwap<Config>>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Config) + Send + 'static,
{
    let path: PathBuf = config_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    match load_config(&watch_path) {
                        Ok(config) => {
                            info!(
                                path = %watch_path.display(),
                                rules = config.table.rules().len(),
                                "hot-reload: applying configuration update"
                            );
                            let config = Arc::new(config);
                            shared.store(Arc::clone(&config));
                            on_reload(&config);
                        }
                        Err(err) => {
                            warn!(
                                path = %watch_path.display(),
                                error = %err,
                                "hot-reload: reload failed, keeping previous configuration"
                            );
                        }
                    }
                }
            }
            Err(e) => warn!(error = %e, "hot-reload: watch error"),
        },
        notify::Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
