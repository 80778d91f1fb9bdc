//! Router core - decode and encode orchestration.
//!
//! The router owns the process-wide routing identity (MCA parameter names
//! and the known-module list, fixed at construction) and a shared handle to
//! the current configuration snapshot. Every decode/encode call loads the
//! snapshot, so a hot reload is observed by the next call with no locking.

use crate::config::schema::UrlMode;
use crate::config::Config;
use crate::context::{Params, RequestContext};
use crate::router::mode;
use crate::router::rewrite::EncodeRule;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info};

/// Leading entry-script prefix stripped from path-mode paths, e.g.
/// `index.php/blog/show` → `/blog/show`.
static ENTRY_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+\.php").expect("entry script regex"));

/// Process-wide routing identity, fixed at router construction.
///
/// Replaces a separate init step: a router cannot exist without its MCA
/// parameter names and module list, so "used before init" is not a
/// representable state.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Request parameter names the resolved module, controller and action
    /// are written under, in that order.
    pub mca_names: [String; 3],
    /// Module names a leading path segment may resolve to. Empty means the
    /// first segment is never consumed as a module.
    pub modules: Vec<String>,
}

impl RouterConfig {
    /// Build a routing identity from explicit names and modules.
    pub fn new(
        mca_names: [impl Into<String>; 3],
        modules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            mca_names: mca_names.map(Into::into),
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Take the identity from the `system` config section; used by the CLI.
    #[must_use]
    pub fn from_system(system: &crate::config::SystemConfig) -> Self {
        Self {
            mca_names: system.mca_names.clone(),
            modules: system.modules.clone(),
        }
    }
}

/// An encode callback: invoked with the resolved module/controller/action
/// and the caller's params. Returning `None` declines the rule and matching
/// continues; returning a template plus remaining params finishes the encode.
pub type EncodeHook =
    Arc<dyn Fn(&str, &str, &str, &Params) -> Option<(String, Params)> + Send + Sync>;

/// Bidirectional URL router.
///
/// Decode turns a request path into module/controller/action plus params,
/// written into a [`RequestContext`]; encode builds a URL from the same
/// tuple. Both directions consult the configured rule table first, in
/// declaration order, and fall back to the configured URL mode.
pub struct Router {
    config: Arc<ArcSwap<Config>>,
    identity: RouterConfig,
    hooks: HashMap<String, EncodeHook>,
}

impl Router {
    /// Create a router over a fixed configuration snapshot.
    #[must_use]
    pub fn new(identity: RouterConfig, config: Config) -> Self {
        Self::with_shared(identity, Arc::new(ArcSwap::from_pointee(config)))
    }

    /// Create a router over a shared configuration handle, so the snapshot
    /// can be swapped while the router is in use (see
    /// [`hot_reload`](crate::hot_reload)).
    #[must_use]
    pub fn with_shared(identity: RouterConfig, config: Arc<ArcSwap<Config>>) -> Self {
        Self {
            config,
            identity,
            hooks: HashMap::new(),
        }
    }

    /// The shared configuration handle, for watchers and tests.
    #[must_use]
    pub fn config_handle(&self) -> Arc<ArcSwap<Config>> {
        Arc::clone(&self.config)
    }

    /// Register an encode callback under a rule key. The callback only runs
    /// when the rule table declares `encode: callback` for that key, and
    /// rules still match in declaration order.
    pub fn register_encode_hook<F>(&mut self, key: impl Into<String>, hook: F)
    where
        F: Fn(&str, &str, &str, &Params) -> Option<(String, Params)> + Send + Sync + 'static,
    {
        self.hooks.insert(key.into(), Arc::new(hook));
    }

    /// Resolve a request path into module/controller/action and trailing
    /// params, written into `ctx`.
    ///
    /// Precedence: first-matching declarative rewrite (which forces path
    /// mode), then the configured URL mode. In any mode other than path
    /// mode, or for an empty path, the context is filled with the
    /// configured defaults and no segment parsing occurs.
    ///
    /// Leading and doubled slashes produce no segments. An odd trailing
    /// segment becomes a key with an empty-string value.
    pub fn decode(&self, path: &str, ctx: &mut RequestContext) {
        let config = self.config.load();

        let (path, url_mode) = match config.table.rewrite(path) {
            // A rewrite hit always parses as path segments, whatever the
            // configured mode.
            Some(rewritten) => (Cow::Owned(rewritten), UrlMode::Path),
            None => (Cow::Borrowed(path), config.system.url_mode),
        };

        let path = path.trim();
        if path.is_empty() || url_mode != UrlMode::Path {
            self.fill_defaults(&config, ctx);
            return;
        }

        let path = ENTRY_SCRIPT.replace(path, "");
        let mut segments: VecDeque<&str> =
            path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            self.fill_defaults(&config, ctx);
            return;
        }

        let (mut module, mut controller, mut action) = {
            let (m, c, a) = config.system.mca_defaults();
            (m.to_string(), c.to_string(), a.to_string())
        };

        let first_is_module = !self.identity.modules.is_empty()
            && segments
                .front()
                .is_some_and(|first| self.identity.modules.iter().any(|m| m == first));
        if first_is_module {
            if let Some(seg) = segments.pop_front() {
                module = seg.to_string();
            }
        }
        if let Some(seg) = segments.pop_front() {
            controller = seg.to_string();
        }
        if let Some(seg) = segments.pop_front() {
            action = seg.to_string();
        }

        debug!(module = %module, controller = %controller, action = %action,
               trailing = segments.len(), "Path decoded");

        let [m_name, c_name, a_name] = &self.identity.mca_names;
        ctx.set(m_name.as_str(), module);
        ctx.set(c_name.as_str(), controller);
        ctx.set(a_name.as_str(), action);

        // Alternating key/value pairs; a dangling key gets an empty value.
        while let Some(key) = segments.pop_front() {
            let value = segments.pop_front().unwrap_or("");
            ctx.set(key, value);
        }
    }

    /// Build a URL for a module/controller/action and params. Empty
    /// module/controller/action inputs mean "use the configured default".
    ///
    /// Rules are tried in declaration order: a callback rule that returns a
    /// result wins, a declarative rule whose triple equals the resolved
    /// triple wins; otherwise the configured URL mode builds the URL with
    /// the configured host prefix.
    ///
    /// # Panics
    ///
    /// Propagates a panic from a registered encode callback; a panicking
    /// handler is an application bug, not a routing fallback.
    #[must_use]
    pub fn encode(&self, module: &str, controller: &str, action: &str, params: &Params) -> String {
        let config = self.config.load();

        let (dm, dc, da) = config.system.mca_defaults();
        let module = if module.is_empty() { dm } else { module };
        let controller = if controller.is_empty() { dc } else { controller };
        let action = if action.is_empty() { da } else { action };

        for rule in config.table.rules() {
            match &rule.encode {
                None => continue,
                Some(EncodeRule::Callback) => {
                    let Some(hook) = self.hooks.get(&rule.key) else {
                        debug!(rule = %rule.key, "No encode hook registered, skipping");
                        continue;
                    };
                    if let Some((template, rest)) = hook(module, controller, action, params) {
                        info!(rule = %rule.key, "Encode callback matched");
                        return mode::finish_template(&template, &rest);
                    }
                }
                Some(EncodeRule::Template {
                    module: m,
                    controller: c,
                    action: a,
                    template,
                }) => {
                    if m == module && c == controller && a == action {
                        info!(rule = %rule.key, "Encode rule matched");
                        let template = template
                            .replace("{m}", module)
                            .replace("{c}", controller)
                            .replace("{a}", action);
                        return mode::finish_template(&template, params);
                    }
                }
            }
        }

        mode::encode_fallback(
            &config.system,
            &self.identity.mca_names,
            module,
            controller,
            action,
            params,
        )
    }

    /// Convenience alias for [`encode`](Self::encode).
    #[must_use]
    pub fn url(&self, module: &str, controller: &str, action: &str, params: &Params) -> String {
        self.encode(module, controller, action, params)
    }

    /// True if the path matches any `_ignore` pattern. A predicate only:
    /// callers consult it before [`decode`](Self::decode) when matched paths
    /// should be left untouched.
    #[must_use]
    pub fn ignore(&self, path: &str) -> bool {
        self.config.load().table.is_ignored(path)
    }

    fn fill_defaults(&self, config: &Config, ctx: &mut RequestContext) {
        let (m, c, a) = config.system.mca_defaults();
        let [m_name, c_name, a_name] = &self.identity.mca_names;
        ctx.set_if_absent(m_name, m);
        ctx.set_if_absent(c_name, c);
        ctx.set_if_absent(a_name, a);
    }
}
