//! Anonymous path allowlist.

use std::collections::HashSet;

use crate::config::AuthnGateConfig;

/// Request paths exempt from authentication.
///
/// Built once from [`AuthnGateConfig`] and never mutated afterwards, so it can
/// be shared across concurrent requests without synchronisation.
#[derive(Debug, Clone, Default)]
pub struct AnonymousPathAllowlist {
    exact_paths: HashSet<String>,
    prefix_paths: HashSet<String>,
}

impl AnonymousPathAllowlist {
    /// Build the allowlist from configuration.
    ///
    /// Exact matching uses the raw values of both `anonymous_paths` and
    /// `anonymous_path_prefixes`, so a configured prefix root is itself exempt.
    /// Prefix matching uses only `anonymous_path_prefixes`, each with a `'/'`
    /// appended.
    #[must_use]
    pub fn from_config(cfg: &AuthnGateConfig) -> Self {
        let paths = cfg.anonymous_paths.iter().flatten();
        let prefixes = cfg.anonymous_path_prefixes.iter().flatten();

        let exact_paths = paths.chain(prefixes.clone()).cloned().collect();
        let prefix_paths = prefixes.map(|p| format!("{p}/")).collect();

        Self {
            exact_paths,
            prefix_paths,
        }
    }

    /// Whether a request with this path may be served anonymously.
    ///
    /// A request without a resolvable path is never exempt. Matching is
    /// case-sensitive and performs no normalisation.
    #[must_use]
    pub fn is_exempt(&self, path: Option<&str>) -> bool {
        let Some(path) = path else {
            return false;
        };

        self.exact_paths.contains(path)
            || self
                .prefix_paths
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Returns `true` if nothing is exempt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact_paths.is_empty() && self.prefix_paths.is_empty()
    }
}
