//! Configuration for the `AuthN` gate.

use std::collections::HashSet;

use serde::Deserialize;

/// Gate configuration, loaded once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthnGateConfig {
    /// When `false`, every request is served with the anonymous identity and
    /// the provider chain is never consulted.
    pub enabled: bool,

    /// Paths served anonymously when no identity is resolved (exact match).
    pub anonymous_paths: Option<HashSet<String>>,

    /// Path roots served anonymously when no identity is resolved.
    ///
    /// `"/health"` covers `"/health"` itself and everything under
    /// `"/health/"`, but not `"/healthy"`.
    pub anonymous_path_prefixes: Option<HashSet<String>>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> AuthnGateConfig {
        match serde_saphyr::from_str(yaml) {
            Ok(cfg) => cfg,
            Err(e) => panic!("failed to parse config: {e}"),
        }
    }

    #[test]
    fn empty_config_is_disabled_without_allowlist() {
        let cfg = parse("{}");
        assert!(!cfg.enabled);
        assert!(cfg.anonymous_paths.is_none());
        assert!(cfg.anonymous_path_prefixes.is_none());
    }

    #[test]
    fn full_config_is_parsed() {
        let cfg = parse(
            r#"
enabled: true
anonymous_paths:
  - "/q/health"
  - "/openapi.json"
anonymous_path_prefixes:
  - "/metrics"
"#,
        );

        assert!(cfg.enabled);
        let paths = cfg.anonymous_paths.unwrap_or_default();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains("/q/health"));
        assert!(paths.contains("/openapi.json"));
        assert_eq!(
            cfg.anonymous_path_prefixes.unwrap_or_default(),
            HashSet::from(["/metrics".to_owned()])
        );
    }

    #[test]
    fn duplicate_paths_collapse() {
        let cfg = parse(
            r#"
anonymous_paths: ["/a", "/a"]
"#,
        );
        assert_eq!(cfg.anonymous_paths.map(|p| p.len()), Some(1));
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let parsed: Result<AuthnGateConfig, _> = serde_saphyr::from_str("enabled: true\nmode: strict\n");
        assert!(parsed.is_err());
    }
}
