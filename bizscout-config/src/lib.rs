//! Loader for workspace configuration with YAML + environment overlays.
//!
//! Sources are merged in order: YAML file (if any), then `BIZSCOUT_`-prefixed
//! environment variables with `__` as the section separator. After merging,
//! `${VAR}` placeholders are expanded recursively before the result is
//! deserialized into [`BizscoutConfig`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAX_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level configuration for the bizscout binaries.
#[derive(Debug, Deserialize)]
pub struct BizscoutConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub log: Option<LogSection>,
}

/// Where the `/search` collaborator lives.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Optional logging overrides; anything unset falls back to the
/// observability defaults.
#[derive(Debug, Default, Deserialize)]
pub struct LogSection {
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    /// "text" or "json".
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub stderr: Option<bool>,
}

fn default_base_url() -> String {
    "http://localhost:5000".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if !s.contains('$') {
                return;
            }
            let mut cur = std::mem::take(s);
            for _ in 0..MAX_ENV_EXPANSION_DEPTH {
                let expanded = match shellexpand::env(&cur) {
                    Ok(cow) => cow.into_owned(),
                    Err(_) => cur.clone(),
                };
                if expanded == cur {
                    break;
                }
                cur = expanded;
            }
            *s = cur;
        }
        Value::Array(items) => items.iter_mut().for_each(expand_env_in_value),
        Value::Object(map) => map.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring.
pub struct BizscoutConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for BizscoutConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BizscoutConfigLoader {
    /// Start with the env overlay alone; attach files as needed.
    ///
    /// ```
    /// use bizscout_config::BizscoutConfigLoader;
    ///
    /// let cfg = BizscoutConfigLoader::new()
    ///     .with_yaml_str("backend:\n  base_url: \"http://search.test\"")
    ///     .load()
    ///     .expect("valid config");
    /// assert_eq!(cfg.backend.base_url, "http://search.test");
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("BIZSCOUT").separator("__"));
        Self { builder }
    }

    /// Attach a config file that must exist; format inferred by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()));
        self
    }

    /// Attach a config file that may be absent, for env-only deployments.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet; mostly for tests.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Merge sources, expand `${VAR}` placeholders, and deserialize.
    pub fn load(self) -> Result<BizscoutConfig, ConfigError> {
        let merged = self.builder.build()?;

        let mut v: Value = merged.try_deserialize()?;
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_without_sources() {
        let cfg = BizscoutConfigLoader::new()
            .with_yaml_str("{}")
            .load()
            .unwrap();
        assert_eq!(cfg.backend.base_url, "http://localhost:5000");
        assert!(cfg.log.is_none());
    }

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("REGION", Some("sf"), || {
            let mut v = json!("api-${REGION}.example.com");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("api-sf.example.com"));
        });
    }

    #[test]
    fn expands_nested_values() {
        temp_env::with_var("PORT", Some("5000"), || {
            let mut v = json!({ "backend": { "base_url": "http://localhost:${PORT}" } });
            expand_env_in_value(&mut v);
            assert_eq!(
                v,
                json!({ "backend": { "base_url": "http://localhost:5000" } })
            );
        });
    }

    #[test]
    fn expansion_terminates_on_cycles() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("url=${A}");
            expand_env_in_value(&mut v);
            // The depth cap stops the walk; an unresolved placeholder remains.
            assert!(v.as_str().unwrap().contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("host-${NOT_SET_ANYWHERE}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("host-${NOT_SET_ANYWHERE}"));
    }
}
