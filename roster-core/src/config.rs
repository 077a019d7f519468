//! # Roster Configuration
//!
//! A minimal string key/value store, in the spirit of Feathers'
//! `app.set()` / `app.get()`. Applications layer configuration however
//! they like; values are parsed on read through a snapshot.
//!
//! ```rust
//! use roster_core::RosterConfig;
//! let mut config = RosterConfig::new();
//!
//! config.set("paginate.default", "10");
//! config.set("paginate.max", "50");
//!
//! assert_eq!(config.get("paginate.default"), Some("10"));
//! assert_eq!(config.snapshot().get_usize("paginate.max"), Some(50));
//! ```
//!
//! ## Environment overrides
//!
//! [`RosterConfig::load_env`] maps prefixed variables onto dotted keys:
//!
//! ```bash
//! export ROSTER__PAGINATE__DEFAULT=25   # paginate.default = 25
//! ```

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RosterConfig {
    values: HashMap<String, String>,
}

impl RosterConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Set a key only if nothing set it before.
    pub fn set_default<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Apply overrides from `vars` whose name starts with `prefix`.
    ///
    /// `ROSTER__SEARCH__DEBOUNCE_MS` with prefix `ROSTER__` becomes
    /// `search.debounce_ms`. Returns how many keys were applied.
    pub fn load_vars<I>(&mut self, prefix: &str, vars: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0;
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
                applied += 1;
            }
        }
        applied
    }

    /// Same as [`load_vars`](Self::load_vars) over the process environment.
    pub fn load_env(&mut self, prefix: &str) -> usize {
        self.load_vars(prefix, std::env::vars())
    }

    pub fn snapshot(&self) -> RosterConfigSnapshot {
        RosterConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterConfigSnapshot {
    map: HashMap<String, String>,
}

impl RosterConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse::<bool>().ok())
    }
}
