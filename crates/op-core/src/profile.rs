//! Section-oriented profile storage
//!
//! Controller profiles persist as sections of string key-value pairs, keyed
//! `<group>/<control>` for expressions, `<group>/<control>/Range` and
//! `<group>/<setting>` for numeric values (stored x100), and
//! `<extension-group>` for the selected attachment name. Keys whose value
//! equals the declared default are not written, and reading an absent key
//! falls back to the default, so an empty section means "factory settings".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One named bag of key-value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileSection {
    entries: BTreeMap<String, String>,
}

impl ProfileSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parsed value for `key`, or `default` when the key is absent or does
    /// not parse
    pub fn get_or<T: FromStr + Copy>(&self, key: &str, default: T) -> T {
        self.entries
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// String value for `key`, or `default` when absent
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Store a string value, dropping the key when it equals `default`
    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value == default {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    /// Store a numeric value, dropping the key when it equals `default`
    pub fn set_f64(&mut self, key: &str, value: f64, default: f64) {
        if value == default {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A whole profile file: named sections serialized as TOML tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    sections: BTreeMap<String, ProfileSection>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&ProfileSection> {
        self.sections.get(name)
    }

    /// Section by name, created empty if absent
    pub fn section_mut(&mut self, name: &str) -> &mut ProfileSection {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        // empty sections carry no information, don't write them
        let pruned = Self {
            sections: self
                .sections
                .iter()
                .filter(|(_, sec)| !sec.is_empty())
                .map(|(name, sec)| (name.clone(), sec.clone()))
                .collect(),
        };
        fs::write(path, pruned.to_toml()?)?;
        Ok(())
    }
}
