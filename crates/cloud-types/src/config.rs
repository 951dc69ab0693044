// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, CloudResult};

/// One top-level entry of the constants structure.
///
/// A bare number is a flat override that applies to every formula declaring
/// a constant of that name. A nested map is a subsection scoped to one
/// formula. `null` anywhere means "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    Value(Option<f64>),
    Section(BTreeMap<String, Option<f64>>),
}

/// Nested constant overrides handed to the resolver.
///
/// Maps 1:1 to a JSON object such as
/// `{"pv_sat": {"a0_lq": 19.0}, "a0_lq": 18.0, "R_d": 287.0}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantOverrides {
    entries: BTreeMap<String, OverrideEntry>,
}

impl ConstantOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flat override, replacing any entry of the same name.
    pub fn with_flat(mut self, name: &str, value: f64) -> Self {
        self.entries
            .insert(name.to_string(), OverrideEntry::Value(Some(value)));
        self
    }

    /// Set `section.name = value`. A flat value stored under `section` is
    /// replaced by a new subsection.
    pub fn with_section_value(mut self, section: &str, name: &str, value: f64) -> Self {
        let entry = self
            .entries
            .entry(section.to_string())
            .or_insert_with(|| OverrideEntry::Section(BTreeMap::new()));
        match entry {
            OverrideEntry::Section(map) => {
                map.insert(name.to_string(), Some(value));
            }
            OverrideEntry::Value(_) => {
                let mut map = BTreeMap::new();
                map.insert(name.to_string(), Some(value));
                *entry = OverrideEntry::Section(map);
            }
        }
        self
    }

    /// Remove a whole entry (flat value or subsection).
    pub fn without(mut self, name: &str) -> Self {
        self.entries.remove(name);
        self
    }

    /// Value of `section.name`, if the subsection exists and sets it.
    ///
    /// Fails with `ConfigError` when `section` holds a bare number, since a
    /// subsection lookup cannot be satisfied by a scalar.
    pub fn section_value(&self, section: &str, name: &str) -> CloudResult<Option<f64>> {
        match self.entries.get(section) {
            None => Ok(None),
            Some(OverrideEntry::Section(map)) => Ok(map.get(name).copied().flatten()),
            Some(OverrideEntry::Value(None)) => Ok(None),
            Some(OverrideEntry::Value(Some(v))) => Err(CloudError::ConfigError(format!(
                "'{section}' must be a subsection of constants, found the value {v}"
            ))),
        }
    }

    /// Flat (formula-independent) value of `name`.
    pub fn flat_value(&self, name: &str) -> Option<f64> {
        match self.entries.get(name) {
            Some(OverrideEntry::Value(v)) => *v,
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
