// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Constant Sets
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Named constant tables and the immutable constant sets built from them.

use std::fmt;

use cloud_types::error::{CloudError, CloudResult};
use indexmap::IndexMap;

use crate::format::format_general;

/// A literature-derived set of coefficients for one formula.
#[derive(Debug)]
pub struct ConstantTable {
    /// Lookup key, e.g. `"ccfm"`.
    pub name: &'static str,
    /// Human-readable label used in descriptions, e.g. `"CCFM"`.
    pub label: &'static str,
    /// `(constant name, value)` in declaration order.
    pub entries: &'static [(&'static str, f64)],
}

/// Immutable mapping from constant name to value.
///
/// Iteration follows insertion order; equality ignores it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstantSet {
    values: IndexMap<String, f64>,
}

impl ConstantSet {
    pub fn from_table(table: &ConstantTable) -> Self {
        Self::from_pairs(table.entries.iter().copied())
    }

    /// Later duplicates replace earlier ones but keep the first position.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        ConstantSet {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Value of `name`, or `MissingConstant` naming the formula that needs it.
    pub fn require(&self, formula: &str, name: &str) -> CloudResult<f64> {
        self.get(name).ok_or_else(|| CloudError::MissingConstant {
            formula: formula.to_string(),
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when this set holds exactly the table's constants and values.
    pub fn matches_table(&self, table: &ConstantTable) -> bool {
        self.len() == table.entries.len()
            && table
                .entries
                .iter()
                .all(|&(key, value)| self.get(key) == Some(value))
    }
}

impl fmt::Display for ConstantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={}", format_general(value, 3))?;
        }
        Ok(())
    }
}

/// Render `"{kind} ({label}: {constants})"`, where `label` is the first
/// table the constants match exactly; without a match the label is omitted.
pub(crate) fn describe(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    tables: &[&ConstantTable],
    constants: &ConstantSet,
) -> fmt::Result {
    match tables.iter().find(|t| constants.matches_table(t)) {
        Some(table) => write!(f, "{kind} ({}: {constants})", table.label),
        None => write!(f, "{kind} ({constants})"),
    }
}
