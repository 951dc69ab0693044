use cloud_types::error::{CloudError, CloudResult};
use rayon::prelude::*;

use crate::constant_set::{ConstantSet, ConstantTable};

/// A closed-form formula parameterised by a [`ConstantSet`].
///
/// Implementors are immutable after construction: every evaluation is a
/// pure function of the constants and the state passed in.
pub trait Parameterisation: Sized {
    /// Physical state the formula is evaluated at.
    type State: Copy + Send + Sync;

    /// Name of the formula's subsection in a constants structure.
    const SECTION: &'static str;

    /// Table used when no constants are supplied.
    fn default_table() -> &'static ConstantTable;

    /// All named tables, default first.
    fn tables() -> &'static [&'static ConstantTable];

    /// Build from an explicit constant set. Fails with `MissingConstant`
    /// if a constant the formula needs is absent.
    fn from_constants(constants: ConstantSet) -> CloudResult<Self>;

    fn constants(&self) -> &ConstantSet;

    fn evaluate_scalar(&self, state: Self::State) -> f64;

    /// Elementwise [`evaluate_scalar`](Self::evaluate_scalar), same order.
    fn evaluate_batch(&self, states: &[Self::State]) -> Vec<f64> {
        states.iter().map(|&s| self.evaluate_scalar(s)).collect()
    }

    /// Parallel [`evaluate_batch`](Self::evaluate_batch); output order matches input.
    fn evaluate_batch_par(&self, states: &[Self::State]) -> Vec<f64>
    where
        Self: Sync,
    {
        states.par_iter().map(|&s| self.evaluate_scalar(s)).collect()
    }

    /// Build from the default table.
    fn with_defaults() -> Self {
        Self::from_constants(ConstantSet::from_table(Self::default_table()))
            .expect("default constant table is complete")
    }

    /// Build from a table looked up by name (case-insensitive; `_`, `-` and
    /// spaces are interchangeable). `"default"` always selects the default table.
    fn from_named_table(name: &str) -> CloudResult<Self> {
        let table = find_table(Self::default_table(), Self::tables(), name)?;
        Self::from_constants(ConstantSet::from_table(table))
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase().replace(['_', ' '], "-")
}

pub(crate) fn find_table(
    default: &'static ConstantTable,
    tables: &'static [&'static ConstantTable],
    name: &str,
) -> CloudResult<&'static ConstantTable> {
    let key = normalise(name);
    if key == "default" {
        return Ok(default);
    }
    tables
        .iter()
        .copied()
        .find(|t| normalise(t.name) == key)
        .ok_or_else(|| CloudError::UnknownTable(name.to_string()))
}
