// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Water Vapour Diffusivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Diffusion coefficient of water vapour in air.
//!
//! Power law in temperature, inverse in pressure:
//! `D_v(T, p) = a·(T/T0)^b · p_ref/p` [m²/s], with the fit tabulated at
//! `p_ref = 10 000 Pa`.

use std::fmt;

use cloud_types::constants::{DIFFUSIVITY_REFERENCE_PRESSURE, T_FREEZE};
use cloud_types::error::{CloudError, CloudResult};
use cloud_types::state::AirState;

use crate::constant_set::{describe, ConstantSet, ConstantTable};
use crate::traits::Parameterisation;

/// Least-squares fit against the Rogers & Yau table.
pub static DEFAULT_CONSTANTS: ConstantTable = ConstantTable {
    name: "rogers-yau",
    label: "fitted to Rogers & Yau",
    entries: &[("a", 2.20e-5), ("b", 1.92)],
};

/// ATHAM model coefficients.
pub static ATHAM_CONSTANTS: ConstantTable = ConstantTable {
    name: "atham",
    label: "ATHAM",
    entries: &[("a", 2.11e-5), ("b", 1.94)],
};

static TABLES: [&ConstantTable; 2] = [&DEFAULT_CONSTANTS, &ATHAM_CONSTANTS];

#[derive(Debug, Clone, PartialEq)]
pub struct WaterVapourDiffusionCoefficient {
    constants: ConstantSet,
    a: f64,
    b: f64,
}

impl WaterVapourDiffusionCoefficient {
    pub fn atham() -> Self {
        Self::from_constants(ConstantSet::from_table(&ATHAM_CONSTANTS))
            .expect("ATHAM constant table is complete")
    }

    /// Diffusivity [m²/s] at temperature `t` [K] and pressure `p` [Pa].
    /// Not checked for `p == 0`.
    pub fn diffusivity(&self, t: f64, p: f64) -> f64 {
        self.a * (t / T_FREEZE).powf(self.b) * DIFFUSIVITY_REFERENCE_PRESSURE / p
    }

    /// Checked [`diffusivity`](Self::diffusivity) rejecting non-positive pressure.
    pub fn try_diffusivity(&self, t: f64, p: f64) -> CloudResult<f64> {
        if !p.is_finite() || p <= 0.0 {
            return Err(CloudError::PhysicsViolation(format!(
                "diffusivity requires a positive finite pressure, got {p} Pa"
            )));
        }
        Ok(self.diffusivity(t, p))
    }

    /// [`diffusivity`](Self::diffusivity) over elementwise-aligned sequences.
    pub fn diffusivity_aligned(
        &self,
        temperatures: &[f64],
        pressures: &[f64],
    ) -> CloudResult<Vec<f64>> {
        if temperatures.len() != pressures.len() {
            return Err(CloudError::ShapeMismatch {
                expected: temperatures.len(),
                got: pressures.len(),
            });
        }
        Ok(temperatures
            .iter()
            .zip(pressures)
            .map(|(&t, &p)| self.diffusivity(t, p))
            .collect())
    }
}

impl Parameterisation for WaterVapourDiffusionCoefficient {
    type State = AirState;

    const SECTION: &'static str = "Dv";

    fn default_table() -> &'static ConstantTable {
        &DEFAULT_CONSTANTS
    }

    fn tables() -> &'static [&'static ConstantTable] {
        &TABLES
    }

    fn from_constants(constants: ConstantSet) -> CloudResult<Self> {
        let a = constants.require(Self::SECTION, "a")?;
        let b = constants.require(Self::SECTION, "b")?;
        Ok(WaterVapourDiffusionCoefficient { constants, a, b })
    }

    fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    fn evaluate_scalar(&self, state: AirState) -> f64 {
        self.diffusivity(state.temperature, state.pressure)
    }
}

impl Default for WaterVapourDiffusionCoefficient {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Display for WaterVapourDiffusionCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, "power-law", &TABLES, &self.constants)
    }
}
