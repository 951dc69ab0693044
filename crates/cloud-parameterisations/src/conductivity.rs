// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Thermal Conductivity of Air
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermal conductivity of air, linear in temperature.
//!
//! `K_a(T) = a_K·(T − T0) + b_K` [W/(m·K)].

use std::fmt;

use cloud_types::constants::T_FREEZE;
use cloud_types::error::CloudResult;

use crate::constant_set::{describe, ConstantSet, ConstantTable};
use crate::traits::Parameterisation;

pub static DEFAULT_CONSTANTS: ConstantTable = ConstantTable {
    name: "default",
    label: "default",
    entries: &[("a_K", 8.0e-5), ("b_K", 2.4e-2)],
};

static TABLES: [&ConstantTable; 1] = [&DEFAULT_CONSTANTS];

#[derive(Debug, Clone, PartialEq)]
pub struct ThermalConductivityCoefficient {
    constants: ConstantSet,
    a_k: f64,
    b_k: f64,
}

impl ThermalConductivityCoefficient {
    /// Thermal conductivity [W/(m·K)] at temperature `t` [K].
    pub fn conductivity(&self, t: f64) -> f64 {
        self.a_k * (t - T_FREEZE) + self.b_k
    }
}

impl Parameterisation for ThermalConductivityCoefficient {
    type State = f64;

    const SECTION: &'static str = "Ka";

    fn default_table() -> &'static ConstantTable {
        &DEFAULT_CONSTANTS
    }

    fn tables() -> &'static [&'static ConstantTable] {
        &TABLES
    }

    fn from_constants(constants: ConstantSet) -> CloudResult<Self> {
        let a_k = constants.require(Self::SECTION, "a_K")?;
        let b_k = constants.require(Self::SECTION, "b_K")?;
        Ok(ThermalConductivityCoefficient { constants, a_k, b_k })
    }

    fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    fn evaluate_scalar(&self, t: f64) -> f64 {
        self.conductivity(t)
    }
}

impl Default for ThermalConductivityCoefficient {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Display for ThermalConductivityCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, "Linear model", &TABLES, &self.constants)
    }
}
