// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Constant Resolution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Build parameterisations from a nested constants structure.
//!
//! Each constant declared by a formula's default table is looked up in
//! three tiers, first hit wins:
//! 1. the formula's own subsection, e.g. `pv_sat.a0_lq`;
//! 2. a flat top-level entry, e.g. `a0_lq`;
//! 3. the default table value, reported as a [`UsingDefault`] advisory.
//!
//! Advisories are returned to the caller and also logged at `warn` level.

use std::fmt;

use cloud_types::config::ConstantOverrides;
use cloud_types::error::CloudResult;

use crate::conductivity::ThermalConductivityCoefficient;
use crate::constant_set::{ConstantSet, ConstantTable};
use crate::diffusion::WaterVapourDiffusionCoefficient;
use crate::saturation::SaturationVapourPressure;
use crate::traits::Parameterisation;

/// Where a resolved constant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstantSource {
    Section,
    Flat,
    Default,
}

/// A constant that fell through to its default value.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingDefault {
    pub section: &'static str,
    pub constant: &'static str,
    pub value: f64,
}

impl fmt::Display for UsingDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Using default value for {} ({} = {})",
            self.constant, self.section, self.value
        )
    }
}

/// One constant: subsection, then flat, then the table default.
fn lookup(
    section: &str,
    name: &str,
    default: f64,
    overrides: &ConstantOverrides,
) -> CloudResult<(f64, ConstantSource)> {
    if let Some(v) = overrides.section_value(section, name)? {
        Ok((v, ConstantSource::Section))
    } else if let Some(v) = overrides.flat_value(name) {
        Ok((v, ConstantSource::Flat))
    } else {
        Ok((default, ConstantSource::Default))
    }
}

/// Resolve every constant of `table` against `overrides`.
pub fn resolve_constants(
    section: &'static str,
    table: &'static ConstantTable,
    overrides: &ConstantOverrides,
) -> CloudResult<(ConstantSet, Vec<UsingDefault>)> {
    let mut values = Vec::with_capacity(table.entries.len());
    let mut advisories = Vec::new();

    for &(name, default) in table.entries {
        let (value, source) = lookup(section, name, default, overrides)?;
        if source == ConstantSource::Default {
            let advisory = UsingDefault {
                section,
                constant: name,
                value,
            };
            log::warn!("{advisory}");
            advisories.push(advisory);
        } else {
            log::debug!("{section}.{name} = {value} ({source:?} override)");
        }
        values.push((name, value));
    }

    Ok((ConstantSet::from_pairs(values), advisories))
}

/// A parameterisation together with the advisories raised building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<P> {
    pub parameterisation: P,
    pub advisories: Vec<UsingDefault>,
}

/// Build `P` from `overrides`, using `P::SECTION` as its subsection.
pub fn resolve<P: Parameterisation>(overrides: &ConstantOverrides) -> CloudResult<Resolved<P>> {
    let (constants, advisories) = resolve_constants(P::SECTION, P::default_table(), overrides)?;
    Ok(Resolved {
        parameterisation: P::from_constants(constants)?,
        advisories,
    })
}

/// The set of parameterisations a cloud model integrates with.
///
/// Saturation vapour pressure (`pv_sat`) and thermal conductivity (`Ka`)
/// are resolved against the overrides. Vapour diffusivity (`Dv`) always
/// uses its default table and is not affected by overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterisationsWithSpecificConstants {
    pub pv_sat: SaturationVapourPressure,
    pub ka: ThermalConductivityCoefficient,
    pub dv: WaterVapourDiffusionCoefficient,
    advisories: Vec<UsingDefault>,
}

impl ParameterisationsWithSpecificConstants {
    pub fn new(overrides: &ConstantOverrides) -> CloudResult<Self> {
        let pv_sat = resolve::<SaturationVapourPressure>(overrides)?;
        let ka = resolve::<ThermalConductivityCoefficient>(overrides)?;

        let mut advisories = pv_sat.advisories;
        advisories.extend(ka.advisories);

        Ok(ParameterisationsWithSpecificConstants {
            pv_sat: pv_sat.parameterisation,
            ka: ka.parameterisation,
            dv: WaterVapourDiffusionCoefficient::default(),
            advisories,
        })
    }

    /// Every constant that fell back to its default, `pv_sat` first.
    pub fn advisories(&self) -> &[UsingDefault] {
        &self.advisories
    }

    /// Names of defaulted constants in one subsection.
    pub fn defaulted(&self, section: &str) -> Vec<&'static str> {
        self.advisories
            .iter()
            .filter(|a| a.section == section)
            .map(|a| a.constant)
            .collect()
    }
}
