// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Freezing point of water (K). Liquid/ice regime boundary and the
/// reference temperature of every fit in this workspace.
pub const T_FREEZE: f64 = 273.15;

/// Reference pressure (Pa) at which the Rogers & Yau diffusivity table
/// is given. Diffusivities are rescaled from here to the local pressure.
pub const DIFFUSIVITY_REFERENCE_PRESSURE: f64 = 10_000.0;

/// Specific gas constant of dry air (J/(kg·K)).
pub const R_DRY_AIR: f64 = 287.05;

/// Specific gas constant of water vapour (J/(kg·K)).
pub const R_WATER_VAPOUR: f64 = 461.51;
