//! Evaluate parameterisations along a vertical profile.
//!
//! Results are height-aligned with the profile's `z` column, so they can be
//! plotted or integrated against it directly.

use cloud_types::state::VerticalProfile;
use ndarray::{Array1, Zip};

use crate::conductivity::ThermalConductivityCoefficient;
use crate::diffusion::WaterVapourDiffusionCoefficient;
use crate::saturation::SaturationVapourPressure;

/// Saturation vapour pressure [Pa] at each level.
pub fn pv_sat_profile(psat: &SaturationVapourPressure, profile: &VerticalProfile) -> Array1<f64> {
    profile.temperature.mapv(|t| psat.pv_sat(t))
}

/// Saturation specific humidity [kg/kg] at each level's temperature and pressure.
pub fn qv_sat_profile(psat: &SaturationVapourPressure, profile: &VerticalProfile) -> Array1<f64> {
    Zip::from(&profile.temperature)
        .and(&profile.pressure)
        .map_collect(|&t, &p| psat.qv_sat(t, p))
}

/// Thermal conductivity of air [W/(m·K)] at each level.
pub fn conductivity_profile(
    ka: &ThermalConductivityCoefficient,
    profile: &VerticalProfile,
) -> Array1<f64> {
    profile.temperature.mapv(|t| ka.conductivity(t))
}

/// Vapour diffusivity [m²/s] at each level.
pub fn diffusivity_profile(
    dv: &WaterVapourDiffusionCoefficient,
    profile: &VerticalProfile,
) -> Array1<f64> {
    Zip::from(&profile.temperature)
        .and(&profile.pressure)
        .map_collect(|&t, &p| dv.diffusivity(t, p))
}
