// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

use crate::error::{CloudError, CloudResult};

/// Local thermodynamic state of a parcel of air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    pub temperature: f64, // [K]
    pub pressure: f64,    // [Pa]
}

impl AirState {
    pub fn new(temperature: f64, pressure: f64) -> Self {
        AirState {
            temperature,
            pressure,
        }
    }
}

/// Height-indexed column state, e.g. a cloud-model output profile or the
/// environmental sounding it is compared against.
#[derive(Debug, Clone)]
pub struct VerticalProfile {
    pub z: Array1<f64>,           // Height [m]
    pub temperature: Array1<f64>, // [K]
    pub pressure: Array1<f64>,    // [Pa]
}

impl VerticalProfile {
    /// Build a profile, checking that all three columns have the same length.
    pub fn try_new(
        z: Array1<f64>,
        temperature: Array1<f64>,
        pressure: Array1<f64>,
    ) -> CloudResult<Self> {
        let n = z.len();
        for column in [&temperature, &pressure] {
            if column.len() != n {
                return Err(CloudError::ShapeMismatch {
                    expected: n,
                    got: column.len(),
                });
            }
        }
        Ok(VerticalProfile {
            z,
            temperature,
            pressure,
        })
    }

    /// Linear lapse-rate column sampled at `n` levels between `z_min` and `z_max`.
    ///
    /// Pressure follows the hypsometric relation for a constant lapse rate
    /// `gamma` [K/m]; `gamma == 0` is treated as isothermal.
    pub fn constant_lapse_rate(
        n: usize,
        z_min: f64,
        z_max: f64,
        t_surface: f64,
        p_surface: f64,
        gamma: f64,
    ) -> Self {
        const G: f64 = 9.81;
        const R_D: f64 = crate::constants::R_DRY_AIR;

        let z = Array1::linspace(z_min, z_max, n);
        let temperature = z.mapv(|zi| t_surface - gamma * zi);
        let pressure = if gamma.abs() < 1e-12 {
            z.mapv(|zi| p_surface * (-G * zi / (R_D * t_surface)).exp())
        } else {
            temperature.mapv(|t| p_surface * (t / t_surface).powf(G / (R_D * gamma)))
        };

        VerticalProfile {
            z,
            temperature,
            pressure,
        }
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// State at level `i`.
    pub fn air_state(&self, i: usize) -> AirState {
        AirState::new(self.temperature[i], self.pressure[i])
    }

    pub fn air_states(&self) -> Vec<AirState> {
        self.temperature
            .iter()
            .zip(self.pressure.iter())
            .map(|(&t, &p)| AirState::new(t, p))
            .collect()
    }
}
