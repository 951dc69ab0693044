// ─────────────────────────────────────────────────────────────────────
// SCPN Cloud Parameterisations — Saturation Vapour Pressure
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Saturation vapour pressure over liquid water and ice.
//!
//! Both branches share the exponential form
//! `p_sat(T) = p0vs · exp(a0·(T − T0)/(T + a1))` with their own (a0, a1).
//! The liquid branch applies strictly above the freezing point, the ice
//! branch at and below it.

use std::fmt;

use cloud_types::constants::{R_DRY_AIR, R_WATER_VAPOUR, T_FREEZE};
use cloud_types::error::{CloudError, CloudResult};

use crate::constant_set::{describe, ConstantSet, ConstantTable};
use crate::traits::Parameterisation;

/// Default coefficients.
pub static DEFAULT_CONSTANTS: ConstantTable = ConstantTable {
    name: "default",
    label: "default",
    entries: &[
        ("p0vs", 611.2), // [Pa]
        ("a0_lq", 17.67),
        ("a1_lq", -32.19),
        ("a0_ice", 22.587),
        ("a1_ice", 0.7),
        ("R_d", R_DRY_AIR),
        ("R_v", R_WATER_VAPOUR),
    ],
};

/// CCFM cloud-model coefficients. Gas constants as in the default table.
pub static CCFM_CONSTANTS: ConstantTable = ConstantTable {
    name: "ccfm",
    label: "CCFM",
    entries: &[
        ("p0vs", 610.78),
        ("a0_lq", 17.269),
        ("a1_lq", 35.86),
        ("a0_ice", 21.875),
        ("a1_ice", 7.66),
        ("R_d", R_DRY_AIR),
        ("R_v", R_WATER_VAPOUR),
    ],
};

static TABLES: [&ConstantTable; 2] = [&DEFAULT_CONSTANTS, &CCFM_CONSTANTS];

/// Phase the saturation curve is taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Liquid,
    Ice,
}

impl Regime {
    /// Liquid strictly above the freezing point, ice otherwise.
    pub fn at(temperature: f64) -> Self {
        if temperature > T_FREEZE {
            Regime::Liquid
        } else {
            Regime::Ice
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    p0vs: f64,
    a0_lq: f64,
    a1_lq: f64,
    a0_ice: f64,
    a1_ice: f64,
    r_d: f64,
    r_v: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaturationVapourPressure {
    constants: ConstantSet,
    c: Coefficients,
}

impl SaturationVapourPressure {
    /// Coefficients of the CCFM table.
    pub fn ccfm() -> Self {
        Self::from_constants(ConstantSet::from_table(&CCFM_CONSTANTS))
            .expect("CCFM constant table is complete")
    }

    /// Saturation vapour pressure over liquid water [Pa].
    pub fn pv_sat_liquid(&self, t: f64) -> f64 {
        self.c.p0vs * (self.c.a0_lq * (t - T_FREEZE) / (t + self.c.a1_lq)).exp()
    }

    /// Saturation vapour pressure over ice [Pa].
    pub fn pv_sat_ice(&self, t: f64) -> f64 {
        self.c.p0vs * (self.c.a0_ice * (t - T_FREEZE) / (t + self.c.a1_ice)).exp()
    }

    /// Saturation vapour pressure [Pa] over the phase selected by [`Regime::at`].
    pub fn pv_sat(&self, t: f64) -> f64 {
        match Regime::at(t) {
            Regime::Liquid => self.pv_sat_liquid(t),
            Regime::Ice => self.pv_sat_ice(t),
        }
    }

    /// [`pv_sat`](Self::pv_sat) applied to each temperature, same order.
    pub fn pv_sat_batch(&self, temperatures: &[f64]) -> Vec<f64> {
        self.evaluate_batch(temperatures)
    }

    /// Ratio of gas constants R_d/R_v.
    pub fn epsilon(&self) -> f64 {
        self.c.r_d / self.c.r_v
    }

    /// Saturation specific humidity [kg/kg] at temperature `t` and pressure `p`.
    ///
    /// `ε·pv / (p − (1−ε)·pv)`. No range check: for `p ≤ (1−ε)·pv` the
    /// result is non-physical (negative or infinite). See
    /// [`try_qv_sat`](Self::try_qv_sat) for a checked variant.
    pub fn qv_sat(&self, t: f64, p: f64) -> f64 {
        let eps = self.epsilon();
        let pv = self.pv_sat(t);
        eps * pv / (p - (1.0 - eps) * pv)
    }

    /// Checked [`qv_sat`](Self::qv_sat): rejects pressures at or below
    /// `(1−ε)·pv_sat(t)`, where the formula has no physical meaning.
    pub fn try_qv_sat(&self, t: f64, p: f64) -> CloudResult<f64> {
        let eps = self.epsilon();
        let pv = self.pv_sat(t);
        let denominator = p - (1.0 - eps) * pv;
        if !p.is_finite() || !t.is_finite() || denominator <= 0.0 {
            return Err(CloudError::PhysicsViolation(format!(
                "pressure {p} Pa too low for saturation at {t} K (pv_sat = {pv} Pa)"
            )));
        }
        Ok(eps * pv / denominator)
    }

    /// [`qv_sat`](Self::qv_sat) over a temperature sequence at one pressure.
    pub fn qv_sat_batch(&self, temperatures: &[f64], p: f64) -> Vec<f64> {
        temperatures.iter().map(|&t| self.qv_sat(t, p)).collect()
    }

    /// [`qv_sat`](Self::qv_sat) over elementwise-aligned temperature and
    /// pressure sequences.
    pub fn qv_sat_aligned(&self, temperatures: &[f64], pressures: &[f64]) -> CloudResult<Vec<f64>> {
        if temperatures.len() != pressures.len() {
            return Err(CloudError::ShapeMismatch {
                expected: temperatures.len(),
                got: pressures.len(),
            });
        }
        Ok(temperatures
            .iter()
            .zip(pressures)
            .map(|(&t, &p)| self.qv_sat(t, p))
            .collect())
    }

    /// Temperature derivative of [`pv_sat`](Self::pv_sat) [Pa/K].
    ///
    /// With A = a0 and B = −a1 of the active branch (B is the root of the
    /// exponent's denominator): `pv_sat(T)·A·(T0 − B)/(T − B)²`.
    pub fn dpsat_dt(&self, t: f64) -> f64 {
        let (a, a1) = self.branch(Regime::at(t));
        let b = -a1;
        self.pv_sat(t) * a * (T_FREEZE - b) / (t - b).powi(2)
    }

    /// Temperature derivative of [`qv_sat`](Self::qv_sat) at fixed pressure [1/K].
    ///
    /// `(R_d/R_v)·p·dpsat_dT / (p − pv_sat)²`. This drops the `(1−ε)` factor
    /// that [`qv_sat`](Self::qv_sat) carries in its denominator, so it runs a
    /// few percent above the exact slope in warm air at low pressure.
    pub fn dqv_sat_dt(&self, p: f64, t: f64) -> f64 {
        let pv = self.pv_sat(t);
        self.epsilon() * p * self.dpsat_dt(t) / (p - pv).powi(2)
    }

    /// `(a0, a1)` of a branch.
    fn branch(&self, regime: Regime) -> (f64, f64) {
        match regime {
            Regime::Liquid => (self.c.a0_lq, self.c.a1_lq),
            Regime::Ice => (self.c.a0_ice, self.c.a1_ice),
        }
    }
}

impl Parameterisation for SaturationVapourPressure {
    type State = f64;

    const SECTION: &'static str = "pv_sat";

    fn default_table() -> &'static ConstantTable {
        &DEFAULT_CONSTANTS
    }

    fn tables() -> &'static [&'static ConstantTable] {
        &TABLES
    }

    fn from_constants(constants: ConstantSet) -> CloudResult<Self> {
        let req = |name: &str| constants.require(Self::SECTION, name);
        let c = Coefficients {
            p0vs: req("p0vs")?,
            a0_lq: req("a0_lq")?,
            a1_lq: req("a1_lq")?,
            a0_ice: req("a0_ice")?,
            a1_ice: req("a1_ice")?,
            r_d: req("R_d")?,
            r_v: req("R_v")?,
        };
        Ok(SaturationVapourPressure { constants, c })
    }

    fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    fn evaluate_scalar(&self, t: f64) -> f64 {
        self.pv_sat(t)
    }
}

impl Default for SaturationVapourPressure {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Display for SaturationVapourPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, "exponential fit", &TABLES, &self.constants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs().max(1e-300)
    }

    #[test]
    fn test_freezing_point_selects_ice_branch() {
        let psat = SaturationVapourPressure::default();
        assert_eq!(Regime::at(T_FREEZE), Regime::Ice);
        assert_eq!(Regime::at(T_FREEZE + 1e-9), Regime::Liquid);
        // Exponent numerator vanishes at T0 on both branches.
        assert_eq!(psat.pv_sat_ice(T_FREEZE), 611.2);
        assert_eq!(psat.pv_sat(T_FREEZE), 611.2);
        assert_eq!(SaturationVapourPressure::ccfm().pv_sat(T_FREEZE), 610.78);
    }

    #[test]
    fn test_branch_selection_matches_regime() {
        let psat = SaturationVapourPressure::default();
        for t in [230.0, 260.0, 273.0, 273.15] {
            assert_eq!(psat.pv_sat(t), psat.pv_sat_ice(t), "T = {t}");
        }
        for t in [273.16, 280.0, 300.0, 310.0] {
            assert_eq!(psat.pv_sat(t), psat.pv_sat_liquid(t), "T = {t}");
        }
    }

    #[test]
    fn test_reference_values() {
        let psat = SaturationVapourPressure::default();
        // Tabulated: 2339 Pa over water at 20 °C, 103.3 Pa over ice at -20 °C.
        let pv = psat.pv_sat(293.15);
        assert!(rel_err(pv, 2339.0) < 0.02, "pv_sat(293.15) = {pv}");
        assert!((pv - 2367.654).abs() < 1e-2, "pv_sat(293.15) = {pv}");
        let pi = psat.pv_sat(253.15);
        assert!(rel_err(pi, 103.3) < 5e-3, "pv_sat(253.15) = {pi}");
    }

    #[test]
    fn test_batch_matches_scalar_in_order() {
        let psat = SaturationVapourPressure::default();
        let temps = [300.0, 273.15, 250.0, 273.2, 290.0];
        let batch = psat.pv_sat_batch(&temps);
        assert_eq!(batch.len(), temps.len());
        for (t, v) in temps.iter().zip(&batch) {
            assert_eq!(*v, psat.pv_sat(*t));
        }
        assert!(psat.pv_sat_batch(&[]).is_empty());
    }

    #[test]
    fn test_qv_sat_monotone_in_temperature() {
        let psat = SaturationVapourPressure::default();
        let ladder: Vec<f64> = (0..=10).map(|i| 250.0 + 5.0 * i as f64).collect();
        let qv = psat.qv_sat_batch(&ladder, 90_000.0);
        for w in qv.windows(2) {
            assert!(w[1] > w[0], "qv_sat not increasing: {w:?}");
        }
    }

    #[test]
    fn test_qv_sat_garbage_in_garbage_out() {
        let psat = SaturationVapourPressure::default();
        let pv = psat.pv_sat(300.0);
        let p_low = 0.5 * (1.0 - psat.epsilon()) * pv;
        // Unchecked path returns a non-physical negative value, no error.
        assert!(psat.qv_sat(300.0, p_low) < 0.0);
        assert!(matches!(
            psat.try_qv_sat(300.0, p_low),
            Err(CloudError::PhysicsViolation(_))
        ));
        assert_eq!(psat.try_qv_sat(300.0, 90_000.0), Ok(psat.qv_sat(300.0, 90_000.0)));
    }

    #[test]
    fn test_qv_sat_aligned_shape_mismatch() {
        let psat = SaturationVapourPressure::default();
        let err = psat.qv_sat_aligned(&[280.0, 290.0], &[90_000.0]).unwrap_err();
        assert_eq!(err, CloudError::ShapeMismatch { expected: 2, got: 1 });
        let ok = psat
            .qv_sat_aligned(&[280.0, 290.0], &[90_000.0, 80_000.0])
            .unwrap();
        assert_eq!(ok, vec![psat.qv_sat(280.0, 90_000.0), psat.qv_sat(290.0, 80_000.0)]);
    }

    #[test]
    fn test_dpsat_dt_matches_finite_difference() {
        for psat in [SaturationVapourPressure::default(), SaturationVapourPressure::ccfm()] {
            for t in [240.0, 260.0, 272.0, 275.0, 290.0, 305.0] {
                let h = 1e-4;
                let fd = (psat.pv_sat(t + h) - psat.pv_sat(t - h)) / (2.0 * h);
                let an = psat.dpsat_dt(t);
                assert!(rel_err(an, fd) < 1e-6, "T={t}: analytic {an}, fd {fd}");
            }
        }
    }

    #[test]
    fn test_dqv_sat_dt_reference_values() {
        let psat = SaturationVapourPressure::default();
        let an = psat.dqv_sat_dt(90_000.0, 300.0);
        assert!(rel_err(an, 1.599_618e-3) < 1e-6, "dqv_sat_dt(90 kPa, 300 K) = {an}");
        let ai = psat.dqv_sat_dt(60_000.0, 250.0);
        assert!(rel_err(ai, 7.765_258e-5) < 1e-6, "dqv_sat_dt(60 kPa, 250 K) = {ai}");
    }

    #[test]
    fn test_dqv_sat_dt_denominator_is_p_minus_pv() {
        // Rescaling by ((p − (1−ε)·pv)/(p − pv))² recovers the exact slope.
        let psat = SaturationVapourPressure::default();
        let eps = psat.epsilon();
        for (t, p) in [(250.0, 60_000.0), (265.0, 80_000.0), (285.0, 90_000.0), (305.0, 50_000.0)] {
            let h = 1e-4;
            let fd = (psat.qv_sat(t + h, p) - psat.qv_sat(t - h, p)) / (2.0 * h);
            let pv = psat.pv_sat(t);
            let scale = ((p - (1.0 - eps) * pv) / (p - pv)).powi(2);
            let an = psat.dqv_sat_dt(p, t);
            assert!(rel_err(an, fd * scale) < 1e-6, "T={t}, p={p}: analytic {an}, fd {fd}");
        }
    }

    #[test]
    fn test_dqv_sat_dt_close_to_finite_difference() {
        // Within 6% on the 250–300 K ladder at 90 kPa; largest at the warm end.
        let psat = SaturationVapourPressure::default();
        let p = 90_000.0;
        for i in 0..=10 {
            let t = 250.0 + 5.0 * i as f64;
            let h = 1e-4;
            let fd = (psat.qv_sat(t + h, p) - psat.qv_sat(t - h, p)) / (2.0 * h);
            let an = psat.dqv_sat_dt(p, t);
            assert!(an > fd, "T={t}: analytic {an}, fd {fd}");
            assert!(rel_err(an, fd) < 0.06, "T={t}: analytic {an}, fd {fd}");
        }
    }

    #[test]
    fn test_epsilon_is_gas_constant_ratio() {
        for psat in [SaturationVapourPressure::default(), SaturationVapourPressure::ccfm()] {
            let eps = psat.epsilon();
            assert_eq!(eps, R_DRY_AIR / R_WATER_VAPOUR);
            // M_v / M_d = 18.015 / 28.965
            assert!((eps - 0.622).abs() < 1e-3, "epsilon = {eps}");
        }
    }

    #[test]
    fn test_missing_constant_fails_construction() {
        let constants = ConstantSet::from_pairs([("p0vs", 611.2), ("a0_lq", 17.67)]);
        let err = SaturationVapourPressure::from_constants(constants).unwrap_err();
        assert_eq!(
            err,
            CloudError::MissingConstant {
                formula: "pv_sat".to_string(),
                name: "a1_lq".to_string()
            }
        );
    }

    #[test]
    fn test_named_tables() {
        let ccfm = SaturationVapourPressure::from_named_table("CCFM").unwrap();
        assert_eq!(ccfm, SaturationVapourPressure::ccfm());
        assert_eq!(
            SaturationVapourPressure::from_named_table("default").unwrap(),
            SaturationVapourPressure::default()
        );
        assert!(SaturationVapourPressure::from_named_table("magnus").is_err());
    }

    #[test]
    fn test_display_labels_table() {
        let s = SaturationVapourPressure::ccfm().to_string();
        assert!(s.starts_with("exponential fit (CCFM: p0vs=611, a0_lq=17.3"), "{s}");
        let custom = SaturationVapourPressure::from_constants(ConstantSet::from_pairs([
            ("p0vs", 600.0),
            ("a0_lq", 17.67),
            ("a1_lq", -32.19),
            ("a0_ice", 22.587),
            ("a1_ice", 0.7),
            ("R_d", 287.05),
            ("R_v", 461.51),
        ]))
        .unwrap();
        assert!(custom.to_string().starts_with("exponential fit (p0vs=600,"));
    }
}
