//! Thermophysical parameterisations for the SCPN cloud model.
//!
//! Saturation vapour pressure over liquid and ice, thermal conductivity of
//! air and water-vapour diffusivity, each parameterised by a constant set
//! that can be overridden per formula, globally, or left at its literature
//! default (see [`resolver`]).

pub mod conductivity;
pub mod constant_set;
pub mod diffusion;
mod format;
pub mod profile;
pub mod resolver;
pub mod saturation;
pub mod traits;

pub use conductivity::ThermalConductivityCoefficient;
pub use constant_set::{ConstantSet, ConstantTable};
pub use diffusion::WaterVapourDiffusionCoefficient;
pub use resolver::{ParameterisationsWithSpecificConstants, UsingDefault};
pub use saturation::SaturationVapourPressure;
pub use traits::Parameterisation;
