#![allow(non_snake_case)]
#![allow(confusable_idents)]

//! The stretch-torsion cross term of the AMOEBA force field, for use as one energy term inside
//! a molecular dynamics engine.
//!
//! For each quadruplet of bonded atoms A-B-C-D, this couples the stretch of each of the three
//! bonds (BA, CB, DC) with the dihedral angle φ about the central bond:
//!
//! U = Σ_bonds (r - r_0) · [k_1 (1 + cos φ) + k_2 (1 - cos 2φ) + k_3 (1 + cos 3φ)]
//!
//! There are three coefficients per bond; nine per term. We return the potential energy, and
//! subtract the analytic gradient from the host's per-particle force buffer. Everything else
//! (parameter assignment, integration, neighbor handling) is up to the host, which calls this
//! once per step.
//!
//! Units are the host's; we don't convert. With Amber-style inputs: Å, and kcal/mol/Å for k.
//!
//! On f32 vs f64: We use f64 by default, matching reference implementations of this term. Enable the
//! `f32` feature for single precision throughout; there is no mixed mode.
//!
//! [Tinker](https://dasher.wustl.edu/tinker/): See `estrtor1`, which this follows.

mod bonded;
mod bonded_forces;
mod force;
pub mod params;
pub mod vec_ops;

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

pub use bonded::{calc_stretch_torsion_forces, calc_stretch_torsion_forces_par};
pub use bonded_forces::f_stretch_torsion;
pub use force::StretchTorsionForce;
pub use params::{Bond, StretchTorsionParams, StretchTorsionTerm};
pub use vec_ops::{Real, Vec3};

// Below this many terms, thread-pool overhead outweighs the work; a term is a few hundred flops.
const PAR_MIN_TERMS_DEFAULT: usize = 512;

/// Problems with how the host addresses terms in a `StretchTorsionForce`. The numerical path itself
/// doesn't fail: degenerate geometry returns zero, and other bad input propagates.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum StretchTorsionError {
    #[error("Stretch-torsion term index {index} out of range; there are {count} terms")]
    TermIndex { index: usize, count: usize },
}

#[cfg_attr(feature = "encode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq)]
pub struct StretchTorsionConfig {
    /// Evaluate terms on the rayon thread pool, with per-thread force buffers.
    pub parallel: bool,
    /// Run serially if there are fewer terms than this, even if `parallel` is set.
    pub par_min_terms: usize,
}

impl Default for StretchTorsionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            par_min_terms: PAR_MIN_TERMS_DEFAULT,
        }
    }
}
