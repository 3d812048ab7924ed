//! Applies stretch-torsion forces over a set of terms. These are bonded terms: They assume immutable
//! covalent bonds, and indices that don't change over the course of the run.
//!
//! Force buffers hold physical forces (-∂U/∂r) indexed by particle. The kernel returns gradients,
//! so we subtract. We never reset the buffer: The host accumulates other terms into it too.

use rayon::prelude::*;

use crate::{
    bonded_forces,
    params::StretchTorsionTerm,
    vec_ops::{Real, Vec3},
};

/// Serial evaluation over all terms, in order. Returns the summed potential energy.
///
/// Indices are not checked beyond slice indexing; an index past the end of `posits` or `forces`
/// panics.
pub fn calc_stretch_torsion_forces(
    terms: &[StretchTorsionTerm],
    posits: &[Vec3],
    forces: &mut [Vec3],
) -> Real {
    let mut energy = 0.;

    for term in terms {
        let (a, b, c, d) = term.atoms;

        let (f, e) = bonded_forces::f_stretch_torsion(
            posits[a],
            posits[b],
            posits[c],
            posits[d],
            &term.params,
        );

        energy += e;

        forces[a] -= f[0];
        forces[b] -= f[1];
        forces[c] -= f[2];
        forces[d] -= f[3];
    }

    energy
}

/// As `calc_stretch_torsion_forces`, but over a thread pool. Atoms shared between quadruplets would
/// race on a shared buffer, so each worker accumulates into its own, and we merge after.
///
/// Results match the serial version up to floating point reassociation of the sums.
pub fn calc_stretch_torsion_forces_par(
    terms: &[StretchTorsionTerm],
    posits: &[Vec3],
    forces: &mut [Vec3],
) -> Real {
    let n = forces.len();

    let (grad, energy) = terms
        .par_iter()
        .fold(
            || (vec![Vec3::new_zero(); n], 0.),
            |(mut acc, mut energy): (Vec<Vec3>, Real), term| {
                let (a, b, c, d) = term.atoms;

                let (f, e) = bonded_forces::f_stretch_torsion(
                    posits[a],
                    posits[b],
                    posits[c],
                    posits[d],
                    &term.params,
                );

                energy += e;

                acc[a] += f[0];
                acc[b] += f[1];
                acc[c] += f[2];
                acc[d] += f[3];

                (acc, energy)
            },
        )
        .reduce(
            || (vec![Vec3::new_zero(); n], 0.),
            |(mut acc_a, e_a), (acc_b, e_b)| {
                for i in 0..n {
                    acc_a[i] += acc_b[i];
                }
                (acc_a, e_a + e_b)
            },
        );

    for (f, g) in forces.iter_mut().zip(grad) {
        *f -= g;
    }

    energy
}
