//! A container of stretch-torsion terms, for hosts that prefer to own one object per energy term.
//! Terms are added once at setup, may have their parameters replaced between steps, and are
//! evaluated together each step.

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::{
    StretchTorsionConfig, StretchTorsionError, bonded,
    params::StretchTorsionTerm,
    vec_ops::{Real, Vec3},
};

#[cfg_attr(feature = "encode", derive(Encode, Decode))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StretchTorsionForce {
    terms: Vec<StretchTorsionTerm>,
    pub cfg: StretchTorsionConfig,
}

impl StretchTorsionForce {
    pub fn new(cfg: StretchTorsionConfig) -> Self {
        log::debug!(
            "Stretch-torsion force: parallel: {}, parallel above {} terms",
            cfg.parallel,
            cfg.par_min_terms
        );

        Self {
            terms: Vec::new(),
            cfg,
        }
    }

    /// Returns the index of the added term.
    pub fn add_stretch_torsion(&mut self, term: StretchTorsionTerm) -> usize {
        self.terms.push(term);
        self.terms.len() - 1
    }

    pub fn num_stretch_torsions(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[StretchTorsionTerm] {
        &self.terms
    }

    pub fn stretch_torsion(&self, index: usize) -> Result<&StretchTorsionTerm, StretchTorsionError> {
        self.terms.get(index).ok_or(StretchTorsionError::TermIndex {
            index,
            count: self.terms.len(),
        })
    }

    /// Replace a term's atoms and parameters. The host calls this between steps, e.g. when
    /// updating parameters in a running simulation.
    pub fn set_stretch_torsion(
        &mut self,
        index: usize,
        term: StretchTorsionTerm,
    ) -> Result<(), StretchTorsionError> {
        let count = self.terms.len();
        let slot = self
            .terms
            .get_mut(index)
            .ok_or(StretchTorsionError::TermIndex { index, count })?;

        log::debug!("Replacing stretch-torsion term {index}: {:?}", term.atoms);
        *slot = term;

        Ok(())
    }

    /// Whether `calc_forces_and_energy` takes the thread-pool path with the current term count.
    pub fn runs_parallel(&self) -> bool {
        self.cfg.parallel && self.terms.len() >= self.cfg.par_min_terms
    }

    /// Subtracts each term's gradient from `forces`, and returns the total potential energy.
    /// `forces` is not reset.
    pub fn calc_forces_and_energy(&self, posits: &[Vec3], forces: &mut [Vec3]) -> Real {
        if self.runs_parallel() {
            bonded::calc_stretch_torsion_forces_par(&self.terms, posits, forces)
        } else {
            bonded::calc_stretch_torsion_forces(&self.terms, posits, forces)
        }
    }
}
