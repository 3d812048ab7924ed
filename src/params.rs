//! Stretch-torsion parameters, and the per-quadruplet term that binds them to atom indices.

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::vec_ops::Real;

/// Bonds of the quadruplet, in the order their parameters are stored.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Bond {
    Ba,
    Cb,
    Dc,
}

impl Bond {
    pub const ALL: [Self; 3] = [Self::Ba, Self::Cb, Self::Dc];

    /// Force slot of the bond's first atom. The second atom is the next slot.
    /// E.g. `Cb` runs from B (slot 1) to C (slot 2).
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// Equilibrium bond lengths, and the torsional Fourier coefficients coupled to each bond's stretch.
/// Outer array index is the bond (BA, CB, DC); inner is the periodicity (1, 2, 3-fold).
///
/// Using the flat k1..k9 numbering: k1..k3 are BA, k4..k6 are CB, k7..k9 are DC.
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StretchTorsionParams {
    /// Å
    pub r_0: [Real; 3],
    /// Energy per Å of stretch. (e.g. kcal/mol/Å)
    pub k: [[Real; 3]; 3],
}

impl StretchTorsionParams {
    /// Build from the three equilibrium lengths, and k1 through k9.
    pub fn new(r_0: [Real; 3], k: [Real; 9]) -> Self {
        Self {
            r_0,
            k: [[k[0], k[1], k[2]], [k[3], k[4], k[5]], [k[6], k[7], k[8]]],
        }
    }

    pub fn r_0(&self, bond: Bond) -> Real {
        self.r_0[bond.slot()]
    }

    pub fn k(&self, bond: Bond) -> [Real; 3] {
        self.k[bond.slot()]
    }

    /// The same coupling seen from the other end of the chain: BA and DC trade places.
    pub fn reversed(&self) -> Self {
        Self {
            r_0: [self.r_0[2], self.r_0[1], self.r_0[0]],
            k: [self.k[2], self.k[1], self.k[0]],
        }
    }
}

/// One stretch-torsion interaction: four consecutively-bonded atoms A-B-C-D, and its parameters.
/// Immutable once built; indices refer into the host's position and force arrays.
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StretchTorsionTerm {
    pub atoms: (usize, usize, usize, usize),
    pub params: StretchTorsionParams,
}

impl StretchTorsionTerm {
    pub fn new(atoms: (usize, usize, usize, usize), r_0: [Real; 3], k: [Real; 9]) -> Self {
        Self {
            atoms,
            params: StretchTorsionParams::new(r_0, k),
        }
    }

    /// Traverse D-C-B-A instead of A-B-C-D. The energy is unchanged.
    pub fn reversed(&self) -> Self {
        let (a, b, c, d) = self.atoms;
        Self {
            atoms: (d, c, b, a),
            params: self.params.reversed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_k_numbering() {
        let p = StretchTorsionParams::new(
            [1.1, 1.2, 1.3],
            [1., 2., 3., 4., 5., 6., 7., 8., 9.],
        );

        assert_eq!(p.k(Bond::Ba), [1., 2., 3.]);
        assert_eq!(p.k(Bond::Cb), [4., 5., 6.]);
        assert_eq!(p.k(Bond::Dc), [7., 8., 9.]);
        assert_eq!(p.r_0(Bond::Cb), 1.2);
    }

    #[test]
    fn reversed_swaps_outer_bonds() {
        let term = StretchTorsionTerm::new(
            (3, 4, 5, 6),
            [1.1, 1.2, 1.3],
            [1., 2., 3., 4., 5., 6., 7., 8., 9.],
        );
        let rev = term.reversed();

        assert_eq!(rev.atoms, (6, 5, 4, 3));
        assert_eq!(rev.params.r_0, [1.3, 1.2, 1.1]);
        assert_eq!(rev.params.k(Bond::Ba), [7., 8., 9.]);
        assert_eq!(rev.params.k(Bond::Cb), [4., 5., 6.]);
        assert_eq!(rev.reversed(), term);
    }
}
