//! The stretch-torsion kernel: energy and forces for a single A-B-C-D quadruplet.
//!
//! U = Σ_bonds (r - r_0) · Σ_n k_n (1 + cos(nφ + δ_n)), n = 1, 2, 3, with phases δ of 0°, 180° and 0°.
//!
//! This is the AMOEBA/Tinker functional form. The gradient with respect to φ is distributed onto
//! the atoms through the two plane normals T = BA × CB and U = CB × DC, as in Tinker's `etors1`.

use crate::{
    params::{Bond, StretchTorsionParams},
    vec_ops::{Real, Vec3, zero_quad},
};

/// (cos δ_n, sin δ_n) for the 1, 2 and 3-fold terms.
const PHASES: [(Real, Real); 3] = [(1., 0.), (-1., 0.), (1., 0.)];

/// Geometry shared by all three bond blocks of a quadruplet.
struct Geometry {
    ba: Vec3,
    cb: Vec3,
    dc: Vec3,
    ca: Vec3,
    db: Vec3,
    t: Vec3,
    u: Vec3,
    r_t2: Real,
    r_u2: Real,
    r_cb: Real,
}

impl Geometry {
    fn bond_vec(&self, bond: Bond) -> Vec3 {
        match bond {
            Bond::Ba => self.ba,
            Bond::Cb => self.cb,
            Bond::Dc => self.dc,
        }
    }
}

/// Fourier series in the torsion angle: φ_n = 1 + cos(nφ + δ_n), and dφ_n/dφ.
struct TorsionSeries {
    phi: [Real; 3],
    dphi: [Real; 3],
}

impl TorsionSeries {
    fn new(cosine: Real, sine: Real) -> Self {
        let cosine2 = cosine * cosine - sine * sine;
        let sine2 = 2. * sine * cosine;
        let cosine3 = cosine * cosine2 - sine * sine2;
        let sine3 = cosine * sine2 + sine * cosine2;

        let [(c1, s1), (c2, s2), (c3, s3)] = PHASES;

        Self {
            phi: [
                1. + (cosine * c1 + sine * s1),
                1. + (cosine2 * c2 + sine2 * s2),
                1. + (cosine3 * c3 + sine3 * s3),
            ],
            dphi: [
                cosine * s1 - sine * c1,
                2. * (cosine2 * s2 - sine2 * c2),
                3. * (cosine3 * s3 - sine3 * c3),
            ],
        }
    }

    fn sum(vals: &[Real; 3], k: &[Real; 3]) -> Real {
        k[0] * vals[0] + k[1] * vals[1] + k[2] * vals[2]
    }
}

/// Returns forces on atoms A, B, C and D, and potential energy.
///
/// Note: Each force holds +∂U/∂r for its atom, i.e. the gradient. Subtract it from the force
/// accumulator. Returns zero energy and zero forces if A-B-C or B-C-D are collinear, since the
/// torsion angle is undefined there. Non-finite positions are not checked, and propagate.
pub fn f_stretch_torsion(
    posit_a: Vec3,
    posit_b: Vec3,
    posit_c: Vec3,
    posit_d: Vec3,
    params: &StretchTorsionParams,
) -> ([Vec3; 4], Real) {
    let ba = posit_b - posit_a;
    let cb = posit_c - posit_b;
    let dc = posit_d - posit_c;

    // Normal vectors to the ABC and BCD planes.
    let t = ba.cross(cb);
    let u = cb.cross(dc);
    let t_x_u = t.cross(u);

    let r_t2 = t.magnitude_squared();
    let r_u2 = u.magnitude_squared();
    let r_t_r_u = (r_t2 * r_u2).sqrt();

    // Exact comparison; a NaN passes through.
    if r_t_r_u <= 0. {
        return (zero_quad(), 0.);
    }

    let geom = Geometry {
        ba,
        cb,
        dc,
        ca: posit_c - posit_a,
        db: posit_d - posit_b,
        t,
        u,
        r_t2,
        r_u2,
        r_cb: cb.magnitude(),
    };

    let cosine = t.dot(u) / r_t_r_u;
    let sine = cb.dot(t_x_u) / (geom.r_cb * r_t_r_u);

    let series = TorsionSeries::new(cosine, sine);

    let mut f = zero_quad();
    let mut energy = 0.;

    for bond in Bond::ALL {
        energy += accumulate_bond(&mut f, &geom, &series, bond, params);
    }

    (f, energy)
}

/// One bond's block: adds its torsion and stretch gradients into `f`, and returns its energy.
/// The stretch part goes last for each atom; `f` sums are order-sensitive at the bit level.
fn accumulate_bond(
    f: &mut [Vec3; 4],
    geom: &Geometry,
    series: &TorsionSeries,
    bond: Bond,
    params: &StretchTorsionParams,
) -> Real {
    let k = params.k(bond);
    let bond_vec = geom.bond_vec(bond);
    let r = bond_vec.magnitude();

    let dr = r - params.r_0(bond);
    let phi_sum = TorsionSeries::sum(&series.phi, &k);

    let energy = dr * phi_sum;
    let dE_dφ = dr * TorsionSeries::sum(&series.dphi, &k);
    let dE_dr = phi_sum / r;

    let stretch = bond_vec * dE_dr;

    let cb = geom.cb;
    let dE_dt = geom.t.cross(cb) * (dE_dφ / (geom.r_t2 * geom.r_cb));
    let dE_du = geom.u.cross(cb) * (-dE_dφ / (geom.r_u2 * geom.r_cb));

    f[0] += dE_dt.cross(cb);

    f[1] += geom.ca.cross(dE_dt);
    f[1] += dE_du.cross(geom.dc);

    f[2] += dE_dt.cross(geom.ba);
    f[2] += geom.db.cross(dE_du);

    f[3] += dE_du.cross(cb);

    // The bond's length depends only on its own two atoms.
    let i = bond.slot();
    f[i] -= stretch;
    f[i + 1] += stretch;

    energy
}
