//! A minimal example: Two overlapping stretch-torsion terms along a 5-atom chain, evaluated the way
//! a host MD step would.

use stretch_torsion::{StretchTorsionConfig, StretchTorsionForce, StretchTorsionTerm, Vec3};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Å. A lightly-stretched zig-zag chain, similar to a butane backbone plus one more carbon.
    let posits = vec![
        Vec3::new(1.55, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(-0.52, 1.47, 0.0),
        Vec3::new(-2.07, 1.52, 0.31),
        Vec3::new(-2.63, 2.97, 0.42),
    ];

    let mut force = StretchTorsionForce::new(StretchTorsionConfig::default());

    // Equilibrium lengths in Å; k1..k9 in kcal/mol/Å.
    let k = [0., 0., 0.4, 2.1, 0., -0.3, 0., 0., 0.4];
    force.add_stretch_torsion(StretchTorsionTerm::new((0, 1, 2, 3), [1.53, 1.53, 1.53], k));
    force.add_stretch_torsion(StretchTorsionTerm::new((1, 2, 3, 4), [1.53, 1.53, 1.53], k));

    // The host owns this, and accumulates every energy term into it before integrating.
    let mut forces = vec![Vec3::new_zero(); posits.len()];
    let energy = force.calc_forces_and_energy(&posits, &mut forces);
    log::info!("Stretch-torsion PE: {energy:.6} kcal/mol");

    for (i, f) in forces.iter().enumerate() {
        println!("Atom {i}: F = ({:.5}, {:.5}, {:.5})", f.x, f.y, f.z);
    }
}
