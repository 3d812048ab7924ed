//! Vector arithmetic, and the floating point precision used throughout the crate.
//!
//! We use `lin_alg`'s `Vec3` for all 3-component quantities: positions, bond vectors, cross products
//! and forces. Its operator overloads cover everything the kernel needs: `+`, `-`, `* s`, and their
//! in-place forms `+=`, `-=`, `*= s`. The precision is fixed at build time; `f64` by default, or
//! `f32` with the `f32` feature. Don't mix the two inside a computation.

#[cfg(feature = "f32")]
pub use lin_alg::f32::Vec3;
#[cfg(not(feature = "f32"))]
pub use lin_alg::f64::Vec3;

/// The scalar type matching `Vec3`.
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// Zeroed force slots for one quadruplet.
pub(crate) fn zero_quad() -> [Vec3; 4] {
    [Vec3::new_zero(); 4]
}
