//! Vector math, scalar helpers and noise.

pub mod extended;
mod noise;
mod percent;
mod vector;

pub use extended::{
    EPSILON, GOLDEN_RATIO, PHI, SQRT3, TAU, arccot, arccsc, arcsec, cartesian_to_polar, clamp,
    cot, csc, degree_to_radian, epsilon_compare, is_prime, is_within_range, lerp,
    polar_to_cartesian, polar_to_vector, radian_to_degree, random, remap, sec, vector_to_polar,
};
pub use noise::Noise;
pub use percent::Percent;
pub use vector::{Vector2, Vector3};
