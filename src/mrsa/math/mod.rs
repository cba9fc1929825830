// Réexporte les routines d'arithmétique modulaire 64 bits

mod math;

pub use math::{mod_add, mod_mul, mod_pow, gcd, mod_inverse, mod_inverse_checked};
