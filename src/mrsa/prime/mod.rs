// Réexporte le test de primalité déterministe

mod prime;

pub use prime::{is_prime, MILLER_RABIN_BASES};
