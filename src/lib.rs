// Déclaration des modules
pub mod crypto_error;
pub mod mrsa;

pub use crate::mrsa::math;
pub use crate::mrsa::prime;
pub use crate::mrsa::m_keygen;
pub use crate::mrsa::m_cipher;

// Fonctions mathématiques principales
pub use crate::mrsa::math::{mod_add, mod_mul, mod_pow, gcd, mod_inverse};

// Primalité déterministe
pub use crate::mrsa::prime::{is_prime, MILLER_RABIN_BASES};

// Types et opérations depuis keygen / cipher
pub use crate::mrsa::m_keygen::{m_keygen, m_keygen_with_rng, KeyPair, PublicKey, SecretKey, MINIMUM_N};
pub use crate::mrsa::m_cipher::m_cipher;

// Erreur centralisée
pub use crypto_error::CryptoError;
