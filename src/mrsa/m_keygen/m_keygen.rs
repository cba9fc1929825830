use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroize;

use crate::crypto_error::CryptoError;
use crate::mrsa::math::{gcd, mod_inverse_checked};
use crate::mrsa::prime::is_prime;

// Seuil minimal du modulus n = p·q : le 64e bit doit être utilisé.
// Constante de politique, pas une valeur dérivée.
pub const MINIMUM_N: u64 = 1 << 63;

// Plafonds des boucles de tirage. Largement au-dessus de tout comptage
// plausible (densité des premiers ~ 1/22 près de 2^31) : les atteindre
// signifie que la source d'aléa est cassée.
const MAX_PRIME_ATTEMPTS: u32 = 100_000;
const MAX_EXPONENT_ATTEMPTS: u32 = 10_000;
const MAX_KEY_ATTEMPTS: u32 = 1_000;

// ============================================================================
// Clé publique mRSA — pas de données secrètes, pas de zeroize nécessaire
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub e: u64,
    pub n: u64,
}

// ============================================================================
// Clé secrète mRSA — ZEROISÉE À LA DESTRUCTION
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    pub d: u64,
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ============================================================================
// Paire de clés
// ============================================================================
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
}

// ---------------------------------------------------------------------------
// Tirage d'un premier de 32 bits : bit 31 forcé (p >= 2^31, donc n = p·q
// proche des 64 bits pleins) et bit 0 forcé (candidat impair), validé par
// Miller-Rabin déterministe.
// ---------------------------------------------------------------------------
fn generate_prime<R: RngCore + CryptoRng>(rng: &mut R) -> Result<u32, CryptoError> {
    for _ in 0..MAX_PRIME_ATTEMPTS {
        let candidate = rng.next_u32() | 1 | (1 << 31);
        if is_prime(candidate as u64) {
            return Ok(candidate);
        }
    }
    Err(CryptoError::RetryLimitExceeded { attempts: MAX_PRIME_ATTEMPTS })
}

// ============================================================================
// Génération de clés mRSA : (e, d, n) avec n = p·q sur 64 bits
//
// Le totient de Carmichael λ(n) = lcm(p-1, q-1) est utilisé, calculé
// comme (p-1)(q-1) / gcd(p-1, q-1).
// ============================================================================

/// Génère une paire de clés avec une source d'aléa explicite.
///
/// La source est injectée (capacité) plutôt que globale : un RNG semé
/// rend la génération reproductible en test.
pub fn m_keygen_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<KeyPair, CryptoError> {
    // 1) Deux premiers distincts de 32 bits, n = p·q >= MINIMUM_N
    let mut attempts = 0;
    let (p, q, n) = loop {
        attempts += 1;
        if attempts > MAX_KEY_ATTEMPTS {
            return Err(CryptoError::RetryLimitExceeded { attempts: MAX_KEY_ATTEMPTS });
        }

        let p = generate_prime(rng)?;
        let mut q = generate_prime(rng)?;
        while q == p {
            q = generate_prime(rng)?;
        }

        let n = u64::from(p) * u64::from(q);
        if n >= MINIMUM_N {
            break (p, q, n);
        }
        // n trop petit : on jette les deux premiers et on recommence
    };

    // 2) λ(n) = (p-1)(q-1) / gcd(p-1, q-1)  — identique à lcm(p-1, q-1)
    let p_minus_1 = u64::from(p - 1);
    let q_minus_1 = u64::from(q - 1);
    let phi = p_minus_1 * q_minus_1;
    let lambda = phi / gcd(p_minus_1, q_minus_1);

    // 3) Exposant public : impair aléatoire sur 64 bits, copremier avec λ(n)
    let e = {
        let mut found = None;
        for _ in 0..MAX_EXPONENT_ATTEMPTS {
            let candidate = rng.next_u64() | 1;
            if gcd(candidate, lambda) == 1 {
                found = Some(candidate);
                break;
            }
        }
        found.ok_or(CryptoError::RetryLimitExceeded { attempts: MAX_EXPONENT_ATTEMPTS })?
    };

    // 4) d = e^-1 mod λ(n). gcd(e, λ) == 1 vient d'être vérifié : un échec
    // ici est une violation d'invariant interne, pas un aléa normal.
    let d = mod_inverse_checked(e, lambda)?;

    Ok(KeyPair {
        public_key: PublicKey { e, n },
        secret_key: SecretKey { d },
    })
}

/// Génère une paire de clés avec l'entropie système (OsRng).
pub fn m_keygen() -> Result<KeyPair, CryptoError> {
    m_keygen_with_rng(&mut OsRng)
}
