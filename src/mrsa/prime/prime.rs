use crate::mrsa::math::{mod_mul, mod_pow};

// ---------------------------------------------------------------------------
// Table des bases Miller-Rabin (déterministe pour tout n < 3,3·10^24,
// donc pour tout u64). La même table sert deux fois : crible rapide par
// petits premiers, puis témoins du test proprement dit.
// ---------------------------------------------------------------------------
pub const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Test de primalité Miller-Rabin, version déterministe.
///
/// Fonction totale sur u64 : 0, 1 et les pairs sont gérés directement.
/// Aucune base aléatoire — le résultat est reproductible pour un même n.
pub fn is_prime(n: u64) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n & 1 == 0 {
        return false;
    }

    // 0) Crible rapide par la table : n égal à une base → premier,
    //    divisible par une base → composé
    for &p in &MILLER_RABIN_BASES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    // 1) n-1 = d · 2^s avec d impair
    let n_minus_1 = n - 1;
    let s = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> s;

    // 2) Test déterministe sur chaque base
    'witness: for &base in &MILLER_RABIN_BASES {
        let a = base % n;
        if a == 0 {
            continue; // a ≡ 0 (mod n) : base inutilisable
        }

        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n_minus_1 {
            continue 'witness;
        }

        // Jusqu'à s-1 mises au carré à la recherche de n-1
        for _ in 1..s {
            x = mod_mul(x, x, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false; // témoin de composition trouvé
    }

    true
}

// ============================================================================
// Tests unitaires — vecteurs connus, premiers et composés
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(100));
    }

    #[test]
    fn test_bases_are_prime_divisors_composite() {
        // Chaque base de la table est elle-même première
        for &p in &MILLER_RABIN_BASES {
            assert!(is_prime(p), "{p} est premier");
        }
        // Leurs multiples stricts sont composés
        for &p in &MILLER_RABIN_BASES {
            assert!(!is_prime(p * 41), "{} est composé", p * 41);
        }
    }

    #[test]
    fn test_known_primes() {
        let primes: &[u64] = &[
            101,
            7_919,
            1_000_000_007,
            2_147_483_647,            // premier de Mersenne 2^31 - 1
            4_294_967_291,            // plus grand premier 32 bits
            9_223_372_036_854_775_783, // plus grand premier < 2^63
            18_446_744_073_709_551_557, // plus grand premier 64 bits
        ];
        for &p in primes {
            assert!(is_prime(p), "{p} est premier");
        }
    }

    #[test]
    fn test_known_composites() {
        let composites: &[u64] = &[
            2_147_483_649,             // 2^31 + 1 = 3 · 715 827 883
            4_294_967_297,             // F5 = 641 · 6 700 417
            1_000_000_007u64 * 1_000_000_009,
            18_446_744_073_709_551_615, // u64::MAX = 3 · 5 · 17 · 257 · ...
        ];
        for &c in composites {
            assert!(!is_prime(c), "{c} est composé");
        }
    }

    #[test]
    fn test_carmichael_numbers() {
        // Les nombres de Carmichael piègent le test de Fermat, pas Miller-Rabin
        for &c in &[561u64, 1_105, 41_041, 825_265] {
            assert!(!is_prime(c), "{c} est un nombre de Carmichael");
        }
    }

    #[test]
    fn test_strong_pseudoprimes_rejected() {
        // 3 215 031 751 : pseudo-premier fort pour les bases 2, 3, 5 et 7 —
        // la table complète doit le démasquer
        assert!(!is_prime(3_215_031_751));
        // 3 825 123 056 546 413 051 : pseudo-premier fort pour 2..23
        assert!(!is_prime(3_825_123_056_546_413_051));
    }

    #[test]
    fn test_deterministic() {
        // Pas de base aléatoire : deux appels donnent toujours la même réponse
        for n in [2_147_483_647u64, 2_147_483_649, 561] {
            assert_eq!(is_prime(n), is_prime(n));
        }
    }
}
