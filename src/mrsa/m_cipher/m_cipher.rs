use crate::crypto_error::CryptoError;
use crate::mrsa::math::mod_pow;

// ---------------------------------------------------------------------------
// Opération de chiffrement mRSA : m' = m^k mod n
//
// Une seule routine pour les deux sens — chiffrer avec k = e, déchiffrer
// avec k = d. Fonction pure : le message transformé est retourné, jamais
// écrit en place.
//
// Politique de domaine : un message m >= n est rejeté avec
// Err(CryptoError::MessageOutOfRange) plutôt que réduit silencieusement.
// La réduction silencieuse masquerait un bug de l'appelant (la valeur
// d'origine serait irrécupérable après l'aller-retour).
// ---------------------------------------------------------------------------
pub fn m_cipher(m: u64, k: u64, n: u64) -> Result<u64, CryptoError> {
    if n < 2 {
        return Err(CryptoError::InvalidModulus);
    }
    if m >= n {
        return Err(CryptoError::MessageOutOfRange);
    }

    Ok(mod_pow(m, k, n))
}

// ============================================================================
// Tests unitaires
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // Paire d'école : p = 61, q = 53, n = 3233, λ = lcm(60, 52) = 780,
    // e = 17, d = 413 (17 · 413 = 7021 = 9 · 780 + 1)
    const N: u64 = 3_233;
    const E: u64 = 17;
    const D: u64 = 413;

    #[test]
    fn test_cipher_rejects_small_modulus() {
        assert_eq!(m_cipher(1, 3, 0), Err(CryptoError::InvalidModulus));
        assert_eq!(m_cipher(0, 3, 1), Err(CryptoError::InvalidModulus));
    }

    #[test]
    fn test_cipher_rejects_message_out_of_range() {
        assert_eq!(m_cipher(N, E, N), Err(CryptoError::MessageOutOfRange));
        assert_eq!(m_cipher(u64::MAX, E, N), Err(CryptoError::MessageOutOfRange));
    }

    #[test]
    fn test_cipher_textbook_vector() {
        // Vecteur classique : 65^17 mod 3233 = 2790
        assert_eq!(m_cipher(65, E, N), Ok(2_790));
        assert_eq!(m_cipher(2_790, D, N), Ok(65));
    }

    #[test]
    fn test_cipher_roundtrip_boundaries() {
        for m in [0, 1, N / 2, N - 1] {
            let c = m_cipher(m, E, N).unwrap();
            assert_eq!(m_cipher(c, D, N), Ok(m), "aller-retour raté pour m = {m}");
        }
    }

    #[test]
    fn test_cipher_symmetric_directions() {
        // Chiffrer avec d puis e redonne aussi le message : même chemin de code
        let m = 1_234;
        let c = m_cipher(m, D, N).unwrap();
        assert_eq!(m_cipher(c, E, N), Ok(m));
    }
}
