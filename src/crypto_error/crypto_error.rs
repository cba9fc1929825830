// ===========================================================================
// Gestion centralisée des erreurs cryptographiques
//
// Tous les modules utilisent ce type au lieu de panic!/assert!/unwrap().
// L'appelant reçoit une Err(...) et peut réagir proprement sans crasher
// le thread.
// ===========================================================================

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    // --- Erreurs de paramètres d'entrée ---
    /// Le modulus n est < 2 : aucune opération de chiffrement n'a de sens
    InvalidModulus,
    /// Le message m est >= n (hors domaine Z_n)
    MessageOutOfRange,

    // --- Erreurs mathématiques internes ---
    /// L'inverse modulaire n'existe pas (gcd != 1 — invariant interne violé
    /// quand il survient pendant la génération de clés)
    NoModularInverse,

    // --- Erreurs de génération de clés ---
    /// Une boucle de tirage aléatoire a épuisé son plafond d'itérations :
    /// la source d'aléa est cassée ou biaisée
    RetryLimitExceeded { attempts: u32 },
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidModulus =>
                write!(f, "Modulus invalide : n doit être >= 2"),
            CryptoError::MessageOutOfRange =>
                write!(f, "Le message doit être dans [0, n)"),
            CryptoError::NoModularInverse =>
                write!(f, "Impossible de calculer l'inverse modulaire (gcd != 1)"),
            CryptoError::RetryLimitExceeded { attempts } =>
                write!(f, "Plafond de tirages aléatoires atteint ({attempts} tentatives) : source d'aléa défaillante"),
        }
    }
}

impl std::error::Error for CryptoError {}
