// Réexporte le type d'erreur centralisé

pub mod crypto_error;

pub use crypto_error::CryptoError;
