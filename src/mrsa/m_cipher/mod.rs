// Réexporte l'opération de chiffrement/déchiffrement

mod m_cipher;

pub use m_cipher::m_cipher;
