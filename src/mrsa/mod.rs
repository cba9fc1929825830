// Noyau mRSA : arithmétique modulaire 64 bits, primalité, clés, chiffrement

pub mod math;
pub mod prime;
pub mod m_keygen;
pub mod m_cipher;
