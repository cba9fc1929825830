// Réexporte la génération de clés et les structures de clés

mod m_keygen;

pub use m_keygen::{m_keygen, m_keygen_with_rng, KeyPair, PublicKey, SecretKey, MINIMUM_N};
