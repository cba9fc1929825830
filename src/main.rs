// =========================================================
// Métriques — mini-RSA 64 bits
// Génération de clés, aller-retour chiffré et durées
// =========================================================

use mrsa_crypto::{m_cipher, m_keygen, CryptoError, MINIMUM_N};

use rand::Rng;
use rand_core::OsRng;
use std::time::Instant;

// =====================================================================
//  POINT D'ENTRÉE
// =====================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("[FATAL] Erreur cryptographique : {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CryptoError> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   mini-RSA 64 BITS — DÉMONSTRATION            ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // --- Génération de clés -------------------------------------------
    println!(" Génération de clés (deux premiers de 32 bits)...");
    let debut = Instant::now();
    let kp = m_keygen()?;
    let duree = debut.elapsed();
    println!(" Clés générées — temps : {:.3?}", duree);
    println!("    n = {:#018x}  (seuil minimal {:#018x})", kp.public_key.n, MINIMUM_N);
    println!("    e = {:#018x}\n", kp.public_key.e);

    // --- Aller-retour chiffré ------------------------------------------
    let n = kp.public_key.n;
    let m: u64 = OsRng.gen_range(0..n);
    println!(" Message aléatoire m = {}", m);

    let debut = Instant::now();
    let c = m_cipher(m, kp.public_key.e, n)?;
    let duree_chiffrement = debut.elapsed();

    let debut = Instant::now();
    let m_retrouve = m_cipher(c, kp.secret_key.d, n)?;
    let duree_dechiffrement = debut.elapsed();

    println!("    chiffré      c  = {}   ({:.3?})", c, duree_chiffrement);
    println!("    déchiffré    m' = {}   ({:.3?})", m_retrouve, duree_dechiffrement);

    if m_retrouve == m {
        println!("\n Aller-retour réussi : m' == m\n");
        Ok(())
    } else {
        // Ne devrait jamais arriver avec une paire de clés valide
        eprintln!("\n Aller-retour RATÉ : m' != m\n");
        Err(CryptoError::NoModularInverse)
    }
}
