use crate::crypto_error::CryptoError;

// ---------------------------------------------------------------------------
// Arithmétique modulaire 64 bits sans débordement
//
// Contrainte centrale : a, b et m peuvent occuper les 64 bits, donc ni la
// somme a+b ni le produit a·b ne doivent jamais être formés directement.
// mod_add repose sur l'inégalité a >= m-b ; mod_mul décompose b en binaire
// (double-and-add) ; mod_pow décompose b en binaire (square-and-multiply).
// ---------------------------------------------------------------------------

/// (a + b) mod m, sans jamais dépasser 64 bits.
///
/// Contrat : m == 0 retourne 0 (valeur par défaut, pas une faute).
pub fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    if m == 0 {
        return 0;
    }
    let a = a % m;
    let b = b % m;

    // a et b sont < m, donc m - b > 0 et les deux branches restent dans u64
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}

/// (a · b) mod m par décomposition binaire de b (double-and-add).
///
/// Précondition : m >= 1. Le produit a·b n'est jamais formé : chaque bit
/// de b accumule a via mod_add, et a est doublé entre deux bits.
pub fn mod_mul(a: u64, mut b: u64, m: u64) -> u64 {
    debug_assert!(m >= 1, "mod_mul exige m >= 1");

    let mut a = a % m;
    let mut r = 0;

    while b != 0 {
        if b & 1 == 1 {
            r = mod_add(r, a, m);
        }
        b >>= 1;
        // Le dernier tour n'a pas besoin de doubler a
        if b != 0 {
            a = mod_add(a, a, m);
        }
    }
    r
}

/// a^b mod m par square-and-multiply, via mod_mul pour chaque produit.
///
/// Précondition : m >= 1. L'accumulateur démarre à 1 mod m, d'où
/// mod_pow(a, 0, m) == 1 % m pour tout a (y compris a == 0) et un
/// résultat toujours nul pour m == 1.
pub fn mod_pow(mut a: u64, mut b: u64, m: u64) -> u64 {
    debug_assert!(m >= 1, "mod_pow exige m >= 1");

    let mut r = 1 % m;

    while b != 0 {
        if b & 1 == 1 {
            r = mod_mul(r, a, m);
        }
        b >>= 1;
        a = mod_mul(a, a, m);
    }
    r
}

// ---------------------------------------------------------------------------
// Théorie des nombres : pgcd et inverse modulaire
// ---------------------------------------------------------------------------

/// Pgcd de a et b (algorithme d'Euclide).
///
/// gcd(a, 0) == a et gcd(0, b) == b.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let tmp = b;
        b = a % b;
        a = tmp;
    }
    a
}

/// Inverse de a modulo m (algorithme d'Euclide étendu).
///
/// Retourne x dans [0, m) tel que a·x ≡ 1 (mod m) si gcd(a, m) == 1,
/// sinon la sentinelle 0. Pour m > 1, 0 n'est jamais un inverse valide ;
/// l'appelant doit donc traiter 0 comme un échec, pas comme une valeur.
///
/// Les coefficients de Bézout suivent la paire (x0, x1) sur i128 : pour
/// un modulus 64 bits ils peuvent sortir de la plage i64.
pub fn mod_inverse(a: u64, m: u64) -> u64 {
    if m == 0 {
        return 0;
    }

    let (mut d0, mut d1) = (a as i128, m as i128);
    let (mut x0, mut x1) = (1i128, 0i128);

    while d1 != 0 {
        let q = d0 / d1;

        let tmp = d0 - q * d1;
        d0 = d1;
        d1 = tmp;

        let tmp = x0 - q * x1;
        x0 = x1;
        x1 = tmp;
    }

    if d0 == 1 {
        // Normalisation dans [0, m)
        x0.rem_euclid(m as i128) as u64
    } else {
        0
    }
}

/// Variante de mod_inverse qui promeut la sentinelle en erreur typée.
/// Utilisée par m_keygen, où un gcd != 1 viole un invariant interne.
pub fn mod_inverse_checked(a: u64, m: u64) -> Result<u64, CryptoError> {
    match mod_inverse(a, m) {
        0 if m > 1 => Err(CryptoError::NoModularInverse),
        x => Ok(x),
    }
}
