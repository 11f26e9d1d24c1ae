use crate::data_structures::{
    CiphertextG1, CiphertextG2, CiphertextGt, Level1Ciphertext, Level2Ciphertext,
};
use crate::engine::PairingParams;
use crate::keys::PublicKey;
use ark_ec::pairing::Pairing;
use ark_std::rand::Rng;
use ark_std::UniformRand;
use tracing::instrument;

const LOG_TARGET: &str = "pairing_lhe::two_level";

/// Encrypt a small integer into G1: `(g1 * r, g1 * m + p1 * r)`.
///
/// No range check is performed here; a plaintext at or above the search
/// bound surfaces as a decryption failure instead.
pub fn encrypt_g1<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    p1: E::G1,
    m: u64,
    rng: &mut R,
) -> CiphertextG1<E> {
    let r = E::ScalarField::rand(rng);
    CiphertextG1 {
        c1: params.g1 * r,
        c2: params.g1 * E::ScalarField::from(m) + p1 * r,
    }
}

/// Encrypt a small integer into G2, the mirror of [`encrypt_g1`].
pub fn encrypt_g2<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    p2: E::G2,
    m: u64,
    rng: &mut R,
) -> CiphertextG2<E> {
    let r = E::ScalarField::rand(rng);
    CiphertextG2 {
        c1: params.g2 * r,
        c2: params.g2 * E::ScalarField::from(m) + p2 * r,
    }
}

/// Encrypt directly into the target group, producing the same shape a
/// cross-group multiplication would.
///
/// With fresh scalars `r, s, t`:
///
/// ```text
/// c0 = z        * (r + s - t)
/// c1 = e(g1,p2) * r
/// c2 = e(p1,g2) * s
/// c3 = e(p1,p2) * t + z * m
/// ```
///
/// Under the secret key the exponents collapse to `m`: decryption
/// evaluates `c0 * (s1*s2) - c1 * s1 - c2 * s2 + c3`. The three scalars
/// must be independent for the direct form to be semantically secure.
#[instrument(target = LOG_TARGET, skip_all, level = "trace")]
pub fn encrypt_gt<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    p1: E::G1,
    p2: E::G2,
    m: u64,
    rng: &mut R,
) -> CiphertextGt<E> {
    let r = E::ScalarField::rand(rng);
    let s = E::ScalarField::rand(rng);
    let t = E::ScalarField::rand(rng);

    let z_s2 = E::pairing(params.g1, p2);
    let z_s1 = E::pairing(p1, params.g2);
    let z_s1s2 = E::pairing(p1, p2);

    CiphertextGt {
        c0: params.z * (r + s - t),
        c1: z_s2 * r,
        c2: z_s1 * s,
        c3: z_s1s2 * t + params.z * E::ScalarField::from(m),
    }
}

/// Encrypt into both source groups under independent randomness. The dual
/// form is what keeps an operand eligible for a later multiplication.
#[instrument(target = LOG_TARGET, skip_all, level = "trace")]
pub fn encrypt_level_1<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    m: u64,
    rng: &mut R,
) -> Level1Ciphertext<E> {
    Level1Ciphertext {
        g1: encrypt_g1(params, pk.p1, m, rng),
        g2: encrypt_g2(params, pk.p2, m, rng),
    }
}

/// Encrypt directly at level 2.
pub fn encrypt_level_2<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    m: u64,
    rng: &mut R,
) -> Level2Ciphertext<E> {
    Level2Ciphertext {
        gt: encrypt_gt(params, pk.p1, pk.p2, m, rng),
    }
}

/// Alias for the everyday entry point.
pub fn encrypt<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    m: u64,
    rng: &mut R,
) -> Level1Ciphertext<E> {
    encrypt_level_1(params, pk, m, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params;
    use crate::keys::keygen;
    use ark_bls12_381::Bls12_381;
    use ark_std::test_rng;

    #[test]
    fn test_dual_halves_use_independent_randomness() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        let a = encrypt_level_1(&params, &pk, 5, &mut rng);
        let b = encrypt_level_1(&params, &pk, 5, &mut rng);
        assert_ne!(a, b, "fresh encryptions of the same value must differ");
    }
}
