use crate::engine::PairingParams;
use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::Rng;
use ark_std::UniformRand;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop};

const LOG_TARGET: &str = "pairing_lhe::keys";

/// Decryption key: one scalar per source group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey<E: Pairing> {
    /// Scalar behind the G1 half of the public key.
    pub s1: E::ScalarField,
    /// Scalar behind the G2 half of the public key.
    pub s2: E::ScalarField,
}

impl<E: Pairing> Zeroize for SecretKey<E> {
    fn zeroize(&mut self) {
        self.s1.zeroize();
        self.s2.zeroize();
    }
}

impl<E: Pairing> Drop for SecretKey<E> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<E: Pairing> ZeroizeOnDrop for SecretKey<E> {}

/// Encryption key: `(g1 * s1, g2 * s2)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize,
    CanonicalDeserialize,
)]
#[serde(bound(
    serialize = "E::G1: CanonicalSerialize, E::G2: CanonicalSerialize",
    deserialize = "E::G1: CanonicalDeserialize, E::G2: CanonicalDeserialize"
))]
pub struct PublicKey<E: Pairing> {
    #[serde(with = "crate::crypto_serde::canonical")]
    pub p1: E::G1,
    #[serde(with = "crate::crypto_serde::canonical")]
    pub p2: E::G2,
}

/// Draw a G1-side keypair: `s1` random, `p1 = g1 * s1`.
pub fn keygen_g1<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    rng: &mut R,
) -> (E::ScalarField, E::G1) {
    let s = E::ScalarField::rand(rng);
    (s, params.g1 * s)
}

/// Draw a G2-side keypair: `s2` random, `p2 = g2 * s2`.
pub fn keygen_g2<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    rng: &mut R,
) -> (E::ScalarField, E::G2) {
    let s = E::ScalarField::rand(rng);
    (s, params.g2 * s)
}

/// Draw the dual keypair used by the composite and leveled APIs.
/// Both halves are sampled independently.
#[instrument(target = LOG_TARGET, skip_all, level = "trace")]
pub fn keygen<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    rng: &mut R,
) -> (SecretKey<E>, PublicKey<E>) {
    let (s1, p1) = keygen_g1(params, rng);
    let (s2, p2) = keygen_g2(params, rng);
    (SecretKey { s1, s2 }, PublicKey { p1, p2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params;
    use ark_bls12_381::Bls12_381;
    use ark_std::test_rng;

    #[test]
    fn test_public_key_matches_secret() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        assert_eq!(pk.p1, params.g1 * sk.s1);
        assert_eq!(pk.p2, params.g2 * sk.s2);
    }

    #[test]
    fn test_keypairs_are_independent() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk_a, _) = keygen(&params, &mut rng);
        let (sk_b, _) = keygen(&params, &mut rng);
        assert_ne!(sk_a, sk_b, "fresh keypairs must not repeat");
    }

    #[test]
    fn test_secret_key_zeroizes() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (mut sk, _) = keygen(&params, &mut rng);
        sk.zeroize();
        assert_eq!(sk.s1, ark_bls12_381::Fr::from(0u64));
        assert_eq!(sk.s2, ark_bls12_381::Fr::from(0u64));
    }
}
