use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Serialize};

/// ElGamal ciphertext in G1: `(g1 * r, g1 * m + p1 * r)` for fresh `r`.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound(
    serialize = "E::G1: CanonicalSerialize",
    deserialize = "E::G1: CanonicalDeserialize"
))]
pub struct CiphertextG1<E: Pairing> {
    /// Randomness component `g1 * r`.
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c1: E::G1,
    /// Message component `g1 * m + p1 * r`.
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c2: E::G1,
}

/// ElGamal ciphertext in G2, the mirror of [`CiphertextG1`].
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound(
    serialize = "E::G2: CanonicalSerialize",
    deserialize = "E::G2: CanonicalDeserialize"
))]
pub struct CiphertextG2<E: Pairing> {
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c1: E::G2,
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c2: E::G2,
}

/// Level-2 ciphertext: four target-group elements.
///
/// Whether produced by [`crate::two_level::mul_g1_g2`] or encrypted
/// directly, the components satisfy
/// `c3 - c1 * s1 - c2 * s2 + c0 * (s1 * s2) = z * m`
/// (additive notation in the target group), which is what decryption
/// evaluates before the discrete-log step.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct CiphertextGt<E: Pairing> {
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c0: PairingOutput<E>,
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c1: PairingOutput<E>,
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c2: PairingOutput<E>,
    #[serde(with = "crate::crypto_serde::canonical")]
    pub c3: PairingOutput<E>,
}

/// Dual level-1 ciphertext: the same plaintext encrypted in both source
/// groups under independent randomness. An operand must carry both halves
/// to stay eligible for multiplication, which consumes one half from each
/// group.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Level1Ciphertext<E: Pairing> {
    pub g1: CiphertextG1<E>,
    pub g2: CiphertextG2<E>,
}

/// Level-2 wrapper: the product form after one multiplication. Supports
/// further additions and scalar multiplications only.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Level2Ciphertext<E: Pairing> {
    pub gt: CiphertextGt<E>,
}

/// Recursive masked ciphertext for levels `2..=LEVEL_BUDGET`.
///
/// Encrypts `masked + Dec(mask) (mod PLAINTEXT_MODULUS)`: the plaintext is
/// split into a public residue and an encrypted one-time pad one level
/// down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct MaskedCiphertext<E: Pairing> {
    pub level: u32,
    /// Plaintext residue, in `[0, PLAINTEXT_MODULUS)`.
    pub masked: u64,
    /// Encryption of the pad, one level below `level`.
    pub mask: Box<Ciphertext<E>>,
}

/// Product ciphertext for levels in `(LEVEL_BUDGET, 2 * LEVEL_BUDGET]`.
///
/// Encrypts `Dec(mask) + sum(Dec(a) * Dec(b))` over `pairs`: the bilinear
/// cross terms of a multiplication past the level budget are carried
/// unevaluated and only resolved at decryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct QuadraticCiphertext<E: Pairing> {
    pub level: u32,
    pub mask: Box<Ciphertext<E>>,
    pub pairs: Vec<(Ciphertext<E>, Ciphertext<E>)>,
}

/// Any ciphertext the scheme produces. Homomorphic operations and
/// decryption dispatch exhaustively on this sum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub enum Ciphertext<E: Pairing> {
    G1(CiphertextG1<E>),
    G2(CiphertextG2<E>),
    Gt(CiphertextGt<E>),
    Level1(Level1Ciphertext<E>),
    Level2(Level2Ciphertext<E>),
    Masked(MaskedCiphertext<E>),
    Quadratic(QuadraticCiphertext<E>),
}

impl<E: Pairing> Ciphertext<E> {
    /// Number of multiplications this ciphertext has absorbed, counting
    /// from 1 for fresh source-group ciphertexts.
    pub fn level(&self) -> u32 {
        match self {
            Ciphertext::G1(_) | Ciphertext::G2(_) | Ciphertext::Level1(_) => 1,
            Ciphertext::Gt(_) | Ciphertext::Level2(_) => 2,
            Ciphertext::Masked(ct) => ct.level,
            Ciphertext::Quadratic(ct) => ct.level,
        }
    }

    /// Short human-readable tag, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Ciphertext::G1(_) => "G1",
            Ciphertext::G2(_) => "G2",
            Ciphertext::Gt(_) => "GT",
            Ciphertext::Level1(_) => "level-1 dual",
            Ciphertext::Level2(_) => "level-2",
            Ciphertext::Masked(_) => "masked",
            Ciphertext::Quadratic(_) => "quadratic",
        }
    }
}

impl<E: Pairing> From<CiphertextG1<E>> for Ciphertext<E> {
    fn from(ct: CiphertextG1<E>) -> Self {
        Ciphertext::G1(ct)
    }
}

impl<E: Pairing> From<CiphertextG2<E>> for Ciphertext<E> {
    fn from(ct: CiphertextG2<E>) -> Self {
        Ciphertext::G2(ct)
    }
}

impl<E: Pairing> From<CiphertextGt<E>> for Ciphertext<E> {
    fn from(ct: CiphertextGt<E>) -> Self {
        Ciphertext::Gt(ct)
    }
}

impl<E: Pairing> From<Level1Ciphertext<E>> for Ciphertext<E> {
    fn from(ct: Level1Ciphertext<E>) -> Self {
        Ciphertext::Level1(ct)
    }
}

impl<E: Pairing> From<Level2Ciphertext<E>> for Ciphertext<E> {
    fn from(ct: Level2Ciphertext<E>) -> Self {
        Ciphertext::Level2(ct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params;
    use crate::keys::keygen;
    use crate::many_level::encryption::encrypt;
    use crate::two_level::encryption::encrypt_level_1;
    use ark_bls12_381::Bls12_381;
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
    use ark_std::test_rng;

    #[test]
    fn test_level_1_canonical_round_trip() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        let ct = encrypt_level_1(&params, &pk, 321, &mut rng);
        let mut bytes = Vec::new();
        ct.serialize_compressed(&mut bytes).unwrap();
        let parsed = Level1Ciphertext::<Bls12_381>::deserialize_compressed(&mut &bytes[..]).unwrap();
        assert_eq!(ct, parsed);
    }

    #[test]
    fn test_masked_ciphertext_serde_round_trip() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        let ct = encrypt(&params, &pk, 2, 555, &mut rng).unwrap();
        let json = serde_json::to_string(&ct).unwrap();
        let parsed: Ciphertext<Bls12_381> = serde_json::from_str(&json).unwrap();
        assert_eq!(ct, parsed);
    }

    #[test]
    fn test_levels_and_kinds() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        let dual = encrypt(&params, &pk, 1, 3, &mut rng).unwrap();
        assert_eq!(dual.level(), 1);
        assert_eq!(dual.kind(), "level-1 dual");

        let masked = encrypt(&params, &pk, 2, 3, &mut rng).unwrap();
        assert_eq!(masked.level(), 2);
        assert_eq!(masked.kind(), "masked");
    }
}
