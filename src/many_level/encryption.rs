use crate::config::{LEVEL_BUDGET, PLAINTEXT_MODULUS};
use crate::data_structures::{Ciphertext, MaskedCiphertext};
use crate::engine::PairingParams;
use crate::error::LheError;
use crate::keys::PublicKey;
use crate::two_level::encryption::encrypt_level_1;
use ark_ec::pairing::Pairing;
use ark_std::rand::Rng;
use tracing::instrument;

const LOG_TARGET: &str = "pairing_lhe::many_level";

/// Encrypt at a chosen level in `1..=LEVEL_BUDGET`.
///
/// Level 1 produces the dual source-group ciphertext. Higher levels blind
/// the plaintext with a uniform pad and encrypt the pad one level down, so
/// a level-`l` ciphertext is `l - 1` nested pads deep.
#[instrument(target = LOG_TARGET, skip(params, pk, rng), level = "trace")]
pub fn encrypt<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    level: u32,
    m: u64,
    rng: &mut R,
) -> Result<Ciphertext<E>, LheError> {
    if level == 0 || level > LEVEL_BUDGET {
        return Err(LheError::LevelExceeded {
            level,
            max: LEVEL_BUDGET,
        });
    }
    if level == 1 {
        return Ok(Ciphertext::Level1(encrypt_level_1(params, pk, m, rng)));
    }

    let pad = rng.gen_range(0..PLAINTEXT_MODULUS);
    let masked = (m % PLAINTEXT_MODULUS + PLAINTEXT_MODULUS - pad) % PLAINTEXT_MODULUS;
    let mask = encrypt(params, pk, level - 1, pad, rng)?;
    Ok(Ciphertext::Masked(MaskedCiphertext {
        level,
        masked,
        mask: Box::new(mask),
    }))
}

/// Wrap a ciphertext in zero-residue masks until it reaches `level`.
/// Deterministic and randomness-free; the plaintext is unchanged.
pub(crate) fn lift<E: Pairing>(ct: Ciphertext<E>, level: u32) -> Ciphertext<E> {
    let mut ct = ct;
    while ct.level() < level {
        ct = Ciphertext::Masked(MaskedCiphertext {
            level: ct.level() + 1,
            masked: 0,
            mask: Box::new(ct),
        });
    }
    ct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params;
    use crate::keys::keygen;
    use ark_bls12_381::Bls12_381;
    use ark_std::test_rng;

    #[test]
    fn test_level_bounds_are_enforced() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        assert!(matches!(
            encrypt(&params, &pk, 0, 1, &mut rng),
            Err(LheError::LevelExceeded { .. })
        ));
        assert!(matches!(
            encrypt(&params, &pk, LEVEL_BUDGET + 1, 1, &mut rng),
            Err(LheError::LevelExceeded { .. })
        ));
    }

    #[test]
    fn test_lift_preserves_level_invariants() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, pk) = keygen(&params, &mut rng);

        let ct = encrypt(&params, &pk, 1, 9, &mut rng).unwrap();
        let lifted = lift(ct, 2);
        assert_eq!(lifted.level(), 2);
        match lifted {
            Ciphertext::Masked(ref m) => {
                assert_eq!(m.masked, 0);
                assert_eq!(m.mask.level(), 1);
            }
            _ => panic!("lift must produce a masked ciphertext"),
        }
    }
}
