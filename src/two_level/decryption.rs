use crate::config::DLOG_BOUND;
use crate::data_structures::{CiphertextG1, CiphertextG2, CiphertextGt, Level1Ciphertext};
use crate::dlog::discrete_log;
use crate::engine::PairingParams;
use crate::error::LheError;
use crate::keys::SecretKey;
use ark_ec::pairing::Pairing;
use tracing::{instrument, warn};

const LOG_TARGET: &str = "pairing_lhe::two_level";

// Full-dispatch decryption lives with the leveled API; both namespaces
// expose the same entry point.
pub use crate::many_level::decryption::decrypt;

/// Decrypt a G1 ciphertext: strip the shared secret and search for the
/// exponent of what remains.
pub fn decrypt_g1<E: Pairing>(
    params: &PairingParams<E>,
    s1: E::ScalarField,
    ct: &CiphertextG1<E>,
) -> Result<u64, LheError> {
    decrypt_g1_bounded(params, s1, ct, DLOG_BOUND)
}

pub(crate) fn decrypt_g1_bounded<E: Pairing>(
    params: &PairingParams<E>,
    s1: E::ScalarField,
    ct: &CiphertextG1<E>,
    bound: u64,
) -> Result<u64, LheError> {
    // c2 - c1 * s1 = g1 * m, since p1 = g1 * s1.
    let unmasked = ct.c2 - ct.c1 * s1;
    discrete_log(params.g1, unmasked, bound).ok_or(LheError::DecryptionFailed { bound })
}

/// Decrypt a G2 ciphertext.
pub fn decrypt_g2<E: Pairing>(
    params: &PairingParams<E>,
    s2: E::ScalarField,
    ct: &CiphertextG2<E>,
) -> Result<u64, LheError> {
    decrypt_g2_bounded(params, s2, ct, DLOG_BOUND)
}

pub(crate) fn decrypt_g2_bounded<E: Pairing>(
    params: &PairingParams<E>,
    s2: E::ScalarField,
    ct: &CiphertextG2<E>,
    bound: u64,
) -> Result<u64, LheError> {
    let unmasked = ct.c2 - ct.c1 * s2;
    discrete_log(params.g2, unmasked, bound).ok_or(LheError::DecryptionFailed { bound })
}

/// Decrypt a level-2 ciphertext.
///
/// `c3 - c1 * s1 - c2 * s2 + c0 * (s1 * s2)` collapses every cross term,
/// leaving `z * (m1 * m2)` for the discrete-log step.
#[instrument(target = LOG_TARGET, skip_all, level = "trace")]
pub fn decrypt_gt<E: Pairing>(
    params: &PairingParams<E>,
    s1: E::ScalarField,
    s2: E::ScalarField,
    ct: &CiphertextGt<E>,
) -> Result<u64, LheError> {
    decrypt_gt_bounded(params, s1, s2, ct, DLOG_BOUND)
}

pub(crate) fn decrypt_gt_bounded<E: Pairing>(
    params: &PairingParams<E>,
    s1: E::ScalarField,
    s2: E::ScalarField,
    ct: &CiphertextGt<E>,
    bound: u64,
) -> Result<u64, LheError> {
    let unmasked = ct.c0 * (s1 * s2) - ct.c1 * s1 - ct.c2 * s2 + ct.c3;
    discrete_log(params.z, unmasked, bound).ok_or(LheError::DecryptionFailed { bound })
}

/// Decrypt a dual ciphertext from its G1 half, falling back to the G2
/// half if the first search exhausts its bound.
pub fn decrypt_level_1<E: Pairing>(
    params: &PairingParams<E>,
    sk: &SecretKey<E>,
    ct: &Level1Ciphertext<E>,
) -> Result<u64, LheError> {
    decrypt_level_1_bounded(params, sk, ct, DLOG_BOUND)
}

pub(crate) fn decrypt_level_1_bounded<E: Pairing>(
    params: &PairingParams<E>,
    sk: &SecretKey<E>,
    ct: &Level1Ciphertext<E>,
    bound: u64,
) -> Result<u64, LheError> {
    match decrypt_g1_bounded(params, sk.s1, &ct.g1, bound) {
        Ok(m) => Ok(m),
        Err(LheError::DecryptionFailed { .. }) => {
            warn!(
                target: LOG_TARGET,
                "G1 half failed to decrypt, falling back to the G2 half"
            );
            decrypt_g2_bounded(params, sk.s2, &ct.g2, bound)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params;
    use crate::keys::{keygen, keygen_g1, keygen_g2};
    use crate::two_level::encryption::{
        encrypt_g1, encrypt_g2, encrypt_gt, encrypt_level_1, encrypt_level_2,
    };
    use ark_bls12_381::Bls12_381;
    use ark_std::test_rng;

    #[test]
    fn test_g1_round_trip() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (s1, p1) = keygen_g1(&params, &mut rng);

        let ct = encrypt_g1(&params, p1, 737, &mut rng);
        assert_eq!(decrypt_g1(&params, s1, &ct), Ok(737));
    }

    #[test]
    fn test_g2_round_trip() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (s2, p2) = keygen_g2(&params, &mut rng);

        let ct = encrypt_g2(&params, p2, 747, &mut rng);
        assert_eq!(decrypt_g2(&params, s2, &ct), Ok(747));
    }

    #[test]
    fn test_direct_target_group_round_trip() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        let ct = encrypt_gt(&params, pk.p1, pk.p2, 1234, &mut rng);
        assert_eq!(decrypt_gt(&params, sk.s1, sk.s2, &ct), Ok(1234));
    }

    #[test]
    fn test_level_1_and_level_2_round_trips() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        let ct1 = encrypt_level_1(&params, &pk, 91, &mut rng);
        assert_eq!(decrypt_level_1(&params, &sk, &ct1), Ok(91));

        let ct2 = encrypt_level_2(&params, &pk, 92, &mut rng);
        assert_eq!(decrypt_gt(&params, sk.s1, sk.s2, &ct2.gt), Ok(92));
    }

    #[test]
    fn test_zero_round_trips_everywhere() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        let g1 = encrypt_g1(&params, pk.p1, 0, &mut rng);
        assert_eq!(decrypt_g1(&params, sk.s1, &g1), Ok(0));

        let gt = encrypt_gt(&params, pk.p1, pk.p2, 0, &mut rng);
        assert_eq!(decrypt_gt(&params, sk.s1, sk.s2, &gt), Ok(0));
    }

    #[test]
    fn test_wrong_key_reports_failure_not_zero() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (_, p1) = keygen_g1(&params, &mut rng);
        let (wrong, _) = keygen_g1(&params, &mut rng);

        let ct = encrypt_g1(&params, p1, 3, &mut rng);
        assert_eq!(
            decrypt_g1(&params, wrong, &ct),
            Err(LheError::DecryptionFailed { bound: DLOG_BOUND })
        );
    }
}
