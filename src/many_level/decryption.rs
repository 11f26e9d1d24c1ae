use crate::config::{DLOG_BOUND, MASK_DLOG_BOUND, PLAINTEXT_MODULUS};
use crate::data_structures::Ciphertext;
use crate::engine::PairingParams;
use crate::error::LheError;
use crate::keys::SecretKey;
use crate::two_level::decryption::{
    decrypt_g1_bounded, decrypt_g2_bounded, decrypt_gt_bounded, decrypt_level_1_bounded,
};
use ark_ec::pairing::Pairing;
use tracing::instrument;

const LOG_TARGET: &str = "pairing_lhe::many_level";

/// Decrypt any ciphertext the scheme produces.
///
/// Two-level kinds unmask and search directly. A masked ciphertext adds
/// its public residue to the decrypted pad; a quadratic ciphertext
/// additionally multiplies out each carried cross-term pair. Both masked
/// kinds reduce modulo the plaintext modulus; the intermediate searches
/// below them run with the wider mask window, since pad products exceed
/// the plaintext range.
#[instrument(target = LOG_TARGET, skip(params, sk, ct), level = "trace")]
pub fn decrypt<E: Pairing>(
    params: &PairingParams<E>,
    sk: &SecretKey<E>,
    ct: &Ciphertext<E>,
) -> Result<u64, LheError> {
    decrypt_bounded(params, sk, ct, DLOG_BOUND)
}

fn decrypt_bounded<E: Pairing>(
    params: &PairingParams<E>,
    sk: &SecretKey<E>,
    ct: &Ciphertext<E>,
    bound: u64,
) -> Result<u64, LheError> {
    match ct {
        Ciphertext::G1(x) => decrypt_g1_bounded(params, sk.s1, x, bound),
        Ciphertext::G2(x) => decrypt_g2_bounded(params, sk.s2, x, bound),
        Ciphertext::Gt(x) => decrypt_gt_bounded(params, sk.s1, sk.s2, x, bound),
        Ciphertext::Level1(x) => decrypt_level_1_bounded(params, sk, x, bound),
        Ciphertext::Level2(x) => decrypt_gt_bounded(params, sk.s1, sk.s2, &x.gt, bound),
        Ciphertext::Masked(x) => {
            let pad = decrypt_bounded(params, sk, &x.mask, bound.max(MASK_DLOG_BOUND))?;
            Ok((x.masked + pad) % PLAINTEXT_MODULUS)
        }
        Ciphertext::Quadratic(x) => {
            let wide = bound.max(MASK_DLOG_BOUND);
            let mut total = decrypt_bounded(params, sk, &x.mask, wide)? % PLAINTEXT_MODULUS;
            for (a, b) in &x.pairs {
                let left = decrypt_bounded(params, sk, a, wide)? % PLAINTEXT_MODULUS;
                let right = decrypt_bounded(params, sk, b, wide)? % PLAINTEXT_MODULUS;
                total = (total + left * right) % PLAINTEXT_MODULUS;
            }
            Ok(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEVEL_BUDGET;
    use crate::engine::params;
    use crate::keys::keygen;
    use crate::many_level::encryption::encrypt;
    use ark_bls12_381::Bls12_381;
    use ark_std::test_rng;

    #[test]
    fn test_round_trip_at_every_level() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        for level in 1..=LEVEL_BUDGET {
            for m in [0u64, 1, 737, PLAINTEXT_MODULUS - 1] {
                let ct = encrypt(&params, &pk, level, m, &mut rng).unwrap();
                assert_eq!(
                    decrypt(&params, &sk, &ct),
                    Ok(m),
                    "level {level} plaintext {m}"
                );
            }
        }
    }

    #[test]
    fn test_plaintexts_reduce_modulo_the_modulus() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        let ct = encrypt(&params, &pk, 2, PLAINTEXT_MODULUS + 5, &mut rng).unwrap();
        assert_eq!(decrypt(&params, &sk, &ct), Ok(5));
    }

    #[test]
    fn test_unified_dispatch_covers_two_level_kinds() {
        let mut rng = test_rng();
        let params = params::<Bls12_381>().unwrap();
        let (sk, pk) = keygen(&params, &mut rng);

        let g1 = Ciphertext::G1(crate::two_level::encrypt_g1(&params, pk.p1, 41, &mut rng));
        assert_eq!(decrypt(&params, &sk, &g1), Ok(41));

        let g2 = Ciphertext::G2(crate::two_level::encrypt_g2(&params, pk.p2, 42, &mut rng));
        assert_eq!(decrypt(&params, &sk, &g2), Ok(42));

        let gt = Ciphertext::Gt(crate::two_level::encrypt_gt(
            &params, pk.p1, pk.p2, 43, &mut rng,
        ));
        assert_eq!(decrypt(&params, &sk, &gt), Ok(43));

        let lvl2 = Ciphertext::Level2(crate::two_level::encrypt_level_2(
            &params, &pk, 44, &mut rng,
        ));
        assert_eq!(decrypt(&params, &sk, &lvl2), Ok(44));
    }
}
