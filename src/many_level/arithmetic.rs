use crate::config::{LEVEL_BUDGET, PLAINTEXT_MODULUS};
use crate::data_structures::{
    Ciphertext, CiphertextGt, Level2Ciphertext, MaskedCiphertext, QuadraticCiphertext,
};
use crate::engine::PairingParams;
use crate::error::LheError;
use crate::keys::PublicKey;
use crate::many_level::encryption::{encrypt, lift};
use crate::two_level::arithmetic::{add_g1, add_g2, add_gt, mul_g1_g2};
use crate::two_level::encryption::{
    encrypt_g1, encrypt_g2, encrypt_gt, encrypt_level_1, encrypt_level_2,
};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_std::rand::Rng;
use ark_std::Zero;
use tracing::{debug, instrument};

const LOG_TARGET: &str = "pairing_lhe::many_level";

/// Homomorphic addition of any two ciphertexts of the same kind and level.
///
/// Masked ciphertexts add their residues modulo the plaintext modulus and
/// their pads componentwise; quadratic ciphertexts additionally
/// concatenate their unevaluated cross-term lists.
pub fn add<E: Pairing>(a: &Ciphertext<E>, b: &Ciphertext<E>) -> Result<Ciphertext<E>, LheError> {
    match (a, b) {
        (Ciphertext::G1(x), Ciphertext::G1(y)) => Ok(Ciphertext::G1(add_g1(x, y))),
        (Ciphertext::G2(x), Ciphertext::G2(y)) => Ok(Ciphertext::G2(add_g2(x, y))),
        (Ciphertext::Gt(x), Ciphertext::Gt(y)) => Ok(Ciphertext::Gt(add_gt(x, y))),
        (Ciphertext::Level1(x), Ciphertext::Level1(y)) => Ok(Ciphertext::Level1(x.add(y))),
        (Ciphertext::Level2(x), Ciphertext::Level2(y)) => Ok(Ciphertext::Level2(x.add(y))),
        (Ciphertext::Masked(x), Ciphertext::Masked(y)) => {
            if x.level != y.level {
                return Err(LheError::LevelMismatch {
                    lhs: x.level,
                    rhs: y.level,
                });
            }
            Ok(Ciphertext::Masked(MaskedCiphertext {
                level: x.level,
                masked: (x.masked + y.masked) % PLAINTEXT_MODULUS,
                mask: Box::new(add(&x.mask, &y.mask)?),
            }))
        }
        (Ciphertext::Quadratic(x), Ciphertext::Quadratic(y)) => {
            if x.level != y.level {
                return Err(LheError::LevelMismatch {
                    lhs: x.level,
                    rhs: y.level,
                });
            }
            let mut pairs = x.pairs.clone();
            pairs.extend(y.pairs.iter().cloned());
            Ok(Ciphertext::Quadratic(QuadraticCiphertext {
                level: x.level,
                mask: Box::new(add(&x.mask, &y.mask)?),
                pairs,
            }))
        }
        _ => {
            if a.level() != b.level() {
                Err(LheError::LevelMismatch {
                    lhs: a.level(),
                    rhs: b.level(),
                })
            } else {
                Err(LheError::TypeMismatch {
                    lhs: a.kind(),
                    rhs: b.kind(),
                })
            }
        }
    }
}

/// Multiply the plaintext of any ciphertext by a small integer.
///
/// Group-element kinds scale every component natively. The masked kinds
/// reduce the factor modulo the plaintext modulus first, since their
/// arithmetic lives in that ring, and scale one member of each carried
/// cross-term pair.
pub fn scalar_mul<E: Pairing>(ct: &Ciphertext<E>, k: u64) -> Ciphertext<E> {
    match ct {
        Ciphertext::G1(x) => Ciphertext::G1(x.scalar_mul(k)),
        Ciphertext::G2(x) => Ciphertext::G2(x.scalar_mul(k)),
        Ciphertext::Gt(x) => Ciphertext::Gt(x.scalar_mul(k)),
        Ciphertext::Level1(x) => Ciphertext::Level1(x.scalar_mul(k)),
        Ciphertext::Level2(x) => Ciphertext::Level2(x.scalar_mul(k)),
        Ciphertext::Masked(x) => {
            let k = k % PLAINTEXT_MODULUS;
            Ciphertext::Masked(MaskedCiphertext {
                level: x.level,
                masked: (x.masked * k) % PLAINTEXT_MODULUS,
                mask: Box::new(scalar_mul(&x.mask, k)),
            })
        }
        Ciphertext::Quadratic(x) => {
            let k = k % PLAINTEXT_MODULUS;
            Ciphertext::Quadratic(QuadraticCiphertext {
                level: x.level,
                mask: Box::new(scalar_mul(&x.mask, k)),
                pairs: x
                    .pairs
                    .iter()
                    .map(|(a, b)| (scalar_mul(a, k), b.clone()))
                    .collect(),
            })
        }
    }
}

/// Homomorphic multiplication under the level budget.
///
/// Levels add. A product past twice the budget is rejected; a product past
/// the budget but within twice of it is carried as a quadratic ciphertext
/// whose bilinear cross term stays unevaluated until decryption. The
/// public key is needed for the fresh mask encryption of that regime.
#[instrument(target = LOG_TARGET, skip_all, level = "trace")]
pub fn mul<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    a: &Ciphertext<E>,
    b: &Ciphertext<E>,
    rng: &mut R,
) -> Result<Ciphertext<E>, LheError> {
    let total = a.level() + b.level();
    let max = 2 * LEVEL_BUDGET;
    if total > max {
        debug!(target: LOG_TARGET, total, max, "rejecting over-level product");
        return Err(LheError::LevelExceeded { level: total, max });
    }

    match (a, b) {
        // One pairing multiplies complementary source-group halves.
        (Ciphertext::G1(x), Ciphertext::G2(y)) => Ok(Ciphertext::Gt(mul_g1_g2(x, y))),
        (Ciphertext::G2(y), Ciphertext::G1(x)) => Ok(Ciphertext::Gt(mul_g1_g2(x, y))),
        (Ciphertext::Level1(x), Ciphertext::Level1(y)) => Ok(Ciphertext::Level2(x.mul(y))),
        (
            Ciphertext::Masked(_) | Ciphertext::Level1(_),
            Ciphertext::Masked(_) | Ciphertext::Level1(_),
        ) => mul_masked(params, pk, a, b, rng),
        _ => Err(LheError::TypeMismatch {
            lhs: a.kind(),
            rhs: b.kind(),
        }),
    }
}

/// Residue/pad view of a multiplicand: a masked ciphertext splits into its
/// residue and pad, a dual ciphertext is its own pad with residue zero.
fn parts<E: Pairing>(ct: &Ciphertext<E>) -> (u64, &Ciphertext<E>) {
    match ct {
        Ciphertext::Masked(m) => (m.masked, &m.mask),
        other => (0, other),
    }
}

/// GT-form view of a level-2 ciphertext.
///
/// A masked level-2 re-expresses its dual pad with two deterministic
/// pairings against `g2`, so that
/// `c3 - c1 * s1 = e(B1 - A1 * s1, g2) + z * masked = z * (pad + masked)`.
/// The residue is already plaintext, so it rides in the `c3` exponent
/// without randomness. Note the value carried this way is `masked + pad`,
/// not yet reduced modulo the plaintext modulus; the masked node above the
/// merge performs the reduction.
fn to_target_form<E: Pairing>(
    params: &PairingParams<E>,
    ct: &Ciphertext<E>,
) -> Result<CiphertextGt<E>, LheError> {
    match ct {
        Ciphertext::Gt(x) => Ok(x.clone()),
        Ciphertext::Level2(x) => Ok(x.gt.clone()),
        Ciphertext::Masked(x) if x.level == 2 => match x.mask.as_ref() {
            Ciphertext::Level1(dual) => Ok(CiphertextGt {
                c0: PairingOutput::<E>::zero(),
                c1: E::pairing(dual.g1.c1, params.g2),
                c2: PairingOutput::<E>::zero(),
                c3: E::pairing(dual.g1.c2, params.g2)
                    + params.z * E::ScalarField::from(x.masked),
            }),
            other => Err(LheError::TypeMismatch {
                lhs: "masked",
                rhs: other.kind(),
            }),
        },
        other => Err(LheError::TypeMismatch {
            lhs: other.kind(),
            rhs: "level-2",
        }),
    }
}

/// Addition for the terms of a multiplication's mask line.
///
/// The mask line mixes representations at level 2: the pad product comes
/// out of the pairing in GT form while the scaled-residue terms stay in
/// masked form. Same-level terms whose kinds disagree there are merged
/// through their common GT form; every other combination is ordinary
/// [`add`].
fn add_terms<E: Pairing>(
    params: &PairingParams<E>,
    a: &Ciphertext<E>,
    b: &Ciphertext<E>,
) -> Result<Ciphertext<E>, LheError> {
    match (a, b) {
        (Ciphertext::Masked(x), Ciphertext::Masked(y)) if x.level == y.level => {
            Ok(Ciphertext::Masked(MaskedCiphertext {
                level: x.level,
                masked: (x.masked + y.masked) % PLAINTEXT_MODULUS,
                mask: Box::new(add_terms(params, &x.mask, &y.mask)?),
            }))
        }
        _ if a.level() == 2 && b.level() == 2 && a.kind() != b.kind() => {
            let merged = add_gt(&to_target_form(params, a)?, &to_target_form(params, b)?);
            Ok(Ciphertext::Level2(Level2Ciphertext { gt: merged }))
        }
        _ => add(a, b),
    }
}

fn mul_masked<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    a: &Ciphertext<E>,
    b: &Ciphertext<E>,
    rng: &mut R,
) -> Result<Ciphertext<E>, LheError> {
    let (la, lb) = (a.level(), b.level());
    let total = la + lb;
    let (ma, ea) = parts(a);
    let (mb, eb) = parts(b);
    let residue = (ma * mb) % PLAINTEXT_MODULUS;

    if total <= LEVEL_BUDGET {
        // (ma + ea)(mb + eb): the residue product stays plain, the three
        // remaining terms land one level below the result. The pad
        // product surfaces in GT form, so the terms go through
        // [`add_terms`], which merges it with the masked-form siblings.
        let mut mask = lift(mul(params, pk, ea, eb, rng)?, total - 1);
        if ma != 0 {
            mask = add_terms(params, &mask, &lift(scalar_mul(eb, ma), total - 1))?;
        }
        if mb != 0 {
            mask = add_terms(params, &mask, &lift(scalar_mul(ea, mb), total - 1))?;
        }
        Ok(Ciphertext::Masked(MaskedCiphertext {
            level: total,
            masked: residue,
            mask: Box::new(mask),
        }))
    } else {
        // Past the budget: the pad product ea * eb cannot be evaluated
        // homomorphically any more, so it rides along unevaluated.
        let carry = la.max(lb);
        let mut mask = encrypt(params, pk, carry, residue, rng)?;
        if ma != 0 {
            mask = add_terms(params, &mask, &lift(scalar_mul(eb, ma), carry))?;
        }
        if mb != 0 {
            mask = add_terms(params, &mask, &lift(scalar_mul(ea, mb), carry))?;
        }
        Ok(Ciphertext::Quadratic(QuadraticCiphertext {
            level: total,
            mask: Box::new(mask),
            pairs: vec![(ea.clone(), eb.clone())],
        }))
    }
}

/// Add a plain integer to a ciphertext of any kind. Zero is a strict
/// no-op returning the ciphertext unchanged, with no re-randomization;
/// anything else is encrypt-then-add at the matching kind and level.
pub fn add_plain<E: Pairing, R: Rng>(
    params: &PairingParams<E>,
    pk: &PublicKey<E>,
    ct: &Ciphertext<E>,
    k: u64,
    rng: &mut R,
) -> Result<Ciphertext<E>, LheError> {
    if k == 0 {
        return Ok(ct.clone());
    }
    match ct {
        Ciphertext::G1(x) => Ok(Ciphertext::G1(add_g1(
            x,
            &encrypt_g1(params, pk.p1, k, rng),
        ))),
        Ciphertext::G2(x) => Ok(Ciphertext::G2(add_g2(
            x,
            &encrypt_g2(params, pk.p2, k, rng),
        ))),
        Ciphertext::Gt(x) => Ok(Ciphertext::Gt(add_gt(
            x,
            &encrypt_gt(params, pk.p1, pk.p2, k, rng),
        ))),
        Ciphertext::Level1(x) => Ok(Ciphertext::Level1(
            x.add(&encrypt_level_1(params, pk, k, rng)),
        )),
        Ciphertext::Level2(x) => Ok(Ciphertext::Level2(
            x.add(&encrypt_level_2(params, pk, k, rng)),
        )),
        Ciphertext::Masked(x) => add(ct, &encrypt(params, pk, x.level, k, rng)?),
        Ciphertext::Quadratic(x) => Ok(Ciphertext::Quadratic(QuadraticCiphertext {
            level: x.level,
            mask: Box::new(add_plain(params, pk, &x.mask, k, rng)?),
            pairs: x.pairs.clone(),
        })),
    }
}
