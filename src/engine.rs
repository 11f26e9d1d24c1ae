use crate::error::LheError;
use ark_bls12_381::{g1, g2, Bls12_381};
use ark_ec::hashing::{
    curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve,
};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::AffineRepr;
use ark_ff::field_hashers::DefaultFieldHasher;
use ark_std::{collections::HashMap, sync::Mutex};
use std::any::{Any, TypeId};
use once_cell::sync::Lazy;
use sha2::Sha256;
use tracing::debug;

const LOG_TARGET: &str = "pairing_lhe::engine";

/// Label hashed to the curve to derive the fixed G1 generator.
pub const G1_GENERATOR_LABEL: &[u8] = b"Fixed public point in Group 1";

/// Label hashed to the curve to derive the fixed G2 generator.
pub const G2_GENERATOR_LABEL: &[u8] = b"Fixed public point in Group 2";

/// A Type-3 pairing engine usable by the scheme.
///
/// On top of the arkworks `Pairing` operations the scheme needs a way to
/// derive its public generators deterministically, so the engine must know
/// how to hash a byte label into each source group. Any engine hashing the
/// same label bytes with the same suite produces interoperable parameters.
pub trait LheEngine: Pairing {
    /// Hash a byte label to a G1 point.
    fn hash_to_g1(label: &[u8]) -> Result<Self::G1, LheError>;

    /// Hash a byte label to a G2 point.
    fn hash_to_g2(label: &[u8]) -> Result<Self::G2, LheError>;
}

const BLS12_381_G1_DOMAIN: &[u8] = b"pairing-lhe/bls12-381/g1";
const BLS12_381_G2_DOMAIN: &[u8] = b"pairing-lhe/bls12-381/g2";

impl LheEngine for Bls12_381 {
    fn hash_to_g1(label: &[u8]) -> Result<Self::G1, LheError> {
        let hasher = MapToCurveBasedHasher::<
            ark_bls12_381::G1Projective,
            DefaultFieldHasher<Sha256, 128>,
            WBMap<g1::Config>,
        >::new(BLS12_381_G1_DOMAIN)
        .map_err(|e| LheError::Backend(format!("{e:?}")))?;
        let point = hasher
            .hash(label)
            .map_err(|e| LheError::Backend(format!("{e:?}")))?;
        Ok(point.into_group())
    }

    fn hash_to_g2(label: &[u8]) -> Result<Self::G2, LheError> {
        let hasher = MapToCurveBasedHasher::<
            ark_bls12_381::G2Projective,
            DefaultFieldHasher<Sha256, 128>,
            WBMap<g2::Config>,
        >::new(BLS12_381_G2_DOMAIN)
        .map_err(|e| LheError::Backend(format!("{e:?}")))?;
        let point = hasher
            .hash(label)
            .map_err(|e| LheError::Backend(format!("{e:?}")))?;
        Ok(point.into_group())
    }
}

/// The fixed public parameters every operation works against: the two
/// hash-derived source-group generators and their pairing, a generator of
/// the target group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingParams<E: Pairing> {
    /// `g1`, derived from [`G1_GENERATOR_LABEL`].
    pub g1: E::G1,
    /// `g2`, derived from [`G2_GENERATOR_LABEL`].
    pub g2: E::G2,
    /// `z = e(g1, g2)`.
    pub z: PairingOutput<E>,
}

impl<E: LheEngine> PairingParams<E> {
    /// Derive the parameters from the fixed labels. Deterministic: two
    /// setups over the same engine yield identical parameters.
    pub fn setup() -> Result<Self, LheError> {
        let g1 = E::hash_to_g1(G1_GENERATOR_LABEL)?;
        let g2 = E::hash_to_g2(G2_GENERATOR_LABEL)?;
        let z = E::pairing(g1, g2);
        debug!(target: LOG_TARGET, "derived pairing parameters from fixed labels");
        Ok(Self { g1, g2, z })
    }
}

/// Lazy-initialized parameter sets, one per engine type.
/// Hash-to-curve runs once per engine per process; afterwards the cached
/// copy is handed out.
static PARAMS_CACHE: Lazy<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Get or derive the cached [`PairingParams`] for an engine.
pub fn params<E: LheEngine + 'static>() -> Result<PairingParams<E>, LheError> {
    let mut cache = PARAMS_CACHE.lock().unwrap();
    let type_id = TypeId::of::<E>();

    if let Some(entry) = cache.get(&type_id) {
        return Ok(*entry.downcast_ref::<PairingParams<E>>().unwrap());
    }

    let fresh = PairingParams::<E>::setup()?;
    cache.insert(type_id, Box::new(fresh));
    Ok(fresh)
}
