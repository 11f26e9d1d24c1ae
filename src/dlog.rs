use crate::config::DLOG_BOUND;
use ark_ec::{CurveGroup, PrimeGroup};
use ark_std::collections::HashMap;
use ark_std::Zero;
use tracing::trace;

const LOG_TARGET: &str = "pairing_lhe::dlog";

/// Linear search for `e` with `base * e == target`, over `e in [0, bound)`.
///
/// Works for any of the scheme's groups: the source curves and the target
/// group all expose the same additive interface. Returns `None` when the
/// exponent is not in range, which callers must keep distinguishable from a
/// recovered zero.
pub fn discrete_log<G: PrimeGroup>(base: G, target: G, bound: u64) -> Option<u64> {
    let mut acc = G::zero();
    for exponent in 0..bound {
        if acc == target {
            trace!(target: LOG_TARGET, exponent, "discrete log recovered");
            return Some(exponent);
        }
        acc += base;
    }
    None
}

/// Linear search over the interleaved window `0, 1, -1, 2, -2, ...` with
/// `|e| < bound`. Used when plaintexts may be negative.
pub fn discrete_log_signed<G: PrimeGroup>(base: G, target: G, bound: u64) -> Option<i64> {
    let mut pos = G::zero();
    let mut neg = G::zero();
    for exponent in 0..bound {
        if pos == target {
            return Some(exponent as i64);
        }
        if exponent > 0 && neg == target {
            return Some(-(exponent as i64));
        }
        pos += base;
        neg -= base;
    }
    None
}

/// Convenience wrapper searching the default window `[0, DLOG_BOUND)`.
pub fn discrete_log_default<G: PrimeGroup>(base: G, target: G) -> Option<u64> {
    discrete_log(base, target, DLOG_BOUND)
}

/// Pre-computed mapping from `base * e` to `e` for `e in [0, bound)`,
/// allowing O(1) recovery in place of the linear scan. Only worthwhile when
/// many decryptions share a base; results agree with [`discrete_log`] on
/// every exponent inside the bound.
pub struct DlogTable<C: CurveGroup> {
    entries: HashMap<C::Affine, u64>,
}

impl<C: CurveGroup> DlogTable<C> {
    /// Tabulate `base * e` for every exponent below `bound`.
    pub fn new(base: C, bound: u64) -> Self {
        let mut powers = Vec::with_capacity(bound as usize);
        let mut acc = C::zero();
        for _ in 0..bound {
            powers.push(acc);
            acc += base;
        }
        // Normalized keys: lookups hash the affine form, which is unique
        // per group element.
        let entries = C::normalize_batch(&powers)
            .into_iter()
            .zip(0u64..)
            .collect();
        Self { entries }
    }

    /// Exponent of `target` with respect to the tabulated base, if below
    /// the table bound.
    pub fn lookup(&self, target: C) -> Option<u64> {
        self.entries.get(&target.into_affine()).copied()
    }
}
