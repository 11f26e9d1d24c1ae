use crate::data_structures::{
    CiphertextG1, CiphertextG2, CiphertextGt, Level1Ciphertext, Level2Ciphertext,
};
use ark_ec::pairing::Pairing;
use std::ops::{Add, Mul, Neg, Sub};

/// Homomorphic addition in G1: componentwise group addition.
pub fn add_g1<E: Pairing>(a: &CiphertextG1<E>, b: &CiphertextG1<E>) -> CiphertextG1<E> {
    CiphertextG1 {
        c1: a.c1 + b.c1,
        c2: a.c2 + b.c2,
    }
}

/// Homomorphic addition in G2.
pub fn add_g2<E: Pairing>(a: &CiphertextG2<E>, b: &CiphertextG2<E>) -> CiphertextG2<E> {
    CiphertextG2 {
        c1: a.c1 + b.c1,
        c2: a.c2 + b.c2,
    }
}

/// Homomorphic addition at level 2: componentwise in the target group,
/// which adds the plaintexts in the exponent.
pub fn add_gt<E: Pairing>(a: &CiphertextGt<E>, b: &CiphertextGt<E>) -> CiphertextGt<E> {
    CiphertextGt {
        c0: a.c0 + b.c0,
        c1: a.c1 + b.c1,
        c2: a.c2 + b.c2,
        c3: a.c3 + b.c3,
    }
}

/// Homomorphic multiplication of complementary level-1 ciphertexts.
///
/// The four pairings of the components carry the product into the target
/// group:
///
/// ```text
/// c0 = e(A1, A2)    exponent r1 * r2
/// c1 = e(A1, B2)    exponent r1 * (m2 + s2 * r2)
/// c2 = e(B1, A2)    exponent (m1 + s1 * r1) * r2
/// c3 = e(B1, B2)    exponent (m1 + s1 * r1) * (m2 + s2 * r2)
/// ```
///
/// The cross terms cancel under the secret key, leaving `z * (m1 * m2)`.
pub fn mul_g1_g2<E: Pairing>(a: &CiphertextG1<E>, b: &CiphertextG2<E>) -> CiphertextGt<E> {
    CiphertextGt {
        c0: E::pairing(a.c1, b.c1),
        c1: E::pairing(a.c1, b.c2),
        c2: E::pairing(a.c2, b.c1),
        c3: E::pairing(a.c2, b.c2),
    }
}

impl<E: Pairing> CiphertextG1<E> {
    /// Multiply the plaintext by a scalar. Native scalar multiplication on
    /// both components, never repeated addition.
    pub fn scalar_mul(&self, k: impl Into<E::ScalarField>) -> Self {
        let k = k.into();
        CiphertextG1 {
            c1: self.c1 * k,
            c2: self.c2 * k,
        }
    }
}

impl<E: Pairing> CiphertextG2<E> {
    pub fn scalar_mul(&self, k: impl Into<E::ScalarField>) -> Self {
        let k = k.into();
        CiphertextG2 {
            c1: self.c1 * k,
            c2: self.c2 * k,
        }
    }
}

impl<E: Pairing> CiphertextGt<E> {
    /// Scalar multiplication at level 2: exponentiation of every
    /// component.
    pub fn scalar_mul(&self, k: impl Into<E::ScalarField>) -> Self {
        let k = k.into();
        CiphertextGt {
            c0: self.c0 * k,
            c1: self.c1 * k,
            c2: self.c2 * k,
            c3: self.c3 * k,
        }
    }
}

impl<E: Pairing> Level1Ciphertext<E> {
    /// Componentwise addition of both halves.
    pub fn add(&self, other: &Self) -> Self {
        Level1Ciphertext {
            g1: add_g1(&self.g1, &other.g1),
            g2: add_g2(&self.g2, &other.g2),
        }
    }

    /// Additive inverse of the plaintext.
    pub fn neg(&self) -> Self {
        Level1Ciphertext {
            g1: CiphertextG1 {
                c1: -self.g1.c1,
                c2: -self.g1.c2,
            },
            g2: CiphertextG2 {
                c1: -self.g2.c1,
                c2: -self.g2.c2,
            },
        }
    }

    pub fn scalar_mul(&self, k: impl Into<E::ScalarField>) -> Self {
        let k = k.into();
        Level1Ciphertext {
            g1: self.g1.scalar_mul(k),
            g2: self.g2.scalar_mul(k),
        }
    }

    /// Multiply two dual ciphertexts into a level-2 ciphertext, pairing
    /// the G1 half of `self` against the G2 half of `other`. One canonical
    /// direction; the mirror product encrypts the same value.
    pub fn mul(&self, other: &Self) -> Level2Ciphertext<E> {
        Level2Ciphertext {
            gt: mul_g1_g2(&self.g1, &other.g2),
        }
    }
}

impl<E: Pairing> Level2Ciphertext<E> {
    pub fn add(&self, other: &Self) -> Self {
        Level2Ciphertext {
            gt: add_gt(&self.gt, &other.gt),
        }
    }

    pub fn scalar_mul(&self, k: impl Into<E::ScalarField>) -> Self {
        Level2Ciphertext {
            gt: self.gt.scalar_mul(k),
        }
    }
}

// Operator sugar on owned values. The methods above stay the primitive
// spellings.

impl<E: Pairing> Add for CiphertextG1<E> {
    type Output = CiphertextG1<E>;

    fn add(self, rhs: Self) -> Self::Output {
        add_g1(&self, &rhs)
    }
}

impl<E: Pairing> Add for CiphertextG2<E> {
    type Output = CiphertextG2<E>;

    fn add(self, rhs: Self) -> Self::Output {
        add_g2(&self, &rhs)
    }
}

impl<E: Pairing> Add for CiphertextGt<E> {
    type Output = CiphertextGt<E>;

    fn add(self, rhs: Self) -> Self::Output {
        add_gt(&self, &rhs)
    }
}

impl<E: Pairing> Add for Level1Ciphertext<E> {
    type Output = Level1Ciphertext<E>;

    fn add(self, rhs: Self) -> Self::Output {
        Level1Ciphertext::add(&self, &rhs)
    }
}

impl<E: Pairing> Add for Level2Ciphertext<E> {
    type Output = Level2Ciphertext<E>;

    fn add(self, rhs: Self) -> Self::Output {
        Level2Ciphertext::add(&self, &rhs)
    }
}

impl<E: Pairing> Neg for Level1Ciphertext<E> {
    type Output = Level1Ciphertext<E>;

    fn neg(self) -> Self::Output {
        Level1Ciphertext::neg(&self)
    }
}

impl<E: Pairing> Sub for Level1Ciphertext<E> {
    type Output = Level1Ciphertext<E>;

    fn sub(self, rhs: Self) -> Self::Output {
        Level1Ciphertext::add(&self, &rhs.neg())
    }
}

impl<E: Pairing> Mul for Level1Ciphertext<E> {
    type Output = Level2Ciphertext<E>;

    fn mul(self, rhs: Self) -> Self::Output {
        Level1Ciphertext::mul(&self, &rhs)
    }
}

impl<E: Pairing> Mul<u64> for Level1Ciphertext<E> {
    type Output = Level1Ciphertext<E>;

    fn mul(self, k: u64) -> Self::Output {
        self.scalar_mul(k)
    }
}

impl<E: Pairing> Mul<u64> for Level2Ciphertext<E> {
    type Output = Level2Ciphertext<E>;

    fn mul(self, k: u64) -> Self::Output {
        self.scalar_mul(k)
    }
}
