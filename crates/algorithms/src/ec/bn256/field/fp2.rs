//! Quadratic extension Fp2 = Fp[i]/(i² + 1)

use core::fmt;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element c0 + c1·i of Fp2
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Imaginary part
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*i", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 { c0: f, c1: Fp::zero() }
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 { c0: Fp::zero(), c1: Fp::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 { c0: Fp::one(), c1: Fp::zero() }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Complex conjugate c0 - c1·i, which is also the p-power Frobenius
    #[inline]
    pub fn conjugate(&self) -> Fp2 {
        Fp2 { c0: self.c0, c1: -self.c1 }
    }

    /// Add two elements
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Negate this element
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Double this element
    #[inline]
    pub const fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Karatsuba multiplication, three base-field products
    #[inline]
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let s = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));

        Fp2 {
            c0: v0.sub(&v1),
            c1: s.sub(&v0).sub(&v1),
        }
    }

    /// Complex squaring: (a + b)(a - b) + 2ab·i
    #[inline]
    pub const fn square(&self) -> Fp2 {
        let a = self.c0.add(&self.c1);
        let b = self.c0.sub(&self.c1);
        let c = self.c0.double();

        Fp2 {
            c0: a.mul(&b),
            c1: c.mul(&self.c1),
        }
    }

    /// Scale both coefficients by a base-field element
    #[inline]
    pub const fn mul_by_fp(&self, rhs: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0.mul(rhs),
            c1: self.c1.mul(rhs),
        }
    }

    /// Multiply by the non-residue ξ = 9 + i
    ///
    /// (c0 + c1·i)(9 + i) = (9·c0 - c1) + (9·c1 + c0)·i
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        let t0 = self.c0.double().double().double().add(&self.c0);
        let t1 = self.c1.double().double().double().add(&self.c1);

        Fp2 {
            c0: t0.sub(&self.c1),
            c1: t1.add(&self.c0),
        }
    }

    /// Inverse through the norm c0² + c1²
    pub fn invert(&self) -> CtOption<Fp2> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Decode imaginary-then-real 32-byte limbs
    pub fn from_bytes(bytes: &[u8; 64]) -> CtOption<Fp2> {
        let mut c1 = [0u8; 32];
        let mut c0 = [0u8; 32];
        c1.copy_from_slice(&bytes[0..32]);
        c0.copy_from_slice(&bytes[32..64]);

        let c1 = Fp::from_bytes(&c1);
        let c0 = Fp::from_bytes(&c0);

        c0.and_then(|c0| c1.map(|c1| Fp2 { c0, c1 }))
    }

    /// Encode as imaginary-then-real 32-byte limbs
    pub fn to_bytes(self) -> [u8; 64] {
        let mut res = [0u8; 64];
        res[0..32].copy_from_slice(&self.c1.to_bytes());
        res[32..64].copy_from_slice(&self.c0.to_bytes());
        res
    }
}

impl_field_ops!(Fp2);
