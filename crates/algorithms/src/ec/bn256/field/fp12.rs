//! Quadratic extension Fp12 = Fp6[ω]/(ω² - τ), the pairing target field

use core::fmt;
use num_bigint::BigUint;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::{Fp6, XI_TO_P_SQUARED_MINUS_1_OVER_3};

/// ξ^((p-1)/6)
pub(crate) const XI_TO_P_MINUS_1_OVER_6: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xaf9b_a696_3314_4907,
        0xca6b_1d73_87af_b78a,
        0x11bd_ed5e_f08a_2087,
        0x02f3_4d75_1a1f_3a7c,
    ]),
    c1: Fp::from_raw_unchecked([
        0xa222_ae23_4c49_2d72,
        0xd00f_02a4_565d_e15b,
        0xdc2f_f3a2_53df_c926,
        0x10a7_5716_b389_9551,
    ]),
};

/// ξ^((p²-1)/6), lies in Fp
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_6: Fp = Fp::from_raw_unchecked([
    0xca8d_8005_00fa_1bf2,
    0xf0c5_d614_68b3_9769,
    0x0e20_1271_ad0d_4418,
    0x0429_0f65_bad8_56e6,
]);

/// Element c0 + c1·ω of Fp12
#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of ω
    pub c1: Fp6,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*ω", self.c0, self.c1)
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 { c0: f, c1: Fp6::zero() }
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 { c0: Fp6::zero(), c1: Fp6::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 { c0: Fp6::one(), c1: Fp6::zero() }
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
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Conjugate c0 - c1·ω; the inverse on the cyclotomic subgroup
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12 { c0: self.c0, c1: -self.c1 }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Karatsuba multiplication
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;

        Fp12 {
            c0: aa + bb.mul_by_nonresidue(),
            c1,
        }
    }

    /// Complex squaring
    pub fn square(&self) -> Fp12 {
        let v0 = self.c0 * self.c1;
        let t = self.c0 + self.c1.mul_by_nonresidue();
        let c0 = (self.c0 + self.c1) * t - v0 - v0.mul_by_nonresidue();

        Fp12 {
            c0,
            c1: v0.double(),
        }
    }

    /// Scale both coefficients by an Fp6 element
    #[inline]
    pub fn mul_by_fp6(&self, rhs: &Fp6) -> Fp12 {
        Fp12 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
        }
    }

    /// Inverse through the norm c0² - τ·c1² to Fp6
    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// Square-and-multiply over a little-endian limb exponent, most significant bit first
    pub fn pow_vartime(&self, by: &[u64]) -> Fp12 {
        let mut res = Fp12::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Exponentiation by an arbitrary-precision integer
    pub fn pow(&self, by: &BigUint) -> Fp12 {
        self.pow_vartime(&by.to_u64_digits())
    }

    /// p-power Frobenius
    pub fn frobenius_map(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul_by_fp2(&XI_TO_P_MINUS_1_OVER_6),
        }
    }

    /// p²-power Frobenius
    pub fn frobenius_map_p2(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map_p2(),
            c1: self.c1.frobenius_map_p2().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
        }
    }

    /// p⁴-power Frobenius
    pub fn frobenius_map_p4(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map_p4(),
            c1: self.c1.frobenius_map_p4().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }

    /// The twelve Fp coefficients in wire order: ω first, then τ², τ, 1, imaginary before real
    pub(crate) fn wire_coefficients(&self) -> [Fp; 12] {
        [
            self.c1.c2.c1, self.c1.c2.c0,
            self.c1.c1.c1, self.c1.c1.c0,
            self.c1.c0.c1, self.c1.c0.c0,
            self.c0.c2.c1, self.c0.c2.c0,
            self.c0.c1.c1, self.c0.c1.c0,
            self.c0.c0.c1, self.c0.c0.c0,
        ]
    }

    /// Encode as twelve 32-byte big-endian limbs
    pub fn to_bytes(self) -> [u8; 384] {
        let mut res = [0u8; 384];
        for (chunk, coeff) in res.chunks_exact_mut(32).zip(self.wire_coefficients().iter()) {
            chunk.copy_from_slice(&coeff.to_bytes());
        }
        res
    }

    /// Decode twelve 32-byte big-endian limbs, rejecting any limb ≥ p
    pub fn from_bytes(bytes: &[u8; 384]) -> CtOption<Fp12> {
        let mut limbs = [Fp::zero(); 12];
        let mut is_some = Choice::from(1u8);
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(32)) {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(chunk);
            let decoded = Fp::from_bytes(&buf);
            is_some &= decoded.is_some();
            *limb = decoded.unwrap_or(Fp::zero());
        }

        let fp2 = |im: usize, re: usize| Fp2 { c0: limbs[re], c1: limbs[im] };
        let value = Fp12 {
            c1: Fp6 { c2: fp2(0, 1), c1: fp2(2, 3), c0: fp2(4, 5) },
            c0: Fp6 { c2: fp2(6, 7), c1: fp2(8, 9), c0: fp2(10, 11) },
        };

        CtOption::new(value, is_some)
    }
}

impl_field_ops!(Fp12);
