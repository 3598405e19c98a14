//! Cubic extension Fp6 = Fp2[τ]/(τ³ - ξ), ξ = 9 + i

use core::fmt;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;

/// ξ^((p-1)/3)
pub(crate) const XI_TO_P_MINUS_1_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xb577_3b10_4563_ab30,
        0x347f_91c8_a9aa_6454,
        0x7a00_7127_242e_0991,
        0x1956_bcd8_1182_14ec,
    ]),
    c1: Fp::from_raw_unchecked([
        0x6e84_9f1e_a0aa_4757,
        0xaa1c_7b6d_89f8_9141,
        0xb6e7_13cd_fae0_ca3a,
        0x2669_4fbb_4e82_ebc3,
    ]),
};

/// ξ^((2p-2)/3)
pub(crate) const XI_TO_2P_MINUS_2_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x7361_d77f_843a_be92,
        0xa5bb_2bd3_2734_11fb,
        0x9c94_1f31_4b3e_2399,
        0x15df_9cdd_bb9f_d3ec,
    ]),
    c1: Fp::from_raw_unchecked([
        0x5ddd_fd15_4bd8_c949,
        0x62cb_29a5_a444_5b60,
        0x37bc_870a_0c7d_d2b9,
        0x2483_0a9d_3171_f0fd,
    ]),
};

/// ξ^((p²-1)/3), lies in Fp
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_3: Fp = Fp::from_raw_unchecked([
    0x3350_c88e_13e8_0b9c,
    0x7dce_557c_db5e_56b9,
    0x6001_b4b8_b615_564a,
    0x2682_e617_0202_17e0,
]);

/// ξ^((2p²-2)/3), lies in Fp; also a primitive cube root of unity
pub(crate) const XI_TO_2P_SQUARED_MINUS_2_OVER_3: Fp = Fp::from_raw_unchecked([
    0x7193_0c11_d782_e155,
    0xa6bb_947c_ffbe_3323,
    0xaa30_3344_d474_1444,
    0x2c3b_3f0d_2659_4943,
]);

/// Element c0 + c1·τ + c2·τ² of Fp6
#[derive(Copy, Clone, Default)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of τ
    pub c1: Fp2,
    /// Coefficient of τ²
    pub c2: Fp2,
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*τ + ({:?})*τ^2", self.c0, self.c1, self.c2)
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 { c0: f, c1: Fp2::zero(), c2: Fp2::zero() }
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 { c0: Fp2::zero(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 { c0: Fp2::one(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp6 {
        self.add(self)
    }

    /// Karatsuba-style multiplication, six Fp2 products
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let v2 = self.c2 * rhs.c2;

        let t0 = (self.c1 + self.c2) * (rhs.c1 + rhs.c2) - v1 - v2;
        let t1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        let t2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - v0 - v2;

        Fp6 {
            c0: t0.mul_by_nonresidue() + v0,
            c1: t1 + v2.mul_by_nonresidue(),
            c2: t2 + v1,
        }
    }

    /// Squaring with the same interpolation as `mul`
    pub fn square(&self) -> Fp6 {
        let v0 = self.c0.square();
        let v1 = self.c1.square();
        let v2 = self.c2.square();

        let t0 = (self.c1 + self.c2).square() - v1 - v2;
        let t1 = (self.c0 + self.c1).square() - v0 - v1;
        let t2 = (self.c0 + self.c2).square() - v0 - v2;

        Fp6 {
            c0: t0.mul_by_nonresidue() + v0,
            c1: t1 + v2.mul_by_nonresidue(),
            c2: t2 + v1,
        }
    }

    /// Scale every coefficient by an Fp2 element
    #[inline]
    pub fn mul_by_fp2(&self, rhs: &Fp2) -> Fp6 {
        Fp6 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
            c2: self.c2 * rhs,
        }
    }

    /// Scale every coefficient by a base-field element
    #[inline]
    pub fn mul_by_fp(&self, rhs: &Fp) -> Fp6 {
        Fp6 {
            c0: self.c0.mul_by_fp(rhs),
            c1: self.c1.mul_by_fp(rhs),
            c2: self.c2.mul_by_fp(rhs),
        }
    }

    /// Multiply by the generator τ: (c0, c1, c2) → (ξ·c2, c0, c1)
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Inverse by the norm to Fp2
    ///
    /// With A = c0² - ξ·c1·c2, B = ξ·c2² - c0·c1, C = c1² - c0·c2 the
    /// product (c0 + c1·τ + c2·τ²)(A + B·τ + C·τ²) lies in Fp2.
    pub fn invert(&self) -> CtOption<Fp6> {
        let a = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let b = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c = self.c1.square() - self.c0 * self.c2;

        let f = (self.c1 * c).mul_by_nonresidue()
            + self.c0 * a
            + (self.c2 * b).mul_by_nonresidue();

        f.invert().map(|t| Fp6 {
            c0: a * t,
            c1: b * t,
            c2: c * t,
        })
    }

    /// p-power Frobenius
    pub fn frobenius_map(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate() * XI_TO_P_MINUS_1_OVER_3,
            c2: self.c2.conjugate() * XI_TO_2P_MINUS_2_OVER_3,
        }
    }

    /// p²-power Frobenius
    pub fn frobenius_map_p2(&self) -> Fp6 {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
        }
    }

    /// p⁴-power Frobenius
    pub fn frobenius_map_p4(&self) -> Fp6 {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }
}

impl_field_ops!(Fp6);
