//! BN256 base field `GF(p)` where p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47

// Standard library imports
use core::fmt;

// External crate imports
use byteorder::{BigEndian, ByteOrder};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
const MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x87d2_0782_e486_6389;

/// Montgomery R = 2^256 mod p
const R: Fp = Fp([
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
]);

/// Montgomery R^2 = 2^512 mod p
const R2: Fp = Fp([
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
]);

/// Montgomery R^3 = 2^768 mod p
const R3: Fp = Fp([
    0xb1cd_6daf_da15_30df,
    0x62f2_10e6_a728_3db6,
    0xef7f_0b0c_0ada_0afb,
    0x20fd_6e90_2d59_2544,
]);

/// p - 2, the Fermat inversion exponent
const P_MINUS_2: [u64; 4] = [
    0x3c20_8c16_d87c_fd45,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^256
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

impl Fp {
    /// Conditionally subtract p so the result lands in [0, p)
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);

        // borrow is all-ones when self < p
        let r0 = (self.0[0] & borrow) | (r0 & !borrow);
        let r1 = (self.0[1] & borrow) | (r1 & !borrow);
        let r2 = (self.0[2] & borrow) | (r2 & !borrow);
        let r3 = (self.0[3] & borrow) | (r3 & !borrow);

        Fp([r0, r1, r2, r3])
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp::one())
    }

    /// Create from Montgomery limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);

        (&Fp([d0, d1, d2, d3])).subtract_p()
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // Zero maps to zero, not p
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Double this element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let (t0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (t1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (t2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], rhs.0[3], carry);

        let (t1, carry) = mac(t1, self.0[1], rhs.0[0], 0);
        let (t2, carry) = mac(t2, self.0[1], rhs.0[1], carry);
        let (t3, carry) = mac(t3, self.0[1], rhs.0[2], carry);
        let (t4, t5) = mac(t4, self.0[1], rhs.0[3], carry);

        let (t2, carry) = mac(t2, self.0[2], rhs.0[0], 0);
        let (t3, carry) = mac(t3, self.0[2], rhs.0[1], carry);
        let (t4, carry) = mac(t4, self.0[2], rhs.0[2], carry);
        let (t5, t6) = mac(t5, self.0[2], rhs.0[3], carry);

        let (t3, carry) = mac(t3, self.0[3], rhs.0[0], 0);
        let (t4, carry) = mac(t4, self.0[3], rhs.0[1], carry);
        let (t5, carry) = mac(t5, self.0[3], rhs.0[2], carry);
        let (t6, t7) = mac(t6, self.0[3], rhs.0[3], carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp {
        let (t1, carry) = mac(0, self.0[0], self.0[1], 0);
        let (t2, carry) = mac(0, self.0[0], self.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], self.0[3], carry);

        let (t3, carry) = mac(t3, self.0[1], self.0[2], 0);
        let (t4, t5) = mac(t4, self.0[1], self.0[3], carry);

        let (t5, t6) = mac(t5, self.0[2], self.0[3], 0);

        let t7 = t6 >> 63;
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        let (t0, carry) = mac(0, self.0[0], self.0[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, self.0[1], self.0[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, self.0[2], self.0[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, self.0[3], self.0[3], carry);
        let (t7, _) = adc(t7, 0, carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Montgomery reduction of a 512-bit product
    #[inline(always)]
    pub(crate) const fn montgomery_reduce(
        t0: u64, t1: u64, t2: u64, t3: u64,
        t4: u64, t5: u64, t6: u64, t7: u64,
    ) -> Fp {
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, carry2) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry2) = adc(t5, carry2, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry2) = adc(t6, carry2, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, _) = adc(t7, carry2, carry);

        (&Fp([r4, r5, r6, r7])).subtract_p()
    }

    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Fp {
        let mut res = Fp::one();
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

    /// Multiplicative inverse via Fermat's little theorem
    #[inline]
    pub fn invert(&self) -> CtOption<Fp> {
        let t = self.pow_vartime(&P_MINUS_2);
        CtOption::new(t, !self.is_zero())
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode a canonical big-endian integer, rejecting values ≥ p
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let mut tmp = Fp([
            BigEndian::read_u64(&bytes[24..32]),
            BigEndian::read_u64(&bytes[16..24]),
            BigEndian::read_u64(&bytes[8..16]),
            BigEndian::read_u64(&bytes[0..8]),
        ]);

        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        // Into Montgomery form
        tmp = tmp.mul(&R2);

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Encode as a canonical big-endian integer
    pub fn to_bytes(self) -> [u8; 32] {
        // Out of Montgomery form
        let tmp = Fp::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);

        let mut res = [0u8; 32];
        BigEndian::write_u64(&mut res[0..8], tmp.0[3]);
        BigEndian::write_u64(&mut res[8..16], tmp.0[2]);
        BigEndian::write_u64(&mut res[16..24], tmp.0[1]);
        BigEndian::write_u64(&mut res[24..32], tmp.0[0]);

        res
    }

    /// Uniformly random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);

        // Reduce a 512-bit integer: d0 * R + d1 * R^2 in Montgomery terms
        let d0 = Fp([
            BigEndian::read_u64(&bytes[24..32]),
            BigEndian::read_u64(&bytes[16..24]),
            BigEndian::read_u64(&bytes[8..16]),
            BigEndian::read_u64(&bytes[0..8]),
        ]);
        let d1 = Fp([
            BigEndian::read_u64(&bytes[56..64]),
            BigEndian::read_u64(&bytes[48..56]),
            BigEndian::read_u64(&bytes[40..48]),
            BigEndian::read_u64(&bytes[32..40]),
        ]);

        d0.mul(&R2).add(&d1.mul(&R3))
    }
}

impl From<u64> for Fp {
    fn from(val: u64) -> Fp {
        Fp([val, 0, 0, 0]).mul(&R2)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl_field_ops!(Fp);
