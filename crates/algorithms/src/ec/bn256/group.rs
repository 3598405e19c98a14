//! Group element types G1, G2 and GT with their fixed-width wire encoding.
//!
//! Every operation returns a new value. Unmarshalling reads a fixed-length
//! prefix and hands back the unread remainder so that several elements can be
//! decoded from one concatenated buffer.

use core::fmt;

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};
use tracing::trace;

use bnpair_api::{Result as CoreResult, Serialize};
use bnpair_params::traditional::bn256::{
    FP_SIZE, G1_SIZE, G2_SIZE, GT_SIZE, SCALAR_SIZE, SCALAR_TOP_BYTE_MASK,
};

use super::field::fp::Fp;
use super::field::fp12::Fp12;
use super::field::fp2::Fp2;
use super::field::fp6::Fp6;
use super::g1::CurvePoint;
use super::g2::TwistPoint;
use super::{order, pairings};
use crate::error::{to_core_result, validate, Error, Result};

/// e(g1, g2) for the fixed generators
const GT_GENERATOR: Fp12 = Fp12 {
    c0: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0xc556_f62b_2a98_671d,
                0x23a5_9ac1_67bc_f363,
                0x5ef2_0844_5f5f_6f37,
                0x12ad_f27c_cb29_382a,
            ]),
            c1: Fp::from_raw_unchecked([
                0x2e02_a64a_cbd6_0549,
                0xd618_018e_a58e_4add,
                0x14d5_85f1_a45b_a647,
                0x1832_2269_87c4_34fc,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x2306_e431_2363_b991,
                0x465f_6072_d402_3bf4,
                0xa2ff_062a_4a77_e736,
                0x076e_a6f1_8435_864a,
            ]),
            c1: Fp::from_raw_unchecked([
                0x172d_1f25_7a4d_598e,
                0xddf5_bc7b_7ffb_5ac0,
                0xae0b_22c0_bbb0_f602,
                0x1b15_8f3c_2fae_9b18,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x5cf9_cc91_7da8_6724,
                0xc799_dc48_7a0b_2753,
                0x0df2_027b_f1de_17a7,
                0x197c_da6c_c3e2_0636,
            ]),
            c1: Fp::from_raw_unchecked([
                0xf16c_96d0_8175_4cdb,
                0xce03_9431_2bce_eb55,
                0x644e_4dcf_1f01_ff0a,
                0x0cbe_a85e_e0b2_36cc,
            ]),
        },
    },
    c1: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x1bb0_ce0d_ef1b_82a1,
                0x4c4c_9fe1_cade_fa95,
                0x746d_9990_cb12_b27e,
                0x1349_5c08_e5d4_15c5,
            ]),
            c1: Fp::from_raw_unchecked([
                0x9458_abcb_56d2_4998,
                0xb175_40bd_2a9e_5adb,
                0x9a99_83c8_2e40_1a9f,
                0x1614_817a_84c1_6291,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x8975_b68a_2bab_1f9c,
                0x2fdd_826b_796e_0f35,
                0x6a90_a35f_a03d_faa5,
                0x1ffe_f458_1607_fc37,
            ]),
            c1: Fp::from_raw_unchecked([
                0x7002_907c_28eb_fe11,
                0x7b05_91d3_d080_da67,
                0xde7e_5aa2_181f_138e,
                0x210e_437d_fc43_d951,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x988a_e248_5b36_cf53,
                0x5091_cc05_8133_4e54,
                0xda79_0322_9312_ca0f,
                0x2a23_4153_8eae_e95c,
            ]),
            c1: Fp::from_raw_unchecked([
                0xd34b_ab37_3157_aa84,
                0x3511_ed44_fd0d_8598,
                0x67e4_2a0b_c2ce_d972,
                0x2b8f_1d5d_fd20_c55b,
            ]),
        },
    },
};

// ============================================================================
// Codec helpers
// ============================================================================

/// Split off a fixed-length prefix, reporting insufficient data
fn take_prefix<'a>(data: &'a [u8], size: usize, context: &'static str) -> Result<(&'a [u8], &'a [u8])> {
    if let Err(err) = validate::min_length(context, data.len(), size) {
        trace!(context, actual = data.len(), expected = size, "unmarshal rejected: short input");
        return Err(err);
    }
    Ok(data.split_at(size))
}

/// Decode one 32-byte limb into Montgomery form
fn decode_fp(limb: &[u8], context: &'static str) -> Result<Fp> {
    let mut buf = [0u8; FP_SIZE];
    buf.copy_from_slice(limb);
    Option::<Fp>::from(Fp::from_bytes(&buf)).ok_or_else(|| {
        trace!(context, "unmarshal rejected: coordinate not below the modulus");
        Error::Coordinate { context }
    })
}

/// Draw k uniformly from [1, n) by rejection sampling
fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<BigUint> {
    let n = order();
    loop {
        #[cfg(feature = "zeroize")]
        let mut buf = zeroize::Zeroizing::new([0u8; SCALAR_SIZE]);
        #[cfg(not(feature = "zeroize"))]
        let mut buf = [0u8; SCALAR_SIZE];

        rng.try_fill_bytes(&mut buf[..])
            .map_err(|_| Error::Random { context: "random scalar" })?;
        buf[0] &= SCALAR_TOP_BYTE_MASK;

        let k = BigUint::from_bytes_be(&buf[..]);
        if k.is_zero() || k >= n {
            trace!("scalar sample out of range, retrying");
            continue;
        }
        return Ok(k);
    }
}

// ============================================================================
// G1
// ============================================================================

/// An element of G1, the order-n group of the base curve
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G1(pub(crate) CurvePoint);

impl G1 {
    /// The fixed generator (1, 2)
    pub const fn generator() -> G1 {
        G1(CurvePoint::generator())
    }

    /// The point at infinity
    pub const fn identity() -> G1 {
        G1(CurvePoint::identity())
    }

    /// Check for the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.0.is_infinity()
    }

    /// g1·k
    pub fn scalar_base_mult(k: &BigUint) -> G1 {
        G1(CurvePoint::generator().mul(k))
    }

    /// self·k
    pub fn scalar_mult(&self, k: &BigUint) -> G1 {
        G1(self.0.mul(k))
    }

    /// self + other
    pub fn add(&self, other: &G1) -> G1 {
        G1(self.0.add(&other.0))
    }

    /// -self
    pub fn neg(&self) -> G1 {
        G1(self.0.neg())
    }

    /// Overwrite self with a copy of other
    pub fn set(&mut self, other: &G1) -> &mut G1 {
        self.0 = other.0;
        self
    }

    /// Encode as x ‖ y; infinity encodes as 64 zero bytes
    pub fn marshal(&self) -> [u8; G1_SIZE] {
        let mut out = [0u8; G1_SIZE];
        if self.is_infinity() {
            return out;
        }
        let (x, y) = self.0.coordinates();
        out[..FP_SIZE].copy_from_slice(&x.to_bytes());
        out[FP_SIZE..].copy_from_slice(&y.to_bytes());
        out
    }

    /// Decode the first 64 bytes of `data`, returning the point and the rest
    pub fn unmarshal(data: &[u8]) -> Result<(G1, &[u8])> {
        let (head, rest) = take_prefix(data, G1_SIZE, "G1")?;
        let x = decode_fp(&head[..FP_SIZE], "G1")?;
        let y = decode_fp(&head[FP_SIZE..], "G1")?;

        if bool::from(x.is_zero() & y.is_zero()) {
            return Ok((G1::identity(), rest));
        }

        let point = CurvePoint::from_affine(x, y);
        if let Err(err) = validate::point(point.is_valid(), "G1", "not on curve") {
            trace!("unmarshal rejected: G1 point fails validation");
            return Err(err);
        }
        Ok((G1(point), rest))
    }
}

impl fmt::Display for G1 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y) = self.0.coordinates();
        write!(f, "bn256.G1({:?}, {:?})", x, y)
    }
}

impl<'a> core::ops::Neg for &'a G1 {
    type Output = G1;

    fn neg(self) -> G1 {
        self.neg()
    }
}

impl<'a, 'b> core::ops::Add<&'b G1> for &'a G1 {
    type Output = G1;

    fn add(self, rhs: &'b G1) -> G1 {
        self.add(rhs)
    }
}

impl<'a, 'b> core::ops::Mul<&'b BigUint> for &'a G1 {
    type Output = G1;

    fn mul(self, k: &'b BigUint) -> G1 {
        self.scalar_mult(k)
    }
}

impl Serialize for G1 {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let decoded = validate::length("G1", bytes.len(), G1_SIZE)
            .and_then(|_| G1::unmarshal(bytes))
            .map(|(point, _)| point);
        to_core_result(decoded, "G1::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.marshal().to_vec()
    }
}

/// Draw k from [1, n) and return (k, g1·k)
pub fn random_g1<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, G1)> {
    let k = random_scalar(rng)?;
    let point = G1::scalar_base_mult(&k);
    Ok((k, point))
}

// ============================================================================
// G2
// ============================================================================

/// An element of G2, the order-n subgroup of the twist
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2(pub(crate) TwistPoint);

impl G2 {
    /// The fixed generator
    pub const fn generator() -> G2 {
        G2(TwistPoint::generator())
    }

    /// The point at infinity
    pub const fn identity() -> G2 {
        G2(TwistPoint::identity())
    }

    /// Check for the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.0.is_infinity()
    }

    /// g2·k
    pub fn scalar_base_mult(k: &BigUint) -> G2 {
        G2(TwistPoint::generator().mul(k))
    }

    /// self·k
    pub fn scalar_mult(&self, k: &BigUint) -> G2 {
        G2(self.0.mul(k))
    }

    /// self + other
    pub fn add(&self, other: &G2) -> G2 {
        G2(self.0.add(&other.0))
    }

    /// -self
    pub fn neg(&self) -> G2 {
        G2(self.0.neg())
    }

    /// Overwrite self with a copy of other
    pub fn set(&mut self, other: &G2) -> &mut G2 {
        self.0 = other.0;
        self
    }

    /// Encode as x.im ‖ x.re ‖ y.im ‖ y.re; infinity encodes as 128 zero bytes
    pub fn marshal(&self) -> [u8; G2_SIZE] {
        let mut out = [0u8; G2_SIZE];
        if self.is_infinity() {
            return out;
        }
        let (x, y) = self.0.coordinates();
        out[..2 * FP_SIZE].copy_from_slice(&x.to_bytes());
        out[2 * FP_SIZE..].copy_from_slice(&y.to_bytes());
        out
    }

    /// Decode the first 128 bytes of `data`, returning the point and the rest.
    /// Points outside the order-n subgroup are rejected.
    pub fn unmarshal(data: &[u8]) -> Result<(G2, &[u8])> {
        let (head, rest) = take_prefix(data, G2_SIZE, "G2")?;
        let mut limbs = [Fp::zero(); 4];
        for (limb, chunk) in limbs.iter_mut().zip(head.chunks_exact(FP_SIZE)) {
            *limb = decode_fp(chunk, "G2")?;
        }
        let x = Fp2 { c0: limbs[1], c1: limbs[0] };
        let y = Fp2 { c0: limbs[3], c1: limbs[2] };

        if bool::from(x.is_zero() & y.is_zero()) {
            return Ok((G2::identity(), rest));
        }

        let point = TwistPoint::from_affine(x, y);
        if let Err(err) = validate::point(point.is_on_twist(), "G2", "not on curve") {
            trace!("unmarshal rejected: G2 point off the twist");
            return Err(err);
        }
        if let Err(err) = validate::point(point.is_torsion_free(), "G2", "not in subgroup") {
            trace!("unmarshal rejected: G2 point outside the order-n subgroup");
            return Err(err);
        }
        Ok((G2(point), rest))
    }
}

impl fmt::Display for G2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y) = self.0.coordinates();
        write!(
            f,
            "bn256.G2(({:?}, {:?}), ({:?}, {:?}))",
            x.c1, x.c0, y.c1, y.c0
        )
    }
}

impl<'a> core::ops::Neg for &'a G2 {
    type Output = G2;

    fn neg(self) -> G2 {
        self.neg()
    }
}

impl<'a, 'b> core::ops::Add<&'b G2> for &'a G2 {
    type Output = G2;

    fn add(self, rhs: &'b G2) -> G2 {
        self.add(rhs)
    }
}

impl<'a, 'b> core::ops::Mul<&'b BigUint> for &'a G2 {
    type Output = G2;

    fn mul(self, k: &'b BigUint) -> G2 {
        self.scalar_mult(k)
    }
}

impl Serialize for G2 {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let decoded = validate::length("G2", bytes.len(), G2_SIZE)
            .and_then(|_| G2::unmarshal(bytes))
            .map(|(point, _)| point);
        to_core_result(decoded, "G2::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.marshal().to_vec()
    }
}

/// Draw k from [1, n) and return (k, g2·k)
pub fn random_g2<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, G2)> {
    let k = random_scalar(rng)?;
    let point = G2::scalar_base_mult(&k);
    Ok((k, point))
}

// ============================================================================
// GT
// ============================================================================

/// An element of the target group, written multiplicatively in Fp12.
///
/// Values produced by [`miller`] are raw loop outputs and only become
/// canonical GT elements after [`Gt::finalize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Gt {
        Gt::one()
    }
}

impl Gt {
    /// e(g1, g2)
    pub const fn generator() -> Gt {
        Gt(GT_GENERATOR)
    }

    /// The identity of GT
    pub const fn one() -> Gt {
        Gt(Fp12::one())
    }

    /// Check for the identity
    pub fn is_one(&self) -> bool {
        bool::from(self.0.is_one())
    }

    /// e(g1, g2)^k
    pub fn scalar_base_mult(k: &BigUint) -> Gt {
        Gt(GT_GENERATOR.pow(k))
    }

    /// self^k
    pub fn scalar_mult(&self, k: &BigUint) -> Gt {
        Gt(self.0.pow(k))
    }

    /// The group operation, multiplication in Fp12
    pub fn add(&self, other: &Gt) -> Gt {
        Gt(self.0 * other.0)
    }

    /// The group inverse; conjugation on the cyclotomic subgroup
    pub fn neg(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// Overwrite self with a copy of other
    pub fn set(&mut self, other: &Gt) -> &mut Gt {
        self.0 = other.0;
        self
    }

    /// Apply the final exponentiation to a raw Miller loop output
    pub fn finalize(&self) -> Gt {
        Gt(pairings::final_exponentiation(&self.0))
    }

    /// Encode as twelve 32-byte limbs
    pub fn marshal(&self) -> [u8; GT_SIZE] {
        self.0.to_bytes()
    }

    /// Decode the first 384 bytes of `data`, returning the element and the rest.
    /// No group membership check is made.
    pub fn unmarshal(data: &[u8]) -> Result<(Gt, &[u8])> {
        let (head, rest) = take_prefix(data, GT_SIZE, "GT")?;
        let mut buf = [0u8; GT_SIZE];
        buf.copy_from_slice(head);
        let value = Option::<Fp12>::from(Fp12::from_bytes(&buf)).ok_or_else(|| {
            trace!("unmarshal rejected: GT coordinate not below the modulus");
            Error::Coordinate { context: "GT" }
        })?;
        Ok((Gt(value), rest))
    }
}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "bn256.GT(")?;
        for (i, coeff) in self.0.wire_coefficients().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", coeff)?;
        }
        write!(f, ")")
    }
}

impl<'a> core::ops::Neg for &'a Gt {
    type Output = Gt;

    fn neg(self) -> Gt {
        self.neg()
    }
}

impl<'a, 'b> core::ops::Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    fn add(self, rhs: &'b Gt) -> Gt {
        self.add(rhs)
    }
}

impl<'a, 'b> core::ops::Mul<&'b BigUint> for &'a Gt {
    type Output = Gt;

    fn mul(self, k: &'b BigUint) -> Gt {
        self.scalar_mult(k)
    }
}

impl Serialize for Gt {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let decoded = validate::length("GT", bytes.len(), GT_SIZE)
            .and_then(|_| Gt::unmarshal(bytes))
            .map(|(value, _)| value);
        to_core_result(decoded, "Gt::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.marshal().to_vec()
    }
}

// ============================================================================
// Pairing
// ============================================================================

/// e(a, b)
pub fn pair(a: &G1, b: &G2) -> Gt {
    Gt(pairings::pair(&a.0, &b.0))
}

/// The raw Miller loop value for (a, b); see [`Gt::finalize`]
pub fn miller(a: &G1, b: &G2) -> Gt {
    Gt(pairings::miller(&b.0, &a.0))
}

/// Check ∏ e(aᵢ, bᵢ) = 1.
///
/// Lists of different lengths are rejected with `false`.
pub fn pairing_check(a: &[G1], b: &[G2]) -> bool {
    if a.len() != b.len() {
        trace!(g1 = a.len(), g2 = b.len(), "pairing check on mismatched lists");
        return false;
    }
    pairings::pairing_check(a.iter().map(|p| &p.0).zip(b.iter().map(|q| &q.0)))
}
