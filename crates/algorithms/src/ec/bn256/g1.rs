//! Points of the base curve y² = x³ + 3 over Fp in Jacobian coordinates.

use num_bigint::BigUint;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use bnpair_params::traditional::bn256::G1_COFACTOR;

use super::field::fp::Fp;
use super::field::fp6::XI_TO_2P_SQUARED_MINUS_2_OVER_3;
use super::{glv, order};

/// Curve coefficient b = 3 in Montgomery form
pub(crate) const B: Fp = Fp::from_raw_unchecked([
    0x7a17_caa9_50ad_28d7,
    0x1f6a_c17a_e155_21b9,
    0x334b_ea4e_696b_d284,
    0x2a1f_6744_ce17_9d8e,
]);

/// Whether validation must also check n·P = ∞
const CHECK_SUBGROUP: bool = G1_COFACTOR != 1 || cfg!(feature = "g1-subgroup-check");

/// Jacobian point (X, Y, Z) representing (X/Z², Y/Z³); Z = 0 is infinity.
/// T caches Z² where that is cheap to know and is otherwise advisory.
#[derive(Copy, Clone, Debug)]
pub struct CurvePoint {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) t: Fp,
}

impl_jacobian_point!(CurvePoint, Fp);

impl CurvePoint {
    /// Fixed generator (1, 2)
    pub const fn generator() -> CurvePoint {
        CurvePoint {
            x: Fp::one(),
            y: Fp::from_raw_unchecked([
                0xa6ba_871b_8b1e_1b3a,
                0x14f1_d651_eb8e_167b,
                0xccdd_46de_f0f2_8c58,
                0x1c14_ef83_340f_be5e,
            ]),
            z: Fp::one(),
            t: Fp::one(),
        }
    }

    /// Curve equation check on the affine form; infinity is on the curve
    pub fn is_on_curve(&self) -> bool {
        let a = self.to_affine();
        if a.is_infinity() {
            return true;
        }
        let y2 = a.y.square();
        let x3 = a.x.square() * a.x;
        y2 == x3 + B
    }

    /// Membership in the order-n subgroup by plain double-and-add with n
    pub fn is_torsion_free(&self) -> bool {
        self.mul_binary(&order()).is_infinity()
    }

    /// Full validity check: the curve equation, and the subgroup when the
    /// cofactor is not 1 or the check is forced by configuration
    pub fn is_valid(&self) -> bool {
        self.is_on_curve() && (!CHECK_SUBGROUP || self.is_torsion_free())
    }

    /// The endomorphism (x, y) ↦ (β·x, y) with β a cube root of unity in Fp
    fn endomorphism(&self) -> CurvePoint {
        CurvePoint {
            x: self.x * XI_TO_2P_SQUARED_MINUS_2_OVER_3,
            y: self.y,
            z: self.z,
            t: self.t,
        }
    }

    /// Scalar multiplication using the GLV decomposition
    ///
    /// The scalar is reduced mod n first; results agree with plain
    /// double-and-add for every k because n·P = ∞ on G1.
    pub fn mul(&self, k: &BigUint) -> CurvePoint {
        let k = k % order();

        let mut table = [CurvePoint::identity(); 4];
        table[1] = *self;
        table[2] = self.endomorphism();
        table[3] = table[1].add(&table[2]);

        let mut acc = CurvePoint::identity();
        for digit in glv::multi_scalar(&k).iter().rev() {
            acc = acc.double();
            if *digit != 0 {
                acc = acc.add(&table[*digit as usize]);
            }
        }
        acc
    }
}
