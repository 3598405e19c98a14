//! Points of the sextic twist y² = x³ + 3/ξ over Fp2 in Jacobian coordinates.

use num_bigint::BigUint;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::order;

/// Twist coefficient 3/ξ
pub(crate) const TWIST_B: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x3bf9_38e3_77b8_02a8,
        0x020b_1b27_3633_535d,
        0x26b7_edf0_4975_5260,
        0x2514_c632_4384_a86d,
    ]),
    c1: Fp::from_raw_unchecked([
        0x38e7_eccc_d1dc_ff67,
        0x65f0_b37d_93ce_0d3e,
        0xd749_d0dd_22ac_00aa,
        0x0141_b9ce_4a68_8d4d,
    ]),
};

/// Jacobian point on the twist. Z = 0 is infinity; T holds Z² inside the
/// Miller loop and is cleared by the group operations.
#[derive(Copy, Clone, Debug)]
pub struct TwistPoint {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
    pub(crate) t: Fp2,
}

impl_jacobian_point!(TwistPoint, Fp2);

impl TwistPoint {
    /// Fixed generator of the order-n subgroup
    pub const fn generator() -> TwistPoint {
        TwistPoint {
            x: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x8e83_b5d1_02bc_2026,
                    0xdceb_1935_497b_0172,
                    0xfbb8_2647_9781_1adf,
                    0x1957_3841_af96_503b,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xafb4_737d_a84c_6140,
                    0x6043_dd5a_5802_d8c4,
                    0x09e9_50fc_52a0_2f86,
                    0x14fe_f083_3aea_7b6b,
                ]),
            },
            y: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x619d_fa9d_886b_e9f6,
                    0xfe7f_d297_f59e_9b78,
                    0xff9e_1a62_231b_7dfe,
                    0x28fd_7eeb_ae9e_4206,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x6409_5b56_c718_56ee,
                    0xdc57_f922_327d_3cbb,
                    0x55f9_35be_3335_1076,
                    0x0da4_a0e6_93fd_6482,
                ]),
            },
            z: Fp2::one(),
            t: Fp2::one(),
        }
    }

    /// Twist equation check on the affine form; infinity passes
    pub fn is_on_twist(&self) -> bool {
        let a = self.to_affine();
        if a.is_infinity() {
            return true;
        }
        a.y.square() == a.x.square() * a.x + TWIST_B
    }

    /// Membership in the order-n subgroup. The twist has a large cofactor,
    /// so points on the twist are not automatically in G2.
    pub fn is_torsion_free(&self) -> bool {
        self.mul(&order()).is_infinity()
    }

    /// Twist equation plus subgroup membership
    pub fn is_valid(&self) -> bool {
        self.is_on_twist() && self.is_torsion_free()
    }

    /// Double-and-add over the bits of k, most significant first.
    /// k is used as given, without reduction mod n.
    pub fn mul(&self, k: &BigUint) -> TwistPoint {
        self.mul_binary(k)
    }
}
