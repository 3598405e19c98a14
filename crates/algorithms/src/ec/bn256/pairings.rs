//! Optimal Ate pairing on BN256: Miller loop and final exponentiation.

use bnpair_params::traditional::bn256::{BN_U, SIX_U_PLUS_2_NAF};
use tracing::{instrument, trace};

use super::field::fp::Fp;
use super::field::fp12::Fp12;
use super::field::fp2::Fp2;
use super::field::fp6::{
    Fp6, XI_TO_P_MINUS_1_OVER_3, XI_TO_P_SQUARED_MINUS_1_OVER_3,
};
use super::g1::CurvePoint;
use super::g2::TwistPoint;

/// ξ^((p-1)/2)
pub(crate) const XI_TO_P_MINUS_1_OVER_2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xe4bb_dd0c_2936_b629,
        0xbb30_f162_e133_bacb,
        0x31a9_d1b6_f964_5366,
        0x2535_70be_a500_f8dd,
    ]),
    c1: Fp::from_raw_unchecked([
        0xa1d7_7ce4_5ffe_77c7,
        0x07af_fd11_7826_d1db,
        0x6d16_bd27_bb7e_dc6b,
        0x2c87_2002_85de_fecc,
    ]),
};

/// Sparse line evaluation a·τ + b + c·ω-part as produced by the line functions
struct Line {
    a: Fp2,
    b: Fp2,
    c: Fp2,
}

/// Tangent line at r evaluated at q, together with 2r.
///
/// r carries T = Z² on entry and the result carries it on exit.
fn line_double(r: &TwistPoint, q: &CurvePoint) -> (Line, TwistPoint) {
    let a = r.x.square();
    let b = r.y.square();
    let c = b.square();

    let d = ((r.x + b).square() - a - c).double();
    let e = a.double() + a;
    let g = e.square();

    let x = g - d - d;
    let z = (r.y + r.z).square() - b - r.t;
    let y = (d - x) * e - c.double().double().double();
    let t = z.square();
    let out = TwistPoint { x, y, z, t };

    let line_b = -(e * r.t).double().mul_by_fp(&q.x);
    let line_a = (r.x + e).square() - a - g - b.double().double();
    let line_c = (z * r.t).double().mul_by_fp(&q.y);

    (Line { a: line_a, b: line_b, c: line_c }, out)
}

/// Chord through r and the affine point p evaluated at q, together with r + p.
///
/// `r2` is p.y², precomputed by the caller.
fn line_add(r: &TwistPoint, p: &TwistPoint, q: &CurvePoint, r2: &Fp2) -> (Line, TwistPoint) {
    let b = p.x * r.t;
    let d = ((p.y + r.z).square() - r2 - r.t) * r.t;
    let h = b - r.x;
    let i = h.square();
    let e = i.double().double();
    let j = h * e;
    let l1 = d - r.y - r.y;
    let v = r.x * e;

    let x = l1.square() - j - v - v;
    let z = (r.z + h).square() - r.t - i;
    let y = (v - x) * l1 - (r.y * j).double();
    let t = z.square();
    let out = TwistPoint { x, y, z, t };

    let line_a = (l1 * p.x).double() - ((p.y + z).square() - r2 - t);
    let line_c = z.mul_by_fp(&q.y).double();
    let line_b = (-l1).mul_by_fp(&q.x).double();

    (Line { a: line_a, b: line_b, c: line_c }, out)
}

/// Multiply an accumulator by a sparse line value
fn mul_line(ret: &Fp12, line: &Line) -> Fp12 {
    let a2 = Fp6 { c0: line.b, c1: line.a, c2: Fp2::zero() } * ret.c1;
    let t3 = ret.c0.mul_by_fp2(&line.c);

    let t2 = Fp6 { c0: line.b + line.c, c1: line.a, c2: Fp2::zero() };
    let c1 = (ret.c1 + ret.c0) * t2 - a2 - t3;
    let c0 = t3 + a2.mul_by_nonresidue();

    Fp12 { c0, c1 }
}

/// Raw Miller loop output f_{6u+2,Q}(P) with the two Frobenius correction lines.
///
/// Returns one when either input is the point at infinity.
#[instrument(level = "debug", skip_all)]
pub fn miller(q: &TwistPoint, p: &CurvePoint) -> Fp12 {
    if q.is_infinity() || p.is_infinity() {
        trace!("infinity input, miller loop is one");
        return Fp12::one();
    }

    let a = q.to_affine();
    let a = TwistPoint::from_affine(a.x, a.y);
    let p = p.to_affine();
    let minus_a = -a;
    let a_y2 = a.y.square();

    let mut ret = Fp12::one();
    let mut r = a;
    let len = SIX_U_PLUS_2_NAF.len();
    for i in (1..len).rev() {
        let (line, next) = line_double(&r, &p);
        if i != len - 1 {
            ret = ret.square();
        }
        ret = mul_line(&ret, &line);
        r = next;

        let addend = match SIX_U_PLUS_2_NAF[i - 1] {
            1 => &a,
            -1 => &minus_a,
            _ => continue,
        };
        let (line, next) = line_add(&r, addend, &p, &a_y2);
        ret = mul_line(&ret, &line);
        r = next;
    }

    // Q₁ = π(Q), untwisted and projected back
    let q1 = TwistPoint::from_affine(
        a.x.conjugate() * XI_TO_P_MINUS_1_OVER_3,
        a.y.conjugate() * XI_TO_P_MINUS_1_OVER_2,
    );
    // -Q₂ = -π²(Q); the y coordinate is unchanged since π² negates it
    let minus_q2 = TwistPoint::from_affine(a.x.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3), a.y);

    let (line, next) = line_add(&r, &q1, &p, &q1.y.square());
    ret = mul_line(&ret, &line);
    r = next;

    let (line, _) = line_add(&r, &minus_q2, &p, &minus_q2.y.square());
    mul_line(&ret, &line)
}

/// Raise a Miller loop output to (p¹² - 1)/n
#[instrument(level = "debug", skip_all)]
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    // easy part: f^((p⁶ - 1)(p² + 1))
    let inv = f.invert().unwrap_or(Fp12::zero());
    let mut t1 = f.conjugate() * inv;
    t1 = t1 * t1.frobenius_map_p2();

    // hard part
    let fp = t1.frobenius_map();
    let fp2 = t1.frobenius_map_p2();
    let fp3 = fp2.frobenius_map();

    let fu = t1.pow_vartime(&[BN_U]);
    let fu2 = fu.pow_vartime(&[BN_U]);
    let fu3 = fu2.pow_vartime(&[BN_U]);

    let y3 = fu.frobenius_map().conjugate();
    let fu2p = fu2.frobenius_map();
    let fu3p = fu3.frobenius_map();
    let y2 = fu2.frobenius_map_p2();

    let y0 = fp * fp2 * fp3;
    let y1 = t1.conjugate();
    let y5 = fu2.conjugate();
    let y4 = (fu * fu2p).conjugate();
    let y6 = (fu3 * fu3p).conjugate();

    let mut t0 = y6.square() * y4 * y5;
    let mut t1 = y3 * y5 * t0;
    t0 = t0 * y2;
    t1 = (t1.square() * t0).square();
    t0 = t1 * y1;
    t1 = t1 * y0;
    t0.square() * t1
}

/// The reduced pairing e(P, Q)
#[instrument(level = "debug", skip_all)]
pub fn pair(p: &CurvePoint, q: &TwistPoint) -> Fp12 {
    final_exponentiation(&miller(q, p))
}

/// Check ∏ e(Pᵢ, Qᵢ) = 1 with a single final exponentiation.
///
/// Pairs containing the point at infinity contribute one and are skipped.
#[instrument(level = "debug", skip_all)]
pub fn pairing_check<'a, I>(pairs: I) -> bool
where
    I: IntoIterator<Item = (&'a CurvePoint, &'a TwistPoint)>,
{
    let mut acc = Fp12::one();
    for (index, (p, q)) in pairs.into_iter().enumerate() {
        if p.is_infinity() || q.is_infinity() {
            trace!(index, "skipping pair with point at infinity");
            continue;
        }
        acc = acc * miller(q, p);
    }
    bool::from(final_exponentiation(&acc).is_one())
}
