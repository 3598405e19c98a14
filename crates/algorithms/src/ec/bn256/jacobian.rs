//! Jacobian point arithmetic shared by the base curve and the twist.
//!
//! Both curves have a = 0, so doubling and addition only differ in the
//! coordinate field. `impl_jacobian_point!` generates that common part for a
//! point struct with fields `x`, `y`, `z`, `t` over the given field; each
//! curve module adds its own constants, validity checks and `mul`.

macro_rules! impl_jacobian_point {
    ($point:ident, $field:ident) => {
        impl Default for $point {
            fn default() -> $point {
                $point::identity()
            }
        }

        #[cfg(feature = "zeroize")]
        impl zeroize::DefaultIsZeroes for $point {}

        impl core::fmt::Display for $point {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let a = self.to_affine();
                write!(f, "({:?}, {:?})", a.x, a.y)
            }
        }

        impl $point {
            /// Point at infinity (0, 1, 0, 0)
            pub const fn identity() -> $point {
                $point {
                    x: $field::zero(),
                    y: $field::one(),
                    z: $field::zero(),
                    t: $field::zero(),
                }
            }

            /// Affine point with Z = T = 1
            pub const fn from_affine(x: $field, y: $field) -> $point {
                $point { x, y, z: $field::one(), t: $field::one() }
            }

            /// Affine coordinates (x, y); infinity maps to (0, 1)
            pub fn coordinates(&self) -> ($field, $field) {
                let a = self.to_affine();
                (a.x, a.y)
            }

            /// Check for the point at infinity
            #[inline]
            pub fn is_infinity(&self) -> bool {
                bool::from(self.z.is_zero())
            }

            /// Enforce the infinity convention X = 0, Y = 1, T = 0 when Z = 0
            #[inline]
            fn normalize_infinity(self) -> $point {
                <$point as subtle::ConditionallySelectable>::conditional_select(
                    &self,
                    &$point::identity(),
                    self.z.is_zero(),
                )
            }

            /// Point doubling, dbl-2009-l
            pub fn double(&self) -> $point {
                let a = self.x.square();
                let b = self.y.square();
                let c = b.square();

                let d = ((self.x + b).square() - a - c).double();
                let e = a.double() + a;
                let f = e.square();

                let x3 = f - d.double();
                let c8 = c.double().double().double();
                let y3 = e * (d - x3) - c8;
                let z3 = (self.y * self.z).double();

                $point { x: x3, y: y3, z: z3, t: $field::zero() }.normalize_infinity()
            }

            /// Point addition, add-2007-bl, delegating to `double` for equal inputs
            pub fn add(&self, rhs: &$point) -> $point {
                if self.is_infinity() {
                    return *rhs;
                }
                if rhs.is_infinity() {
                    return *self;
                }

                let z12 = self.z.square();
                let z22 = rhs.z.square();
                let u1 = self.x * z22;
                let u2 = rhs.x * z12;
                let s1 = self.y * (rhs.z * z22);
                let s2 = rhs.y * (self.z * z12);

                let h = u2 - u1;
                let t = s2 - s1;
                if bool::from(h.is_zero() & t.is_zero()) {
                    return self.double();
                }

                let i = h.double().square();
                let j = h * i;
                let r = t.double();
                let v = u1 * i;
                let x3 = r.square() - j - v.double();
                let y3 = r * (v - x3) - (s1 * j).double();
                let z3 = ((self.z + rhs.z).square() - z12 - z22) * h;

                $point { x: x3, y: y3, z: z3, t: $field::zero() }.normalize_infinity()
            }

            /// Negation (X, -Y, Z), clearing T
            pub fn neg(&self) -> $point {
                $point {
                    x: self.x,
                    y: -self.y,
                    z: self.z,
                    t: $field::zero(),
                }
            }

            /// Normalize to Z = T = 1 with a single inversion; infinity becomes (0, 1, 0, 0)
            pub fn to_affine(&self) -> $point {
                if bool::from(self.z.is_one()) {
                    return *self;
                }
                match Option::<$field>::from(self.z.invert()) {
                    None => $point::identity(),
                    Some(z_inv) => {
                        let z_inv2 = z_inv.square();
                        $point {
                            x: self.x * z_inv2,
                            y: self.y * z_inv2 * z_inv,
                            z: $field::one(),
                            t: $field::one(),
                        }
                    }
                }
            }

            /// Plain binary double-and-add over the bits of k, most significant first
            pub(crate) fn mul_binary(&self, k: &num_bigint::BigUint) -> $point {
                let mut acc = $point::identity();
                for i in (0..k.bits()).rev() {
                    acc = acc.double();
                    if k.bit(i) {
                        acc = acc.add(self);
                    }
                }
                acc
            }
        }

        impl subtle::ConstantTimeEq for $point {
            /// Jacobian equality: X₁Z₂² = X₂Z₁² and Y₁Z₂³ = Y₂Z₁³
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                let x1 = self.x * z2z2;
                let x2 = other.x * z1z1;
                let y1 = self.y * z2z2 * other.z;
                let y2 = other.y * z1z1 * self.z;
                let self_is_zero = self.z.is_zero();
                let other_is_zero = other.z.is_zero();

                (self_is_zero & other_is_zero)
                    | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
            }
        }

        impl subtle::ConditionallySelectable for $point {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                $point {
                    x: $field::conditional_select(&a.x, &b.x, choice),
                    y: $field::conditional_select(&a.y, &b.y, choice),
                    z: $field::conditional_select(&a.z, &b.z, choice),
                    t: $field::conditional_select(&a.t, &b.t, choice),
                }
            }
        }

        impl Eq for $point {}
        impl PartialEq for $point {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(<$point as subtle::ConstantTimeEq>::ct_eq(self, other))
            }
        }

        impl<'a> core::ops::Neg for &'a $point {
            type Output = $point;

            #[inline]
            fn neg(self) -> $point {
                self.neg()
            }
        }

        impl core::ops::Neg for $point {
            type Output = $point;

            #[inline]
            fn neg(self) -> $point {
                -&self
            }
        }

        impl<'a, 'b> core::ops::Add<&'b $point> for &'a $point {
            type Output = $point;

            #[inline]
            fn add(self, rhs: &'b $point) -> $point {
                self.add(rhs)
            }
        }

        impl core::ops::Add<$point> for $point {
            type Output = $point;

            #[inline]
            fn add(self, rhs: $point) -> $point {
                &self + &rhs
            }
        }

        impl core::ops::AddAssign<$point> for $point {
            #[inline]
            fn add_assign(&mut self, rhs: $point) {
                *self = &*self + &rhs;
            }
        }

        impl<'a, 'b> core::ops::Mul<&'b num_bigint::BigUint> for &'a $point {
            type Output = $point;

            #[inline]
            fn mul(self, k: &'b num_bigint::BigUint) -> $point {
                self.mul(k)
            }
        }
    };
}
