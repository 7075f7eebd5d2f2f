/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
#![allow(clippy::approx_constant)]
mod poly;
mod quadrant;
mod reduce;

pub(crate) use poly::half_angle_sincos;
pub(crate) use quadrant::correct_quadrant;
pub(crate) use reduce::reduce_octant;

/// 4/π
pub(crate) const M_4_PI: f32 = 1.273239545;
/// π/4 split into an 8 bit high part and the remainder.
///
/// `r * PIO4_A` is exact for every octant count a f32 argument can produce
/// below 2^16, so the first subtraction does not cancel.
pub(crate) const PIO4_A: f32 = 0.78515625;
pub(crate) const PIO4_B: f32 = 0.241876e-3;

// 2(1 - cos(x)) = x^2 - x^4/12 + x^6/360 - x^8/20160 + x^10/1814400
pub(crate) const SIN_C1: f32 = 1.0;
pub(crate) const SIN_C2: f32 = 0.83333333e-1;
pub(crate) const SIN_C3: f32 = 0.2777778e-2;
pub(crate) const SIN_C4: f32 = 0.49603e-4;
pub(crate) const SIN_C5: f32 = 0.551e-6;

#[inline(always)]
pub(crate) fn sinf_lane<const FMA: bool>(x: f32) -> f32 {
    let (s, q) = reduce_octant::<FMA>(x);
    let (sine, cosine) = half_angle_sincos::<FMA>(s);
    correct_quadrant(sine, cosine, q, x)
}

/// Sine using octant reduction and an angle doubling polynomial.
///
/// Absolute error stays below 1e-6 on [-4π, 4π] and grows with |x| since
/// reduction is done in single precision.
/// This is exactly one lane of the non FMA vector kernels.
#[inline]
pub fn approx_sinf(x: f32) -> f32 {
    sinf_lane::<false>(x)
}

/// Sine using octant reduction and an angle doubling polynomial, using FMA.
///
/// This is exactly one lane of the FMA vector kernels.
#[inline]
pub fn f_approx_sinf(x: f32) -> f32 {
    sinf_lane::<true>(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn reference(x: f32) -> f32 {
        (x as f64).sin() as f32
    }

    #[test]
    fn test_approx_sinf_boundaries() {
        for method in [approx_sinf, f_approx_sinf] {
            assert_eq!(method(0.), 0.);
            assert!((method(FRAC_PI_2) - 1.).abs() < 1e-6);
            assert!(method(PI).abs() < 1e-6);
            assert!((method(3. * FRAC_PI_2) + 1.).abs() < 1e-6);
            assert!((method(-FRAC_PI_2) + 1.).abs() < 1e-6);
        }
    }

    #[test]
    fn test_approx_sinf_dense_grid() {
        let samples = 100_000;
        for i in 0..=samples {
            let x = -4. * PI + 8. * PI * (i as f32 / samples as f32);
            let expected = reference(x);
            let diff = (approx_sinf(x) - expected).abs();
            assert!(diff < 1e-6, "sin({x}) = {expected}, got error {diff}");
            let diff = (f_approx_sinf(x) - expected).abs();
            assert!(diff < 1e-6, "fma sin({x}) = {expected}, got error {diff}");
        }
    }

    #[test]
    fn test_approx_sinf_odd_symmetry() {
        for i in 1..2000 {
            let x = i as f32 * 0.00613;
            assert_eq!(approx_sinf(-x), -approx_sinf(x));
            assert_eq!(f_approx_sinf(-x), -f_approx_sinf(x));
        }
    }

    #[test]
    fn test_approx_sinf_sign_follows_reference() {
        for i in 0..20_000 {
            let x = -4. * PI + i as f32 * 0.00125;
            let expected = reference(x);
            if expected.abs() > 1e-5 {
                assert_eq!(
                    approx_sinf(x).is_sign_negative(),
                    expected.is_sign_negative(),
                    "sign mismatch at {x}"
                );
            }
        }
    }

    #[test]
    fn test_approx_sinf_not_finite() {
        for method in [approx_sinf, f_approx_sinf] {
            assert!(method(f32::NAN).is_nan());
            assert!(method(f32::INFINITY).is_nan());
            assert!(method(f32::NEG_INFINITY).is_nan());
        }
    }

    #[test]
    fn test_approx_sinf_large_argument_is_bounded() {
        // Precision degrades, but the half angle form keeps the result in range
        for x in [1e4f32, -3.5e4, 123456.7, 1e6] {
            let v = approx_sinf(x);
            assert!(v.abs() <= 1.0, "sin({x}) = {v}");
        }
    }
}
