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
use crate::math::{SIN_C1, SIN_C2, SIN_C3, SIN_C4, SIN_C5};
use crate::mlaf::{mlaf, mlsf};

/// Computes `(|sin s|, cos s)` for a reduced angle.
///
/// The series is evaluated for `s/8`, giving `2(1 - cos(s/8))`, and then
/// `v * (4 - v)` maps `2(1 - cos θ)` to `2(1 - cos 2θ)`, three times.
#[inline(always)]
pub(crate) fn half_angle_sincos<const FMA: bool>(s: f32) -> (f32, f32) {
    let s = s / 8.;
    let t = s * s;

    let mut p = mlsf::<FMA, f32>(SIN_C4, t, SIN_C5);
    p = mlaf::<FMA, f32>(SIN_C3, p, t);
    p = mlsf::<FMA, f32>(SIN_C2, p, t);
    p = mlaf::<FMA, f32>(SIN_C1, p, t);
    let mut v = p * t;

    for _ in 0..3 {
        v *= 4. - v;
    }
    // 1 - cos s
    v /= 2.;

    let sine = ((2. - v) * v).sqrt();
    let cosine = 1. - v;
    (sine, cosine)
}
