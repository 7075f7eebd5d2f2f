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
/// Restores the full range sine from the reduced pair.
///
/// Octants 1, 2, 5, 6 take the cosine, and the sign flips when the octant
/// half `q & 4` disagrees with the sign of `x`. Both selections are bit masks.
#[inline(always)]
pub(crate) fn correct_quadrant(sine: f32, cosine: f32, q: i32, x: f32) -> f32 {
    let swap = (((q.wrapping_add(1) & 2) >> 1) as u32).wrapping_neg();
    let flip = ((((q & 4) >> 2) as u32) ^ ((x < 0.) as u32)).wrapping_neg();

    let sine = sine + f32::from_bits((cosine - sine).to_bits() & swap);
    sine - f32::from_bits((sine * 2.).to_bits() & flip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_octants() {
        for q in 0..8 {
            let v = correct_quadrant(0.25, 0.75, q, 1.);
            let swapped = matches!(q, 1 | 2 | 5 | 6);
            assert_eq!(v.abs(), if swapped { 0.75 } else { 0.25 }, "octant {q}");
        }
    }

    #[test]
    fn test_sign_octants() {
        for q in 0..8 {
            let positive = correct_quadrant(0.25, 0.75, q, 1.);
            let negative = correct_quadrant(0.25, 0.75, q, -1.);
            assert_eq!(positive.is_sign_negative(), q >= 4, "octant {q}");
            assert_eq!(negative, -positive, "octant {q}");
        }
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(correct_quadrant(f32::NAN, f32::NAN, 2, 1.).is_nan());
        assert!(correct_quadrant(f32::NAN, 0.5, 0, -1.).is_nan());
    }
}
