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
use crate::kernels::{SineGeneric, SineScalar};
use crate::{Alignment, SineError, SineIsa, SineVariant};
use std::sync::OnceLock;

/// Computes sine of a buffer with one fixed kernel.
pub trait SineExecutor {
    /// Writes sine of every `src` element into the head of `dst`.
    ///
    /// `dst` must be at least as long as `src`, elements past `src.len()` are left
    /// untouched. Aligned kernels additionally require both buffers to start at
    /// [SineVariant::required_alignment] bytes.
    fn execute(&self, dst: &mut [f32], src: &[f32]) -> Result<(), SineError>;
}

pub type SineF32Executor = dyn SineExecutor + Send + Sync;

#[inline]
pub(crate) fn check_buffers(dst: &[f32], src: &[f32], alignment: usize) -> Result<(), SineError> {
    if dst.len() < src.len() {
        return Err(SineError::LaneSizeMismatch);
    }
    // Nothing is loaded or stored
    if src.is_empty() {
        return Ok(());
    }
    if (src.as_ptr() as usize) % alignment != 0 || (dst.as_ptr() as usize) % alignment != 0 {
        return Err(SineError::MisalignedBuffer {
            required: alignment,
        });
    }
    Ok(())
}

macro_rules! select_kernel {
    ($kernel:ident, $variant:expr) => {{
        let executor: &'static SineF32Executor = match ($variant.fma, $variant.alignment) {
            (true, Alignment::Aligned) => &$kernel::<true, true>,
            (true, Alignment::Unaligned) => &$kernel::<true, false>,
            (false, Alignment::Aligned) => &$kernel::<false, true>,
            (false, Alignment::Unaligned) => &$kernel::<false, false>,
        };
        executor
    }};
}

/// Returns the kernel for `variant`.
///
/// Kernels are stateless, so the same static instance serves every caller and thread.
pub fn make_sine_executor(variant: SineVariant) -> Result<&'static SineF32Executor, SineError> {
    if !variant.is_supported() {
        tracing::warn!(%variant, "sine kernel is not supported on this build or CPU");
        return Err(SineError::UnsupportedVariant(variant));
    }
    let executor: &'static SineF32Executor = match variant.isa {
        SineIsa::Generic => &SineGeneric,
        SineIsa::Scalar => select_kernel!(SineScalar, variant),
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        SineIsa::Sse41 => {
            use crate::kernels::SineSse41;
            select_kernel!(SineSse41, variant)
        }
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        SineIsa::Avx2 => {
            use crate::kernels::SineAvx2;
            select_kernel!(SineAvx2, variant)
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
        SineIsa::Neon => {
            use crate::kernels::SineNeon;
            select_kernel!(SineNeon, variant)
        }
        #[allow(unreachable_patterns)]
        _ => return Err(SineError::UnsupportedVariant(variant)),
    };
    tracing::debug!(
        %variant,
        lanes = variant.lanes(),
        "sine kernel selected"
    );
    Ok(executor)
}

/// Computes sine of `src` into `dst` with the widest kernel this CPU supports.
///
/// Buffers may have any alignment, `dst` must be at least as long as `src`.
///
/// # Example
///
/// ```
/// let src = [0f32, std::f32::consts::FRAC_PI_2, std::f32::consts::PI];
/// let mut dst = [0f32; 3];
/// vsinf::sinf_slice(&mut dst, &src).unwrap();
/// assert!((dst[1] - 1.).abs() < 1e-6);
/// ```
pub fn sinf_slice(dst: &mut [f32], src: &[f32]) -> Result<(), SineError> {
    best_executor()?.execute(dst, src)
}

/// Resolves the widest unaligned kernel once per process.
fn best_executor() -> Result<&'static SineF32Executor, SineError> {
    static BEST: OnceLock<&'static SineF32Executor> = OnceLock::new();
    if let Some(&executor) = BEST.get() {
        return Ok(executor);
    }
    let executor = make_sine_executor(SineVariant::best(Alignment::Unaligned))?;
    Ok(*BEST.get_or_init(|| executor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::seq::SliceRandom;
    use std::f32::consts::{FRAC_PI_2, PI};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const COUNTS: [usize; 9] = [0, 1, 3, 4, 7, 8, 9, 33, 4096 + 3];

    /// Slice of `count` elements starting at a 32 byte boundary.
    fn aligned_slice(storage: &mut Vec<f32>, count: usize) -> &mut [f32] {
        storage.clear();
        storage.resize(count + 8, 0.);
        let offset = storage.as_ptr().align_offset(32);
        &mut storage[offset..offset + count]
    }

    fn random_input(count: usize) -> Vec<f32> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| rng.random_range(-4. * PI..4. * PI))
            .collect()
    }

    fn run(variant: SineVariant, src: &[f32]) -> Vec<f32> {
        let mut src_storage = Vec::new();
        let mut dst_storage = Vec::new();
        let aligned_src = aligned_slice(&mut src_storage, src.len());
        aligned_src.copy_from_slice(src);
        let dst = aligned_slice(&mut dst_storage, src.len());
        make_sine_executor(variant)
            .unwrap()
            .execute(dst, aligned_src)
            .unwrap();
        dst.to_vec()
    }

    #[test]
    fn test_every_variant_matches_reference_on_grid() {
        let samples = 20_000;
        let src: Vec<f32> = (0..=samples)
            .map(|i| -4. * PI + 8. * PI * (i as f32 / samples as f32))
            .collect();
        for variant in SineVariant::available() {
            let dst = run(variant, &src);
            for (&v, &x) in dst.iter().zip(src.iter()) {
                let expected = (x as f64).sin() as f32;
                assert!(
                    (v - expected).abs() < 1e-6,
                    "{variant}: sin({x}) = {expected}, got {v}"
                );
            }
        }
    }

    #[test]
    fn test_variants_agree_with_generic_for_any_count() {
        for count in COUNTS {
            let src = random_input(count);
            let reference = run(SineVariant::generic(), &src);
            for variant in SineVariant::available() {
                let dst = run(variant, &src);
                assert_eq!(dst.len(), count);
                for (i, (&v, &r)) in dst.iter().zip(reference.iter()).enumerate() {
                    assert!(
                        (v - r).abs() < 1e-6,
                        "{variant} count {count} index {i}: {v} vs {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_aligned_and_unaligned_are_identical() {
        let src = random_input(4096 + 5);
        for variant in SineVariant::available() {
            if variant.alignment != Alignment::Aligned {
                continue;
            }
            let unaligned = SineVariant::new(variant.isa, variant.fma, Alignment::Unaligned);
            assert_eq!(run(variant, &src), run(unaligned, &src), "{variant}");
        }
    }

    #[test]
    fn test_unaligned_accepts_offset_buffers() {
        let src = random_input(131);
        for variant in SineVariant::available() {
            if variant.alignment == Alignment::Aligned {
                continue;
            }
            let expected = run(variant, &src[1..]);
            let mut dst = vec![0f32; 131];
            make_sine_executor(variant)
                .unwrap()
                .execute(&mut dst[1..], &src[1..])
                .unwrap();
            assert_eq!(&dst[1..], expected.as_slice(), "{variant}");
        }
    }

    #[test]
    fn test_elementwise_independence() {
        let src = random_input(1027);
        let mut order: Vec<usize> = (0..src.len()).collect();
        order.shuffle(&mut rand::rng());
        let permuted: Vec<f32> = order.iter().map(|&i| src[i]).collect();
        for variant in SineVariant::available() {
            let straight = run(variant, &src);
            let shuffled = run(variant, &permuted);
            for (j, &i) in order.iter().enumerate() {
                // Lanes and tail may differ, but only through the element's own value
                let tolerance = if variant.isa == SineIsa::Generic { 0. } else { 1e-6 };
                assert!(
                    (shuffled[j] - straight[i]).abs() <= tolerance,
                    "{variant}: {} vs {}",
                    shuffled[j],
                    straight[i]
                );
            }
        }
    }

    #[test]
    fn test_boundaries() {
        let src = [0., FRAC_PI_2, PI, 3. * FRAC_PI_2, -FRAC_PI_2, 0., 0., 0., 0.];
        let expected = [0., 1., 0., -1., -1., 0., 0., 0., 0.];
        for variant in SineVariant::available() {
            let dst = run(variant, &src);
            for (&v, &e) in dst.iter().zip(expected.iter()) {
                assert!((v - e).abs() < 1e-6, "{variant}: {v} vs {e}");
            }
        }
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        for variant in SineVariant::available() {
            let mut dst = [7f32; 8];
            make_sine_executor(variant)
                .unwrap()
                .execute(&mut dst[..0], &[])
                .unwrap();
            assert_eq!(dst, [7f32; 8]);
        }
    }

    #[test]
    fn test_longer_destination_keeps_tail() {
        let mut src_storage = Vec::new();
        let src = aligned_slice(&mut src_storage, 19);
        src.copy_from_slice(&random_input(19));
        let mut dst_storage = Vec::new();
        for variant in SineVariant::available() {
            let dst = aligned_slice(&mut dst_storage, 40);
            dst.fill(7.);
            make_sine_executor(variant)
                .unwrap()
                .execute(dst, src)
                .unwrap();
            assert!(dst[19..].iter().all(|&x| x == 7.), "{variant}");
        }
    }

    #[test]
    fn test_short_destination_rejected() {
        let src = [0.5f32; 9];
        let mut dst = [0f32; 8];
        for variant in SineVariant::available() {
            assert_eq!(
                make_sine_executor(variant)
                    .unwrap()
                    .execute(&mut dst, &src),
                Err(SineError::LaneSizeMismatch),
                "{variant}"
            );
        }
    }

    #[test]
    fn test_misaligned_rejected_by_aligned_kernels() {
        let mut src_storage = Vec::new();
        let mut dst_storage = Vec::new();
        let src = aligned_slice(&mut src_storage, 65);
        let dst = aligned_slice(&mut dst_storage, 65);
        for variant in SineVariant::available() {
            let required = variant.required_alignment();
            if required <= align_of::<f32>() {
                continue;
            }
            assert_eq!(
                make_sine_executor(variant)
                    .unwrap()
                    .execute(&mut dst[1..], &src[1..]),
                Err(SineError::MisalignedBuffer { required }),
                "{variant}"
            );
        }
    }

    #[test]
    fn test_not_finite_inputs_give_nan() {
        let src = [
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
        ];
        for variant in SineVariant::available() {
            let dst = run(variant, &src);
            assert!(dst.iter().all(|x| x.is_nan()), "{variant}: {dst:?}");
        }
    }

    #[test]
    fn test_unsupported_variant_rejected() {
        for variant in SineVariant::all() {
            if !variant.is_supported() {
                assert!(matches!(
                    make_sine_executor(variant),
                    Err(SineError::UnsupportedVariant(v)) if v == variant
                ));
            }
        }
    }

    struct CountingSubscriber(Arc<AtomicUsize>);

    impl tracing::Subscriber for CountingSubscriber {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_sinf_slice_logs_selection_once() {
        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = CountingSubscriber(events.clone());
        tracing::subscriber::with_default(subscriber, || {
            make_sine_executor(SineVariant::generic()).unwrap();
            assert_eq!(events.load(Ordering::Relaxed), 1);

            let src = random_input(64);
            let mut dst = vec![0f32; 64];
            for _ in 0..1000 {
                sinf_slice(&mut dst, &src).unwrap();
            }
        });
        // The best kernel may already be cached by another test
        assert!(events.load(Ordering::Relaxed) <= 2);
    }

    #[test]
    fn test_sinf_slice() {
        let src = random_input(1000);
        let mut dst = vec![0f32; 1000];
        sinf_slice(&mut dst, &src).unwrap();
        for (&v, &x) in dst.iter().zip(src.iter()) {
            assert!((v - (x as f64).sin() as f32).abs() < 1e-6);
        }
    }
}
