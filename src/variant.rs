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
use std::fmt::{Display, Formatter};

/// Instruction set a sine kernel is written for.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SineIsa {
    /// `f32::sin` for every element, no polynomial at all.
    Generic,
    /// The polynomial pipeline one element at a time, available everywhere.
    Scalar,
    /// 4 lanes of SSE4.1
    Sse41,
    /// 4 lanes of NEON
    Neon,
    /// 8 lanes of AVX2
    Avx2,
}

impl SineIsa {
    /// Count of elements processed by one vector step.
    #[inline]
    pub const fn lanes(self) -> usize {
        match self {
            SineIsa::Generic => 1,
            SineIsa::Scalar => 1,
            SineIsa::Sse41 => 4,
            SineIsa::Neon => 4,
            SineIsa::Avx2 => 8,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            SineIsa::Generic => "generic",
            SineIsa::Scalar => "scalar",
            SineIsa::Sse41 => "sse4_1",
            SineIsa::Neon => "neon",
            SineIsa::Avx2 => "avx2",
        }
    }
}

/// Declares which load/store form a kernel uses.
///
/// This never changes the results, only the precondition on buffer addresses.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Alignment {
    /// Both buffers start at a multiple of the vector width in bytes.
    Aligned,
    #[default]
    Unaligned,
}

/// One self-contained sine kernel configuration.
///
/// `fma` changes intermediate rounding and is therefore observable,
/// `alignment` is not. Neither applies to [SineIsa::Generic].
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct SineVariant {
    pub isa: SineIsa,
    pub fma: bool,
    pub alignment: Alignment,
}

const ISAS: [SineIsa; 4] = [SineIsa::Scalar, SineIsa::Sse41, SineIsa::Neon, SineIsa::Avx2];

impl SineVariant {
    /// Builds a variant, [SineIsa::Generic] always collapses to [SineVariant::generic].
    pub const fn new(isa: SineIsa, fma: bool, alignment: Alignment) -> SineVariant {
        match isa {
            SineIsa::Generic => SineVariant {
                isa,
                fma: false,
                alignment: Alignment::Unaligned,
            },
            _ => SineVariant {
                isa,
                fma,
                alignment,
            },
        }
    }

    pub const fn generic() -> SineVariant {
        SineVariant {
            isa: SineIsa::Generic,
            fma: false,
            alignment: Alignment::Unaligned,
        }
    }

    #[inline]
    pub const fn lanes(self) -> usize {
        self.isa.lanes()
    }

    /// Byte alignment both buffers must satisfy.
    #[inline]
    pub const fn required_alignment(self) -> usize {
        match (self.isa, self.alignment) {
            (SineIsa::Generic, _) | (_, Alignment::Unaligned) => align_of::<f32>(),
            (isa, Alignment::Aligned) => isa.lanes() * size_of::<f32>(),
        }
    }

    /// Every distinct configuration this crate knows about, supported or not.
    pub fn all() -> Vec<SineVariant> {
        let mut variants = vec![SineVariant::generic()];
        for isa in ISAS {
            for fma in [false, true] {
                for alignment in [Alignment::Aligned, Alignment::Unaligned] {
                    variants.push(SineVariant::new(isa, fma, alignment));
                }
            }
        }
        variants
    }

    /// Configurations that can be executed by this build on this CPU.
    pub fn available() -> Vec<SineVariant> {
        SineVariant::all()
            .into_iter()
            .filter(|x| x.is_supported())
            .collect()
    }

    /// The widest supported vector kernel for the given alignment, preferring FMA.
    ///
    /// Falls back to [SineVariant::generic] when no vector kernel can run.
    pub fn best(alignment: Alignment) -> SineVariant {
        ISAS.iter()
            .rev()
            .filter(|&&isa| isa != SineIsa::Scalar)
            .flat_map(|&isa| {
                [true, false]
                    .into_iter()
                    .map(move |fma| SineVariant::new(isa, fma, alignment))
            })
            .find(|x| x.is_supported())
            .unwrap_or(SineVariant::generic())
    }

    /// Checks that the kernel is compiled in and that the CPU can run it.
    pub fn is_supported(self) -> bool {
        match self.isa {
            SineIsa::Generic | SineIsa::Scalar => true,
            SineIsa::Sse41 => sse41_supported(self.fma),
            SineIsa::Avx2 => avx2_supported(self.fma),
            SineIsa::Neon => cfg!(all(
                target_arch = "aarch64",
                target_feature = "neon",
                feature = "neon"
            )),
        }
    }
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
fn sse41_supported(fma: bool) -> bool {
    std::arch::is_x86_feature_detected!("sse4.1")
        && (!fma || std::arch::is_x86_feature_detected!("fma"))
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse")))]
fn sse41_supported(_: bool) -> bool {
    false
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
fn avx2_supported(fma: bool) -> bool {
    std::arch::is_x86_feature_detected!("avx2")
        && (!fma || std::arch::is_x86_feature_detected!("fma"))
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx")))]
fn avx2_supported(_: bool) -> bool {
    false
}

impl Display for SineVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.isa == SineIsa::Generic {
            return f.write_str(self.isa.name());
        }
        let prefix = match self.alignment {
            Alignment::Aligned => "a",
            Alignment::Unaligned => "u",
        };
        f.write_fmt(format_args!("{prefix}_{}", self.isa.name()))?;
        if self.fma {
            f.write_str("_fma")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_variants_distinct() {
        let all = SineVariant::all();
        assert_eq!(all.len(), 1 + 4 * 2 * 2);
        let names: HashSet<String> = all.iter().map(|x| x.to_string()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_names() {
        assert_eq!(SineVariant::generic().to_string(), "generic");
        assert_eq!(
            SineVariant::new(SineIsa::Avx2, true, Alignment::Aligned).to_string(),
            "a_avx2_fma"
        );
        assert_eq!(
            SineVariant::new(SineIsa::Sse41, false, Alignment::Unaligned).to_string(),
            "u_sse4_1"
        );
    }

    #[test]
    fn test_generic_ignores_fma_and_alignment() {
        for fma in [false, true] {
            for alignment in [Alignment::Aligned, Alignment::Unaligned] {
                let variant = SineVariant::new(SineIsa::Generic, fma, alignment);
                assert_eq!(variant, SineVariant::generic());
                assert_eq!(variant.to_string(), "generic");
            }
        }
        let mut set = HashSet::new();
        set.insert(SineVariant::generic());
        assert!(set.contains(&SineVariant::new(SineIsa::Generic, true, Alignment::Aligned)));
    }

    #[test]
    fn test_required_alignment() {
        assert_eq!(
            SineVariant::new(SineIsa::Avx2, false, Alignment::Aligned).required_alignment(),
            32
        );
        assert_eq!(
            SineVariant::new(SineIsa::Sse41, true, Alignment::Aligned).required_alignment(),
            16
        );
        assert_eq!(
            SineVariant::new(SineIsa::Avx2, false, Alignment::Unaligned).required_alignment(),
            4
        );
        assert_eq!(SineVariant::generic().required_alignment(), 4);
    }

    #[test]
    fn test_available_always_has_portable() {
        let available = SineVariant::available();
        assert!(available.contains(&SineVariant::generic()));
        for fma in [false, true] {
            for alignment in [Alignment::Aligned, Alignment::Unaligned] {
                assert!(available.contains(&SineVariant::new(SineIsa::Scalar, fma, alignment)));
            }
        }
    }

    #[test]
    fn test_best_is_supported_and_widest() {
        for alignment in [Alignment::Aligned, Alignment::Unaligned] {
            let best = SineVariant::best(alignment);
            assert!(best.is_supported());
            if best.isa != SineIsa::Generic {
                assert_eq!(best.alignment, alignment);
            }
            for other in SineVariant::available() {
                assert!(other.lanes() <= best.lanes());
            }
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    #[test]
    fn test_x86_kernels_unsupported_elsewhere() {
        assert!(!SineVariant::new(SineIsa::Avx2, false, Alignment::Unaligned).is_supported());
        assert!(!SineVariant::new(SineIsa::Sse41, false, Alignment::Unaligned).is_supported());
    }
}
