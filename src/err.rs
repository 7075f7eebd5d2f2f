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
use crate::SineVariant;
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SineError {
    /// Destination holds fewer samples than the source.
    LaneSizeMismatch,
    /// Aligned kernel received a buffer not aligned to `required` bytes.
    MisalignedBuffer { required: usize },
    /// Kernel is not compiled in or the CPU lacks the instruction set.
    UnsupportedVariant(SineVariant),
}

impl Display for SineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SineError::LaneSizeMismatch => {
                f.write_str("Destination must be at least as long as the source")
            }
            SineError::MisalignedBuffer { required } => {
                f.write_fmt(format_args!("Buffers must be aligned to {required} bytes"))
            }
            SineError::UnsupportedVariant(variant) => f.write_fmt(format_args!(
                "Variant {variant} is not supported on this build or CPU"
            )),
        }
    }
}

impl Error for SineError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, SineIsa};

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SineError::MisalignedBuffer { required: 32 }.to_string(),
            "Buffers must be aligned to 32 bytes"
        );
        let variant = SineVariant::new(SineIsa::Avx2, true, Alignment::Aligned);
        assert_eq!(
            SineError::UnsupportedVariant(variant).to_string(),
            "Variant a_avx2_fma is not supported on this build or CPU"
        );
    }
}
