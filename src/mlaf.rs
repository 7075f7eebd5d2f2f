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
use num_traits::MulAdd;
use std::ops::{Add, Mul, Neg, Sub};

/// Computes `acc + a * b`, in one rounding when `FMA` is set.
#[inline(always)]
pub(crate) fn mlaf<
    const FMA: bool,
    T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T>,
>(
    acc: T,
    a: T,
    b: T,
) -> T {
    if FMA {
        MulAdd::mul_add(a, b, acc)
    } else {
        acc + a * b
    }
}

/// Computes `acc - a * b`, in one rounding when `FMA` is set.
#[inline(always)]
pub(crate) fn neg_mlaf<
    const FMA: bool,
    T: Copy + Mul<T, Output = T> + Sub<T, Output = T> + Neg<Output = T> + MulAdd<T, Output = T>,
>(
    acc: T,
    a: T,
    b: T,
) -> T {
    if FMA {
        MulAdd::mul_add(-a, b, acc)
    } else {
        acc - a * b
    }
}

/// Computes `a * b - acc`, in one rounding when `FMA` is set.
#[inline(always)]
pub(crate) fn mlsf<
    const FMA: bool,
    T: Copy + Mul<T, Output = T> + Sub<T, Output = T> + Neg<Output = T> + MulAdd<T, Output = T>,
>(
    acc: T,
    a: T,
    b: T,
) -> T {
    if FMA {
        MulAdd::mul_add(a, b, -acc)
    } else {
        a * b - acc
    }
}
