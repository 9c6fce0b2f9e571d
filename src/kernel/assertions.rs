// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Precondition checks for the predicate kernel.
//!
//! Checks run when `debug_assertions` are enabled or when the crate is built
//! with the `kernel-checks` feature. Otherwise they compile away, and a
//! violated precondition yields an unspecified (but well-formed) result.

/// Whether kernel checks are compiled in for this build.
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "kernel-checks"));

/// Checks a precondition of a predicate (e.g. non-parallel lines).
#[doc(hidden)]
#[macro_export]
macro_rules! kernel_precondition {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::kernel::assertions::CHECKS_ENABLED && !($cond) {
            panic!("kernel precondition violated: {}", format_args!($($arg)+));
        }
    };
}

/// Checks an internal invariant established by the predicate itself.
#[doc(hidden)]
#[macro_export]
macro_rules! kernel_assertion {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::kernel::assertions::CHECKS_ENABLED && !($cond) {
            panic!("kernel assertion failed: {}", format_args!($($arg)+));
        }
    };
}
