#![allow(non_snake_case)]

use std::ffi::c_int;

/// Returns a negative library error code from a POSIX error number, as
/// native library functions do in their return values.
///
/// Replaces libavutil's `AVERROR` macro. Plain negation: the macro expands
/// to `-(e)` on every platform where `EDOM > 0`, which is all of them.
#[inline(always)]
pub const fn AVERROR(e: c_int) -> c_int {
    -e
}

/// Returns the POSIX error number back from a library return value.
///
/// Replaces libavutil's `AVUNERROR` macro. Inverse of [`AVERROR`].
#[inline(always)]
pub const fn AVUNERROR(e: c_int) -> c_int {
    -e
}
