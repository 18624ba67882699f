//! Error type over libavutil's negative return-code convention.

use std::ffi::{CStr, c_int};
use std::fmt;

use crate::errno::{AVERROR, AVUNERROR};
use crate::tag;

pub type Result<T> = std::result::Result<T, AvError>;

/// A raw libavutil error code, as returned by native library functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvError {
    code: c_int,
}

impl AvError {
    /// Resource temporarily unavailable
    pub const EAGAIN: AvError = AvError::new(AVERROR(libc::EAGAIN));
    /// Invalid argument
    pub const EINVAL: AvError = AvError::new(AVERROR(libc::EINVAL));
    /// Cannot allocate memory
    pub const ENOMEM: AvError = AvError::new(AVERROR(libc::ENOMEM));
    /// End of file
    pub const EOF: AvError = AvError::new(tag::AVERROR_EOF);
    /// Invalid data found when processing input
    pub const INVALIDDATA: AvError = AvError::new(tag::AVERROR_INVALIDDATA);
    /// Unknown error, typically from an external library
    pub const UNKNOWN: AvError = AvError::new(tag::AVERROR_UNKNOWN);

    pub const fn new(code: c_int) -> Self {
        Self { code }
    }

    /// Raw negative code in the library's return-value convention.
    pub const fn code(&self) -> c_int {
        self.code
    }

    /// The POSIX error number this code encodes. Only meaningful for codes
    /// in the negated-errno space, not for tags like [`tag::AVERROR_EOF`].
    pub const fn errno(&self) -> c_int {
        AVUNERROR(self.code)
    }

    /// Description from `av_strerror`; the raw code when the library has
    /// none.
    pub fn message(&self) -> String {
        const BUF_SIZE: usize = ffmpeg_sys_next::AV_ERROR_MAX_STRING_SIZE as usize;
        let mut buf = [0 as libc::c_char; BUF_SIZE];
        let ret = unsafe { ffmpeg_sys_next::av_strerror(self.code, buf.as_mut_ptr(), BUF_SIZE) };
        if ret < 0 {
            return format!("ffmpeg error {}", self.code);
        }
        unsafe { CStr::from_ptr(buf.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for AvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message(), self.code)
    }
}

impl std::error::Error for AvError {}

impl From<c_int> for AvError {
    fn from(code: c_int) -> Self {
        AvError::new(code)
    }
}

/// Translates a native return value: negative codes become errors, zero and
/// positive results pass through unchanged.
pub fn check(ret: c_int) -> Result<c_int> {
    if ret < 0 {
        Err(AvError::new(ret))
    } else {
        Ok(ret)
    }
}

/// Logs a library error with the operation that produced it, e.g.
/// `log_av_error(&err, "avformat_open_input")`.
pub fn log_av_error(err: &AvError, context: &str) {
    log::error!("{}: {} (code {})", context, err.message(), err.code());
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
