//! libavutil's private error codes: negated four-byte tags, kept outside
//! the POSIX errno space so the two never collide.

#![allow(non_snake_case)]

use std::ffi::c_int;

/// Equivalent of libavutil's `MKTAG` macro (little-endian byte pack).
#[inline(always)]
pub const fn MKTAG(tag: &[u8; 4]) -> u32 {
    (tag[0] as u32) | ((tag[1] as u32) << 8) | ((tag[2] as u32) << 16) | ((tag[3] as u32) << 24)
}

/// Equivalent of libavutil's `FFERRTAG` macro: a negated [`MKTAG`].
#[inline(always)]
pub const fn FFERRTAG(tag: &[u8; 4]) -> c_int {
    -(MKTAG(tag) as c_int)
}

/// Bitstream filter not found
pub const AVERROR_BSF_NOT_FOUND: c_int = FFERRTAG(b"\xF8BSF");
/// Internal bug, also see AVERROR_BUG2
pub const AVERROR_BUG: c_int = FFERRTAG(b"BUG!");
/// Buffer too small
pub const AVERROR_BUFFER_TOO_SMALL: c_int = FFERRTAG(b"BUFS");
/// Decoder not found
pub const AVERROR_DECODER_NOT_FOUND: c_int = FFERRTAG(b"\xF8DEC");
/// Demuxer not found
pub const AVERROR_DEMUXER_NOT_FOUND: c_int = FFERRTAG(b"\xF8DEM");
/// Encoder not found
pub const AVERROR_ENCODER_NOT_FOUND: c_int = FFERRTAG(b"\xF8ENC");
/// End of file
pub const AVERROR_EOF: c_int = FFERRTAG(b"EOF ");
/// Immediate exit was requested; the called function should not be restarted
pub const AVERROR_EXIT: c_int = FFERRTAG(b"EXIT");
/// Generic error in an external library
pub const AVERROR_EXTERNAL: c_int = FFERRTAG(b"EXT ");
/// Filter not found
pub const AVERROR_FILTER_NOT_FOUND: c_int = FFERRTAG(b"\xF8FIL");
/// Invalid data found when processing input
pub const AVERROR_INVALIDDATA: c_int = FFERRTAG(b"INDA");
/// Muxer not found
pub const AVERROR_MUXER_NOT_FOUND: c_int = FFERRTAG(b"\xF8MUX");
/// Option not found
pub const AVERROR_OPTION_NOT_FOUND: c_int = FFERRTAG(b"\xF8OPT");
/// Not yet implemented in FFmpeg, patches welcome
pub const AVERROR_PATCHWELCOME: c_int = FFERRTAG(b"PAWE");
/// Protocol not found
pub const AVERROR_PROTOCOL_NOT_FOUND: c_int = FFERRTAG(b"\xF8PRO");
/// Stream not found
pub const AVERROR_STREAM_NOT_FOUND: c_int = FFERRTAG(b"\xF8STR");
/// Semantically identical to AVERROR_BUG; introduced in Libav with a
/// modified value.
pub const AVERROR_BUG2: c_int = FFERRTAG(b"BUG ");
/// Unknown error, typically from an external library
pub const AVERROR_UNKNOWN: c_int = FFERRTAG(b"UNKN");
/// Requested feature is flagged experimental. Set strict_std_compliance if
/// you really want to use it.
pub const AVERROR_EXPERIMENTAL: c_int = -0x2bb2afa8;
/// Input changed between calls. Reconfiguration is required. (can be OR-ed
/// with AVERROR_OUTPUT_CHANGED)
pub const AVERROR_INPUT_CHANGED: c_int = -0x636e6701;
/// Output changed between calls. Reconfiguration is required. (can be OR-ed
/// with AVERROR_INPUT_CHANGED)
pub const AVERROR_OUTPUT_CHANGED: c_int = -0x636e6702;

/* HTTP & RTSP errors */
pub const AVERROR_HTTP_BAD_REQUEST: c_int = FFERRTAG(b"\xF8400");
pub const AVERROR_HTTP_UNAUTHORIZED: c_int = FFERRTAG(b"\xF8401");
pub const AVERROR_HTTP_FORBIDDEN: c_int = FFERRTAG(b"\xF8403");
pub const AVERROR_HTTP_NOT_FOUND: c_int = FFERRTAG(b"\xF8404");
pub const AVERROR_HTTP_TOO_MANY_REQUESTS: c_int = FFERRTAG(b"\xF8429");
pub const AVERROR_HTTP_OTHER_4XX: c_int = FFERRTAG(b"\xF84XX");
pub const AVERROR_HTTP_SERVER_ERROR: c_int = FFERRTAG(b"\xF85XX");
