use crate::errno::AVERROR;
use crate::error::{AvError, check};
use crate::tag;

#[test]
fn test_check_passes_non_negative_through() {
    assert_eq!(check(0).unwrap(), 0);
    assert_eq!(check(42).unwrap(), 42);
}

#[test]
fn test_check_wraps_negative_codes() {
    let err = check(AVERROR(libc::EAGAIN)).unwrap_err();
    assert_eq!(err, AvError::EAGAIN);
    assert_eq!(err.errno(), libc::EAGAIN);
    assert_eq!(err.code(), -libc::EAGAIN);
}

#[test]
fn test_known_codes_match_native_values() {
    assert_eq!(AvError::EOF.code(), ffmpeg_sys_next::AVERROR_EOF);
    assert_eq!(AvError::INVALIDDATA.code(), ffmpeg_sys_next::AVERROR_INVALIDDATA);
    assert_eq!(AvError::UNKNOWN.code(), ffmpeg_sys_next::AVERROR_UNKNOWN);
    assert_eq!(AvError::EAGAIN.code(), AVERROR(libc::EAGAIN));
}

#[test]
fn test_message_is_non_empty_for_known_codes() {
    let known = [
        AvError::EAGAIN,
        AvError::EINVAL,
        AvError::ENOMEM,
        AvError::EOF,
        AvError::INVALIDDATA,
        AvError::UNKNOWN,
    ];
    for err in known {
        let msg = err.message();
        assert!(!msg.is_empty(), "no message for code {}", err.code());
    }
}

#[test]
fn test_display_includes_code() {
    let rendered = AvError::EOF.to_string();
    assert!(
        rendered.contains(&format!("code {}", tag::AVERROR_EOF)),
        "unexpected rendering: {}",
        rendered
    );
}

#[test]
fn test_from_raw_code() {
    let err: AvError = tag::AVERROR_EOF.into();
    assert_eq!(err, AvError::EOF);
}

#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(AvError::UNKNOWN);
    assert!(!err.to_string().is_empty());
}
