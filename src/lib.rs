pub mod errno;
pub mod error;
pub mod tag;

pub use errno::{AVERROR, AVUNERROR};
pub use error::{AvError, Result, check, log_av_error};
pub use tag::*;
