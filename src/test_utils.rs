//! Shared constructors for unit tests.

#![allow(clippy::expect_used)]

use crate::wizard::FileUpload;
use crate::{CalendarDate, FixedClock, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn month(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).expect("test month should be valid")
}

pub fn fixed_clock(year: u16, month: u8, day: u8) -> FixedClock {
    FixedClock::new(date(year, month, day))
}

/// Minimal PNG header; enough for signature sniffing
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

/// Minimal JPEG SOI marker
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10];

pub fn png_upload(name: &str) -> FileUpload {
    FileUpload::new(name, "image/png", PNG_BYTES.to_vec())
}

pub fn jpeg_upload(name: &str) -> FileUpload {
    FileUpload::new(name, "image/jpeg", JPEG_BYTES.to_vec())
}

pub fn text_upload(name: &str) -> FileUpload {
    FileUpload::new(name, "text/plain", b"not an image".to_vec())
}
