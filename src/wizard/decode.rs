//! Turning uploaded files into displayable images.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::prelude::*;
use crate::wizard::FileUpload;

/// Image container formats the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[display(fmt = "png")]
    Png,
    #[display(fmt = "jpeg")]
    Jpeg,
    #[display(fmt = "gif")]
    Gif,
    #[display(fmt = "webp")]
    WebP,
}

impl ImageFormat {
    /// Identifies a format from its leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(Self::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::WebP),
            _ => None,
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }
}

/// A decoded photo ready for the preview grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{name} is empty")]
    Empty { name: String },

    #[error("{name} is not a recognised image")]
    UnrecognisedFormat { name: String },
}

/// Decodes one upload.
///
/// Completions of a batch may arrive in any order; the photo collection is
/// written so that the order does not matter.
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, file: &FileUpload) -> Result<DecodedImage, DecodeError>;
}

/// Accepts any file whose content starts with a known image signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureDecoder;

#[async_trait]
impl ImageDecoder for SignatureDecoder {
    async fn decode(&self, file: &FileUpload) -> Result<DecodedImage, DecodeError> {
        if file.bytes().is_empty() {
            return Err(DecodeError::Empty {
                name: file.name().to_string(),
            });
        }
        let format =
            ImageFormat::sniff(file.bytes()).ok_or_else(|| DecodeError::UnrecognisedFormat {
                name: file.name().to_string(),
            })?;
        Ok(DecodedImage {
            format,
            bytes: Arc::clone(file.shared_bytes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::test_utils::{JPEG_BYTES, PNG_BYTES, png_upload};

    #[test]
    fn test_sniff_cases() {
        struct TestCase {
            bytes: &'static [u8],
            expected: Option<ImageFormat>,
        }

        let cases = [
            TestCase {
                bytes: PNG_BYTES,
                expected: Some(ImageFormat::Png),
            },
            TestCase {
                bytes: JPEG_BYTES,
                expected: Some(ImageFormat::Jpeg),
            },
            TestCase {
                bytes: b"GIF89a\x01\x00",
                expected: Some(ImageFormat::Gif),
            },
            TestCase {
                bytes: b"RIFF\x24\x00\x00\x00WEBPVP8 ",
                expected: Some(ImageFormat::WebP),
            },
            TestCase {
                bytes: b"RIFF\x24\x00\x00\x00WAVEfmt ",
                expected: None,
            },
            TestCase {
                bytes: b"\x89PN",
                expected: None,
            },
        ];

        for case in &cases {
            assert_eq!(
                ImageFormat::sniff(case.bytes),
                case.expected,
                "bytes {:?}",
                case.bytes
            );
        }
    }

    #[test]
    fn test_signature_decoder() {
        let decoded = block_on(SignatureDecoder.decode(&png_upload("a.png"))).expect("png decodes");
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.format.mime_type(), "image/png");
        assert_eq!(&*decoded.bytes, PNG_BYTES);

        let fake = FileUpload::new("fake.png", "image/png", b"plain text".to_vec());
        assert_eq!(
            block_on(SignatureDecoder.decode(&fake)),
            Err(DecodeError::UnrecognisedFormat {
                name: "fake.png".to_string(),
            })
        );

        let empty = FileUpload::new("empty.jpg", "image/jpeg", Vec::new());
        assert!(matches!(
            block_on(SignatureDecoder.decode(&empty)),
            Err(DecodeError::Empty { .. })
        ));
    }
}
