//! The listing's ordered photo collection.
//!
//! Exactly one photo is primary whenever the collection is non-empty. Adding
//! photos is a two-phase operation: [`PhotoCollection::reserve`] claims slots
//! for a batch up front, and each decode completion is applied separately
//! with [`PhotoCollection::complete`] in whatever order the decodes finish.
//! Dropping a [`PendingPhoto`] without completing it gives its slot back.

use std::sync::{Arc, Weak};

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::IMAGE_MIME_PREFIX;
use crate::prelude::*;
use crate::wizard::{DecodeError, DecodedImage};

/// A file handed over by the file picker or a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    name: String,
    content_type: String,
    #[serde(rename = "size", serialize_with = "serialize_len")]
    bytes: Arc<[u8]>,
}

fn serialize_len<S: Serializer>(bytes: &Arc<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(bytes.len() as u64)
}

impl FileUpload {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) const fn shared_bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    /// Whether the declared content type is an image type
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

/// Stable identity of a photo, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct PhotoId(Uuid);

impl PhotoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PhotoId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    /// The original upload; this is what gets submitted
    pub file: FileUpload,
    pub image: DecodedImage,
    pub is_primary: bool,
}

/// A claimed slot for a file still being decoded.
///
/// Not `Clone`: each pending photo completes exactly once. The slot stays
/// claimed for as long as this value is alive.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingPhoto {
    id: PhotoId,
    file: FileUpload,
    _slot: Arc<()>,
}

impl PendingPhoto {
    pub const fn id(&self) -> PhotoId {
        self.id
    }

    pub const fn file(&self) -> &FileUpload {
        &self.file
    }
}

/// What happened to a batch handed to [`PhotoCollection::reserve`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PhotoIntake {
    pub pending: Vec<PendingPhoto>,
    pub skipped_non_image: usize,
    pub dropped_over_limit: usize,
}

impl PhotoIntake {
    /// Whether the "maximum reached" notice should be shown
    pub const fn limit_reached(&self) -> bool {
        self.dropped_over_limit > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoError {
    #[error("No photo at position {index} (have {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Photo {0} is not awaiting a decode")]
    UnknownPending(PhotoId),

    #[error("Could not read {name}: {source}")]
    Decode { name: String, source: DecodeError },
}

/// The collection's side of a claimed slot; dead once its
/// [`PendingPhoto`] is dropped.
#[derive(Debug, Clone)]
struct Reservation {
    id: PhotoId,
    slot: Weak<()>,
}

impl Reservation {
    fn is_live(&self) -> bool {
        self.slot.strong_count() > 0
    }
}

#[derive(Debug, Clone)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
    reserved: Vec<Reservation>,
    max: usize,
}

impl PhotoCollection {
    pub const fn new(max: usize) -> Self {
        Self {
            photos: Vec::new(),
            reserved: Vec::new(),
            max,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn primary(&self) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.is_primary)
    }

    pub fn pending_count(&self) -> usize {
        self.reserved.iter().filter(|reservation| reservation.is_live()).count()
    }

    /// Slots left once every in-flight decode has landed
    pub fn remaining_capacity(&self) -> usize {
        self.max.saturating_sub(self.photos.len() + self.pending_count())
    }

    /// Claims slots for the image files of a batch.
    ///
    /// Non-image files are skipped first; image files beyond the remaining
    /// capacity are dropped and counted.
    pub fn reserve(&mut self, files: impl IntoIterator<Item = FileUpload>) -> PhotoIntake {
        self.reserved.retain(Reservation::is_live);
        let mut intake = PhotoIntake::default();
        let mut remaining = self.remaining_capacity();

        for file in files {
            if !file.is_image() {
                intake.skipped_non_image += 1;
                continue;
            }
            if remaining == 0 {
                intake.dropped_over_limit += 1;
                continue;
            }
            remaining -= 1;
            let id = PhotoId::new();
            let slot = Arc::new(());
            self.reserved.push(Reservation {
                id,
                slot: Arc::downgrade(&slot),
            });
            intake.pending.push(PendingPhoto {
                id,
                file,
                _slot: slot,
            });
        }
        intake
    }

    /// Applies one decode completion.
    ///
    /// The primary flag is decided now, against the collection as it is at
    /// this moment. A failed decode frees its slot and adds nothing.
    ///
    /// # Errors
    /// Returns `PhotoError::UnknownPending` for a slot this collection did
    /// not reserve and `PhotoError::Decode` when decoding failed.
    pub fn complete(
        &mut self,
        pending: PendingPhoto,
        decoded: Result<DecodedImage, DecodeError>,
    ) -> Result<PhotoId, PhotoError> {
        let slot = self
            .reserved
            .iter()
            .position(|reservation| reservation.id == pending.id)
            .ok_or(PhotoError::UnknownPending(pending.id))?;
        self.reserved.swap_remove(slot);

        let image = decoded.map_err(|source| PhotoError::Decode {
            name: pending.file.name().to_string(),
            source,
        })?;

        self.photos.push(Photo {
            id: pending.id,
            file: pending.file,
            image,
            is_primary: self.photos.is_empty(),
        });
        Ok(pending.id)
    }

    /// Makes the photo at `index` the only primary one.
    ///
    /// # Errors
    /// Returns `PhotoError::IndexOutOfBounds` if there is no such photo.
    pub fn set_primary(&mut self, index: usize) -> Result<(), PhotoError> {
        self.check_index(index)?;
        for (i, photo) in self.photos.iter_mut().enumerate() {
            photo.is_primary = i == index;
        }
        Ok(())
    }

    /// Removes the photo at `index`, promoting the new first photo when the
    /// primary one goes.
    ///
    /// # Errors
    /// Returns `PhotoError::IndexOutOfBounds` if there is no such photo.
    pub fn delete(&mut self, index: usize) -> Result<Photo, PhotoError> {
        self.check_index(index)?;
        let removed = self.photos.remove(index);
        if removed.is_primary {
            if let Some(first) = self.photos.first_mut() {
                first.is_primary = true;
            }
        }
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), PhotoError> {
        let len = self.photos.len();
        if index < len {
            Ok(())
        } else {
            Err(PhotoError::IndexOutOfBounds { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PNG_BYTES, jpeg_upload, png_upload, text_upload};
    use crate::wizard::ImageFormat;

    fn decoded() -> Result<DecodedImage, DecodeError> {
        Ok(DecodedImage {
            format: ImageFormat::Png,
            bytes: Arc::from(PNG_BYTES),
        })
    }

    fn primary_count(photos: &PhotoCollection) -> usize {
        photos.iter().filter(|photo| photo.is_primary).count()
    }

    fn filled(count: usize) -> PhotoCollection {
        let mut photos = PhotoCollection::new(8);
        let files = (0..count).map(|i| png_upload(&format!("{i}.png")));
        for pending in photos.reserve(files).pending {
            photos.complete(pending, decoded()).expect("complete reserved photo");
        }
        photos
    }

    #[test]
    fn test_first_completion_is_primary() {
        let photos = filled(3);
        assert_eq!(photos.len(), 3);
        assert_eq!(primary_count(&photos), 1);
        assert_eq!(photos.primary().map(|p| p.file.name()), Some("0.png"));
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut photos = PhotoCollection::new(8);
        let uploads = [png_upload("a.png"), jpeg_upload("b.jpg"), png_upload("c.png")];
        let mut pending = photos.reserve(uploads).pending;
        assert_eq!(photos.pending_count(), 3);

        let last = pending.pop().expect("third pending");
        let c = photos.complete(last, decoded()).expect("c completes first");
        for p in pending {
            photos.complete(p, decoded()).expect("remaining complete");
        }

        assert_eq!(photos.pending_count(), 0);
        assert_eq!(primary_count(&photos), 1);
        assert_eq!(photos.primary().map(|p| p.id), Some(c));
        assert_eq!(photos.get(0).map(|p| p.file.name()), Some("c.png"));
    }

    #[test]
    fn test_non_images_skipped_before_cap() {
        let mut photos = filled(6);
        let intake = photos.reserve([
            text_upload("notes.txt"),
            png_upload("7.png"),
            text_upload("more.txt"),
            png_upload("8.png"),
            png_upload("9.png"),
        ]);

        assert_eq!(intake.pending.len(), 2);
        assert_eq!(intake.skipped_non_image, 2);
        assert_eq!(intake.dropped_over_limit, 1);
        assert!(intake.limit_reached());
        assert_eq!(photos.remaining_capacity(), 0);
    }

    #[test]
    fn test_full_collection_refuses_batch() {
        let mut photos = filled(8);
        let intake = photos.reserve([png_upload("extra.png")]);
        assert!(intake.pending.is_empty());
        assert!(intake.limit_reached());
        assert_eq!(photos.len(), 8);
    }

    #[test]
    fn test_overlapping_batches_respect_cap() {
        let mut photos = PhotoCollection::new(8);
        let first = photos.reserve((0..5).map(|i| png_upload(&format!("a{i}.png"))));
        let second = photos.reserve((0..5).map(|i| png_upload(&format!("b{i}.png"))));
        assert_eq!(first.pending.len(), 5);
        assert_eq!(second.pending.len(), 3);
        assert_eq!(second.dropped_over_limit, 2);

        for p in second.pending.into_iter().chain(first.pending) {
            photos.complete(p, decoded()).expect("complete");
        }
        assert_eq!(photos.len(), 8);
        assert_eq!(primary_count(&photos), 1);
    }

    #[test]
    fn test_decode_failure_releases_slot() {
        let mut photos = PhotoCollection::new(1);
        let mut intake = photos.reserve([png_upload("broken.png")]);
        let pending = intake.pending.pop().expect("one pending");
        let id = pending.id();

        let failure = DecodeError::UnrecognisedFormat {
            name: "broken.png".to_string(),
        };
        let err = photos.complete(pending, Err(failure)).expect_err("decode failed");
        assert!(matches!(err, PhotoError::Decode { .. }));
        assert!(photos.is_empty());
        assert_eq!(photos.remaining_capacity(), 1);

        let stray = PendingPhoto {
            id,
            file: png_upload("broken.png"),
            _slot: Arc::new(()),
        };
        assert_eq!(
            photos.complete(stray, decoded()),
            Err(PhotoError::UnknownPending(id))
        );
    }

    #[test]
    fn test_dropped_pending_frees_slot() {
        let mut photos = PhotoCollection::new(8);
        let intake = photos.reserve((0..8).map(|i| png_upload(&format!("{i}.png"))));
        assert_eq!(photos.remaining_capacity(), 0);

        drop(intake);
        assert_eq!(photos.pending_count(), 0);
        assert_eq!(photos.remaining_capacity(), 8);

        let mut retry = photos.reserve([png_upload("again.png")]);
        assert!(!retry.limit_reached());
        let pending = retry.pending.pop().expect("slot available again");
        photos.complete(pending, decoded()).expect("complete");
        assert_eq!(photos.len(), 1);
        assert_eq!(primary_count(&photos), 1);
    }

    #[test]
    fn test_completed_slot_is_not_counted_twice() {
        let mut photos = PhotoCollection::new(2);
        let mut intake = photos.reserve([png_upload("a.png"), png_upload("b.png")]);
        let b = intake.pending.pop().expect("b pending");
        let a = intake.pending.pop().expect("a pending");

        photos.complete(a, decoded()).expect("a completes");
        assert_eq!(photos.pending_count(), 1);
        assert_eq!(photos.remaining_capacity(), 0);

        drop(b);
        assert_eq!(photos.remaining_capacity(), 1);
    }

    #[test]
    fn test_delete_primary_promotes_first() {
        let mut photos = filled(3);
        photos.set_primary(1).expect("set primary");
        let second = photos.get(2).map(|p| p.id);

        let removed = photos.delete(1).expect("delete primary");
        assert!(removed.is_primary);
        assert_eq!(primary_count(&photos), 1);
        assert!(photos.get(0).is_some_and(|p| p.is_primary));
        assert_eq!(photos.get(1).map(|p| p.id), second);
    }

    #[test]
    fn test_delete_non_primary_keeps_primary() {
        let mut photos = filled(3);
        photos.set_primary(2).expect("set primary");
        photos.delete(0).expect("delete first");
        assert_eq!(primary_count(&photos), 1);
        assert!(photos.get(1).is_some_and(|p| p.is_primary));
    }

    #[test]
    fn test_set_primary_is_exclusive() {
        let mut photos = filled(4);
        for index in [3, 0, 2] {
            photos.set_primary(index).expect("set primary");
            assert_eq!(primary_count(&photos), 1);
            assert!(photos.get(index).is_some_and(|p| p.is_primary));
        }
    }

    #[test]
    fn test_index_errors() {
        let mut photos = filled(2);
        assert_eq!(
            photos.set_primary(2),
            Err(PhotoError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(matches!(
            photos.delete(5),
            Err(PhotoError::IndexOutOfBounds { index: 5, len: 2 })
        ));

        photos.delete(0).expect("delete");
        photos.delete(0).expect("delete last");
        assert!(photos.primary().is_none());
    }
}
