//! Chunk discovery.
//!
//! AMF has no chunk table. Chunks are found by searching the raw buffer for
//! every known tag, and a chunk ends where the next tag occurrence of any
//! kind begins. A tag-shaped byte sequence inside unrelated binary data is
//! indistinguishable from a real tag; that is a property of the format.

use crate::error::{DecodeError, DecodeResult};
use crate::tags::{KNOWN_TAGS, REQUIRED_TAGS, Tag};

/// How to bound a chunk whose tag is the last tag in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingChunk {
    /// Fail with [`DecodeError::UnboundedChunk`].
    #[default]
    Reject,
    /// Let the chunk run to the end of the buffer.
    ExtendToEnd,
}

/// Byte range of one chunk's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkExtent {
    pub tag: Tag,
    /// Offset of the tag's first byte.
    pub offset: usize,
    /// First payload byte, just past the tag's null terminator.
    pub start: usize,
    /// Last payload byte: one before the next tag occurrence.
    pub end: usize,
}

impl ChunkExtent {
    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice `buffer` to this chunk's payload.
    #[must_use]
    pub fn payload<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.start + self.len()]
    }
}

/// Every tag occurrence in a buffer.
#[derive(Debug, Clone, Default)]
pub struct ChunkIndex {
    /// Occurrences per tag, ascending. Tags that never occur are absent.
    occurrences: Vec<(Tag, Vec<usize>)>,
    /// All occurrence offsets of all tags, ascending.
    global: Vec<usize>,
    buffer_len: usize,
}

/// Scan `buffer` and require both the vertex and face chunks to be present.
pub fn scan(buffer: &[u8]) -> DecodeResult<ChunkIndex> {
    let index = ChunkIndex::new(buffer);
    for tag in REQUIRED_TAGS {
        if index.first(tag).is_none() {
            return Err(DecodeError::MissingRequiredChunk { tag });
        }
    }
    Ok(index)
}

impl ChunkIndex {
    /// Index every occurrence of every known tag.
    #[must_use]
    pub fn new(buffer: &[u8]) -> Self {
        let occurrences: Vec<(Tag, Vec<usize>)> = KNOWN_TAGS
            .iter()
            .map(|&tag| (tag, find_all(buffer, tag.bytes())))
            .filter(|(_, offsets)| !offsets.is_empty())
            .collect();

        let mut global: Vec<usize> = occurrences
            .iter()
            .flat_map(|(_, offsets)| offsets.iter().copied())
            .collect();
        global.sort_unstable();

        Self {
            occurrences,
            global,
            buffer_len: buffer.len(),
        }
    }

    /// Offsets at which `tag` occurs, ascending. Empty if it never does.
    #[must_use]
    pub fn occurrences(&self, tag: Tag) -> &[usize] {
        self.occurrences
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, offsets)| offsets.as_slice())
            .unwrap_or_default()
    }

    /// Offset of the first occurrence of `tag`.
    #[must_use]
    pub fn first(&self, tag: Tag) -> Option<usize> {
        self.occurrences(tag).first().copied()
    }

    /// Tags present in the buffer, in table order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.occurrences.iter().map(|(tag, _)| *tag)
    }

    /// Sorted offsets of every tag occurrence.
    #[must_use]
    pub fn global(&self) -> &[usize] {
        &self.global
    }

    /// Payload extent of the first occurrence of `tag`.
    pub fn extent(&self, tag: Tag, trailing: TrailingChunk) -> DecodeResult<ChunkExtent> {
        let offset = self
            .first(tag)
            .ok_or(DecodeError::MissingRequiredChunk { tag })?;
        let start = offset + tag.len();

        // Offsets are unique, so the search always hits.
        let position = self
            .global
            .binary_search(&offset)
            .map_err(|_| DecodeError::MissingRequiredChunk { tag })?;

        let next = match (self.global.get(position + 1), trailing) {
            (Some(&next), _) => next,
            (None, TrailingChunk::ExtendToEnd) => self.buffer_len,
            (None, TrailingChunk::Reject) => {
                return Err(DecodeError::UnboundedChunk { tag, offset });
            }
        };

        Ok(ChunkExtent {
            tag,
            offset,
            start,
            end: next - 1,
        })
    }
}

/// Non-overlapping occurrences of `needle`, scanning left to right.
fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(at) = find(&haystack[from..], needle) {
        found.push(from + at);
        from += at + needle.len();
    }
    found
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{END, FACES_T, OBS, P_VERTS, VERTNORMALS};
    use proptest::prelude::*;

    fn concat(parts: &[&[u8]]) -> Vec<u8> {
        parts.concat()
    }

    #[test]
    fn finds_every_occurrence() {
        let buf = concat(&[
            &b"xx"[..],
            P_VERTS.bytes(),
            &b"abc"[..],
            P_VERTS.bytes(),
            END.bytes(),
        ]);
        let index = ChunkIndex::new(&buf);
        assert_eq!(index.occurrences(P_VERTS), &[2, 13]);
        assert_eq!(index.occurrences(END), &[21]);
        assert_eq!(index.global(), &[2, 13, 21]);
        assert!(index.occurrences(FACES_T).is_empty());
    }

    #[test]
    fn absent_tags_are_dropped() {
        let buf = concat(&[OBS.bytes(), END.bytes()]);
        let index = ChunkIndex::new(&buf);
        assert_eq!(index.tags().collect::<Vec<_>>(), vec![END, OBS]);
    }

    #[test]
    fn extent_stops_before_next_tag_of_any_kind() {
        let buf = concat(&[
            P_VERTS.bytes(),
            &b"0123456789"[..],
            VERTNORMALS.bytes(),
            &b"zz"[..],
        ]);
        let index = ChunkIndex::new(&buf);
        let extent = index.extent(P_VERTS, TrailingChunk::Reject).unwrap();
        assert_eq!(extent.start, 8);
        assert_eq!(extent.end, 17);
        assert_eq!(extent.payload(&buf), b"0123456789");
    }

    #[test]
    fn extent_uses_first_occurrence() {
        let buf = concat(&[
            FACES_T.bytes(),
            &b"ab"[..],
            FACES_T.bytes(),
            &b"cdef"[..],
            END.bytes(),
        ]);
        let index = ChunkIndex::new(&buf);
        let extent = index.extent(FACES_T, TrailingChunk::Reject).unwrap();
        assert_eq!(extent.offset, 0);
        assert_eq!(extent.payload(&buf), b"ab");
    }

    #[test]
    fn empty_payload_between_adjacent_tags() {
        let buf = concat(&[P_VERTS.bytes(), END.bytes()]);
        let index = ChunkIndex::new(&buf);
        let extent = index.extent(P_VERTS, TrailingChunk::Reject).unwrap();
        assert!(extent.is_empty());
        assert!(extent.payload(&buf).is_empty());
    }

    #[test]
    fn last_tag_is_unbounded_by_default() {
        let buf = concat(&[END.bytes(), FACES_T.bytes(), &b"1234"[..]]);
        let index = ChunkIndex::new(&buf);
        assert_eq!(
            index.extent(FACES_T, TrailingChunk::Reject),
            Err(DecodeError::UnboundedChunk {
                tag: FACES_T,
                offset: 4,
            })
        );
        let extent = index.extent(FACES_T, TrailingChunk::ExtendToEnd).unwrap();
        assert_eq!(extent.payload(&buf), b"1234");
    }

    #[test]
    fn scan_requires_vertex_and_face_chunks() {
        let buf = concat(&[P_VERTS.bytes(), END.bytes()]);
        assert_eq!(
            scan(&buf).unwrap_err(),
            DecodeError::MissingRequiredChunk { tag: FACES_T }
        );
        assert_eq!(
            scan(b"nothing here").unwrap_err(),
            DecodeError::MissingRequiredChunk { tag: P_VERTS }
        );
    }

    fn tag_soup() -> impl Strategy<Value = Vec<u8>> {
        let piece = prop_oneof![
            prop::collection::vec(any::<u8>(), 0..16),
            prop::sample::select(KNOWN_TAGS.to_vec()).prop_map(|t| t.bytes().to_vec()),
        ];
        prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn global_index_is_strictly_ascending(buf in tag_soup()) {
            let index = ChunkIndex::new(&buf);
            prop_assert!(index.global().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn global_index_holds_every_occurrence(buf in tag_soup()) {
            let index = ChunkIndex::new(&buf);
            let mut expected: Vec<usize> = KNOWN_TAGS
                .iter()
                .flat_map(|tag| index.occurrences(*tag).to_vec())
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(index.global(), expected.as_slice());

            for tag in KNOWN_TAGS {
                for &offset in index.occurrences(tag) {
                    prop_assert_eq!(&buf[offset..offset + tag.len()], tag.bytes());
                }
                let naive = buf.windows(tag.len()).filter(|w| *w == tag.bytes()).count();
                prop_assert_eq!(index.occurrences(tag).len(), naive);
            }
        }
    }
}
