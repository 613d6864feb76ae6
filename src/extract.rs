//! Debug-identity extractors.
//!
//! This module defines the two capabilities the identity factory depends on: reading the
//! `.gnu_debuglink` values of a binary and reading its GNU build-ID note. Keeping them as
//! traits lets the factory run against any binary representation, and against fakes in tests.

use anyhow::Result;

pub mod elf;

/// Owner name of a GNU build-ID note.
pub const GNU_NOTE_NAME: &[u8] = b"GNU";

/// Note type of a GNU build-ID note.
pub const NT_GNU_BUILD_ID: u32 = object::elf::NT_GNU_BUILD_ID;

/// Contents of a `.gnu_debuglink` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLinkValues {
    /// Name of the external debug file.
    pub filename: String,
    /// CRC32 of the external debug file.
    pub crc: u32,
}

/// Contents of a build-ID note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIdValues {
    /// Note owner, without trailing NUL bytes.
    pub name: Vec<u8>,
    pub note_type: u32,
    /// The build-ID hash itself.
    pub description: Vec<u8>,
}

impl BuildIdValues {
    /// A GNU build-ID note with the given hash.
    pub fn gnu(description: Vec<u8>) -> Self {
        Self {
            name: GNU_NOTE_NAME.to_vec(),
            note_type: NT_GNU_BUILD_ID,
            description,
        }
    }

    /// Whether the note is a GNU build-ID carrying a non-empty hash.
    pub fn is_valid(&self) -> bool {
        self.name == GNU_NOTE_NAME
            && self.note_type == NT_GNU_BUILD_ID
            && !self.description.is_empty()
    }
}

/// Something that can read debug-link values out of a binary.
///
/// `B` is the loaded binary representation the extractor reads from.
pub trait DebugLinkExtractor<B: ?Sized> {
    /// Returns the debug-link values, or `None` if the binary has no debug link.
    fn debug_link(&self, binary: &B) -> Result<Option<DebugLinkValues>>;
}

/// Something that can read and validate build-ID values out of a binary.
pub trait BuildIdExtractor<B: ?Sized> {
    /// Returns the build-ID values, or `None` if the binary has no build-ID.
    fn build_id(&self, binary: &B) -> Result<Option<BuildIdValues>>;

    /// Whether `values` may be trusted. Callers must check this before using the hash.
    fn is_valid(&self, values: &BuildIdValues) -> bool {
        values.is_valid()
    }
}
