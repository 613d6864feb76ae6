//! External debug file identity.
//!
//! A binary can point at its separate debug file in two ways: the `.gnu_debuglink` section
//! carries the debug file's name and CRC32, and the GNU build-ID note carries a hash that
//! identifies the build. `DebugIdentity` pairs the two so a resolver can look the file up by
//! either one.

use std::fmt;

use anyhow::Result;

use crate::extract::{BuildIdExtractor, DebugLinkExtractor};
use crate::utils::hex_string;

/// Information needed to find the external debug file of a binary.
///
/// Immutable once built. Values passed to [`DebugIdentity::new`] are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DebugIdentity {
    filename: String,
    crc: u32,
    hash: Option<Vec<u8>>,
}

impl DebugIdentity {
    pub fn new(filename: impl Into<String>, crc: u32, hash: Option<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            crc,
            hash,
        }
    }

    /// Builds the identity of `binary` from its debug link and build-ID.
    ///
    /// A build-ID rejected by `build_ids` counts as missing. Returns `Ok(None)` unless both a
    /// debug link and a valid build-ID are present. Extractor errors are returned as is.
    pub fn from_binary<B, L, I>(binary: &B, links: &L, build_ids: &I) -> Result<Option<Self>>
    where
        B: ?Sized,
        L: DebugLinkExtractor<B> + ?Sized,
        I: BuildIdExtractor<B> + ?Sized,
    {
        let link = links.debug_link(binary)?;
        let build_id = build_ids
            .build_id(binary)?
            .filter(|values| build_ids.is_valid(values));

        let (Some(link), Some(build_id)) = (link, build_id) else {
            return Ok(None);
        };

        Ok(Some(Self::new(link.filename, link.crc, Some(build_id.description))))
    }

    /// Name of the external debug file.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// CRC32 of the external debug file.
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// Build-ID hash, if known.
    pub fn hash(&self) -> Option<&[u8]> {
        self.hash.as_deref()
    }
}

impl fmt::Display for DebugIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DebugIdentity [filename={}, crc={:x}, hash={}]",
            self.filename,
            self.crc,
            hex_string(self.hash())
        )
    }
}
