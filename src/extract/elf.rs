//! ELF extractor backend.
//!
//! Implements both extractor traits over a parsed `object::File`. Section decoding is left to the
//! `object` crate; this backend only copies the results out into owned values.

use super::{BuildIdExtractor, BuildIdValues, DebugLinkExtractor, DebugLinkValues};
use crate::identity::DebugIdentity;
use anyhow::{Context, Result};
use object::Object;

/// Reads `.gnu_debuglink` and the GNU build-ID note through the `object` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectExtractor;

impl ObjectExtractor {
    /// Builds the debug identity of an already parsed object file.
    pub fn from_object(obj: &object::File<'_>) -> Result<Option<DebugIdentity>> {
        DebugIdentity::from_binary(obj, &ObjectExtractor, &ObjectExtractor)
    }
}

impl<'data> DebugLinkExtractor<object::File<'data>> for ObjectExtractor {
    fn debug_link(&self, binary: &object::File<'data>) -> Result<Option<DebugLinkValues>> {
        let link = binary
            .gnu_debuglink()
            .context("malformed .gnu_debuglink section")?;
        Ok(link.map(|(filename, crc)| DebugLinkValues {
            filename: String::from_utf8_lossy(filename).into_owned(),
            crc,
        }))
    }
}

impl<'data> BuildIdExtractor<object::File<'data>> for ObjectExtractor {
    fn build_id(&self, binary: &object::File<'data>) -> Result<Option<BuildIdValues>> {
        // `object` only reports notes owned by "GNU" with type NT_GNU_BUILD_ID.
        let id = binary.build_id().context("malformed build-id note")?;
        Ok(id.map(|hash| BuildIdValues::gnu(hash.to_vec())))
    }
}
