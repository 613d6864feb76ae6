//! Input loading.
//!
//! Maps input files into memory, splits static archives into their members and reports the
//! debug identity of every object found.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::extract::elf::ObjectExtractor;
use crate::identity::DebugIdentity;

const ARCHIVE_MAGIC: &[u8] = b"!<arch>\n";

/// The debug identity found in one object file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Input path, or `path(member)` for archive members.
    pub name: String,
    pub identity: Option<DebugIdentity>,
}

/// Reports the debug identity of the file at `path`, one entry per object it contains.
pub fn inspect_path(path: &Path) -> Result<Vec<Report>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to map {}", path.display()))?;
    inspect_bytes(&path.display().to_string(), &mmap)
}

/// Reports the debug identity of an in-memory object file or archive.
///
/// Archive members that are not object files are skipped with a warning; every other failure
/// is an error.
pub fn inspect_bytes(name: &str, data: &[u8]) -> Result<Vec<Report>> {
    if !data.starts_with(ARCHIVE_MAGIC) {
        return Ok(vec![inspect_object(name.to_string(), data)?]);
    }

    let archive = object::read::archive::ArchiveFile::parse(data)
        .with_context(|| format!("failed to parse archive {}", name))?;
    let mut reports = Vec::new();
    for member in archive.members() {
        let member = member?;
        let member_name = format!("{}({})", name, String::from_utf8_lossy(member.name()));
        let member_data = member.data(data)?;
        let copy;
        let member_data = if member_data.as_ptr().align_offset(8) != 0 {
            copy = member_data.to_vec();
            &copy[..]
        } else {
            member_data
        };
        let obj = match object::File::parse(member_data) {
            Ok(obj) => obj,
            Err(err) => {
                tracing::warn!("skipping {}: not an object file: {}", member_name, err);
                continue;
            }
        };
        reports.push(report(member_name, &obj)?);
    }
    Ok(reports)
}

fn inspect_object(name: String, data: &[u8]) -> Result<Report> {
    let obj = object::File::parse(data)
        .with_context(|| format!("failed to parse object file {}", name))?;
    report(name, &obj)
}

fn report(name: String, obj: &object::File<'_>) -> Result<Report> {
    let identity = ObjectExtractor::from_object(obj)?;
    match &identity {
        Some(id) => tracing::debug!("{}: {}", name, id),
        None => tracing::debug!("{}: no debug link or valid build-id", name),
    }
    Ok(Report { name, identity })
}
