#![allow(dead_code)]

use object::write::Object;
use object::{Architecture, BinaryFormat, Endianness, SectionKind};

/// Builds a relocatable x86_64 ELF with an optional `.gnu_debuglink` and build-ID note.
pub fn elf_fixture(link: Option<(&str, u32)>, build_id: Option<&[u8]>) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, Architecture::X86_64, Endianness::Little);

    let text = obj.add_section(Vec::new(), b".text".to_vec(), SectionKind::Text);
    obj.append_section_data(text, &[0xc3], 16);

    if let Some((filename, crc)) = link {
        let mut data = filename.as_bytes().to_vec();
        data.push(0);
        pad4(&mut data);
        data.extend_from_slice(&crc.to_le_bytes());
        let name = b".gnu_debuglink".to_vec();
        let section = obj.add_section(Vec::new(), name, SectionKind::Debug);
        obj.append_section_data(section, &data, 4);
    }

    if let Some(hash) = build_id {
        let name = b".note.gnu.build-id".to_vec();
        let section = obj.add_section(Vec::new(), name, SectionKind::Note);
        let data = note(b"GNU", object::elf::NT_GNU_BUILD_ID, hash);
        obj.append_section_data(section, &data, 4);
    }

    obj.write().unwrap()
}

/// Encodes a single 4-byte aligned ELF note.
pub fn note(name: &[u8], n_type: u32, desc: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(name.len() as u32 + 1).to_le_bytes());
    data.extend_from_slice(&(desc.len() as u32).to_le_bytes());
    data.extend_from_slice(&n_type.to_le_bytes());
    data.extend_from_slice(name);
    data.push(0);
    pad4(&mut data);
    data.extend_from_slice(desc);
    pad4(&mut data);
    data
}

/// Wraps members into a System V `ar` archive without a symbol table.
pub fn archive(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut data = b"!<arch>\n".to_vec();
    for (name, contents) in members {
        let header = format!(
            "{:<16}{:<12}{:<6}{:<6}{:<8}{:<10}`\n",
            format!("{}/", name),
            0,
            0,
            0,
            644,
            contents.len()
        );
        assert_eq!(header.len(), 60);
        data.extend_from_slice(header.as_bytes());
        data.extend_from_slice(contents);
        if data.len() % 2 != 0 {
            data.push(b'\n');
        }
    }
    data
}

fn pad4(data: &mut Vec<u8>) {
    while data.len() % 4 != 0 {
        data.push(0);
    }
}
