//! Fixed-layout binary persistence for student records.
//!
//! The file is a headerless stream of 44-byte blocks, one per record:
//!
//! ```text
//! offset  0..32   name   UTF-8 text, left-aligned, zero-padded
//! offset 32..36   kor    i32, little-endian
//! offset 36..40   eng    i32, little-endian
//! offset 40..44   math   i32, little-endian
//! ```
//!
//! End of file is end of data. There is no record count, no footer, and no
//! version tag; a layout change is a silent format break.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::store::Store;

/// Width of the name field in bytes.
pub const NAME_LEN: usize = 32;

/// Size of one encoded record block.
pub const RECORD_SIZE: usize = NAME_LEN + 3 * 4;

/// Default data filename, shown as a hint in prompts. Not enforced.
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Encode a record into one fixed-size block.
///
/// The name buffer is zeroed before filling, so output is deterministic
/// regardless of what the name bytes were followed by in memory. Names longer
/// than the field are truncated at a char boundary.
pub fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut block = [0u8; RECORD_SIZE];

    let bytes = record.name.as_bytes();
    let mut end = bytes.len().min(NAME_LEN);
    while !record.name.is_char_boundary(end) {
        end -= 1;
    }
    block[..end].copy_from_slice(&bytes[..end]);

    block[NAME_LEN..NAME_LEN + 4].copy_from_slice(&record.kor.to_le_bytes());
    block[NAME_LEN + 4..NAME_LEN + 8].copy_from_slice(&record.eng.to_le_bytes());
    block[NAME_LEN + 8..NAME_LEN + 12].copy_from_slice(&record.math.to_le_bytes());

    block
}

/// Decode one fixed-size block into a record.
pub fn decode_record(block: &[u8; RECORD_SIZE]) -> Record {
    Record {
        name: decode_name(&block[..NAME_LEN]),
        kor: read_i32_at(block, NAME_LEN),
        eng: read_i32_at(block, NAME_LEN + 4),
        math: read_i32_at(block, NAME_LEN + 8),
    }
}

/// Decodes the name field: text up to the first NUL, lossily if a
/// foreign-written file left non-UTF-8 bytes there.
fn decode_name(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}

fn read_i32_at(block: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        block[offset],
        block[offset + 1],
        block[offset + 2],
        block[offset + 3],
    ])
}

/// Load records from `path`, replacing the store's contents.
///
/// If the file cannot be opened the store is left untouched. Once it opens,
/// the store is cleared and blocks are decoded until a full block can no
/// longer be read; a short read past the last complete block ends decoding
/// without error. Records decoded before a mid-stream I/O failure are kept.
///
/// Returns the number of records decoded.
pub fn load<P: AsRef<Path>>(store: &mut Store, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    store.clear();

    let mut block = [0u8; RECORD_SIZE];
    let mut count = 0;
    while read_block(&mut reader, &mut block)? {
        store.append(decode_record(&block));
        count += 1;
    }

    info!("Loaded {} records from {}", count, path.display());
    Ok(count)
}

fn read_block<R: Read>(reader: &mut R, block: &mut [u8; RECORD_SIZE]) -> Result<bool> {
    match reader.read_exact(block) {
        Ok(()) => Ok(true),
        // EOF or truncated trailing bytes: end of data, not an error.
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Save every record in the store to `path`, truncating existing content.
///
/// If the file cannot be opened nothing is written. No read-back
/// verification. Returns the number of records written.
pub fn save<P: AsRef<Path>>(store: &Store, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for record in store.records() {
        writer.write_all(&encode_record(record))?;
    }
    writer.flush()?;

    info!("Saved {} records to {}", store.len(), path.display());
    Ok(store.len())
}
