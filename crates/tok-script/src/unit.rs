use std::mem::size_of;

use crate::error::{Result, TokError};

pub const HEADER_SIZE: usize = 2 * size_of::<u32>();
pub const SEGMENT_SEPARATOR: u8 = 0x00;

/// Leading header of a `.tok` file. Both fields are informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitHeader {
    pub data_size: u32,
    pub null_count: u32,
}

/// One compiled mission script: header plus null-separated segments.
#[derive(Debug, Clone, Copy)]
pub struct CompiledUnit<'a> {
    pub header: UnitHeader,
    bytes: &'a [u8],
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl<'a> CompiledUnit<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(TokError::TooSmall {
                len: bytes.len(),
                min: HEADER_SIZE,
            });
        }

        let header = UnitHeader {
            data_size: read_u32(bytes, 0),
            null_count: read_u32(bytes, size_of::<u32>()),
        };
        if header.data_size as usize != bytes.len() - HEADER_SIZE {
            log::debug!(
                "header data_size {} does not match payload length {}",
                header.data_size,
                bytes.len() - HEADER_SIZE
            );
        }

        Ok(Self { header, bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Every piece between separators, empty ones included.
    pub fn segments(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.payload().split(|b| *b == SEGMENT_SEPARATOR)
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Empty segments before the first statement; the compiler reserves one
    /// per variable slot.
    pub fn leading_empty_segments(&self) -> usize {
        self.segments().take_while(|s| s.is_empty()).count()
    }
}
