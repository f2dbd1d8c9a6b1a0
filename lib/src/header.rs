// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Common framing header shared by every event-log section.

use crate::codec::be_u16;
use crate::error::Error;
#[cfg(not(feature = "std"))]
use alloc::fmt;
#[cfg(feature = "std")]
use std::fmt;

/// Size of the section header on the wire. A section can never be shorter
/// than this.
pub const SECTION_HEADER_SIZE: usize = 8;

/// Two-byte identifier naming a section's type.
///
/// Tags are raw bytes compared by value; no text encoding is assumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub [u8; 2]);

/// Lists all the known section tags.
pub mod tags {
    use super::Tag;

    pub const PRIVATE_HEADER: Tag = Tag(*b"PH");
    pub const USER_HEADER: Tag = Tag(*b"UH");
    pub const PRIMARY_SRC: Tag = Tag(*b"PS");
    pub const SECONDARY_SRC: Tag = Tag(*b"SS");
    pub const EXTENDED_HEADER: Tag = Tag(*b"EH");
    pub const MTMS: Tag = Tag(*b"MT");
    pub const DUMP_LOCATOR: Tag = Tag(*b"DH");
    pub const EXTENDED_USER_DATA: Tag = Tag(*b"ED");
    pub const ENVIRONMENTAL: Tag = Tag(*b"EI");
    pub const EPOW: Tag = Tag(*b"EP");
    pub const IO_EVENT: Tag = Tag(*b"IE");
    pub const LOGICAL_PARTITION: Tag = Tag(*b"LP");
    pub const LOGICAL_RESOURCE: Tag = Tag(*b"LR");
    pub const MANUFACTURING: Tag = Tag(*b"MI");
    pub const CALL_HOME: Tag = Tag(*b"CH");
    pub const USER_DATA: Tag = Tag(*b"UD");
    pub const HYPERVISOR_ID: Tag = Tag(*b"HM");
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0 {
            let c = if byte.is_ascii_graphic() {
                byte as char
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[cfg(not(feature = "std"))]
        use alloc::string::ToString;
        serializer.serialize_str(&self.to_string())
    }
}

/// Header of an event-log section
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SectionHeader {
    /// Type of the section
    pub tag: Tag,
    /// Size of the section in bytes, this header included
    pub length: u16,
    /// Version of the section layout
    pub version: u8,
    /// Section subtype
    pub subtype: u8,
    /// Component that created the section
    pub component: u16,
}

impl SectionHeader {
    /// Decodes a section header from the start of `slice`.
    ///
    /// Fails with [Error::TooShort] if fewer than eight bytes are available
    /// and with [Error::CorruptHeader] if the declared length is smaller
    /// than the header itself: such a length makes it impossible to frame
    /// the next section, so the rest of the buffer cannot be trusted.
    pub fn from_slice(slice: &[u8]) -> Result<Self, Error> {
        if slice.len() < SECTION_HEADER_SIZE {
            return Err(Error::TooShort(SECTION_HEADER_SIZE, slice.len()));
        }

        let header = SectionHeader {
            tag: Tag([slice[0], slice[1]]),
            length: be_u16(slice, 2).unwrap_or_default(),
            version: slice[4],
            subtype: slice[5],
            component: be_u16(slice, 6).unwrap_or_default(),
        };
        log::trace!("Decoded section header: {header}");

        if (header.length as usize) < SECTION_HEADER_SIZE {
            return Err(Error::CorruptHeader(header.length));
        }

        Ok(header)
    }

    /// Returns the declared size of the whole section in bytes.
    #[inline]
    pub fn section_size(&self) -> usize {
        self.length as usize
    }

    /// Returns the declared size of the section payload, the header
    /// excluded.
    #[inline]
    pub fn payload_size(&self) -> usize {
        self.section_size().saturating_sub(SECTION_HEADER_SIZE)
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - (length={}, version={}, subtype={}, component=0x{:04x})",
            self.tag, self.length, self.version, self.subtype, self.component
        )
    }
}
