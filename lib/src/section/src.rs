// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! SRC sections ("PS" and "SS"): the primary diagnostic reference code
//! plus the optional FRU callout list.
//!
//! This is the deepest part of the format: the callout list is a run of
//! variable-length FRU records, each of which embeds up to three optional
//! sub-records selected by a type bitmask. Every length is taken from the
//! wire and must be re-validated against both the remaining slice and the
//! enclosing record's declared size before anything is copied; the decoder
//! accepts a callout list only if every accumulated offset adds up exactly.

use crate::codec::{be_u16, be_u32, string_field};
use crate::error::Error;
use crate::header::SectionHeader;
use crate::section::mtms::Mtms;
#[cfg(not(feature = "std"))]
use alloc::{fmt, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::fmt;

/// Size of the SRC section up to and including the primary reference code.
pub const SRC_STATIC_SIZE: usize = 80;
/// Most FRU callout records one SRC may carry.
pub const SRC_FRU_MAX: usize = 10;
/// Flag bit announcing the additional-sections (FRU callout) block.
pub const SRC_FLAG_ADDITIONAL_SCNS: u8 = 0x01;

/// Id of the callout-container additional section.
const FRU_CONTAINER_ID: u8 = 0xC0;
/// Sub-record ids, two ASCII bytes each.
const FRU_ID_SUB_ID: u16 = 0x4944; // "ID"
const FRU_PE_SUB_ID: u16 = 0x5045; // "PE"
const FRU_MR_SUB_ID: u16 = 0x4D52; // "MR"

/// FRU record type bits selecting the optional sub-records.
pub const FRU_ID_SUB: u8 = 0x08;
pub const FRU_PE_SUB: u8 = 0x03;
pub const FRU_MR_SUB: u8 = 0x04;

/// Identity sub-record flag bits.
pub const FRU_ID_FLAG_PART: u8 = 0x08;
pub const FRU_ID_FLAG_PROC: u8 = 0x02;
pub const FRU_ID_FLAG_CCIN: u8 = 0x04;
pub const FRU_ID_FLAG_SERIAL: u8 = 0x01;

/// Longest location code a FRU record may carry.
pub const FRU_LOC_CODE_MAX: usize = 80;
/// Most MRU entries one MRU sub-record may carry.
pub const FRU_MRU_MAX: usize = 15;

/// System reference code section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SrcScn {
    pub hdr: SectionHeader,
    pub version: u8,
    pub flags: u8,
    pub wordcount: u8,
    /// Declared size of the SRC section in bytes, header included; the
    /// FRU-decode offset must land exactly here.
    pub srclength: u16,
    pub ext_refcodes: [u32; 8],
    pub primary_refcode: String,
    pub fru_scns: Vec<FruScn>,
}

impl SrcScn {
    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < SRC_STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), SRC_STATIC_SIZE));
        }
        if slice.len() < SRC_STATIC_SIZE {
            return Err(Error::TooShort(SRC_STATIC_SIZE, slice.len()));
        }

        let mut src =
            Self::decode_core(hdr, slice).ok_or(Error::TooShort(SRC_STATIC_SIZE, slice.len()))?;

        let srclength = src.srclength as usize;
        if srclength < SRC_STATIC_SIZE || srclength > hdr.section_size() {
            return Err(Error::LengthMismatch(srclength, hdr.section_size()));
        }
        if srclength > slice.len() {
            return Err(Error::TooShort(srclength, slice.len()));
        }

        if src.flags & SRC_FLAG_ADDITIONAL_SCNS != 0 {
            src.decode_fru_scns(slice, srclength)?;
        }

        Ok(src)
    }

    fn decode_core(hdr: SectionHeader, slice: &[u8]) -> Option<Self> {
        let mut ext_refcodes = [0u32; 8];
        for (i, refcode) in ext_refcodes.iter_mut().enumerate() {
            *refcode = be_u32(slice, 16 + i * 4)?;
        }

        Some(SrcScn {
            hdr,
            version: *slice.get(8)?,
            flags: *slice.get(9)?,
            wordcount: *slice.get(11)?,
            srclength: be_u16(slice, 14)?,
            ext_refcodes,
            primary_refcode: string_field(slice, 48, 32)?,
            fru_scns: Vec::new(),
        })
    }

    /// Walks the additional-sections block: a container header followed by
    /// FRU callout records until the declared SRC length is reached.
    fn decode_fru_scns(&mut self, slice: &[u8], srclength: usize) -> Result<(), Error> {
        let container = slice
            .get(SRC_STATIC_SIZE..SRC_STATIC_SIZE + 4)
            .ok_or(Error::TooShort(SRC_STATIC_SIZE + 4, slice.len()))?;
        if container[0] != FRU_CONTAINER_ID {
            return Err(Error::UnexpectedSubId(
                container[0] as u16,
                FRU_CONTAINER_ID as u16,
            ));
        }
        let container_bytes =
            u16::from_be_bytes([container[2], container[3]]) as usize * 4;

        let mut offset = SRC_STATIC_SIZE + 4;
        let mut fru_bytes = 0;
        while offset < srclength && self.fru_scns.len() < SRC_FRU_MAX {
            let fru = FruScn::from_slice(slice, offset)?;
            offset += fru.length as usize;
            fru_bytes += fru.length as usize;
            self.fru_scns.push(fru);
        }

        // Both the container length and the SRC length must agree with the
        // bytes the callout records actually account for.
        if offset != srclength {
            return Err(Error::LengthMismatch(srclength, offset));
        }
        if container_bytes != fru_bytes + 4 {
            return Err(Error::LengthMismatch(container_bytes, fru_bytes + 4));
        }

        Ok(())
    }
}

impl fmt::Display for SrcScn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} callouts)", self.primary_refcode, self.fru_scns.len())
    }
}

/// One FRU callout record.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FruScn {
    /// Total length of this record, sub-records included.
    pub length: u8,
    /// Bitmask selecting the sub-records present.
    pub kind: u8,
    pub priority: u8,
    pub location_code: String,
    pub id: Option<FruIdSubScn>,
    pub pe: Option<FruPeSubScn>,
    pub mr: Option<FruMrSubScn>,
}

impl FruScn {
    pub const STATIC_SIZE: usize = 4;

    /// Decodes one FRU record starting at `offset`. The record is accepted
    /// only if the bytes consumed by its prefix and sub-records equal its
    /// own declared length.
    fn from_slice(slice: &[u8], offset: usize) -> Result<Self, Error> {
        let prefix = slice
            .get(offset..offset + Self::STATIC_SIZE)
            .ok_or(Error::TooShort(offset + Self::STATIC_SIZE, slice.len()))?;
        let length = prefix[0];
        let kind = prefix[1];
        let priority = prefix[2];
        let loc_len = prefix[3] as usize;

        if loc_len > FRU_LOC_CODE_MAX {
            return Err(Error::LengthMismatch(loc_len, FRU_LOC_CODE_MAX));
        }
        if loc_len % 4 != 0 {
            return Err(Error::LengthMismatch(loc_len, (loc_len + 3) & !3));
        }

        let mut cursor = offset + Self::STATIC_SIZE;
        let location_code = string_field(slice, cursor, loc_len)
            .ok_or(Error::TooShort(cursor + loc_len, slice.len()))?;
        cursor += loc_len;

        let id = if kind & FRU_ID_SUB != 0 {
            let (sub, consumed) = FruIdSubScn::from_slice(slice, cursor)?;
            cursor += consumed;
            Some(sub)
        } else {
            None
        };

        let pe = if kind & FRU_PE_SUB == FRU_PE_SUB {
            let (sub, consumed) = FruPeSubScn::from_slice(slice, cursor)?;
            cursor += consumed;
            Some(sub)
        } else {
            None
        };

        let mr = if kind & FRU_MR_SUB != 0 {
            let (sub, consumed) = FruMrSubScn::from_slice(slice, cursor)?;
            cursor += consumed;
            Some(sub)
        } else {
            None
        };

        let consumed = cursor - offset;
        if consumed != length as usize {
            return Err(Error::LengthMismatch(length as usize, consumed));
        }

        Ok(FruScn {
            length,
            kind,
            priority,
            location_code,
            id,
            pe,
            mr,
        })
    }

    /// Returns the name of the replacement priority.
    pub fn priority_name(&self) -> &'static str {
        match self.priority {
            b'H' => "High",
            b'M' => "Medium",
            b'A' => "Medium group A",
            b'B' => "Medium group B",
            b'C' => "Medium group C",
            b'L' => "Low",
            _ => "Unknown",
        }
    }
}

/// Header shared by the ID, PE and MRU sub-records: a two-byte id, the
/// sub-record length and a flags byte.
struct FruSubHeader {
    kind: u16,
    length: u8,
    flags: u8,
}

impl FruSubHeader {
    const SIZE: usize = 4;

    fn from_slice(slice: &[u8], offset: usize, expected: u16) -> Result<Self, Error> {
        let raw = slice
            .get(offset..offset + Self::SIZE)
            .ok_or(Error::TooShort(offset + Self::SIZE, slice.len()))?;
        let header = FruSubHeader {
            kind: u16::from_be_bytes([raw[0], raw[1]]),
            length: raw[2],
            flags: raw[3],
        };
        if header.kind != expected {
            return Err(Error::UnexpectedSubId(header.kind, expected));
        }
        Ok(header)
    }
}

/// FRU identity sub-record: part number, CCIN and serial number, each
/// gated by a flag bit. The CCIN and serial flags are only legal together
/// with the part-number flag.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FruIdSubScn {
    pub flags: u8,
    pub part: Option<String>,
    pub ccin: Option<String>,
    pub serial: Option<String>,
}

impl FruIdSubScn {
    fn from_slice(slice: &[u8], offset: usize) -> Result<(Self, usize), Error> {
        let header = FruSubHeader::from_slice(slice, offset, FRU_ID_SUB_ID)?;
        let flags = header.flags;
        let mut cursor = offset + FruSubHeader::SIZE;

        let part = if flags & (FRU_ID_FLAG_PART | FRU_ID_FLAG_PROC) != 0 {
            let part = string_field(slice, cursor, 8)
                .ok_or(Error::TooShort(cursor + 8, slice.len()))?;
            cursor += 8;
            Some(part)
        } else {
            None
        };

        let ccin = if flags & FRU_ID_FLAG_CCIN != 0 {
            if flags & FRU_ID_FLAG_PART == 0 {
                return Err(Error::InvalidFlagCombination(flags));
            }
            let ccin = string_field(slice, cursor, 4)
                .ok_or(Error::TooShort(cursor + 4, slice.len()))?;
            cursor += 4;
            Some(ccin)
        } else {
            None
        };

        let serial = if flags & FRU_ID_FLAG_SERIAL != 0 {
            if flags & FRU_ID_FLAG_PART == 0 {
                return Err(Error::InvalidFlagCombination(flags));
            }
            let serial = string_field(slice, cursor, 12)
                .ok_or(Error::TooShort(cursor + 12, slice.len()))?;
            cursor += 12;
            Some(serial)
        } else {
            None
        };

        let consumed = cursor - offset;
        if consumed != header.length as usize {
            return Err(Error::LengthMismatch(header.length as usize, consumed));
        }

        Ok((
            FruIdSubScn {
                flags,
                part,
                ccin,
                serial,
            },
            consumed,
        ))
    }
}

/// FRU PE sub-record: the MTMS of the failing enclosure plus a procedure
/// identifier.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FruPeSubScn {
    pub mtms: Mtms,
    pub pce: String,
}

impl FruPeSubScn {
    /// Sub-header plus MTMS; the procedure string follows.
    const STATIC_SIZE: usize = FruSubHeader::SIZE + Mtms::WIRE_SIZE;
    const PCE_MAX: usize = 32;

    fn from_slice(slice: &[u8], offset: usize) -> Result<(Self, usize), Error> {
        let header = FruSubHeader::from_slice(slice, offset, FRU_PE_SUB_ID)?;
        let length = header.length as usize;
        if length < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(length, Self::STATIC_SIZE));
        }
        let pce_len = length - Self::STATIC_SIZE;
        if pce_len > Self::PCE_MAX {
            return Err(Error::LengthMismatch(length, Self::STATIC_SIZE + Self::PCE_MAX));
        }

        let mtms = Mtms::from_slice(slice, offset + FruSubHeader::SIZE)
            .ok_or(Error::TooShort(offset + Self::STATIC_SIZE, slice.len()))?;
        let pce = string_field(slice, offset + Self::STATIC_SIZE, pce_len)
            .ok_or(Error::TooShort(offset + length, slice.len()))?;

        Ok((FruPeSubScn { mtms, pce }, length))
    }
}

/// One manageable resource unit entry.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Mru {
    pub priority: u8,
    pub id: u32,
}

impl Mru {
    const WIRE_SIZE: usize = 8;
}

/// FRU MRU sub-record: up to [FRU_MRU_MAX] priority/id pairs; the count is
/// embedded in the low nibble of the flags byte.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FruMrSubScn {
    pub flags: u8,
    pub mrus: Vec<Mru>,
}

impl FruMrSubScn {
    fn from_slice(slice: &[u8], offset: usize) -> Result<(Self, usize), Error> {
        let header = FruSubHeader::from_slice(slice, offset, FRU_MR_SUB_ID)?;
        let count = (header.flags & 0x0F) as usize;
        let expected = FruSubHeader::SIZE + 4 + count * Mru::WIRE_SIZE;
        if header.length as usize != expected {
            return Err(Error::LengthMismatch(header.length as usize, expected));
        }

        let mut mrus = Vec::new();
        let base = offset + FruSubHeader::SIZE + 4;
        for i in 0..count {
            let entry = base + i * Mru::WIRE_SIZE;
            let priority = *slice
                .get(entry + 3)
                .ok_or(Error::TooShort(entry + Mru::WIRE_SIZE, slice.len()))?;
            let id = be_u32(slice, entry + 4)
                .ok_or(Error::TooShort(entry + Mru::WIRE_SIZE, slice.len()))?;
            mrus.push(Mru { priority, id });
        }

        Ok((FruMrSubScn { flags: header.flags, mrus }, expected))
    }
}
