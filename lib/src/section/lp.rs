// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Logical partition ("LP") and logical resource ("LR") sections.

use crate::codec::{be_u16, be_u32, string_field};
use crate::error::Error;
use crate::header::SectionHeader;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Logical partition section: the primary partition plus the list of
/// partitions targeted by the event.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct LogicalPartitionScn {
    pub hdr: SectionHeader,
    pub primary: u16,
    pub partition_id: u32,
    pub name: String,
    /// Targeted partition ids; the count lives in a sub-field.
    pub lps: Vec<u16>,
}

impl LogicalPartitionScn {
    pub const STATIC_SIZE: usize = 16;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }
        if slice.len() < Self::STATIC_SIZE {
            return Err(Error::TooShort(Self::STATIC_SIZE, slice.len()));
        }

        let name_len = slice[10] as usize;
        let lp_count = slice[11] as usize;
        let expected = Self::STATIC_SIZE + name_len + lp_count * 2;
        if expected > hdr.section_size() {
            return Err(Error::LengthMismatch(hdr.section_size(), expected));
        }

        Self::decode(hdr, slice, name_len, lp_count)
            .ok_or(Error::TooShort(expected, slice.len()))
    }

    fn decode(
        hdr: SectionHeader,
        slice: &[u8],
        name_len: usize,
        lp_count: usize,
    ) -> Option<Self> {
        let lps_offset = Self::STATIC_SIZE + name_len;
        let lps = (0..lp_count)
            .map(|i| be_u16(slice, lps_offset + i * 2))
            .collect::<Option<Vec<u16>>>()?;

        Some(LogicalPartitionScn {
            hdr,
            primary: be_u16(slice, 8)?,
            partition_id: be_u32(slice, 12)?,
            name: string_field(slice, Self::STATIC_SIZE, name_len)?,
            lps,
        })
    }
}

/// Logical resource identification section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct LogicalResourceScn {
    pub hdr: SectionHeader,
    pub resource: u8,
    pub capacity: u16,
    pub shared: u32,
    pub memory_addr: u32,
}

impl LogicalResourceScn {
    pub const SIZE: usize = 20;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        Self::decode(hdr, slice).ok_or(Error::TooShort(Self::SIZE, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8]) -> Option<Self> {
        Some(LogicalResourceScn {
            hdr,
            resource: *slice.get(8)?,
            capacity: be_u16(slice, 10)?,
            shared: be_u32(slice, 12)?,
            memory_addr: be_u32(slice, 16)?,
        })
    }
}
