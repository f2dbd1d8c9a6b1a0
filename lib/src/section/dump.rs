// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Dump locator section ("DH"): where the platform stored a related dump.

use crate::codec::{be_u32, be_u64, string_field};
use crate::error::Error;
use crate::header::SectionHeader;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Dump locator section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct DumpLocatorScn {
    pub hdr: SectionHeader,
    pub dump_id: u32,
    pub flags: u8,
    pub dump_size: u64,
    pub dump_location: String,
}

impl DumpLocatorScn {
    pub const STATIC_SIZE: usize = 24;
    /// Longest dump location string the format allows.
    pub const LOCATION_MAX: usize = 40;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }

        let location_len = hdr.section_size() - Self::STATIC_SIZE;
        if location_len > Self::LOCATION_MAX {
            return Err(Error::LengthMismatch(
                hdr.section_size(),
                Self::STATIC_SIZE + Self::LOCATION_MAX,
            ));
        }

        Self::decode(hdr, slice, location_len)
            .ok_or(Error::TooShort(hdr.section_size(), slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8], location_len: usize) -> Option<Self> {
        Some(DumpLocatorScn {
            hdr,
            dump_id: be_u32(slice, 8)?,
            flags: *slice.get(12)?,
            dump_size: be_u64(slice, 16)?,
            dump_location: string_field(slice, Self::STATIC_SIZE, location_len)?,
        })
    }
}
