// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Private header section ("PH"): the anchor section every log starts with.

use crate::codec::{Datetime, be_u32};
use crate::error::Error;
use crate::header::SectionHeader;

/// Creator ids carried in the private header.
pub mod creators {
    pub const SAPPHIRE: u8 = b'K';
    pub const POWERNV: u8 = b'P';
}

/// Private header section. Carries the log identifiers and, crucially for
/// the walker, the total number of sections the log claims to contain.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PrivateHeaderScn {
    pub hdr: SectionHeader,
    pub create_datetime: Datetime,
    pub commit_datetime: Datetime,
    pub creator_id: u8,
    /// Number of sections in the log, this one included.
    pub scn_count: u8,
    pub creator_subid_hi: u32,
    pub creator_subid_lo: u32,
    /// Platform log id
    pub plid: u32,
    pub log_entry_id: u32,
}

impl PrivateHeaderScn {
    pub const SIZE: usize = 48;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        Self::decode(hdr, slice).ok_or(Error::TooShort(Self::SIZE, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8]) -> Option<Self> {
        Some(PrivateHeaderScn {
            hdr,
            create_datetime: Datetime::from_slice(slice, 8)?,
            commit_datetime: Datetime::from_slice(slice, 16)?,
            creator_id: *slice.get(24)?,
            scn_count: *slice.get(27)?,
            creator_subid_hi: be_u32(slice, 32)?,
            creator_subid_lo: be_u32(slice, 36)?,
            plid: be_u32(slice, 40)?,
            log_entry_id: be_u32(slice, 44)?,
        })
    }

    /// Returns the name of the firmware component that created the log.
    pub fn creator_name(&self) -> &'static str {
        match self.creator_id {
            creators::SAPPHIRE => "Sapphire",
            creators::POWERNV => "PowerNV",
            _ => "Unknown",
        }
    }
}
