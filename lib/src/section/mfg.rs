// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Manufacturing info section ("MI").

use crate::codec::be_u32;
use crate::error::Error;
use crate::header::SectionHeader;

/// Manufacturing info section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ManufacturingScn {
    pub hdr: SectionHeader,
    pub policy_flags: u32,
}

impl ManufacturingScn {
    pub const SIZE: usize = 12;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        let policy_flags = be_u32(slice, 8).ok_or(Error::TooShort(Self::SIZE, slice.len()))?;
        Ok(ManufacturingScn { hdr, policy_flags })
    }
}
