// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! EPOW section ("EP"): environmental or power warning.

use crate::codec::{be_u16, be_u32};
use crate::error::Error;
use crate::header::SectionHeader;

/// EPOW section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EpowScn {
    pub hdr: SectionHeader,
    pub sensor_value: u8,
    pub modifier: u8,
    pub ext_modifier: u16,
    pub reason: u32,
}

impl EpowScn {
    pub const SIZE: usize = 16;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        Self::decode(hdr, slice).ok_or(Error::TooShort(Self::SIZE, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8]) -> Option<Self> {
        Some(EpowScn {
            hdr,
            sensor_value: *slice.get(8)?,
            modifier: *slice.get(9)?,
            ext_modifier: be_u16(slice, 10)?,
            reason: be_u32(slice, 12)?,
        })
    }
}
