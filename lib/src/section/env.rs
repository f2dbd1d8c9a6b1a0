// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Environmental info section ("EI"): corrosion/temperature readings.

use crate::codec::{be_u16, be_u32, be_u64};
use crate::error::Error;
use crate::header::SectionHeader;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One environmental reading.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EnvReading {
    pub corrosion: u32,
    pub temperature: u16,
    pub rate: u16,
}

impl EnvReading {
    pub const WIRE_SIZE: usize = 8;

    fn from_slice(slice: &[u8], offset: usize) -> Option<Self> {
        Some(EnvReading {
            corrosion: be_u32(slice, offset)?,
            temperature: be_u16(slice, offset + 4)?,
            rate: be_u16(slice, offset + 6)?,
        })
    }
}

/// Environmental info section: a genesis reading plus a run of readings
/// whose count lives in a sub-field of the section.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EnvironmentalScn {
    pub hdr: SectionHeader,
    pub genesis_timestamp: u64,
    pub genesis: EnvReading,
    pub status: u8,
    pub user_data_scn: u8,
    pub readings: Vec<EnvReading>,
}

impl EnvironmentalScn {
    pub const STATIC_SIZE: usize = 28;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }
        if slice.len() < Self::STATIC_SIZE {
            return Err(Error::TooShort(Self::STATIC_SIZE, slice.len()));
        }

        let read_count =
            be_u16(slice, 26).ok_or(Error::TooShort(Self::STATIC_SIZE, slice.len()))? as usize;
        let expected = Self::STATIC_SIZE + read_count * EnvReading::WIRE_SIZE;
        if expected != hdr.section_size() {
            return Err(Error::LengthMismatch(hdr.section_size(), expected));
        }

        Self::decode(hdr, slice, read_count).ok_or(Error::TooShort(expected, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8], read_count: usize) -> Option<Self> {
        let readings = (0..read_count)
            .map(|i| EnvReading::from_slice(slice, Self::STATIC_SIZE + i * EnvReading::WIRE_SIZE))
            .collect::<Option<Vec<EnvReading>>>()?;

        Some(EnvironmentalScn {
            hdr,
            genesis_timestamp: be_u64(slice, 8)?,
            genesis: EnvReading::from_slice(slice, 16)?,
            status: *slice.get(24)?,
            user_data_scn: *slice.get(25)?,
            readings,
        })
    }
}
