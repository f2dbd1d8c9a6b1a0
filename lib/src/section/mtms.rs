// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Machine type/model and serial number, and the two sections built
//! entirely from it ("MT" and "HM").

use crate::codec::string_field;
use crate::error::Error;
use crate::header::SectionHeader;
#[cfg(not(feature = "std"))]
use alloc::{fmt, string::String};
#[cfg(feature = "std")]
use std::fmt;

/// Machine type/model plus serial number, as embedded in several sections
/// and FRU sub-records.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Mtms {
    pub model: String,
    pub serial: String,
}

impl Mtms {
    pub const WIRE_SIZE: usize = 20;

    /// Decodes an MTMS field: 8 model characters followed by 12 serial
    /// characters, neither NUL-terminated on the wire.
    pub fn from_slice(slice: &[u8], offset: usize) -> Option<Self> {
        Some(Mtms {
            model: string_field(slice, offset, 8)?,
            serial: string_field(slice, offset + 8, 12)?,
        })
    }
}

impl fmt::Display for Mtms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.model, self.serial)
    }
}

/// Machine type/serial section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct MtmsScn {
    pub hdr: SectionHeader,
    pub mtms: Mtms,
}

impl MtmsScn {
    pub const SIZE: usize = 28;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        let mtms =
            Mtms::from_slice(slice, 8).ok_or(Error::TooShort(Self::SIZE, slice.len()))?;
        Ok(MtmsScn { hdr, mtms })
    }
}

/// Hypervisor id section: the MTMS of the managing system.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct HypervisorIdScn {
    pub hdr: SectionHeader,
    pub mtms: Mtms,
}

impl HypervisorIdScn {
    pub const SIZE: usize = 28;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        let mtms =
            Mtms::from_slice(slice, 8).ok_or(Error::TooShort(Self::SIZE, slice.len()))?;
        Ok(HypervisorIdScn { hdr, mtms })
    }
}
