// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Extended header section ("EH"): firmware versions and symptom id.

use crate::codec::{Datetime, string_field};
use crate::error::Error;
use crate::header::SectionHeader;
use crate::section::mtms::Mtms;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Extended header section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ExtendedHeaderScn {
    pub hdr: SectionHeader,
    pub mtms: Mtms,
    pub opal_release_version: String,
    pub opal_subsys_version: String,
    pub event_ref_datetime: Datetime,
    /// Symptom id; its wire length lives in a dedicated sub-field, not in
    /// the section length.
    pub opal_symid: String,
}

impl ExtendedHeaderScn {
    /// Size of everything before the variable-length symptom id.
    pub const STATIC_SIZE: usize = 74;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }
        if slice.len() < Self::STATIC_SIZE {
            return Err(Error::TooShort(Self::STATIC_SIZE, slice.len()));
        }

        let symid_len = slice[73] as usize;
        if Self::STATIC_SIZE + symid_len > hdr.section_size() {
            return Err(Error::LengthMismatch(
                hdr.section_size(),
                Self::STATIC_SIZE + symid_len,
            ));
        }

        Self::decode(hdr, slice, symid_len)
            .ok_or(Error::TooShort(Self::STATIC_SIZE + symid_len, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8], symid_len: usize) -> Option<Self> {
        Some(ExtendedHeaderScn {
            hdr,
            mtms: Mtms::from_slice(slice, 8)?,
            opal_release_version: string_field(slice, 28, 16)?,
            opal_subsys_version: string_field(slice, 44, 16)?,
            event_ref_datetime: Datetime::from_slice(slice, 62)?,
            opal_symid: string_field(slice, Self::STATIC_SIZE, symid_len)?,
        })
    }
}
