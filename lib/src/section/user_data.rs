// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Free-form user data sections ("UD" and "ED").

use crate::error::Error;
use crate::header::{SECTION_HEADER_SIZE, SectionHeader};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// User-defined data section: an opaque payload owned by the log creator.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct UserDataScn {
    pub hdr: SectionHeader,
    pub data: Vec<u8>,
}

impl UserDataScn {
    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        let data = slice
            .get(SECTION_HEADER_SIZE..hdr.section_size())
            .ok_or(Error::TooShort(hdr.section_size(), slice.len()))?;
        Ok(UserDataScn {
            hdr,
            data: data.to_vec(),
        })
    }
}

/// Extended user data section: like "UD" but stamped with the id of the
/// creating component.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ExtendedUserDataScn {
    pub hdr: SectionHeader,
    pub creator_id: u8,
    pub data: Vec<u8>,
}

impl ExtendedUserDataScn {
    pub const STATIC_SIZE: usize = 12;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }
        let data = slice
            .get(Self::STATIC_SIZE..hdr.section_size())
            .ok_or(Error::TooShort(hdr.section_size(), slice.len()))?;
        Ok(ExtendedUserDataScn {
            hdr,
            creator_id: slice[8],
            data: data.to_vec(),
        })
    }
}
