// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Call-home comment section ("CH").

use crate::codec::string_field;
use crate::error::Error;
use crate::header::{SECTION_HEADER_SIZE, SectionHeader};
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Call-home comment section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct CallHomeScn {
    pub hdr: SectionHeader,
    pub comment: String,
}

impl CallHomeScn {
    /// Longest comment the format allows.
    pub const COMMENT_MAX: usize = 144;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        let comment_len = hdr.payload_size();
        if comment_len > Self::COMMENT_MAX {
            return Err(Error::LengthMismatch(
                hdr.section_size(),
                SECTION_HEADER_SIZE + Self::COMMENT_MAX,
            ));
        }

        let comment = string_field(slice, SECTION_HEADER_SIZE, comment_len)
            .ok_or(Error::TooShort(hdr.section_size(), slice.len()))?;
        Ok(CallHomeScn { hdr, comment })
    }
}
