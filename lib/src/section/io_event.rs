// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! I/O event section ("IE").

use crate::codec::be_u32;
use crate::error::Error;
use crate::header::SectionHeader;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// I/O event section. RPC pass-through events carry an opaque RPC payload
/// whose length lives in a sub-field.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct IoEventScn {
    pub hdr: SectionHeader,
    pub event_type: u8,
    pub scope: u8,
    pub event_subtype: u8,
    /// Dynamic reconfiguration connector of the implicated slot
    pub drc: u32,
    pub rpc_data: Vec<u8>,
}

impl IoEventScn {
    pub const STATIC_SIZE: usize = 16;
    /// Longest RPC payload the format allows.
    pub const RPC_MAX: usize = 216;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() < Self::STATIC_SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::STATIC_SIZE));
        }
        if slice.len() < Self::STATIC_SIZE {
            return Err(Error::TooShort(Self::STATIC_SIZE, slice.len()));
        }

        let rpc_len = slice[9] as usize;
        if rpc_len > Self::RPC_MAX {
            return Err(Error::LengthMismatch(rpc_len, Self::RPC_MAX));
        }
        if Self::STATIC_SIZE + rpc_len > hdr.section_size() {
            return Err(Error::LengthMismatch(
                hdr.section_size(),
                Self::STATIC_SIZE + rpc_len,
            ));
        }

        let rpc_data = slice
            .get(Self::STATIC_SIZE..Self::STATIC_SIZE + rpc_len)
            .ok_or(Error::TooShort(Self::STATIC_SIZE + rpc_len, slice.len()))?;

        Ok(IoEventScn {
            hdr,
            event_type: slice[8],
            scope: slice[10],
            event_subtype: slice[11],
            drc: be_u32(slice, 12).unwrap_or_default(),
            rpc_data: rpc_data.to_vec(),
        })
    }
}
