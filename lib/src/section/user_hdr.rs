// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! User header section ("UH"): event classification and severity.

use crate::codec::be_u16;
use crate::error::Error;
use crate::header::SectionHeader;

/// User header section
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct UserHeaderScn {
    pub hdr: SectionHeader,
    pub subsystem_id: u8,
    pub event_scope: u8,
    pub event_severity: u8,
    pub event_type: u8,
    pub problem_domain: u8,
    pub problem_vector: u8,
    /// Error action code
    pub action: u16,
}

impl UserHeaderScn {
    pub const SIZE: usize = 24;

    pub fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        if hdr.section_size() != Self::SIZE {
            return Err(Error::LengthMismatch(hdr.section_size(), Self::SIZE));
        }
        Self::decode(hdr, slice).ok_or(Error::TooShort(Self::SIZE, slice.len()))
    }

    fn decode(hdr: SectionHeader, slice: &[u8]) -> Option<Self> {
        Some(UserHeaderScn {
            hdr,
            subsystem_id: *slice.get(8)?,
            event_scope: *slice.get(9)?,
            event_severity: *slice.get(10)?,
            event_type: *slice.get(11)?,
            problem_domain: *slice.get(16)?,
            problem_vector: *slice.get(17)?,
            action: be_u16(slice, 18)?,
        })
    }

    /// A zero severity marks an informational log; anything else reports
    /// an error and triggers the error-conditional schema requirements.
    pub fn is_error(&self) -> bool {
        self.event_severity != 0
    }

    /// Returns the name of the severity class.
    pub fn severity_name(&self) -> &'static str {
        match self.event_severity & 0xF0 {
            0x00 => "Informational",
            0x10 => "Recovered",
            0x20 => "Predictive",
            0x40 => "Unrecoverable",
            0x50 => "Critical",
            0x60 => "Diagnostic",
            0x70 => "Symptom",
            _ => "Unknown",
        }
    }

    /// Returns the name of the subsystem that reported the event.
    pub fn subsystem_name(&self) -> &'static str {
        match self.subsystem_id & 0xF0 {
            0x10 => "Processor",
            0x20 => "Memory",
            0x30 => "I/O Hub",
            0x40 => "I/O Adapter",
            0x50 => "CEC Hardware",
            0x60 => "Power/Cooling",
            0x70 => "Other Subsystem",
            0x80 => "Surveillance",
            0x90 => "Platform Firmware",
            0xA0 => "Software",
            0xB0 => "External",
            _ => "Unknown",
        }
    }
}
