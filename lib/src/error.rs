// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

use crate::header::Tag;
#[cfg(not(feature = "std"))]
use alloc::fmt;
#[cfg(feature = "std")]
use std::{fmt, io};

/// Errors reported by the event-log decoding functions.
#[derive(Debug)]
pub enum Error {
    /// Fewer bytes are available than the structural minimum of the value
    /// being decoded. Carries (needed, available).
    TooShort(usize, usize),
    /// A declared length disagrees with what the format requires, either
    /// for a fixed-size section or for a sub-record whose parts must add up.
    /// Carries (declared, expected).
    LengthMismatch(usize, usize),
    /// A section header declares a length smaller than the header itself.
    CorruptHeader(u16),
    /// Mutually-dependent flag bits are violated (FRU identity sub-record).
    InvalidFlagCombination(u8),
    /// A sub-record's type tag does not match what its container expected.
    /// Carries (found, expected).
    UnexpectedSubId(u16, u16),
    /// The container for the decoded sections could not be allocated.
    AllocationFailure,
    /// The first section of the log is not a private header.
    MissingPrivateHeader(Tag),
    #[cfg(feature = "serialize")]
    JsonError(serde_json::Error),
    #[cfg(feature = "std")]
    IOError(io::Error),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TooShort(needed, available) => {
                write!(
                    f,
                    "Buffer too short: {needed} bytes needed, {available} available"
                )
            }
            Error::LengthMismatch(declared, expected) => {
                write!(
                    f,
                    "Declared length of {declared} bytes disagrees with the format, which requires {expected}"
                )
            }
            Error::CorruptHeader(length) => {
                write!(f, "Section header declares impossible length {length}")
            }
            Error::InvalidFlagCombination(flags) => {
                write!(f, "Invalid FRU flag combination: {flags:#04x}")
            }
            Error::UnexpectedSubId(found, expected) => {
                write!(
                    f,
                    "Unexpected sub-record id {found:#06x}, expected {expected:#06x}"
                )
            }
            Error::AllocationFailure => write!(f, "Cannot allocate the event-log container"),
            Error::MissingPrivateHeader(tag) => {
                write!(
                    f,
                    "Log starts with a {tag} section instead of a private header"
                )
            }
            #[cfg(feature = "serialize")]
            Error::JsonError(err) => write!(f, "Invalid JSON: {err}"),
            #[cfg(feature = "std")]
            Error::IOError(err) => write!(f, "Encountered IO error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

#[cfg(feature = "serialize")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err)
    }
}
