// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Decoder and structural validator for OPAL platform error-event logs.
//!
//! The library turns the raw PEL-style binary logs emitted by POWER platform
//! firmware into a typed, navigable [EventLog], and checks the decoded
//! sections against a declarative schema describing which sections are
//! required, how many of each may appear, and in which position.
//!
//! The core is a pure transform over a caller-supplied byte slice: it
//! performs no I/O, copies every variable-length payload out of the input
//! buffer, and tolerates truncated, unknown, and malformed sections without
//! reading outside the supplied bounds.
//!
//! ```
//! use opal_elog::prelude::*;
//!
//! // A log holding a single private header section.
//! let mut buf = vec![0u8; 48];
//! buf[0..2].copy_from_slice(b"PH");
//! buf[2..4].copy_from_slice(&48u16.to_be_bytes());
//! buf[27] = 1; // declared section count
//!
//! let (log, findings) = EventLog::from_slice(&buf).unwrap();
//! assert!(log.has(tags::PRIVATE_HEADER));
//! assert!(findings.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod codec;
pub mod error;
pub mod esel;
pub mod eventlog;
pub mod header;
pub mod prelude;
pub mod schema;
pub mod section;
mod utils;

pub use crate::error::Error;
pub use crate::eventlog::EventLog;

/// Largest event log the platform firmware will hand out.
///
/// Callers sizing a read buffer for a log source can rely on this bound; the
/// decoder itself accepts any slice length.
pub const ELOG_MAX_SIZE: usize = 16 * 1024;
