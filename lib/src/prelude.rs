// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Convenience re-export of common structs

pub use crate::codec::Datetime;
pub use crate::error::Error;
pub use crate::eventlog::{Entry, EventLog};
pub use crate::header::{SectionHeader, Tag, tags};
pub use crate::schema::ValidationFinding;
pub use crate::section::Section;
