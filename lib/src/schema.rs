// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Declarative description of the legal structure of a complete log, and
//! the validation pass that checks a decoded log against it.
//!
//! The table itself is read-only, process-wide data. Per-parse bookkeeping
//! (how many occurrences of a tag are still allowed) lives in a counter map
//! allocated fresh for every validation, so the schema can be shared across
//! parses.

use crate::eventlog::Entry;
use crate::header::{Tag, tags};
use crate::section::Section;
use crate::utils::Map;
#[cfg(not(feature = "std"))]
use alloc::{fmt, vec::Vec};
#[cfg(feature = "std")]
use std::fmt;

/// When a section is required to be present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Never required; purely optional.
    Never,
    /// Required in every log.
    Always,
    /// Required when the log reports an error severity.
    OnError,
}

/// One schema table row.
pub struct SchemaEntry {
    pub tag: Tag,
    pub requirement: Requirement,
    /// 1-based position among the sections actually present; 0 leaves the
    /// position unconstrained.
    pub position: usize,
    /// Maximum legal occurrence count; [`None`] is unbounded.
    pub max: Option<usize>,
}

/// The legal structure of a log: which tags may appear, how often, and
/// where.
pub static SCHEMA: &[SchemaEntry] = &[
    SchemaEntry {
        tag: tags::PRIVATE_HEADER,
        requirement: Requirement::Always,
        position: 1,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::USER_HEADER,
        requirement: Requirement::OnError,
        position: 2,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::PRIMARY_SRC,
        requirement: Requirement::OnError,
        position: 3,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::SECONDARY_SRC,
        requirement: Requirement::Never,
        position: 0,
        max: None,
    },
    SchemaEntry {
        tag: tags::EXTENDED_HEADER,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::MTMS,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::DUMP_LOCATOR,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::EXTENDED_USER_DATA,
        requirement: Requirement::Never,
        position: 0,
        max: None,
    },
    SchemaEntry {
        tag: tags::ENVIRONMENTAL,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::EPOW,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::IO_EVENT,
        requirement: Requirement::Never,
        position: 0,
        max: None,
    },
    SchemaEntry {
        tag: tags::LOGICAL_PARTITION,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::LOGICAL_RESOURCE,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::MANUFACTURING,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::CALL_HOME,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
    SchemaEntry {
        tag: tags::USER_DATA,
        requirement: Requirement::Never,
        position: 0,
        max: None,
    },
    SchemaEntry {
        tag: tags::HYPERVISOR_ID,
        requirement: Requirement::Never,
        position: 0,
        max: Some(1),
    },
];

/// Looks a tag up in the schema table. Unknown tags have no entry and no
/// constraints.
pub fn lookup(tag: Tag) -> Option<&'static SchemaEntry> {
    SCHEMA.iter().find(|entry| entry.tag == tag)
}

/// One structural violation found after a complete walk. Findings never
/// invalidate already-decoded sections; a noncompliant log remains a valid,
/// inspectable result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum ValidationFinding {
    /// A required section was never observed. Carries the tag.
    MissingSection(Tag),
    /// A tag appeared more often than the schema allows.
    /// Carries (tag, observed, max).
    TooManyOccurrences(Tag, usize, usize),
    /// A position-constrained tag was first observed at the wrong ordinal
    /// position among the present sections. Carries (tag, expected, found).
    WrongPosition(Tag, usize, usize),
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationFinding::MissingSection(tag) => {
                write!(f, "Required {tag} section is missing")
            }
            ValidationFinding::TooManyOccurrences(tag, observed, max) => {
                write!(f, "{tag} section appears {observed} times, at most {max} allowed")
            }
            ValidationFinding::WrongPosition(tag, expected, found) => {
                write!(
                    f,
                    "{tag} section found at position {found}, schema requires {expected}"
                )
            }
        }
    }
}

/// Checks a walked log against the schema table.
///
/// The error-conditional requirements apply only when the decoded user
/// header reports a non-zero severity; a log with no user header is
/// treated as informational.
pub fn validate(entries: &[Entry]) -> Vec<ValidationFinding> {
    let is_error = entries
        .iter()
        .filter_map(|entry| match entry.section {
            Some(Section::UserHeader(ref scn)) => Some(scn.is_error()),
            _ => None,
        })
        .next()
        .unwrap_or(false);

    let mut findings = Vec::new();

    // Fresh occurrence counters for this parse; the static table is never
    // touched.
    let mut remaining: Map<Tag, usize> = Map::new();
    for entry in SCHEMA {
        if let Some(max) = entry.max {
            remaining.insert(entry.tag, max);
        }
    }

    let mut exhausted: Vec<Tag> = Vec::new();
    for tag in entries.iter().filter_map(|entry| entry.present_tag()) {
        if let Some(left) = remaining.get_mut(&tag) {
            if *left == 0 {
                if !exhausted.contains(&tag) {
                    exhausted.push(tag);
                }
            } else {
                *left -= 1;
            }
        }
    }

    for schema_entry in SCHEMA {
        let tag = schema_entry.tag;
        let observed = entries
            .iter()
            .filter(|entry| entry.present_tag() == Some(tag))
            .count();

        let required = match schema_entry.requirement {
            Requirement::Always => true,
            Requirement::OnError => is_error,
            Requirement::Never => false,
        };
        if required && observed == 0 {
            findings.push(ValidationFinding::MissingSection(tag));
            continue;
        }

        if exhausted.contains(&tag) {
            if let Some(max) = schema_entry.max {
                findings.push(ValidationFinding::TooManyOccurrences(tag, observed, max));
            }
        }

        if schema_entry.position != 0 && observed > 0 {
            let found = entries
                .iter()
                .filter_map(|entry| entry.present_tag())
                .position(|present| present == tag)
                .map(|index| index + 1)
                .unwrap_or_default();
            if found != schema_entry.position {
                findings.push(ValidationFinding::WrongPosition(
                    tag,
                    schema_entry.position,
                    found,
                ));
            }
        }
    }

    findings
}
