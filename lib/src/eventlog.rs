// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! The event-log container and the section walker that fills it.

use crate::error::Error;
use crate::esel;
use crate::header::{SECTION_HEADER_SIZE, SectionHeader, Tag, tags};
use crate::schema::{self, ValidationFinding};
use crate::section::{PrivateHeaderScn, Section, UserHeaderScn};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One slot of the decoded log.
///
/// A slot stays in the container even when its section could not be
/// decoded, so the container always has exactly as many entries as the
/// private header declared: sections lost to truncation or to a local
/// decode failure are explicit absences, never silently dropped.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Entry {
    /// Tag from the section header; [`None`] when the log was truncated
    /// before this slot's header.
    pub tag: Option<Tag>,
    /// The decoded section; [`None`] when it could not be decoded.
    pub section: Option<Section>,
}

impl Entry {
    fn absent(tag: Option<Tag>) -> Self {
        Entry { tag, section: None }
    }

    /// Returns the tag if this slot holds a decoded section.
    pub fn present_tag(&self) -> Option<Tag> {
        self.section.as_ref().map(|section| section.header().tag)
    }
}

/// An ordered container of decoded event-log sections, insertion order
/// being parse order.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EventLog {
    pub entries: Vec<Entry>,
}

impl EventLog {
    /// Decodes a complete event log from a byte buffer and validates it
    /// against the section schema.
    ///
    /// An optional eSEL wrapper is stripped first. The log must open with
    /// a decodable private header; everything after that is decoded
    /// tolerantly: unknown tags are preserved, sections that fail to
    /// decode become absent entries, and a truncated buffer yields a
    /// container padded with absent entries up to the declared section
    /// count. Only a log whose framing cannot be trusted at all (a corrupt
    /// length field, or no decodable private header) is rejected outright.
    ///
    /// Schema violations do not fail the decode; they are returned as
    /// findings next to the container.
    pub fn from_slice(bytes: &[u8]) -> Result<(Self, Vec<ValidationFinding>), Error> {
        let bytes = &bytes[esel::payload_offset(bytes)..];

        let header = SectionHeader::from_slice(bytes)?;
        if header.tag != tags::PRIVATE_HEADER {
            return Err(Error::MissingPrivateHeader(header.tag));
        }

        // The private header carries the declared section count; nothing
        // can proceed without it.
        let private_hdr = PrivateHeaderScn::from_slice(header, section_slice(bytes, 0, &header))?;
        let scn_count = (private_hdr.scn_count as usize).max(1);
        log::debug!(
            "Log {:#010x} declares {scn_count} sections",
            private_hdr.log_entry_id
        );

        let mut entries = Vec::new();
        entries
            .try_reserve(scn_count)
            .map_err(|_| Error::AllocationFailure)?;

        let mut offset = header.section_size();
        entries.push(Entry {
            tag: Some(tags::PRIVATE_HEADER),
            section: Some(Section::PrivateHeader(private_hdr)),
        });

        while entries.len() < scn_count {
            if bytes.len().saturating_sub(offset) < SECTION_HEADER_SIZE {
                log::warn!(
                    "Log truncated: {} of {scn_count} declared sections present",
                    entries.len()
                );
                break;
            }

            // A corrupt length field poisons the offset bookkeeping for
            // everything that follows; the whole walk fails.
            let header = SectionHeader::from_slice(&bytes[offset..])?;

            match Section::from_slice(header, section_slice(bytes, offset, &header)) {
                Ok(section) => {
                    log::debug!("Decoded section {}", header.tag);
                    entries.push(Entry {
                        tag: Some(header.tag),
                        section: Some(section),
                    });
                }
                Err(err) => {
                    log::warn!("Cannot decode {} section: {err}", header.tag);
                    entries.push(Entry::absent(Some(header.tag)));
                }
            }

            // Advance by the declared length even when the section body
            // was undecodable; the length field itself was sane.
            offset += header.section_size();
        }

        if entries.len() == scn_count && offset < bytes.len() {
            log::debug!(
                "{} bytes of trailing data after the last declared section",
                bytes.len() - offset
            );
        }

        while entries.len() < scn_count {
            entries.push(Entry::absent(None));
        }

        let log = EventLog { entries };
        let findings = schema::validate(&log.entries);
        for finding in findings.iter() {
            log::warn!("Schema violation: {finding}");
        }

        Ok((log, findings))
    }

    /// Returns true if a decoded section with the given tag exists.
    pub fn has(&self, tag: Tag) -> bool {
        self.get_nth(tag, 0).is_some()
    }

    /// Returns the `n`th (zero-based) decoded section carrying `tag`, in
    /// parse order. Repeated tags, like secondary SRCs or user-data
    /// sections, are disambiguated by `n`.
    pub fn get_nth(&self, tag: Tag, n: usize) -> Option<&Section> {
        self.sections()
            .filter(|section| section.header().tag == tag)
            .nth(n)
    }

    /// Iterates over the decoded sections in parse order, skipping absent
    /// entries.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().filter_map(|entry| entry.section.as_ref())
    }

    /// Convenience accessor for the user header, the section consumers
    /// interrogate first.
    pub fn user_header(&self) -> Option<&UserHeaderScn> {
        self.sections().find_map(|section| match section {
            Section::UserHeader(scn) => Some(scn),
            _ => None,
        })
    }
}

/// Bounds one section's bytes: from its header to its declared end, or to
/// the end of the buffer, whichever comes first. Decoders can therefore
/// never read past the section they were handed.
fn section_slice<'a>(bytes: &'a [u8], offset: usize, header: &SectionHeader) -> &'a [u8] {
    let end = (offset + header.section_size()).min(bytes.len());
    &bytes[offset..end]
}
