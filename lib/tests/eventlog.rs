// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

mod common;

use opal_elog::prelude::*;

#[test]
fn private_header_only() {
    let buf = common::private_hdr_scn(1);
    let (log, findings) = EventLog::from_slice(&buf).unwrap();

    assert_eq!(log.entries.len(), 1);
    assert!(log.has(tags::PRIVATE_HEADER));
    // No error severity was reported, so the error-conditional schema
    // requirements stay dormant.
    assert!(findings.is_empty());
}

#[test]
fn error_severity_triggers_requirements() {
    let mut buf = common::private_hdr_scn(2);
    buf.extend_from_slice(&common::user_hdr_scn(0x40));
    let (log, findings) = EventLog::from_slice(&buf).unwrap();

    assert!(log.user_header().unwrap().is_error());
    assert_eq!(
        findings,
        vec![ValidationFinding::MissingSection(tags::PRIMARY_SRC)]
    );
}

#[test]
fn informational_severity_requires_nothing() {
    let mut buf = common::private_hdr_scn(2);
    buf.extend_from_slice(&common::user_hdr_scn(0x00));
    let (log, findings) = EventLog::from_slice(&buf).unwrap();

    assert!(!log.user_header().unwrap().is_error());
    assert!(findings.is_empty());
}

#[test]
fn complete_error_log() {
    let mut buf = common::private_hdr_scn(4);
    buf.extend_from_slice(&common::user_hdr_scn(0x40));
    buf.extend_from_slice(&common::src_scn(b"PS"));
    buf.extend_from_slice(&common::user_data_scn(b"debug blob"));
    let (log, findings) = EventLog::from_slice(&buf).unwrap();

    assert_eq!(log.entries.len(), 4);
    assert!(log.entries.iter().all(|entry| entry.section.is_some()));
    assert!(findings.is_empty());

    let Some(Section::Src(src)) = log.get_nth(tags::PRIMARY_SRC, 0) else {
        panic!("no primary SRC");
    };
    assert_eq!(src.primary_refcode, "BB821410");
}

#[test]
fn truncated_log_is_padded() {
    let buf = common::private_hdr_scn(3);
    let (log, findings) = EventLog::from_slice(&buf).unwrap();

    assert_eq!(log.entries.len(), 3);
    assert!(log.entries[0].section.is_some());
    assert!(log.entries[1].section.is_none());
    assert!(log.entries[1].tag.is_none());
    assert!(log.entries[2].section.is_none());
    assert!(findings.is_empty());
}

#[test]
fn oversized_section_becomes_absent() {
    // The second section declares four more bytes than the buffer holds:
    // that section fails to decode, but the walk and the private header
    // survive.
    let mut buf = common::private_hdr_scn(2);
    let mut src = common::src_scn(b"PS");
    src[2..4].copy_from_slice(&84u16.to_be_bytes());
    src[14..16].copy_from_slice(&84u16.to_be_bytes());
    buf.extend_from_slice(&src);

    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    assert_eq!(log.entries.len(), 2);
    assert!(log.entries[0].section.is_some());
    assert_eq!(log.entries[1].tag, Some(tags::PRIMARY_SRC));
    assert!(log.entries[1].section.is_none());
    assert!(findings.is_empty());
}

#[test]
fn walk_continues_past_an_undecodable_section() {
    // The user header declares 32 bytes where the format wants 24: the
    // section is rejected, but its length field still frames the walk, so
    // the section after it decodes.
    let mut buf = common::private_hdr_scn(3);
    let mut bad_uh = common::user_hdr_scn(0x40);
    bad_uh[2..4].copy_from_slice(&32u16.to_be_bytes());
    bad_uh.resize(32, 0);
    buf.extend_from_slice(&bad_uh);
    buf.extend_from_slice(&common::user_data_scn(b"tail"));

    let (log, _) = EventLog::from_slice(&buf).unwrap();
    assert_eq!(log.entries.len(), 3);
    assert_eq!(log.entries[1].tag, Some(tags::USER_HEADER));
    assert!(log.entries[1].section.is_none());

    let Some(Section::UserData(ud)) = log.get_nth(tags::USER_DATA, 0) else {
        panic!("section after the bad one was lost");
    };
    assert_eq!(ud.data, b"tail");
}

#[test]
fn unknown_tags_are_preserved() {
    let mut buf = common::private_hdr_scn(2);
    let mut unknown = common::scn_hdr(b"ZZ", 12);
    unknown.extend_from_slice(&[9, 9, 9, 9]);
    buf.extend_from_slice(&unknown);

    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    let Some(Section::Unknown(scn)) = log.get_nth(Tag(*b"ZZ"), 0) else {
        panic!("unknown section dropped");
    };
    assert_eq!(scn.data, vec![9, 9, 9, 9]);
    assert!(findings.is_empty());
}

#[test]
fn corrupt_length_aborts_the_walk() {
    let mut buf = common::private_hdr_scn(2);
    let mut bad = common::scn_hdr(b"UD", 24);
    bad[2..4].copy_from_slice(&3u16.to_be_bytes());
    bad.resize(24, 0);
    buf.extend_from_slice(&bad);

    assert!(matches!(
        EventLog::from_slice(&buf),
        Err(Error::CorruptHeader(3))
    ));
}

#[test]
fn first_section_must_be_the_private_header() {
    let buf = common::user_hdr_scn(0);
    assert!(matches!(
        EventLog::from_slice(&buf),
        Err(Error::MissingPrivateHeader(tag)) if tag == tags::USER_HEADER
    ));
}

#[test]
fn empty_buffer() {
    assert!(matches!(
        EventLog::from_slice(&[]),
        Err(Error::TooShort(8, 0))
    ));
}

#[test]
fn repeated_tags_are_indexed_in_parse_order() {
    let mut buf = common::private_hdr_scn(3);
    buf.extend_from_slice(&common::user_data_scn(b"first"));
    buf.extend_from_slice(&common::user_data_scn(b"second"));

    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    assert!(findings.is_empty());

    let Some(Section::UserData(first)) = log.get_nth(tags::USER_DATA, 0) else {
        panic!("no first UD");
    };
    let Some(Section::UserData(second)) = log.get_nth(tags::USER_DATA, 1) else {
        panic!("no second UD");
    };
    assert_eq!(first.data, b"first");
    assert_eq!(second.data, b"second");
    assert!(log.get_nth(tags::USER_DATA, 2).is_none());
}

#[test]
fn esel_wrapper_is_stripped() {
    let mut inner = common::private_hdr_scn(2);
    inner.extend_from_slice(&common::user_hdr_scn(0));
    let buf = common::esel_wrap(&inner);

    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    assert_eq!(log.entries.len(), 2);
    assert!(log.has(tags::USER_HEADER));
    assert!(findings.is_empty());
}

#[test]
fn decoding_is_idempotent() {
    let mut buf = common::private_hdr_scn(3);
    buf.extend_from_slice(&common::user_hdr_scn(0x20));
    buf.extend_from_slice(&common::src_scn(b"PS"));

    let (first, first_findings) = EventLog::from_slice(&buf).unwrap();
    let (second, second_findings) = EventLog::from_slice(&buf).unwrap();

    assert_eq!(first.entries.len(), second.entries.len());
    assert_eq!(first_findings, second_findings);
    for (a, b) in first.sections().zip(second.sections()) {
        assert_eq!(a.header().tag, b.header().tag);
        assert_eq!(a.header().length, b.header().length);
    }
    let (Some(Section::Src(a)), Some(Section::Src(b))) = (
        first.get_nth(tags::PRIMARY_SRC, 0),
        second.get_nth(tags::PRIMARY_SRC, 0),
    ) else {
        panic!("missing SRC");
    };
    assert_eq!(a.primary_refcode, b.primary_refcode);
    assert_eq!(a.ext_refcodes, b.ext_refcodes);
}
