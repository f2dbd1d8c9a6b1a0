// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

mod common;

use opal_elog::prelude::*;
use opal_elog::schema;

#[test]
fn lookup() {
    let entry = schema::lookup(tags::PRIVATE_HEADER).unwrap();
    assert_eq!(entry.requirement, schema::Requirement::Always);
    assert_eq!(entry.position, 1);
    assert_eq!(entry.max, Some(1));

    let entry = schema::lookup(tags::SECONDARY_SRC).unwrap();
    assert_eq!(entry.requirement, schema::Requirement::Never);
    assert_eq!(entry.max, None);

    assert!(schema::lookup(Tag(*b"ZZ")).is_none());
}

#[test]
fn position_constraint() {
    // The user header belongs at position 2; shove a user-data section in
    // between.
    let mut buf = common::private_hdr_scn(3);
    buf.extend_from_slice(&common::user_data_scn(b"squatter"));
    buf.extend_from_slice(&common::user_hdr_scn(0x40));

    let (_, findings) = EventLog::from_slice(&buf).unwrap();
    assert!(findings.contains(&ValidationFinding::WrongPosition(tags::USER_HEADER, 2, 3)));
    assert!(findings.contains(&ValidationFinding::MissingSection(tags::PRIMARY_SRC)));
}

#[test]
fn occurrence_limit() {
    let mut buf = common::private_hdr_scn(3);
    buf.extend_from_slice(&common::mfg_scn());
    buf.extend_from_slice(&common::mfg_scn());

    let (_, findings) = EventLog::from_slice(&buf).unwrap();
    assert_eq!(
        findings,
        vec![ValidationFinding::TooManyOccurrences(
            tags::MANUFACTURING,
            2,
            1
        )]
    );
}

#[test]
fn absent_sections_do_not_count() {
    // A user header that fails to decode must not satisfy the position
    // constraint or the severity probe.
    let mut buf = common::private_hdr_scn(2);
    let mut bad_uh = common::user_hdr_scn(0x40);
    bad_uh[2..4].copy_from_slice(&32u16.to_be_bytes());
    bad_uh.resize(32, 0);
    buf.extend_from_slice(&bad_uh);

    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    assert!(log.user_header().is_none());
    assert!(findings.is_empty());
}

#[test]
fn validation_is_reported_not_fatal() {
    let mut buf = common::private_hdr_scn(2);
    buf.extend_from_slice(&common::user_hdr_scn(0x40));

    // Missing primary SRC: still a decodable, inspectable log.
    let (log, findings) = EventLog::from_slice(&buf).unwrap();
    assert!(!findings.is_empty());
    assert_eq!(log.sections().count(), 2);
}
