// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

use opal_elog::prelude::*;
use std::path::Path;

pub fn decode<O: std::io::Write>(input: &Path, output: O) -> Result<(), Error> {
    let buffer = std::fs::read(input)?;
    let (log, findings) = EventLog::from_slice(&buffer)?;

    let report = serde_json::json!({
        "event_log": log,
        "findings": findings,
    });
    Ok(serde_json::to_writer_pretty(output, &report)?)
}
