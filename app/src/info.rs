// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

use opal_elog::prelude::*;
use std::path::Path;

pub fn info(input: &Path) -> Result<(), Error> {
    let buffer = std::fs::read(input)?;
    let (log, findings) = EventLog::from_slice(&buffer)?;

    if let Some(user_hdr) = log.user_header() {
        println!(
            "{} event reported by {} subsystem\n",
            user_hdr.severity_name(),
            user_hdr.subsystem_name()
        );
    }

    println!("  #   Tag  Section Type        Ver  Sub  Component  Length  Status  ");
    println!("----- ---- ------------------- ---- ---- ---------- ------- --------");
    for (i, entry) in log.entries.iter().enumerate() {
        let tag = entry
            .tag
            .map(|tag| tag.to_string())
            .unwrap_or_else(|| "--".into());

        match entry.section {
            Some(ref section) => {
                let hdr = section.header();
                println!(
                    "{:>4}  {:<4} {:<19} {:>4} {:>4} {:>10} {:>7} {:<8}",
                    i,
                    tag,
                    section.type_name(),
                    hdr.version,
                    hdr.subtype,
                    format!("{:#06x}", hdr.component),
                    hdr.length,
                    "decoded"
                );
                if let Section::Src(src) = section {
                    println!("      `- reference code: {src}");
                }
            }
            None => {
                println!(
                    "{:>4}  {:<4} {:<19} {:>4} {:>4} {:>10} {:>7} {:<8}",
                    i, tag, "-", "-", "-", "-", "-", "absent"
                );
            }
        }
    }

    if !findings.is_empty() {
        println!();
        for finding in findings.iter() {
            println!("Schema violation: {finding}");
        }
    }

    Ok(())
}
