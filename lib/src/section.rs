// Copyright (C) 2025 IBM Corporation
// SPDX-License-Identifier: MIT

//! Typed representations of the event-log sections and the tag-keyed
//! dispatch that decodes them.

pub mod call_home;
pub mod dump;
pub mod env;
pub mod epow;
pub mod extd_hdr;
pub mod io_event;
pub mod lp;
pub mod mfg;
pub mod mtms;
pub mod private_hdr;
pub mod src;
pub mod user_data;
pub mod user_hdr;

use crate::error::Error;
use crate::header::{SECTION_HEADER_SIZE, SectionHeader, tags};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub use call_home::CallHomeScn;
pub use dump::DumpLocatorScn;
pub use env::{EnvReading, EnvironmentalScn};
pub use epow::EpowScn;
pub use extd_hdr::ExtendedHeaderScn;
pub use io_event::IoEventScn;
pub use lp::{LogicalPartitionScn, LogicalResourceScn};
pub use mfg::ManufacturingScn;
pub use mtms::{HypervisorIdScn, Mtms, MtmsScn};
pub use private_hdr::PrivateHeaderScn;
pub use src::{FruScn, SrcScn};
pub use user_data::{ExtendedUserDataScn, UserDataScn};
pub use user_hdr::UserHeaderScn;

/// One decoded event-log section.
///
/// Unrecognized tags are preserved as [Section::Unknown] rather than
/// rejected, so logs from newer firmware remain inspectable.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Section {
    PrivateHeader(PrivateHeaderScn),
    UserHeader(UserHeaderScn),
    /// Primary or secondary SRC; the two tags share one layout.
    Src(SrcScn),
    ExtendedHeader(ExtendedHeaderScn),
    Mtms(MtmsScn),
    DumpLocator(DumpLocatorScn),
    UserData(UserDataScn),
    ExtendedUserData(ExtendedUserDataScn),
    Environmental(EnvironmentalScn),
    Epow(EpowScn),
    IoEvent(IoEventScn),
    LogicalPartition(LogicalPartitionScn),
    LogicalResource(LogicalResourceScn),
    Manufacturing(ManufacturingScn),
    CallHome(CallHomeScn),
    HypervisorId(HypervisorIdScn),
    Unknown(UnknownScn),
}

impl Section {
    /// Decodes one section from `slice`, which must start at the section
    /// header and must not extend past the section's declared length.
    ///
    /// The decoder for the matching tag validates every internally derived
    /// length against both the slice and the declared section size before
    /// copying anything; on failure nothing is returned, never a partially
    /// populated section.
    pub fn from_slice(header: SectionHeader, slice: &[u8]) -> Result<Self, Error> {
        Ok(match header.tag {
            tags::PRIVATE_HEADER => {
                Section::PrivateHeader(PrivateHeaderScn::from_slice(header, slice)?)
            }
            tags::USER_HEADER => Section::UserHeader(UserHeaderScn::from_slice(header, slice)?),
            tags::PRIMARY_SRC | tags::SECONDARY_SRC => {
                Section::Src(SrcScn::from_slice(header, slice)?)
            }
            tags::EXTENDED_HEADER => {
                Section::ExtendedHeader(ExtendedHeaderScn::from_slice(header, slice)?)
            }
            tags::MTMS => Section::Mtms(MtmsScn::from_slice(header, slice)?),
            tags::DUMP_LOCATOR => Section::DumpLocator(DumpLocatorScn::from_slice(header, slice)?),
            tags::USER_DATA => Section::UserData(UserDataScn::from_slice(header, slice)?),
            tags::EXTENDED_USER_DATA => {
                Section::ExtendedUserData(ExtendedUserDataScn::from_slice(header, slice)?)
            }
            tags::ENVIRONMENTAL => {
                Section::Environmental(EnvironmentalScn::from_slice(header, slice)?)
            }
            tags::EPOW => Section::Epow(EpowScn::from_slice(header, slice)?),
            tags::IO_EVENT => Section::IoEvent(IoEventScn::from_slice(header, slice)?),
            tags::LOGICAL_PARTITION => {
                Section::LogicalPartition(LogicalPartitionScn::from_slice(header, slice)?)
            }
            tags::LOGICAL_RESOURCE => {
                Section::LogicalResource(LogicalResourceScn::from_slice(header, slice)?)
            }
            tags::MANUFACTURING => {
                Section::Manufacturing(ManufacturingScn::from_slice(header, slice)?)
            }
            tags::CALL_HOME => Section::CallHome(CallHomeScn::from_slice(header, slice)?),
            tags::HYPERVISOR_ID => {
                Section::HypervisorId(HypervisorIdScn::from_slice(header, slice)?)
            }
            _ => Section::Unknown(UnknownScn::from_slice(header, slice)),
        })
    }

    /// Returns the framing header of the section.
    pub fn header(&self) -> &SectionHeader {
        match self {
            Section::PrivateHeader(scn) => &scn.hdr,
            Section::UserHeader(scn) => &scn.hdr,
            Section::Src(scn) => &scn.hdr,
            Section::ExtendedHeader(scn) => &scn.hdr,
            Section::Mtms(scn) => &scn.hdr,
            Section::DumpLocator(scn) => &scn.hdr,
            Section::UserData(scn) => &scn.hdr,
            Section::ExtendedUserData(scn) => &scn.hdr,
            Section::Environmental(scn) => &scn.hdr,
            Section::Epow(scn) => &scn.hdr,
            Section::IoEvent(scn) => &scn.hdr,
            Section::LogicalPartition(scn) => &scn.hdr,
            Section::LogicalResource(scn) => &scn.hdr,
            Section::Manufacturing(scn) => &scn.hdr,
            Section::CallHome(scn) => &scn.hdr,
            Section::HypervisorId(scn) => &scn.hdr,
            Section::Unknown(scn) => &scn.hdr,
        }
    }

    /// Returns a short name for the section type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Section::PrivateHeader(_) => "Private Header",
            Section::UserHeader(_) => "User Header",
            Section::Src(_) => "SRC",
            Section::ExtendedHeader(_) => "Extended Header",
            Section::Mtms(_) => "MTMS",
            Section::DumpLocator(_) => "Dump Locator",
            Section::UserData(_) => "User Data",
            Section::ExtendedUserData(_) => "Extended User Data",
            Section::Environmental(_) => "Environmental Info",
            Section::Epow(_) => "EPOW",
            Section::IoEvent(_) => "I/O Event",
            Section::LogicalPartition(_) => "Logical Partition",
            Section::LogicalResource(_) => "Logical Resource",
            Section::Manufacturing(_) => "Manufacturing Info",
            Section::CallHome(_) => "Call Home",
            Section::HypervisorId(_) => "Hypervisor ID",
            Section::Unknown(_) => "Unknown",
        }
    }
}

/// A section whose tag is not known to this decoder. The raw payload is
/// preserved for inspection.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct UnknownScn {
    pub hdr: SectionHeader,
    pub data: Vec<u8>,
}

impl UnknownScn {
    fn from_slice(hdr: SectionHeader, slice: &[u8]) -> Self {
        let data = slice
            .get(SECTION_HEADER_SIZE..)
            .unwrap_or_default()
            .to_vec();
        UnknownScn { hdr, data }
    }
}
