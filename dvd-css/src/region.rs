//! Region compatibility between a drive and a disc.

/// Regional playback control state reported by the drive.
///
/// Parsed from the RPC structure by the transport layer; only the field
/// needed for the compatibility check is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcState {
    /// Bitmask of the eight playback regions; a set bit marks the region
    /// as blocked by the drive.
    pub region_mask: u8,
}

/// Copyright fields from the disc lead-in area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadInCopyright {
    /// Copy protection system in use (0 = none, 1 = CSS/CPPM, 2 = CPRM).
    pub protection_system: u8,
    /// Region management byte; a set bit marks the disc for that region.
    pub region_information: u8,
}

/// Check whether a disc is playable in any region the drive permits.
///
/// Discs reporting `0x00` or `0xff` carry no usable region restriction
/// and always pass. Otherwise the disc must be marked for at least one
/// region the drive does not block.
pub fn check_region(rpc: RpcState, copyright: LeadInCopyright) -> bool {
    if copyright.region_information == 0x00 || copyright.region_information == 0xff {
        return true;
    }
    (!rpc.region_mask & copyright.region_information) != 0
}
