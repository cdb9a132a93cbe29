//! DVD-Video CSS descrambling.
//!
//! Builds on [`css_crypto`] to run the media side of CSS: unscrambling
//! drive responses with the session bus key, recovering the disc key
//! from the encrypted key block, descrambling sector payloads, and
//! checking region compatibility.
//!
//! The crate consumes already-fetched response buffers; SCSI/MMC
//! transport and the authentication handshake live with the caller.

pub mod disc_key;
pub mod error;
pub mod region;
pub mod response;
pub mod sector;

pub use disc_key::decrypt_disc_key;
pub use error::{Error, Result};
pub use region::{LeadInCopyright, RpcState, check_region};
pub use response::{DiscKeyResponse, TitleKeyResponse, decode_disc_key, decode_title_key};
pub use sector::decrypt_sectors;

/// Size of one raw DVD sector.
pub const SECTOR_SIZE: usize = 2048;

/// Number of 5-byte slots in the encrypted disc-key block.
pub const DISC_KEY_SLOTS: usize = 409;
