//! CSS cipher primitives for DVD-Video media.
//!
//! This crate implements the Content Scrambling System transforms needed
//! to authenticate with a DVD drive and recover usable keys:
//!
//! - the authentication cipher used during the drive/host handshake
//!   ([`encrypt_key`])
//! - the key cipher that decrypts disc and title keys ([`decrypt_key`],
//!   [`decrypt_title_key`])
//! - the sector keystream that descrambles 2048-byte MPEG-PS sector
//!   payloads ([`descramble_sector`])
//! - the publicly known player keys and a key set for the disc-key trial
//!   loop ([`PlayerKeySet`])
//!
//! All entry points are pure functions over caller-owned buffers. The
//! substitution tables are compile-time constants and safe to share
//! across threads; no operation blocks, allocates beyond its output, or
//! keeps hidden state.

pub mod auth;
pub mod error;
pub mod key_set;
pub mod keys;
pub mod mangle;
pub mod scramble;
mod tables;

pub use auth::{KeyType, encrypt_key};
pub use error::CssError;
pub use key_set::PlayerKeySet;
pub use mangle::{decrypt_key, decrypt_title_key};
pub use scramble::descramble_sector;

/// Length of every CSS key: player, bus, disc, and title keys.
pub const KEY_SIZE: usize = 5;

/// Length of the handshake challenge.
pub const CHALLENGE_SIZE: usize = 10;

/// A 5-byte CSS key.
pub type Key = [u8; KEY_SIZE];

/// Result type for CSS cipher operations.
pub type Result<T> = std::result::Result<T, CssError>;
