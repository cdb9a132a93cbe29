//! Publicly known CSS player keys.
//!
//! Every licensed player carries a handful of these 5-byte keys; the
//! ones below have been public for decades. The encrypted disc-key block
//! holds 409 slots, one per candidate player key, so newly surfaced keys
//! extend the trial loop without any structural change.

use crate::{KEY_SIZE, Key};

/// The publicly known player keys, in trial order.
pub const PLAYER_KEYS: [Key; 32] = [
    [0x01, 0xaf, 0xe3, 0x12, 0x80],
    [0x12, 0x11, 0xca, 0x04, 0x3b],
    [0x14, 0x0c, 0x9e, 0xd0, 0x09],
    [0x14, 0x71, 0x35, 0xba, 0xe2],
    [0x1a, 0xa4, 0x33, 0x21, 0xa6],
    [0x26, 0xec, 0xc4, 0xa7, 0x4e],
    [0x2c, 0xb2, 0xc1, 0x09, 0xee],
    [0x2f, 0x25, 0x9e, 0x96, 0xdd],
    [0x33, 0x2f, 0x49, 0x6c, 0xe0],
    [0x35, 0x5b, 0xc1, 0x31, 0x0f],
    [0x36, 0x67, 0xb2, 0xe3, 0x85],
    [0x39, 0x3d, 0xf1, 0xf1, 0xbd],
    [0x3b, 0x31, 0x34, 0x0d, 0x91],
    [0x45, 0xed, 0x28, 0xeb, 0xd3],
    [0x48, 0xb7, 0x6c, 0xce, 0x69],
    [0x4b, 0x65, 0x0d, 0xc1, 0xee],
    [0x4c, 0xbb, 0xf5, 0x5b, 0x23],
    [0x51, 0x67, 0x67, 0xc5, 0xe0],
    [0x53, 0x94, 0xe1, 0x75, 0xbf],
    [0x57, 0x2c, 0x8b, 0x31, 0xae],
    [0x63, 0xdb, 0x4c, 0x5b, 0x4a],
    [0x7b, 0x1e, 0x5e, 0x2b, 0x57],
    [0x85, 0xf3, 0x85, 0xa0, 0xe0],
    [0xab, 0x1e, 0xe7, 0x7b, 0x72],
    [0xab, 0x36, 0xe3, 0xeb, 0x76],
    [0xb1, 0xb8, 0xf9, 0x38, 0x03],
    [0xb8, 0x5d, 0xd8, 0x53, 0xbd],
    [0xbf, 0x92, 0xc3, 0xb0, 0xe2],
    [0xcf, 0x1a, 0xb2, 0xf8, 0x0a],
    [0xec, 0xa0, 0xcf, 0xb3, 0xff],
    [0xfc, 0x95, 0xa9, 0x87, 0x35],
    [0xd5, 0x0d, 0xb8, 0x09, 0x91],
];

/// Parse a player key from a 10-hex-digit string.
pub fn parse_player_key(input: &str) -> Result<Key, String> {
    let input = input.trim();
    let bytes = hex::decode(input).map_err(|e| format!("invalid hex: {e}"))?;
    if bytes.len() != KEY_SIZE {
        return Err(format!(
            "player key must be {KEY_SIZE} bytes, got {}",
            bytes.len()
        ));
    }
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    Ok(key)
}
