//! Bus-key descrambling of drive key responses.
//!
//! Key material crossing the bus after authentication is XOR-obfuscated
//! with the 5-byte session bus key, cycled back to front across the
//! payload. The response headers follow the MMC REPORT KEY layout: a
//! big-endian length field, two reserved bytes, then the payload.

use css_crypto::{KEY_SIZE, Key};
use tracing::trace;

use crate::{Error, Result, SECTOR_SIZE};

/// Length of a READ DISC KEY response: 4 header bytes plus the 2048-byte
/// encrypted key block.
pub const DISC_KEY_RESPONSE_SIZE: usize = 4 + SECTOR_SIZE;

/// Length of a REPORT TITLE KEY response.
pub const TITLE_KEY_RESPONSE_SIZE: usize = 12;

/// Decoded READ DISC KEY response.
#[derive(Debug, Clone)]
pub struct DiscKeyResponse {
    /// Length field from the response header.
    pub data_length: u16,
    /// Reserved header bytes.
    pub reserved: [u8; 2],
    /// The unscrambled encrypted disc-key block: 409 5-byte slots.
    pub key_block: [u8; SECTOR_SIZE],
}

/// Decoded REPORT TITLE KEY response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleKeyResponse {
    /// Length field from the response header.
    pub data_length: u16,
    /// Reserved header bytes.
    pub reserved: [u8; 2],
    /// Copyright management information for the title.
    pub cmi: u8,
    /// Title key, still encrypted under the disc key.
    pub key: Key,
    /// Reserved trailer bytes.
    pub trailer: [u8; 2],
}

fn unscramble(payload: &[u8], bus_key: &Key, out: &mut [u8]) {
    for (i, (dst, src)) in out.iter_mut().zip(payload).enumerate() {
        *dst = src ^ bus_key[4 - (i % KEY_SIZE)];
    }
}

/// Decode a READ DISC KEY response, removing the bus-key obfuscation
/// from the 2048-byte key block.
pub fn decode_disc_key(response: &[u8], bus_key: &Key) -> Result<DiscKeyResponse> {
    if response.len() != DISC_KEY_RESPONSE_SIZE {
        return Err(Error::InvalidSize {
            expected: DISC_KEY_RESPONSE_SIZE,
            actual: response.len(),
        });
    }

    let mut key_block = [0u8; SECTOR_SIZE];
    unscramble(&response[4..], bus_key, &mut key_block);
    trace!("unscrambled {} byte disc-key block", key_block.len());

    Ok(DiscKeyResponse {
        data_length: u16::from_be_bytes([response[0], response[1]]),
        reserved: [response[2], response[3]],
        key_block,
    })
}

/// Decode a REPORT TITLE KEY response, removing the bus-key obfuscation
/// from the 5-byte key payload.
pub fn decode_title_key(response: &[u8], bus_key: &Key) -> Result<TitleKeyResponse> {
    if response.len() != TITLE_KEY_RESPONSE_SIZE {
        return Err(Error::InvalidSize {
            expected: TITLE_KEY_RESPONSE_SIZE,
            actual: response.len(),
        });
    }

    let mut key = [0u8; KEY_SIZE];
    unscramble(&response[5..10], bus_key, &mut key);

    Ok(TitleKeyResponse {
        data_length: u16::from_be_bytes([response[0], response[1]]),
        reserved: [response[2], response[3]],
        cmi: response[4],
        key,
        trailer: [response[10], response[11]],
    })
}
