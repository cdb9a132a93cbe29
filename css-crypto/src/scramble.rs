//! Per-sector CSS keystream and descrambling.
//!
//! The sector path clocks LFSR-0 with its own tap schedule (bits 0, 5,
//! 14, and 16) and output extraction, and maps the LFSR-17 output through
//! `CSS_TAB5` where the key cipher uses `CSS_TAB4`. The two paths are not
//! interchangeable and are kept as separate code.

use crate::Key;
use crate::tables::{CSS_TAB1, CSS_TAB2, CSS_TAB3, CSS_TAB4, CSS_TAB5};

/// Length of the MPEG-PS pack/system header left untouched at the start
/// of every sector.
pub const SECTOR_HEADER_SIZE: usize = 128;

/// Offset of the five keystream seed bytes inside the sector header.
const SEED_OFFSET: usize = 0x54;

/// Descramble the payload of a single sector in place.
///
/// Bytes `[0..128)` are the MPEG-PS header and are left unmodified; the
/// keystream seed mixes the title key with the header bytes at
/// `[0x54..0x59)`. Buffers no longer than the header region are returned
/// unchanged. Gating on CMI and PES scrambling-control state is the
/// caller's concern; this is the raw cipher.
pub fn descramble_sector(sector: &mut [u8], key: &Key) {
    if sector.len() <= SECTOR_HEADER_SIZE {
        return;
    }

    let mut lfsr1_lo = u32::from(key[0] ^ sector[SEED_OFFSET]) | 0x100;
    let mut lfsr1_hi = u32::from(key[1] ^ sector[SEED_OFFSET + 1]);

    let mut lfsr0 = (u32::from(key[2])
        | (u32::from(key[3]) << 8)
        | (u32::from(key[4]) << 16))
        ^ (u32::from(sector[SEED_OFFSET + 2])
            | (u32::from(sector[SEED_OFFSET + 3]) << 8)
            | (u32::from(sector[SEED_OFFSET + 4]) << 16));
    let low3 = lfsr0 & 7;
    lfsr0 = lfsr0 * 2 + 8 - low3;

    let mut combined = 0u32;
    for byte in &mut sector[SECTOR_HEADER_SIZE..] {
        let o_lfsr1 = CSS_TAB2[lfsr1_hi as usize] ^ CSS_TAB3[lfsr1_lo as usize];
        lfsr1_hi = lfsr1_lo >> 1;
        lfsr1_lo = ((lfsr1_lo & 1) << 8) ^ u32::from(o_lfsr1);
        let o_lfsr1 = u32::from(CSS_TAB5[o_lfsr1 as usize]);

        let o_lfsr0 = (((((((lfsr0 >> 3) ^ lfsr0) >> 1) ^ lfsr0) >> 8) ^ lfsr0) >> 5) & 0xff;
        lfsr0 = (lfsr0 >> 8) | (o_lfsr0 << 24);
        lfsr0 = (lfsr0 << 8) | o_lfsr0;
        let o_lfsr0 = u32::from(CSS_TAB4[o_lfsr0 as usize]);

        combined += o_lfsr0 + o_lfsr1;
        *byte = CSS_TAB1[*byte as usize] ^ (combined & 0xff) as u8;
        combined >>= 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTOR_KEY: Key = [0x33, 0x8c, 0x85, 0x0f, 0xae];

    const SCRAMBLED_PAYLOAD: &str = "87bb4cc11aee21f70187bd440e88d0b754bd6cdaa5e43934d463af69f01ea7\
                                     1b6d5d8bdb289b3a86438e929a47954a700ea20468ed9d7fe691eaf442d9dc\
                                     2eb446f11915d53f3f8f87e102d9833dd7d27baa795e9463608645de7a8b23\
                                     86f1a0338b44f2d46404d1534fe59fc75e4af741f16bd6f89263333776df53\
                                     1d885a82";

    const PLAIN_PAYLOAD: &str = "838a91989fa6adb4bbc2c9d0d7dee5ecf3fa01080f161d242b323940474e55\
                                 5c636a71787f868d949ba2a9b0b7bec5ccd3dae1e8eff6fd040b121920272e\
                                 353c434a51585f666d747b828990979ea5acb3bac1c8cfd6dde4ebf2f90007\
                                 0e151c232a31383f464d545b626970777e858c939aa1a8afb6bdc4cbd2d9e0\
                                 e7eef5fc";

    /// 256-byte sector whose header carries the fixture seed bytes.
    fn fixture_header() -> Vec<u8> {
        let mut header: Vec<u8> = (0..SECTOR_HEADER_SIZE).map(|i| (i * 7 + 3) as u8).collect();
        header[20] = 0x30;
        header
    }

    #[test]
    fn descrambles_known_sector() {
        let mut sector = fixture_header();
        sector.extend_from_slice(&hex::decode(SCRAMBLED_PAYLOAD).unwrap());

        descramble_sector(&mut sector, &SECTOR_KEY);

        assert_eq!(&sector[SECTOR_HEADER_SIZE..], &hex::decode(PLAIN_PAYLOAD).unwrap()[..]);
        assert_eq!(&sector[..SECTOR_HEADER_SIZE], &fixture_header()[..]);
    }

    #[test]
    fn header_only_buffer_is_left_unchanged() {
        let mut sector = fixture_header();
        let before = sector.clone();
        descramble_sector(&mut sector, &SECTOR_KEY);
        assert_eq!(sector, before);
    }

    #[test]
    fn keystream_depends_on_header_seed_bytes() {
        let mut first = fixture_header();
        first.extend_from_slice(&hex::decode(SCRAMBLED_PAYLOAD).unwrap());
        let mut second = first.clone();
        second[SEED_OFFSET] ^= 0x01;

        descramble_sector(&mut first, &SECTOR_KEY);
        descramble_sector(&mut second, &SECTOR_KEY);
        assert_ne!(&first[SECTOR_HEADER_SIZE..], &second[SECTOR_HEADER_SIZE..]);
    }
}
