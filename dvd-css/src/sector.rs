//! Batch sector descrambling gated by CMI and PES header state.

use css_crypto::{KEY_SIZE, descramble_sector};
use tracing::{debug, trace};

use crate::{Error, Result};

/// Offset of the PES scrambling-control byte inside a sector.
const PES_SCRAMBLING_BYTE: usize = 20;

/// CMI bit flagging a sector as encrypted.
const CMI_ENCRYPTED: u8 = 0x80;

/// Smallest usable block size: the MPEG-PS header region.
const MIN_BLOCK_SIZE: usize = 128;

/// Descramble a batch of sectors in place.
///
/// `sectors` holds `blocks` consecutive sectors of `block_size` bytes,
/// `cmi` one CMI byte per sector, and `keys` one 5-byte title key per
/// sector. A sector is left untouched when its CMI encrypted bit is
/// clear, its key is all zero, or its PES scrambling-control field is
/// clear — those are valid plaintext outcomes, not errors. The first
/// 128 bytes of every sector are never modified.
pub fn decrypt_sectors(
    sectors: &mut [u8],
    cmi: &[u8],
    keys: &[u8],
    blocks: usize,
    block_size: usize,
) -> Result<()> {
    if block_size < MIN_BLOCK_SIZE {
        return Err(Error::InvalidBlockSize(block_size));
    }
    if sectors.len() != blocks * block_size {
        return Err(Error::InvalidSize {
            expected: blocks * block_size,
            actual: sectors.len(),
        });
    }
    if cmi.len() != blocks {
        return Err(Error::InvalidSize {
            expected: blocks,
            actual: cmi.len(),
        });
    }
    if keys.len() != blocks * KEY_SIZE {
        return Err(Error::InvalidSize {
            expected: blocks * KEY_SIZE,
            actual: keys.len(),
        });
    }

    if cmi.iter().all(|byte| byte & CMI_ENCRYPTED == 0) {
        debug!("no sector flagged encrypted, leaving batch untouched");
        return Ok(());
    }
    if keys.iter().all(|&byte| byte == 0) {
        debug!("all title keys zero, leaving batch untouched");
        return Ok(());
    }

    for ((sector, &cmi_byte), key) in sectors
        .chunks_exact_mut(block_size)
        .zip(cmi)
        .zip(keys.chunks_exact(KEY_SIZE))
    {
        if cmi_byte & CMI_ENCRYPTED == 0 {
            continue;
        }
        if key.iter().all(|&byte| byte == 0) {
            trace!("zero title key, skipping sector");
            continue;
        }
        if (sector[PES_SCRAMBLING_BYTE] & 0x30) >> 4 == 0 {
            trace!("PES scrambling control clear, skipping sector");
            continue;
        }

        let mut title_key = [0u8; KEY_SIZE];
        title_key.copy_from_slice(key);
        descramble_sector(sector, &title_key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SECTOR_SIZE;

    const TITLE_KEY: [u8; KEY_SIZE] = [0x33, 0x8c, 0x85, 0x0f, 0xae];

    /// A sector-sized buffer whose PES scrambling-control bits are set.
    fn scrambled_flagged_sector(block_size: usize) -> Vec<u8> {
        let mut sector: Vec<u8> = (0..block_size).map(|i| (i * 7 + 3) as u8).collect();
        sector[PES_SCRAMBLING_BYTE] = 0x30;
        sector
    }

    #[test]
    fn cmi_clear_is_a_passthrough() {
        let mut sectors = scrambled_flagged_sector(SECTOR_SIZE);
        let before = sectors.clone();

        decrypt_sectors(&mut sectors, &[0x00], &TITLE_KEY, 1, SECTOR_SIZE).unwrap();
        assert_eq!(sectors, before);
    }

    #[test]
    fn zero_key_is_a_passthrough() {
        let mut sectors = scrambled_flagged_sector(SECTOR_SIZE);
        let before = sectors.clone();

        decrypt_sectors(&mut sectors, &[0xc0], &[0u8; KEY_SIZE], 1, SECTOR_SIZE).unwrap();
        assert_eq!(sectors, before);
    }

    #[test]
    fn pes_control_clear_is_a_passthrough() {
        let mut sectors = scrambled_flagged_sector(SECTOR_SIZE);
        sectors[PES_SCRAMBLING_BYTE] = 0x00;
        let before = sectors.clone();

        decrypt_sectors(&mut sectors, &[0xc0], &TITLE_KEY, 1, SECTOR_SIZE).unwrap();
        assert_eq!(sectors, before);
    }

    #[test]
    fn flagged_sector_is_descrambled_and_clear_sector_kept() {
        let block_size = 256;
        let mut sectors = scrambled_flagged_sector(block_size);
        sectors.extend(scrambled_flagged_sector(block_size));
        let before = sectors.clone();

        let mut expected = before.clone();
        let mut first = [0u8; 256];
        first.copy_from_slice(&before[..block_size]);
        descramble_sector(&mut first, &TITLE_KEY);
        expected[..block_size].copy_from_slice(&first);

        let mut keys = Vec::new();
        keys.extend_from_slice(&TITLE_KEY);
        keys.extend_from_slice(&TITLE_KEY);

        decrypt_sectors(&mut sectors, &[0xc0, 0x00], &keys, 2, block_size).unwrap();
        assert_eq!(sectors, expected);
        // Header region of the descrambled sector is untouched.
        assert_eq!(&sectors[..128], &before[..128]);
        assert_ne!(&sectors[128..block_size], &before[128..block_size]);
    }

    #[test]
    fn mismatched_buffers_are_rejected() {
        let mut sectors = vec![0u8; SECTOR_SIZE];
        assert!(matches!(
            decrypt_sectors(&mut sectors, &[0x00, 0x00], &[0u8; KEY_SIZE], 1, SECTOR_SIZE),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            decrypt_sectors(&mut sectors, &[0x00], &[0u8; KEY_SIZE], 2, SECTOR_SIZE),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            decrypt_sectors(&mut sectors, &[0x00], &[0u8; 3], 1, SECTOR_SIZE),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            decrypt_sectors(&mut sectors, &[0x00], &[0u8; KEY_SIZE], 1, 64),
            Err(Error::InvalidBlockSize(64))
        ));
    }
}
