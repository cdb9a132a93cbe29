//! End-to-end CSS recovery against synthetic drive responses.

use css_crypto::{KEY_SIZE, PlayerKeySet, decrypt_title_key};
use dvd_css::{
    LeadInCopyright, RpcState, SECTOR_SIZE, check_region, decode_disc_key, decode_title_key,
    decrypt_disc_key, decrypt_sectors,
};
use pretty_assertions::assert_eq;

const BUS_KEY: [u8; KEY_SIZE] = [0x13, 0x37, 0x42, 0x5a, 0x99];

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

/// Apply the cyclic bus-key XOR; the obfuscation is its own inverse.
fn bus_scramble(payload: &mut [u8]) {
    for (i, byte) in payload.iter_mut().enumerate() {
        *byte ^= BUS_KEY[4 - (i % KEY_SIZE)];
    }
}

#[test]
fn recovers_keys_and_descrambles_a_sector() {
    // Encrypted disc-key block as the disc carries it: the disc key
    // 8e1157c344 sits self-encrypted in slot 0 and encrypted under the
    // fourth built-in player key in slot 7.
    let mut key_block = [0u8; SECTOR_SIZE];
    for (i, byte) in key_block.iter_mut().enumerate() {
        *byte = (i * 31 + 7) as u8;
    }
    key_block[..5].copy_from_slice(&[0xb6, 0x7a, 0xed, 0x92, 0x7d]);
    key_block[35..40].copy_from_slice(&[0x4d, 0xc7, 0xa3, 0xc9, 0x48]);

    // READ DISC KEY response: header plus the block obfuscated with the
    // session bus key.
    let mut response = vec![0u8; 4 + SECTOR_SIZE];
    response[..2].copy_from_slice(&0x0802u16.to_be_bytes());
    response[4..].copy_from_slice(&key_block);
    bus_scramble(&mut response[4..]);

    let decoded = decode_disc_key(&response, &BUS_KEY).unwrap();
    assert_eq!(decoded.data_length, 0x0802);
    assert_eq!(decoded.key_block[..], key_block[..]);

    let disc_key = decrypt_disc_key(&decoded.key_block, &PlayerKeySet::new()).unwrap();
    assert_eq!(disc_key, [0x8e, 0x11, 0x57, 0xc3, 0x44]);

    // REPORT TITLE KEY response carrying the title key encrypted under
    // the disc key.
    let mut title_response = [0u8; 12];
    title_response[..2].copy_from_slice(&0x000au16.to_be_bytes());
    title_response[4] = 0xc0;
    title_response[5..10].copy_from_slice(&[0xdf, 0x6b, 0x9a, 0xcb, 0xe0]);
    bus_scramble(&mut title_response[5..10]);

    let title = decode_title_key(&title_response, &BUS_KEY).unwrap();
    assert_eq!(title.cmi & 0x80, 0x80);

    let title_key = decrypt_title_key(0, &disc_key, &title.key);
    assert_eq!(title_key, [0x33, 0x8c, 0x85, 0x0f, 0xae]);

    // Descramble one flagged 256-byte sector with the recovered title
    // key.
    let block_size = 256;
    let mut sector: Vec<u8> = (0..128).map(|i| (i * 7 + 3) as u8).collect();
    sector[20] = 0x30;
    sector.extend_from_slice(&hex::decode(SCRAMBLED_PAYLOAD).unwrap());

    decrypt_sectors(&mut sector, &[title.cmi], &title_key, 1, block_size).unwrap();
    assert_eq!(&sector[128..], &hex::decode(PLAIN_PAYLOAD).unwrap()[..]);

    // The disc is marked for a region this drive permits.
    let rpc = RpcState { region_mask: 0xfe };
    let lead_in = LeadInCopyright {
        protection_system: 1,
        region_information: 0x01,
    };
    assert!(check_region(rpc, lead_in));
}

#[test]
fn batch_with_no_encrypted_sectors_survives_round_trip() {
    let block_size = SECTOR_SIZE;
    let mut sectors: Vec<u8> = (0..2 * block_size).map(|i| (i * 3 + 11) as u8).collect();
    let before = sectors.clone();

    decrypt_sectors(
        &mut sectors,
        &[0x00, 0x00],
        &[0u8; 2 * KEY_SIZE],
        2,
        block_size,
    )
    .unwrap();
    assert_eq!(sectors, before);
}
