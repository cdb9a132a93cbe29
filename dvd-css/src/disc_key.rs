//! Disc-key recovery by player-key trial against the encrypted key
//! block.

use css_crypto::{KEY_SIZE, Key, PlayerKeySet, decrypt_key};
use tracing::{debug, trace};

use crate::{DISC_KEY_SLOTS, SECTOR_SIZE};

/// Slot holding the disc key encrypted with itself.
const VERIFIER_SLOT: usize = 0;

/// Try every player key in the set against every slot of the encrypted
/// disc-key block.
///
/// Slot 0 holds the disc key encrypted under itself, so a candidate that
/// reproduces itself after one more decryption round against slot 0 is
/// the disc key. Returns `None` when no key in the set matches any of
/// the 408 candidate slots.
pub fn decrypt_disc_key(key_block: &[u8; SECTOR_SIZE], player_keys: &PlayerKeySet) -> Option<Key> {
    let mut verifier = [0u8; KEY_SIZE];
    verifier.copy_from_slice(&key_block[VERIFIER_SLOT * KEY_SIZE..][..KEY_SIZE]);

    for (key_index, player_key) in player_keys.iter().enumerate() {
        trace!("trying player key {key_index}");
        for slot in 1..DISC_KEY_SLOTS {
            let mut encrypted = [0u8; KEY_SIZE];
            encrypted.copy_from_slice(&key_block[slot * KEY_SIZE..][..KEY_SIZE]);

            let candidate = decrypt_key(0, player_key, &encrypted);
            let verify = decrypt_key(0, &candidate, &verifier);
            if candidate == verify {
                debug!("disc key recovered with player key {key_index} at slot {slot}");
                return Some(candidate);
            }
        }
    }

    debug!(
        "disc key not recovered after {} player keys",
        player_keys.key_count()
    );
    None
}
