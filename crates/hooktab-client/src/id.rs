use hooktab_core::SongId;
use sha2::{Digest, Sha256};

/// Stable fallback id for API rows that come back without one, derived
/// from the artist and title. Kept to eight digits so it lands in the
/// same numeric range as real HookTheory ids.
pub fn pseudo_song_id(artist: &str, title: &str) -> SongId {
    let digest = Sha256::digest(format!("{artist}{title}").as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % 100_000_000
}
