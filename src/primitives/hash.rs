//! Const hashing used to derive tag identities from their paths.

/// FNV-1a 64-bit hash (const fn).
pub const fn fnv1a_64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Nibble `n` (0 = least significant) of the FNV-1a hash of `s`.
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    ((fnv1a_64(s) >> (n * 4)) & 0xF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles_reassemble_hash() {
        let s = "newtype::derivables::Show";
        let mut rebuilt = 0u64;
        let mut i = 0u8;
        while i < 16 {
            rebuilt |= (hash_nibble(s, i) as u64) << (i * 4);
            i += 1;
        }
        assert_eq!(rebuilt, fnv1a_64(s));
    }
}
