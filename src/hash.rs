//! djb2 string hashing and hash-to-bucket index mapping.
//!
//! The hash is a pure function of the key's bytes with no per-run seeding,
//! so bucket placement is reproducible across processes and test runs.

/// djb2 over the key's bytes: accumulator starts at 5381 and each byte `b`
/// folds in as `acc * 33 + b`, wrapping at 64 bits. `djb2("")` is the seed.
pub fn djb2(key: &str) -> u64 {
    let mut acc: u64 = 5381;
    for &b in key.as_bytes() {
        // acc * 33 + b, written as (acc << 5) + acc + b
        acc = (acc << 5).wrapping_add(acc).wrapping_add(u64::from(b));
    }
    acc
}

/// Bucket slot for `key` in a table of `capacity` buckets.
///
/// `capacity` must be nonzero; `ChainedMap`'s constructor rejects zero before
/// any bucket math can run.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index requires a nonzero capacity");
    (djb2(key) % capacity as u64) as usize
}
