use xxhash_rust::xxh3::xxh3_128;

use crate::base64::to_url_safe_base64;

/// Digest used for `[contenthash]` substitution in output filenames.
///
/// A full xxh3-128 digest is longer than any filename wants; callers pass the
/// number of leading characters they need.
pub fn content_hash(input: &[u8], len: usize) -> String {
  let mut digest = to_url_safe_base64(xxh3_128(input).to_le_bytes());
  digest.truncate(len);
  digest
}

#[test]
fn content_hash_is_stable() {
  assert_eq!(content_hash(b"hello", 8), content_hash(b"hello", 8));
  assert_ne!(content_hash(b"hello", 8), content_hash(b"hello!", 8));
}

#[test]
fn content_hash_respects_length_and_charset() {
  let digest = content_hash(b"const answer = 42;", 8);
  assert_eq!(digest.len(), 8);
  assert!(digest.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')));
}
