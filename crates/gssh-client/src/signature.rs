//! Request signing

use std::collections::BTreeMap;

use sha1::{Digest, Sha1};

/// Sign a parameter set with the account's private key
///
/// Parameters are visited in key order, each contributing `key` then
/// `value`; the private key is appended last. The digest is lowercase hex.
#[must_use]
pub fn sign(params: &BTreeMap<String, String>, private_key: &str) -> String {
    let mut hasher = Sha1::new();
    for (key, value) in params {
        hasher.update(key.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(private_key.as_bytes());
    format!("{:x}", hasher.finalize())
}
