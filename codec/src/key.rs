use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned storage key. Keys compare byte-lexicographically, which is the order the storage backend scans in.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn new(bytes: Vec<u8>) -> Self { Self(bytes) }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Immediate successor of this key, see [`prefix_next`].
    pub fn prefix_next(&self) -> Key { Key(prefix_next(&self.0)) }
}

/// Returns the smallest byte string that sorts after `bytes` and after every string it prefixes,
/// unless `bytes` is all `0xFF`.
///
/// The last byte is incremented with carry. When every byte is `0xFF` (or the input is empty) there is
/// nothing left to carry into, so a zero byte is appended to the original instead. The result is always
/// strictly greater than the input.
pub fn prefix_next(bytes: &[u8]) -> Vec<u8> {
    let mut next = bytes.to_vec();
    for i in (0..next.len()).rev() {
        if next[i] == 0xFF {
            next[i] = 0x00;
        } else {
            next[i] += 1;
            return next;
        }
    }

    let mut next = bytes.to_vec();
    next.push(0x00);
    next
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
