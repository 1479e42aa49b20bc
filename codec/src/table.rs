//! Row and index key layout.
//!
//! Every key of a table starts with `t` followed by the encoded table id; row keys continue with `_r` and
//! the encoded handle, index keys with `_i`, the encoded index id and the encoded column tuple.

use crate::{encode_int, Key};

const TABLE_PREFIX: u8 = b't';
const RECORD_PREFIX_SEP: &[u8] = b"_r";
const INDEX_PREFIX_SEP: &[u8] = b"_i";

const ID_LEN: usize = 8;
const PREFIX_LEN: usize = 1 + ID_LEN + 2;

/// Row key for `table_id` over already-encoded handle bytes.
pub fn encode_row_key(table_id: i64, handle: &[u8]) -> Key {
    let mut out = Vec::with_capacity(PREFIX_LEN + handle.len());
    out.push(TABLE_PREFIX);
    out.extend_from_slice(&encode_int(table_id));
    out.extend_from_slice(RECORD_PREFIX_SEP);
    out.extend_from_slice(handle);
    Key::new(out)
}

pub fn encode_row_key_with_handle(table_id: i64, handle: i64) -> Key { encode_row_key(table_id, &encode_int(handle)) }

/// Index key prefix for seeking to `encoded`, the output of [`crate::encode_key`].
pub fn encode_index_seek_key(table_id: i64, index_id: i64, encoded: &[u8]) -> Key {
    let mut out = Vec::with_capacity(PREFIX_LEN + ID_LEN + encoded.len());
    out.push(TABLE_PREFIX);
    out.extend_from_slice(&encode_int(table_id));
    out.extend_from_slice(INDEX_PREFIX_SEP);
    out.extend_from_slice(&encode_int(index_id));
    out.extend_from_slice(encoded);
    Key::new(out)
}
