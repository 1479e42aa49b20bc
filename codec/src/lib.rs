pub mod bytes;
pub mod datum;
pub mod error;
pub mod key;
pub mod number;
pub mod table;

pub use datum::{encode_key, Datum, FieldType};
pub use error::EncodeError;
pub use key::{prefix_next, Key};
pub use number::{encode_float, encode_int, encode_uint};
pub use table::{encode_index_seek_key, encode_row_key, encode_row_key_with_handle};
