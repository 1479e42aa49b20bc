use serde::{Deserialize, Serialize};

use crate::{bytes::encode_bytes, encode_float, encode_int, encode_uint, EncodeError};

const NIL_FLAG: u8 = 0x00;
const BYTES_FLAG: u8 = 0x01;
const INT_FLAG: u8 = 0x03;
const UINT_FLAG: u8 = 0x04;
const FLOAT_FLAG: u8 = 0x05;
const MAX_FLAG: u8 = 0xFA;

/// A scalar column value appearing in a range bound.
///
/// `MinNotNull` and `MaxValue` are sentinels: they sort immediately after NULL and after every value
/// respectively, and are used to express half-unbounded index ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Null,
    Int(i64),
    Uint(u64),
    Float(f64),
    Bytes(Vec<u8>),
    String(String),
    MinNotNull,
    MaxValue,
}

/// Column type a datum is coerced to before it is encoded into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Int,
    Uint,
    Float,
    Bytes,
    String,
}

impl Datum {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Datum::Null => "null",
            Datum::Int(_) => "int",
            Datum::Uint(_) => "uint",
            Datum::Float(_) => "float",
            Datum::Bytes(_) => "bytes",
            Datum::String(_) => "string",
            Datum::MinNotNull => "min-not-null",
            Datum::MaxValue => "max-value",
        }
    }

    /// Casts this datum to `ty`. Sentinels and NULL pass through unchanged; lossy numeric casts fail.
    pub fn coerce_to(&self, ty: FieldType) -> Result<Datum, EncodeError> {
        match (self, ty) {
            (Datum::Null | Datum::MinNotNull | Datum::MaxValue, _) => Ok(self.clone()),
            (Datum::Int(_), FieldType::Int)
            | (Datum::Uint(_), FieldType::Uint)
            | (Datum::Float(_), FieldType::Float)
            | (Datum::Bytes(_), FieldType::Bytes)
            | (Datum::String(_), FieldType::String) => Ok(self.clone()),
            (Datum::Int(v), FieldType::Uint) => {
                u64::try_from(*v).map(Datum::Uint).map_err(|_| EncodeError::Overflow { value: v.to_string(), target: ty })
            }
            (Datum::Uint(v), FieldType::Int) => {
                i64::try_from(*v).map(Datum::Int).map_err(|_| EncodeError::Overflow { value: v.to_string(), target: ty })
            }
            (Datum::String(s), FieldType::Bytes) => Ok(Datum::Bytes(s.as_bytes().to_vec())),
            (Datum::Bytes(b), FieldType::String) => String::from_utf8(b.clone())
                .map(Datum::String)
                .map_err(|_| EncodeError::TypeMismatch { expected: ty, found: "non-utf8 bytes" }),
            _ => Err(EncodeError::TypeMismatch { expected: ty, found: self.kind_name() }),
        }
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self { Datum::Int(v) }
}

impl From<u64> for Datum {
    fn from(v: u64) -> Self { Datum::Uint(v) }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self { Datum::Float(v) }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self { Datum::String(v.to_string()) }
}

impl From<String> for Datum {
    fn from(v: String) -> Self { Datum::String(v) }
}

impl From<Vec<u8>> for Datum {
    fn from(v: Vec<u8>) -> Self { Datum::Bytes(v) }
}

/// Encode a single datum as [flag][body]
fn encode_datum(out: &mut Vec<u8>, datum: &Datum) -> Result<(), EncodeError> {
    match datum {
        Datum::Null => out.push(NIL_FLAG),
        Datum::Int(v) => {
            out.push(INT_FLAG);
            out.extend_from_slice(&encode_int(*v));
        }
        Datum::Uint(v) => {
            out.push(UINT_FLAG);
            out.extend_from_slice(&encode_uint(*v));
        }
        Datum::Float(v) => {
            let body = encode_float(*v)?;
            out.push(FLOAT_FLAG);
            out.extend_from_slice(&body);
        }
        Datum::Bytes(b) => {
            out.push(BYTES_FLAG);
            encode_bytes(out, b);
        }
        Datum::String(s) => {
            out.push(BYTES_FLAG);
            encode_bytes(out, s.as_bytes());
        }
        // Sorts before any encoded bytes value and after NULL
        Datum::MinNotNull => out.push(BYTES_FLAG),
        Datum::MaxValue => out.push(MAX_FLAG),
    }
    Ok(())
}

/// Encodes a multi-column tuple so that byte order matches column-wise tuple order.
pub fn encode_key(values: &[Datum]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(values.len() * 9);
    for value in values {
        encode_datum(&mut out, value)?;
    }
    Ok(out)
}
