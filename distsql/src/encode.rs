//! Logical ranges and handle lists to half-open key ranges.
//!
//! Every conversion applies the same rule to the encoded bound tuples: an exclusive low bound is replaced
//! by its successor, an inclusive high bound is replaced by its successor, and the other two cases are
//! already correct endpoints of `[start, end)`. The successor is taken on the encoded tuple before the
//! table/index prefix is attached, so it can never carry into the prefix.

use distsql_codec::{encode_index_seek_key, encode_int, encode_key, encode_row_key, prefix_next, Datum, EncodeError, FieldType, Key};
use tracing::{debug, trace};

use crate::error::RangeError;
use crate::handles::coalesce_handles;
use crate::index_spec::IndexSpec;
use crate::kv::KeyRange;
use crate::range::LogicalRange;

/// Converts one logical range into a key range for an access path.
///
/// `encode` turns a bound tuple into bytes; `make_key` attaches the access path's key prefix. Ranges
/// that select nothing (e.g. `(34, 34]`) come back with `start_key == end_key`.
pub fn encode_range<E, K>(range: &LogicalRange, encode: E, make_key: K) -> Result<KeyRange, RangeError>
where
    E: Fn(&[Datum]) -> Result<Vec<u8>, EncodeError>,
    K: Fn(&[u8]) -> Key,
{
    let mut low = encode(&range.low.values)?;
    if range.low.exclusive {
        low = prefix_next(&low);
    }

    let mut high = encode(&range.high.values)?;
    if !range.high.exclusive {
        high = prefix_next(&high);
    }

    let key_range = KeyRange::new(make_key(&low), make_key(&high));
    trace!("{:?} -> {:?}", range, key_range);
    Ok(key_range)
}

/// Handle bounds are a single integer column.
fn encode_handle(values: &[Datum]) -> Result<Vec<u8>, EncodeError> {
    let [value] = values else {
        return Err(EncodeError::ColumnCount { expected: 1, found: values.len() });
    };
    match value.coerce_to(FieldType::Int)? {
        Datum::Int(handle) => Ok(encode_int(handle).to_vec()),
        other => Err(EncodeError::TypeMismatch { expected: FieldType::Int, found: other.kind_name() }),
    }
}

fn encode_typed(values: &[Datum], field_types: &[FieldType]) -> Result<Vec<u8>, EncodeError> {
    if values.len() > field_types.len() {
        return Err(EncodeError::ColumnCount { expected: field_types.len(), found: values.len() });
    }
    let coerced = values.iter().zip(field_types).map(|(value, ty)| value.coerce_to(*ty)).collect::<Result<Vec<_>, _>>()?;
    encode_key(&coerced)
}

/// Key ranges covering exactly the given rows, one per contiguous run of handles.
///
/// `handles` must be strictly ascending.
pub fn row_handles_to_key_ranges(table_id: i64, handles: &[i64]) -> Result<Vec<KeyRange>, RangeError> {
    let runs = coalesce_handles(handles)?;
    let row_key = |handle: &[u8]| encode_row_key(table_id, handle);
    let key_ranges = runs
        .into_iter()
        .map(|run| encode_range(&LogicalRange::from(run), encode_handle, &row_key))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("row_handles_to_key_ranges(table {}): {} handles -> {} ranges", table_id, handles.len(), key_ranges.len());
    Ok(key_ranges)
}

/// Key ranges over the row keys of `table_id` for handle ranges.
pub fn row_ranges_to_key_ranges(table_id: i64, ranges: &[LogicalRange]) -> Result<Vec<KeyRange>, RangeError> {
    let row_key = |handle: &[u8]| encode_row_key(table_id, handle);
    let key_ranges = ranges.iter().map(|range| encode_range(range, encode_handle, &row_key)).collect::<Result<Vec<_>, _>>()?;

    debug!("row_ranges_to_key_ranges(table {}): {} ranges", table_id, key_ranges.len());
    Ok(key_ranges)
}

/// Key ranges over an index, encoding each bound datum as it is.
pub fn index_ranges_to_key_ranges(table_id: i64, index_id: i64, ranges: &[LogicalRange]) -> Result<Vec<KeyRange>, RangeError> {
    let index_key = |encoded: &[u8]| encode_index_seek_key(table_id, index_id, encoded);
    let key_ranges = ranges.iter().map(|range| encode_range(range, encode_key, &index_key)).collect::<Result<Vec<_>, _>>()?;

    debug!("index_ranges_to_key_ranges(table {}, index {}): {} ranges", table_id, index_id, key_ranges.len());
    Ok(key_ranges)
}

/// Like [`index_ranges_to_key_ranges`], but coerces bound values to the index column types first.
pub fn index_spec_ranges_to_key_ranges(table_id: i64, spec: &IndexSpec, ranges: &[LogicalRange]) -> Result<Vec<KeyRange>, RangeError> {
    let field_types = spec.field_types();
    let encode = |values: &[Datum]| encode_typed(values, &field_types);
    let index_key = |encoded: &[u8]| encode_index_seek_key(table_id, spec.index_id, encoded);
    let key_ranges = ranges.iter().map(|range| encode_range(range, &encode, &index_key)).collect::<Result<Vec<_>, _>>()?;

    debug!("index_spec_ranges_to_key_ranges(table {}, {}): {} ranges", table_id, spec.name(), key_ranges.len());
    Ok(key_ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index_spec::IndexKeyPart;
    use crate::range::Bound;
    use distsql_codec::encode_row_key_with_handle;

    fn handle_range(low: i64, low_excl: bool, high: i64, high_excl: bool) -> LogicalRange {
        LogicalRange::new(
            Bound { values: vec![Datum::Int(low)], exclusive: low_excl },
            Bound { values: vec![Datum::Int(high)], exclusive: high_excl },
        )
    }

    #[test]
    fn endpoint_adjustments() {
        let cases = [
            ((1, false, 2, false), (1, 3)),
            ((2, true, 4, true), (3, 4)),
            ((4, false, 19, true), (4, 19)),
            ((19, true, 32, false), (20, 33)),
        ];
        for ((low, low_excl, high, high_excl), (start, end)) in cases {
            let actual = row_ranges_to_key_ranges(13, &[handle_range(low, low_excl, high, high_excl)]).unwrap();
            assert_eq!(actual, vec![KeyRange::new(encode_row_key_with_handle(13, start), encode_row_key_with_handle(13, end))]);
        }
    }

    #[test]
    fn unsatisfiable_range_is_kept_empty() {
        let actual = row_ranges_to_key_ranges(13, &[handle_range(34, true, 34, false)]).unwrap();
        assert_eq!(actual.len(), 1);
        assert_eq!(actual[0].start_key, actual[0].end_key);
        assert_eq!(actual[0].start_key, encode_row_key_with_handle(13, 35));
        assert!(actual[0].is_empty());
    }

    #[test]
    fn full_handle_range_ends_past_max_handle() {
        let actual = row_ranges_to_key_ranges(5, &[LogicalRange::full_int()]).unwrap();
        assert_eq!(actual[0].start_key, encode_row_key_with_handle(5, i64::MIN));
        assert!(actual[0].end_key > encode_row_key_with_handle(5, i64::MAX));
        assert!(actual[0].end_key < encode_row_key_with_handle(6, i64::MIN));
    }

    #[test]
    fn disjoint_ranges_stay_ordered() {
        let ranges = [handle_range(-10, false, -3, true), handle_range(-3, false, 0, false), handle_range(0, true, 99, false)];
        let actual = row_ranges_to_key_ranges(2, &ranges).unwrap();
        for pair in actual.windows(2) {
            assert!(pair[0].end_key <= pair[1].start_key);
        }
    }

    #[test]
    fn uint_handles_are_coerced() {
        let range = LogicalRange::inclusive(vec![Datum::Uint(3)], vec![Datum::Uint(3)]);
        let actual = row_ranges_to_key_ranges(1, &[range]).unwrap();
        assert!(actual[0].is_point());
        assert_eq!(actual[0].start_key, encode_row_key_with_handle(1, 3));
    }

    #[test]
    fn handle_encoding_errors_abort_whole_conversion() {
        let ranges = [handle_range(1, false, 2, false), LogicalRange::inclusive(vec![Datum::from("a")], vec![Datum::from("b")])];
        assert_eq!(
            row_ranges_to_key_ranges(1, &ranges),
            Err(RangeError::Encoding(EncodeError::TypeMismatch { expected: FieldType::Int, found: "string" }))
        );

        let overflow = LogicalRange::point(vec![Datum::Uint(u64::MAX)]);
        assert!(matches!(row_ranges_to_key_ranges(1, &[overflow]), Err(RangeError::Encoding(EncodeError::Overflow { .. }))));

        let sentinel = LogicalRange::inclusive(vec![Datum::MinNotNull], vec![Datum::MaxValue]);
        assert!(matches!(row_ranges_to_key_ranges(1, &[sentinel]), Err(RangeError::Encoding(EncodeError::TypeMismatch { .. }))));

        let wide = LogicalRange::point(vec![Datum::Int(1), Datum::Int(2)]);
        assert_eq!(
            row_ranges_to_key_ranges(1, &[wide]),
            Err(RangeError::Encoding(EncodeError::ColumnCount { expected: 1, found: 2 }))
        );
    }

    #[test]
    fn index_range_successor_applies_to_tuple() {
        let range = LogicalRange::new(Bound::excl(vec![Datum::from("alice")]), Bound::incl(vec![Datum::from("bob")]));
        let actual = index_ranges_to_key_ranges(3, 7, &[range]).unwrap();

        let alice = encode_key(&[Datum::from("alice")]).unwrap();
        let bob = encode_key(&[Datum::from("bob")]).unwrap();
        assert_eq!(actual[0].start_key, encode_index_seek_key(3, 7, &prefix_next(&alice)));
        assert_eq!(actual[0].end_key, encode_index_seek_key(3, 7, &prefix_next(&bob)));

        // excluding ("alice") also excludes every longer tuple starting with it
        let alice_30 = encode_index_seek_key(3, 7, &encode_key(&[Datum::from("alice"), Datum::Int(30)]).unwrap());
        assert!(alice_30 < actual[0].start_key);
    }

    #[test]
    fn index_nan_bound_fails() {
        let range = LogicalRange::point(vec![Datum::Float(f64::NAN)]);
        assert!(matches!(index_ranges_to_key_ranges(1, 1, &[range]), Err(RangeError::Encoding(EncodeError::Unrepresentable(_)))));
    }

    #[test]
    fn typed_index_coerces_values() {
        let spec = IndexSpec::new(2, vec![IndexKeyPart::new("score", FieldType::Uint)]);
        let range = LogicalRange::inclusive(vec![Datum::Int(10)], vec![Datum::Int(20)]);
        let actual = index_spec_ranges_to_key_ranges(9, &spec, &[range]).unwrap();

        let low = encode_key(&[Datum::Uint(10)]).unwrap();
        let high = encode_key(&[Datum::Uint(20)]).unwrap();
        assert_eq!(actual, vec![KeyRange::new(encode_index_seek_key(9, 2, &low), encode_index_seek_key(9, 2, &prefix_next(&high)))]);
    }

    #[test]
    fn typed_index_rejects_mismatches() {
        let spec = IndexSpec::new(2, vec![IndexKeyPart::new("score", FieldType::Uint)]);

        let negative = LogicalRange::point(vec![Datum::Int(-1)]);
        assert!(matches!(index_spec_ranges_to_key_ranges(9, &spec, &[negative]), Err(RangeError::Encoding(EncodeError::Overflow { .. }))));

        let too_wide = LogicalRange::point(vec![Datum::Uint(1), Datum::Uint(2)]);
        assert_eq!(
            index_spec_ranges_to_key_ranges(9, &spec, &[too_wide]),
            Err(RangeError::Encoding(EncodeError::ColumnCount { expected: 1, found: 2 }))
        );
    }
}
