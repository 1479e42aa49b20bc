use distsql::{Bound, Datum, Key, LogicalRange};
use std::str::FromStr;
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

/// Serialized empty plans, as produced by the executor plan encoder
#[allow(unused)]
pub const DAG_DATA: [u8; 10] = [0x08, 0x00, 0x18, 0x00, 0x20, 0x00, 0x40, 0x00, 0x5a, 0x00];
#[allow(unused)]
pub const ANALYZE_DATA: [u8; 8] = [0x08, 0x00, 0x10, 0x00, 0x18, 0x00, 0x20, 0x00];
#[allow(unused)]
pub const CHECKSUM_DATA: [u8; 6] = [0x08, 0x00, 0x10, 0x00, 0x18, 0x00];

/// [1, 2], (2, 4), [4, 19), (19, 32], (34, 34]
#[allow(unused)]
pub fn sample_ranges() -> Vec<LogicalRange> {
    vec![
        LogicalRange::new(Bound::incl([Datum::Int(1)]), Bound::incl([Datum::Int(2)])),
        LogicalRange::new(Bound::excl([Datum::Int(2)]), Bound::excl([Datum::Int(4)])),
        LogicalRange::new(Bound::incl([Datum::Int(4)]), Bound::excl([Datum::Int(19)])),
        LogicalRange::new(Bound::excl([Datum::Int(19)]), Bound::incl([Datum::Int(32)])),
        LogicalRange::new(Bound::excl([Datum::Int(34)]), Bound::incl([Datum::Int(34)])),
    ]
}

/// `t{table_id}_r` followed by an encoded handle whose last byte is `last`
#[allow(unused)]
pub fn row_key(table_id: u8, last: u8) -> Key {
    Key::new(vec![0x74, 0x80, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, table_id, 0x5f, 0x72, 0x80, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, last])
}

/// `t{table_id}_i{index_id}` followed by one int column whose last byte is `last`
#[allow(unused)]
pub fn index_key(table_id: u8, index_id: u8, last: u8) -> Key {
    Key::new(vec![
        0x74, 0x80, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, table_id, 0x5f, 0x69, 0x80, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, index_id, 0x3, 0x80, 0x0,
        0x0, 0x0, 0x0, 0x0, 0x0, last,
    ])
}
