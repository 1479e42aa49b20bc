const ENC_GROUP_SIZE: usize = 8;
const ENC_MARKER: u8 = 0xFF;
const ENC_PAD: u8 = 0x00;

/// Appends the memcomparable form of `data` to `out`.
///
/// Data is cut into 8-byte groups; the last group is zero-padded and every group is followed by a marker
/// byte `0xFF - pad_count`. A length that is a multiple of 8 gets a trailing fully padded group, so no
/// encoding is a prefix of another.
pub fn encode_bytes(out: &mut Vec<u8>, data: &[u8]) {
    out.reserve((data.len() / ENC_GROUP_SIZE + 1) * (ENC_GROUP_SIZE + 1));
    let mut idx = 0;
    while idx <= data.len() {
        let remain = data.len() - idx;
        let pad_count = if remain >= ENC_GROUP_SIZE {
            out.extend_from_slice(&data[idx..idx + ENC_GROUP_SIZE]);
            0
        } else {
            out.extend_from_slice(&data[idx..]);
            let pad = ENC_GROUP_SIZE - remain;
            out.extend(std::iter::repeat(ENC_PAD).take(pad));
            pad
        };
        out.push(ENC_MARKER - pad_count as u8);
        idx += ENC_GROUP_SIZE;
    }
}
