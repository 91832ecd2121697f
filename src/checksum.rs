/// Checksum of a data report payload: the byte sum modulo 256.
pub fn checksum(payload: &[u8]) -> u8 {
    payload
        .iter()
        .copied()
        .fold(0u8, |sum, byte| sum.wrapping_add(byte))
}
