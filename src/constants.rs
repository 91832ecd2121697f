/// Length of every frame the sensor emits.
pub const FRAME_LEN: usize = 10;

/// First byte of every frame.
pub const HEAD: u8 = 0xAA;

/// Command id of a data report frame (active reporting mode).
pub const DATA_REPORT_ID: u8 = 0xC0;

/// Last byte of every frame.
pub const TAIL: u8 = 0xAB;

// Byte offsets inside a data report frame.
pub(crate) const PM2_5_OFFSET: usize = 2;
pub(crate) const PM10_OFFSET: usize = 4;
pub(crate) const DEVICE_ID_OFFSET: usize = 6;
pub(crate) const CHECKSUM_OFFSET: usize = 8;

/// Raw concentration values are reported in units of 0.1 µg/m³.
pub(crate) const CONCENTRATION_SCALE: f32 = 10.0;

/// Returned by [`aqi`](crate::aqi::aqi) when the concentration is outside the table.
pub const OUT_OF_RANGE: f32 = -1.0;
