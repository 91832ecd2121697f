//! Driver for the Nova SDS011 particulate matter sensor.
//!
//! The sensor reports PM2.5 and PM10 mass concentrations once per second as
//! 10-byte frames on a 9600 baud serial line. This crate provides
//!
//! - [`decode`]: validation and decoding of a single frame,
//! - [`aqi`]: conversion of a PM2.5 concentration to the EPA Air Quality Index,
//! - [`Sds011`]: a driver reading frames from any [`embedded_io::Read`] port,
//! - `CsvLog` (feature `std`, on by default): appending readings to a dated
//!   CSV file.
//!
//! ```
//! let frame = [0xAA, 0xC0, 0x2C, 0x01, 0x5A, 0x00, 0x00, 0x00, 0x87, 0xAB];
//! let reading = sds011_rs::decode(&frame).unwrap();
//! assert_eq!(reading.pm2_5, 30.0);
//! assert_eq!(reading.pm10, 9.0);
//! assert!(sds011_rs::aqi(reading.pm2_5) > 51.0);
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod aqi;
mod checksum;
mod constants;
mod driver;
mod error;
pub mod frame;
mod types;

#[cfg(feature = "std")]
mod csv_log;

pub use aqi::{aqi, try_aqi, PM2_5_BREAKPOINTS};
pub use checksum::checksum;
pub use constants::{DATA_REPORT_ID, FRAME_LEN, HEAD, OUT_OF_RANGE, TAIL};
#[cfg(feature = "std")]
pub use csv_log::{format_row, CsvLog, HEADER};
pub use driver::{Config, Sds011};
pub use error::{Error, FrameError};
pub use frame::{decode, decode_raw};
pub use types::{Breakpoint, Frame, Reading, ReadingRaw};
