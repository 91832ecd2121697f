use crate::constants::{CONCENTRATION_SCALE, FRAME_LEN};

/// One data report frame as received from the serial line.
pub type Frame = [u8; FRAME_LEN];

/// SDS011 sensor data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Mass Concentration PM2.5 [μg/m³]
    pub pm2_5: f32,
    /// Mass Concentration PM10 [μg/m³]
    pub pm10: f32,
}

/// SDS011 sensor raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadingRaw {
    /// Mass Concentration PM2.5 [μg/m³] [×10]
    pub pm2_5: u16,
    /// Mass Concentration PM10 [μg/m³] [×10]
    pub pm10: u16,
    /// Device id
    pub device_id: u16,
}

impl From<ReadingRaw> for Reading {
    fn from(raw: ReadingRaw) -> Self {
        Reading {
            pm2_5: f32::from(raw.pm2_5) / CONCENTRATION_SCALE,
            pm10: f32::from(raw.pm10) / CONCENTRATION_SCALE,
        }
    }
}

/// One linear segment of an AQI scale.
///
/// Concentrations in `[c_low, c_high)` map linearly onto `[i_low, i_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    /// Lower concentration bound, inclusive [μg/m³]
    pub c_low: f32,
    /// Upper concentration bound, exclusive [μg/m³]
    pub c_high: f32,
    /// Index at `c_low`
    pub i_low: f32,
    /// Index reached at `c_high`
    pub i_high: f32,
}

impl Breakpoint {
    /// Creates a segment mapping `[c_low, c_high)` onto `[i_low, i_high]`.
    pub const fn new(c_low: f32, c_high: f32, i_low: f32, i_high: f32) -> Self {
        Breakpoint {
            c_low,
            c_high,
            i_low,
            i_high,
        }
    }

    /// Whether `concentration` lies in `[c_low, c_high)`.
    pub fn contains(&self, concentration: f32) -> bool {
        concentration >= self.c_low && concentration < self.c_high
    }

    /// Linear index for `concentration` on this segment.
    pub fn interpolate(&self, concentration: f32) -> f32 {
        (self.i_high - self.i_low) / (self.c_high - self.c_low) * (concentration - self.c_low)
            + self.i_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_scaled_by_ten() {
        let raw = ReadingRaw {
            pm2_5: 300,
            pm10: 90,
            device_id: 0x1234,
        };
        assert_eq!(
            Reading::from(raw),
            Reading {
                pm2_5: 30.0,
                pm10: 9.0
            }
        );
    }

    #[test]
    fn breakpoint_is_half_open() {
        let bp = Breakpoint::new(12.1, 35.5, 51.0, 100.0);
        assert!(bp.contains(12.1));
        assert!(bp.contains(35.4));
        assert!(!bp.contains(35.5));
        assert!(!bp.contains(12.0));
        assert_eq!(bp.interpolate(12.1), 51.0);
    }
}
