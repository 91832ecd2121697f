use core::ops::ControlFlow;

use embedded_hal::delay::DelayNs;
use embedded_io::Read;

use crate::constants::{FRAME_LEN, HEAD};
use crate::error::Error;
use crate::frame::decode;
use crate::types::{Frame, Reading};

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Pause between two readings of the polling loop [ms]
    pub interval_ms: u32,
    /// Bytes that may be discarded while looking for a start marker
    pub max_sync_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval_ms: 1000,
            max_sync_bytes: 2 * FRAME_LEN,
        }
    }
}

impl Config {
    /// Sets the pause between readings of the polling loop.
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets how many bytes may be skipped while looking for a start marker.
    pub fn with_max_sync_bytes(mut self, max_sync_bytes: usize) -> Self {
        self.max_sync_bytes = max_sync_bytes;
        self
    }
}

/// SDS011 sensor reading data reports from a serial line.
///
/// The sensor must be in active reporting mode, which is its power-on
/// default. The serial port is expected to be configured for 9600 8N1.
pub struct Sds011<S, D> {
    serial: S,
    delay: D,
    config: Config,
    // Bytes of a rejected frame still to be scanned for a start marker.
    pending: [u8; FRAME_LEN],
    pending_len: usize,
}

impl<S, D, E> Sds011<S, D>
where
    S: Read<Error = E>,
    D: DelayNs,
{
    /// Creates a new SDS011 driver with the default configuration.
    pub fn new(serial: S, delay: D) -> Self {
        Self::with_config(serial, delay, Config::default())
    }

    /// Creates a new SDS011 driver with the given configuration.
    pub fn with_config(serial: S, delay: D, config: Config) -> Self {
        Sds011 {
            serial,
            delay,
            config,
            pending: [0u8; FRAME_LEN],
            pending_len: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver and returns the serial port and delay.
    ///
    /// Bytes buffered from a rejected frame are dropped.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }

    /// Reads the next frame, skipping bytes until a start marker is seen.
    ///
    /// Bytes left over from a previously rejected frame are scanned before
    /// new bytes are read from the port. The frame is returned as received;
    /// it is not validated.
    pub fn read_frame(&mut self) -> Result<Frame, Error<E>> {
        let mut frame = [0u8; FRAME_LEN];
        let mut len = core::mem::take(&mut self.pending_len);
        frame[..len].copy_from_slice(&self.pending[..len]);

        let mut skipped = 0usize;
        loop {
            if len == 0 {
                self.serial.read_exact(&mut frame[..1])?;
                len = 1;
            }
            if frame[0] == HEAD {
                break;
            }
            frame.copy_within(1..len, 0);
            len -= 1;
            skipped += 1;
            if skipped > self.config.max_sync_bytes {
                return Err(Error::NoFrameStart);
            }
        }
        if skipped > 0 {
            debug!("skipped {} bytes before frame start", skipped);
        }
        self.serial.read_exact(&mut frame[len..])?;
        trace!("frame {:?}", frame);
        Ok(frame)
    }

    /// Reads and decodes one measurement.
    ///
    /// When the frame is rejected, everything after its first byte is kept
    /// and scanned by the next read, so a false start marker inside a
    /// payload costs one failed read.
    pub fn read(&mut self) -> Result<Reading, Error<E>> {
        let frame = self.read_frame()?;
        match decode(&frame) {
            Ok(reading) => {
                debug!(
                    "PM10={} ug/m^3 PM2.5={} ug/m^3",
                    reading.pm10,
                    reading.pm2_5
                );
                Ok(reading)
            }
            Err(e) => {
                warn!("rejected frame: {:?}", e);
                self.keep_pending(&frame[1..]);
                Err(e.into())
            }
        }
    }

    fn keep_pending(&mut self, bytes: &[u8]) {
        self.pending[..bytes.len()].copy_from_slice(bytes);
        self.pending_len = bytes.len();
    }

    /// Reads measurements until `on_reading` breaks.
    ///
    /// Every result, including errors, is handed to `on_reading`; the loop
    /// then waits [`Config::interval_ms`] before the next read.
    pub fn poll<F>(&mut self, mut on_reading: F)
    where
        F: FnMut(Result<Reading, Error<E>>) -> ControlFlow<()>,
    {
        loop {
            let result = self.read();
            if on_reading(result).is_break() {
                return;
            }
            self.delay.delay_ms(self.config.interval_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::checksum;
    use crate::constants::{DATA_REPORT_ID, TAIL};
    use crate::error::FrameError;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    static EXAMPLE: Frame = [0xAA, 0xC0, 0x2C, 0x01, 0x5A, 0x00, 0x00, 0x00, 0x87, 0xAB];

    fn frame(pm2_5: u16, pm10: u16) -> Frame {
        frame_with_id(pm2_5, pm10, 0)
    }

    fn frame_with_id(pm2_5: u16, pm10: u16, device_id: u16) -> Frame {
        let mut f = [0u8; FRAME_LEN];
        f[0] = HEAD;
        f[1] = DATA_REPORT_ID;
        f[2..4].copy_from_slice(&pm2_5.to_le_bytes());
        f[4..6].copy_from_slice(&pm10.to_le_bytes());
        f[6..8].copy_from_slice(&device_id.to_le_bytes());
        f[8] = checksum(&f[2..8]);
        f[9] = TAIL;
        f
    }

    #[derive(Default)]
    struct RecordingDelay {
        delays_ms: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }

    #[test]
    fn read_example() {
        let mut sensor = Sds011::new(&EXAMPLE[..], NoopDelay::new());
        let reading = sensor.read().unwrap();
        assert_eq!(reading.pm2_5, 30.0);
        assert_eq!(reading.pm10, 9.0);
    }

    #[test]
    fn resyncs_after_garbage() {
        let mut stream = vec![0x12, 0x87, 0xAB, 0x00];
        stream.extend_from_slice(&EXAMPLE);
        let mut sensor = Sds011::new(&stream[..], NoopDelay::new());
        assert_eq!(sensor.read_frame().unwrap(), EXAMPLE);
        let (rest, _) = sensor.release();
        assert!(rest.is_empty());
    }

    #[test]
    fn false_start_marker_costs_one_read() {
        let mut stream = vec![HEAD, 0x01, 0x02];
        stream.extend_from_slice(&EXAMPLE);
        stream.extend_from_slice(&EXAMPLE);
        let mut sensor = Sds011::new(&stream[..], NoopDelay::new());

        assert!(matches!(
            sensor.read(),
            Err(Error::Frame(FrameError::Type(0x01)))
        ));
        for _ in 0..2 {
            assert_eq!(
                sensor.read().unwrap(),
                Reading {
                    pm2_5: 30.0,
                    pm10: 9.0
                }
            );
        }
        let (rest, _) = sensor.release();
        assert!(rest.is_empty());
    }

    #[test]
    fn recovers_from_mid_frame_start_with_marker_in_device_id() {
        let f = frame_with_id(300, 90, 0x12AA);
        let mut stream = f[3..].to_vec();
        for _ in 0..5 {
            stream.extend_from_slice(&f);
        }
        let mut sensor = Sds011::new(&stream[..], NoopDelay::new());

        assert!(matches!(
            sensor.read(),
            Err(Error::Frame(FrameError::Type(0x12)))
        ));
        for _ in 0..5 {
            assert_eq!(
                sensor.read().unwrap(),
                Reading {
                    pm2_5: 30.0,
                    pm10: 9.0
                }
            );
        }
        let (rest, _) = sensor.release();
        assert!(rest.is_empty());
    }

    #[test]
    fn gives_up_without_start_marker() {
        let stream = [0u8; 30];
        let config = Config::default().with_max_sync_bytes(5);
        let mut sensor = Sds011::with_config(&stream[..], NoopDelay::new(), config);
        assert!(matches!(sensor.read(), Err(Error::NoFrameStart)));
        let (rest, _) = sensor.release();
        assert_eq!(rest.len(), 24);
    }

    #[test]
    fn truncated_stream() {
        let mut sensor = Sds011::new(&EXAMPLE[..6], NoopDelay::new());
        assert!(matches!(sensor.read(), Err(Error::UnexpectedEof)));

        let empty: [u8; 0] = [];
        let mut sensor = Sds011::new(&empty[..], NoopDelay::new());
        assert!(matches!(sensor.read(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn invalid_frame_is_reported() {
        let mut bad = EXAMPLE;
        bad[8] = 0;
        let mut sensor = Sds011::new(&bad[..], NoopDelay::new());
        assert!(matches!(
            sensor.read(),
            Err(Error::Frame(FrameError::Checksum {
                expected: 0x87,
                actual: 0
            }))
        ));
    }

    #[test]
    fn poll_waits_between_readings() {
        let mut bad = frame(1, 1);
        bad[1] = 0xC5;
        let mut stream = Vec::new();
        stream.extend_from_slice(&frame(300, 90));
        stream.extend_from_slice(&bad);
        stream.extend_from_slice(&frame(100, 200));
        stream.extend_from_slice(&frame(5, 5));

        let config = Config::default().with_interval_ms(250);
        let mut sensor = Sds011::with_config(&stream[..], RecordingDelay::default(), config);
        let mut results = Vec::new();
        sensor.poll(|result| {
            results.push(result);
            if results.len() == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(
            results[0].as_ref().ok(),
            Some(&Reading {
                pm2_5: 30.0,
                pm10: 9.0
            })
        );
        assert!(matches!(
            results[1],
            Err(Error::Frame(FrameError::Type(0xC5)))
        ));
        assert_eq!(
            results[2].as_ref().ok(),
            Some(&Reading {
                pm2_5: 10.0,
                pm10: 20.0
            })
        );

        let (rest, delay) = sensor.release();
        assert_eq!(delay.delays_ms, vec![250, 250]);
        assert_eq!(rest, &frame(5, 5)[..]);
    }
}
