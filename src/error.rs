/// Structural violations detected while decoding a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum FrameError {
    /// The frame is not exactly [`FRAME_LEN`](crate::FRAME_LEN) bytes long.
    #[cfg_attr(feature = "thiserror", error("frame length {0}, expected 10"))]
    Length(usize),
    /// The first byte is not [`HEAD`](crate::HEAD).
    #[cfg_attr(feature = "thiserror", error("bad start marker {0:#04x}"))]
    Start(u8),
    /// The second byte is not [`DATA_REPORT_ID`](crate::DATA_REPORT_ID).
    #[cfg_attr(feature = "thiserror", error("unexpected frame type {0:#04x}"))]
    Type(u8),
    /// The last byte is not [`TAIL`](crate::TAIL).
    #[cfg_attr(feature = "thiserror", error("bad end marker {0:#04x}"))]
    End(u8),
    /// The payload sum does not match the checksum byte.
    #[cfg_attr(
        feature = "thiserror",
        error("checksum mismatch: computed {expected:#04x}, frame carries {actual:#04x}")
    )]
    Checksum { expected: u8, actual: u8 },
}

/// SDS011 driver errors.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E> {
    /// Serial transport error.
    #[cfg_attr(feature = "thiserror", error("serial: {0:?}"))]
    Serial(E),
    /// The stream ended in the middle of a frame.
    #[cfg_attr(feature = "thiserror", error("unexpected end of stream"))]
    UnexpectedEof,
    /// No start marker within the configured number of bytes.
    #[cfg_attr(feature = "thiserror", error("no frame start marker found"))]
    NoFrameStart,
    /// A frame was received but failed validation.
    #[cfg_attr(feature = "thiserror", error("invalid frame: {0}"))]
    Frame(FrameError),
}

impl<E> From<FrameError> for Error<E> {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

impl<E> From<embedded_io::ReadExactError<E>> for Error<E> {
    fn from(e: embedded_io::ReadExactError<E>) -> Self {
        match e {
            embedded_io::ReadExactError::UnexpectedEof => Error::UnexpectedEof,
            embedded_io::ReadExactError::Other(e) => Error::Serial(e),
        }
    }
}
