//! Command framing for the Basic Management read and write paths.
//!
//! Reads are two fixed exchanges: write one command byte, read back a
//! length-delimited chunk with a PEC trailer. Writes (reserved for future
//! firmware use; no write command is implemented on the wire today) carry a
//! 4-byte big-endian offset followed by up to 28 payload bytes in a single
//! 32-byte frame.

use heapless::Vec;

use crate::pec::checksum;

/// Command code requesting record bytes 0..=7.
pub const CMD_CHUNK_LOW: u8 = 0x00;

/// Command code requesting record bytes 8..=31.
pub const CMD_CHUNK_HIGH: u8 = 0x08;

/// Read size for the low chunk: length byte + 6 payload bytes + PEC.
pub const CHUNK_LOW_LEN: usize = 8;

/// Read size for the high chunk: length byte + 22 payload bytes + PEC.
pub const CHUNK_HIGH_LEN: usize = 24;

/// Size of the assembled telemetry record.
pub const RECORD_LEN: usize = CHUNK_LOW_LEN + CHUNK_HIGH_LEN;

/// Maximum write-frame payload (32-byte frame minus the 4 offset bytes).
pub const MAX_WRITE_PAYLOAD: usize = 28;

/// Maximum complete write frame size (OFFSET + MAX_PAYLOAD).
pub const MAX_FRAME_SIZE: usize = 4 + MAX_WRITE_PAYLOAD;

/// Errors from write-frame construction and encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds the fixed 32-byte transmit frame
    PayloadTooLarge,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// Errors from response-chunk verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChunkError {
    /// Declared payload length does not fit the chunk that was read
    LengthOutOfRange,
    /// PEC trailer does not match the computed checksum
    PecMismatch,
}

/// Verify a length-delimited response chunk against its PEC trailer.
///
/// `chunk` is the full buffer returned by one read exchange. The PEC is
/// seeded with the 8-bit write address, the command byte that requested the
/// chunk, and the 8-bit read address, then folded over the length byte and
/// the declared payload. The trailer sits immediately after the payload.
pub fn verify_chunk(
    write_addr: u8,
    command: u8,
    read_addr: u8,
    chunk: &[u8],
) -> Result<(), ChunkError> {
    let n = *chunk.first().ok_or(ChunkError::LengthOutOfRange)? as usize;
    if n + 2 > chunk.len() {
        return Err(ChunkError::LengthOutOfRange);
    }

    let pec = checksum(0, &[write_addr, command, read_addr]);
    let pec = checksum(pec, &chunk[..=n]);
    if pec != chunk[n + 1] {
        return Err(ChunkError::PecMismatch);
    }

    Ok(())
}

/// An outbound write frame: device offset plus payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFrame {
    /// Target offset within the device
    pub offset: u32,
    /// Payload data
    pub payload: Vec<u8, MAX_WRITE_PAYLOAD>,
}

impl WriteFrame {
    /// Create a new write frame with the given offset and payload
    pub fn new(offset: u32, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_WRITE_PAYLOAD {
            return Err(FrameError::PayloadTooLarge);
        }

        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            offset,
            payload: payload_vec,
        })
    }

    /// Encode this frame into a byte buffer
    ///
    /// The offset goes out most-significant-byte first regardless of host
    /// byte order. Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = 4 + self.payload.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[..4].copy_from_slice(&self.offset.to_be_bytes());
        buffer[4..frame_len].copy_from_slice(&self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}
