//! NVMe Basic Management Command wire protocol
//!
//! This crate defines the SMBus-level protocol used to pull the 32-byte
//! drive health/identification record out of an NVMe subsystem. The record
//! is too long for a single SMBus block transfer, so the drive serves it as
//! two independently checksummed chunks:
//!
//! ```text
//! command 0x00, read 8 bytes          command 0x08, read 24 bytes
//! ┌────────┬─────────────┬─────┐      ┌────────┬─────────────┬─────┐
//! │ LENGTH │ PAYLOAD     │ PEC │      │ LENGTH │ PAYLOAD     │ PEC │
//! │ 1B     │ LENGTH B    │ 1B  │      │ 1B     │ LENGTH B    │ 1B  │
//! └────────┴─────────────┴─────┘      └────────┴─────────────┴─────┘
//! ```
//!
//! Each PEC is an 8-bit SMBus Packet Error Code seeded with the bus
//! addressing bytes of the exchange that produced the chunk, so corruption
//! of either half is detected without a transaction-level CRC. The two
//! chunks concatenate into the fixed [`record::TelemetryRecord`] layout.
//!
//! Everything here is pure: bus transactions live in `nvsense-drivers`.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod pec;
pub mod record;

pub use frame::{
    verify_chunk, ChunkError, FrameError, WriteFrame, CHUNK_HIGH_LEN, CHUNK_LOW_LEN,
    CMD_CHUNK_HIGH, CMD_CHUNK_LOW, MAX_FRAME_SIZE, MAX_WRITE_PAYLOAD, RECORD_LEN,
};
pub use pec::{checksum, PEC_TABLE};
pub use record::{StatusFlags, TelemetryRecord};
