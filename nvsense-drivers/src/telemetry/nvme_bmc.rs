//! NVMe Basic Management telemetry driver
//!
//! Pulls the 32-byte health/identification record out of an NVMe subsystem
//! over SMBus. The record comes back as two chunks (the bus limits a single
//! block read), each carrying its own length byte and PEC trailer; both
//! must validate before anything is decoded or cached.
//!
//! Each read is a fresh two-exchange transaction with no protocol state in
//! between. The last successfully decoded record is kept so identification
//! fields stay available between polls; a failed read never touches it.

use nvsense_core::{Attribute, Channel, Millicelsius, SmbusTransport};
use nvsense_protocol::frame::{
    verify_chunk, ChunkError, CHUNK_LOW_LEN, CMD_CHUNK_HIGH, CMD_CHUNK_LOW, RECORD_LEN,
};
use nvsense_protocol::record::TelemetryRecord;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying bus exchange failed
    Bus(E),
    /// A response chunk failed PEC validation
    Integrity(ChunkError),
    /// The (channel, attribute) pair is not surfaced by this drive
    UnsupportedChannel,
    /// No record has been read successfully yet
    NoRecord,
}

impl<E> From<ChunkError> for Error<E> {
    fn from(err: ChunkError) -> Self {
        Error::Integrity(err)
    }
}

struct ChannelEntry {
    channel: Channel,
    attribute: Attribute,
    read: fn(&TelemetryRecord) -> i32,
}

fn temperature_input(record: &TelemetryRecord) -> i32 {
    i32::from(record.temperature_celsius) * 1000
}

fn smart_warning_input(record: &TelemetryRecord) -> i32 {
    i32::from(record.smart_warning)
}

fn drive_life_input(record: &TelemetryRecord) -> i32 {
    i32::from(record.drive_life_used_percent)
}

/// Registry of surfaced (channel, attribute) pairs. New channels project
/// other record fields here without touching the read protocol.
const CHANNELS: &[ChannelEntry] = &[
    ChannelEntry {
        channel: Channel::Temperature,
        attribute: Attribute::Input,
        read: temperature_input,
    },
    ChannelEntry {
        channel: Channel::SmartWarning,
        attribute: Attribute::Input,
        read: smart_warning_input,
    },
    ChannelEntry {
        channel: Channel::DriveLife,
        attribute: Attribute::Input,
        read: drive_life_input,
    },
];

/// NVMe Basic Management endpoint on an SMBus segment
pub struct NvmeBmc<B> {
    bus: B,
    /// 7-bit device address used on the wire
    address: u8,
    /// 8-bit write address, PEC seed byte only
    write_addr: u8,
    /// 8-bit read address, PEC seed byte only
    read_addr: u8,
    record: Option<TelemetryRecord>,
}

impl<B> NvmeBmc<B> {
    /// Create a driver for the drive at the given 7-bit address
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            write_addr: address << 1,
            read_addr: (address << 1) | 1,
            record: None,
        }
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// The last successfully decoded record, if any
    pub fn last_record(&self) -> Option<&TelemetryRecord> {
        self.record.as_ref()
    }

    /// Whether a (channel, attribute) pair is surfaced by this driver
    pub fn supports(channel: Channel, attribute: Attribute) -> bool {
        CHANNELS
            .iter()
            .any(|e| e.channel == channel && e.attribute == attribute)
    }
}

impl<B: SmbusTransport> NvmeBmc<B> {
    /// PCI vendor identifier from the cached record
    pub fn vendor_id(&self) -> Result<[u8; 2], Error<B::Error>> {
        self.record.map(|r| r.vendor_id).ok_or(Error::NoRecord)
    }

    /// Drive serial number from the cached record, padding stripped
    pub fn serial_number(&self) -> Result<&[u8], Error<B::Error>> {
        self.record
            .as_ref()
            .map(|r| r.serial_trimmed())
            .ok_or(Error::NoRecord)
    }

    /// Fetch, validate, and decode a fresh telemetry record.
    ///
    /// Two exchanges: command 0x00 reads record bytes 0..8, command 0x08
    /// reads bytes 8..32. The read is all-or-nothing; any bus or PEC
    /// failure discards the buffer and leaves the cached record alone.
    pub fn read_record(&mut self) -> Result<TelemetryRecord, Error<B::Error>> {
        let mut buf = [0u8; RECORD_LEN];

        self.bus
            .write_read(self.address, &[CMD_CHUNK_LOW], &mut buf[..CHUNK_LOW_LEN])
            .map_err(Error::Bus)?;
        verify_chunk(
            self.write_addr,
            CMD_CHUNK_LOW,
            self.read_addr,
            &buf[..CHUNK_LOW_LEN],
        )?;

        self.bus
            .write_read(self.address, &[CMD_CHUNK_HIGH], &mut buf[CHUNK_LOW_LEN..])
            .map_err(Error::Bus)?;
        verify_chunk(
            self.write_addr,
            CMD_CHUNK_HIGH,
            self.read_addr,
            &buf[CHUNK_LOW_LEN..],
        )?;

        let record = TelemetryRecord::decode(&buf);
        self.record = Some(record);
        Ok(record)
    }

    /// Read the composite drive temperature in milli-degrees Celsius
    pub fn read_millicelsius(&mut self) -> Result<Millicelsius, Error<B::Error>> {
        let record = self.read_record()?;
        Ok(temperature_input(&record))
    }

    /// Read the current value of a surfaced channel
    pub fn read_channel(
        &mut self,
        channel: Channel,
        attribute: Attribute,
    ) -> Result<i32, Error<B::Error>> {
        let entry = CHANNELS
            .iter()
            .find(|e| e.channel == channel && e.attribute == attribute)
            .ok_or(Error::UnsupportedChannel)?;
        let record = self.read_record()?;
        Ok((entry.read)(&record))
    }
}
