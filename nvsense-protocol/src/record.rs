//! Decoded layout of the 32-byte Basic Management record.
//!
//! The decoder is purely positional: the split-read path has already
//! verified both PEC trailers, and the format carries no other redundancy,
//! so a checksum-valid buffer is taken at face value.

use crate::frame::RECORD_LEN;

/// Drive status flag byte, offset 1 of the record.
///
/// Bits 0..=1 are reserved. Each flag is decoded with an explicit mask so
/// the layout does not depend on compiler bit-field ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
    /// PCIe port 1 link is up
    pub port1_link_active: bool,
    /// PCIe port 0 link is up
    pub port0_link_active: bool,
    /// Drive does not require a reset
    pub reset_not_required: bool,
    /// Drive is functional
    pub drive_functional: bool,
    /// Drive is not ready to service commands
    pub drive_not_ready: bool,
    /// SMBus arbitration state
    pub smbus_arbitration: bool,
}

impl StatusFlags {
    /// Decode the flag byte
    pub fn from_byte(byte: u8) -> Self {
        Self {
            port1_link_active: byte & (1 << 2) != 0,
            port0_link_active: byte & (1 << 3) != 0,
            reset_not_required: byte & (1 << 4) != 0,
            drive_functional: byte & (1 << 5) != 0,
            drive_not_ready: byte & (1 << 6) != 0,
            smbus_arbitration: byte & (1 << 7) != 0,
        }
    }
}

/// The decoded telemetry/identification record.
///
/// Byte offsets are fixed by the wire format:
///
/// ```text
/// 0       chunk0 length        8       chunk1 length
/// 1       status flags         9..=10  vendor id
/// 2       SMART warning bits   11..=30 serial number
/// 3       temperature (°C)     31      chunk1 PEC
/// 4       drive life used (%)
/// 5..=6   reserved
/// 7       chunk0 PEC
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    /// Valid payload bytes declared by the low chunk
    pub chunk0_length: u8,
    /// Drive status flags
    pub flags: StatusFlags,
    /// SMART critical warning bits
    pub smart_warning: u8,
    /// Composite drive temperature in whole degrees Celsius
    pub temperature_celsius: u8,
    /// Percentage of rated drive life consumed
    pub drive_life_used_percent: u8,
    /// PEC trailer of the low chunk
    pub pec_chunk0: u8,
    /// Valid payload bytes declared by the high chunk
    pub chunk1_length: u8,
    /// PCI vendor identifier, as transmitted
    pub vendor_id: [u8; 2],
    /// Drive serial number, space-padded ASCII
    pub serial_number: [u8; 20],
    /// PEC trailer of the high chunk
    pub pec_chunk1: u8,
}

impl TelemetryRecord {
    /// Decode a checksum-validated 32-byte buffer
    pub fn decode(buf: &[u8; RECORD_LEN]) -> Self {
        let mut vendor_id = [0u8; 2];
        vendor_id.copy_from_slice(&buf[9..11]);
        let mut serial_number = [0u8; 20];
        serial_number.copy_from_slice(&buf[11..31]);

        Self {
            chunk0_length: buf[0],
            flags: StatusFlags::from_byte(buf[1]),
            smart_warning: buf[2],
            temperature_celsius: buf[3],
            drive_life_used_percent: buf[4],
            pec_chunk0: buf[7],
            chunk1_length: buf[8],
            vendor_id,
            serial_number,
            pec_chunk1: buf[31],
        }
    }

    /// Serial number with trailing padding stripped
    pub fn serial_trimmed(&self) -> &[u8] {
        let end = self
            .serial_number
            .iter()
            .rposition(|&b| b != b' ' && b != 0)
            .map_or(0, |i| i + 1);
        &self.serial_number[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[0] = 6; // chunk0 length
        buf[1] = 0b0011_1000; // port0 + reset_not_required + functional
        buf[2] = 0x01; // smart warning
        buf[3] = 0x37; // 55 °C
        buf[4] = 9; // drive life used
        buf[7] = 0xAA; // pec0 (not validated here)
        buf[8] = 22; // chunk1 length
        buf[9] = 0x14; // vendor id
        buf[10] = 0x4D;
        buf[11..31].copy_from_slice(b"S3X9NB0K500021      ");
        buf[31] = 0x55; // pec1
        buf
    }

    #[test]
    fn test_decode_positional_fields() {
        let rec = TelemetryRecord::decode(&sample_buffer());

        assert_eq!(rec.chunk0_length, 6);
        assert_eq!(rec.smart_warning, 0x01);
        assert_eq!(rec.temperature_celsius, 55);
        assert_eq!(rec.drive_life_used_percent, 9);
        assert_eq!(rec.pec_chunk0, 0xAA);
        assert_eq!(rec.chunk1_length, 22);
        assert_eq!(rec.vendor_id, [0x14, 0x4D]);
        assert_eq!(rec.pec_chunk1, 0x55);
    }

    #[test]
    fn test_flag_bit_positions() {
        let rec = TelemetryRecord::decode(&sample_buffer());
        assert!(!rec.flags.port1_link_active);
        assert!(rec.flags.port0_link_active);
        assert!(rec.flags.reset_not_required);
        assert!(rec.flags.drive_functional);
        assert!(!rec.flags.drive_not_ready);
        assert!(!rec.flags.smbus_arbitration);

        // Each bit independently
        let flags = StatusFlags::from_byte(1 << 2);
        assert!(flags.port1_link_active);
        let flags = StatusFlags::from_byte(1 << 6);
        assert!(flags.drive_not_ready);
        let flags = StatusFlags::from_byte(1 << 7);
        assert!(flags.smbus_arbitration);

        // Reserved bits decode to nothing
        let flags = StatusFlags::from_byte(0b0000_0011);
        assert_eq!(flags, StatusFlags::from_byte(0));
    }

    #[test]
    fn test_serial_trimmed() {
        let rec = TelemetryRecord::decode(&sample_buffer());
        assert_eq!(rec.serial_trimmed(), b"S3X9NB0K500021");

        let mut buf = sample_buffer();
        buf[11..31].copy_from_slice(&[b' '; 20]);
        assert_eq!(TelemetryRecord::decode(&buf).serial_trimmed(), b"");
    }

    #[test]
    fn test_decode_accepts_arbitrary_bytes() {
        // No validation here: garbage in, faithfully decoded garbage out
        let mut buf = [0xFFu8; RECORD_LEN];
        buf[3] = 0;
        let rec = TelemetryRecord::decode(&buf);
        assert_eq!(rec.temperature_celsius, 0);
        assert_eq!(rec.chunk0_length, 0xFF);
    }
}
