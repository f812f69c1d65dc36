//! SMBus transport abstraction
//!
//! Provides the byte-exchange trait the Basic Management protocol runs
//! over. Implementations own the physical bus: clocking, timeouts, and any
//! serialization of concurrent users. The protocol layer assumes exclusive
//! use of the bus for the duration of one exchange.

/// SMBus/I2C master transport
///
/// Addresses are 7-bit; the 8-bit read/write address forms that appear in
/// PEC seeds are derived by the protocol layer, never put on the wire here.
pub trait SmbusTransport {
    /// Error type for bus operations
    type Error;

    /// Write bytes to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit device address
    /// * `bytes` - Bytes to write
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// Used to issue a command byte and read back its response without
    /// releasing the bus in between.
    ///
    /// # Arguments
    /// * `address` - 7-bit device address
    /// * `write_bytes` - Bytes to write (typically a command code)
    /// * `read_buf` - Buffer to read into; filled completely
    fn write_read(
        &mut self,
        address: u8,
        write_bytes: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}
