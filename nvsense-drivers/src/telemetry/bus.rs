//! embedded-hal adapter for the SMBus transport seam

use embedded_hal::i2c::I2c;
use nvsense_core::SmbusTransport;

/// Wraps any blocking embedded-hal I2C master as an [`SmbusTransport`].
///
/// Timeouts and bus recovery stay with the wrapped implementation; this
/// adapter only maps the call surface.
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I> I2cTransport<I> {
    /// Wrap an I2C peripheral
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> SmbusTransport for I2cTransport<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_bytes: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(address, write_bytes, read_buf)
    }
}
