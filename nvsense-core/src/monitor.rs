//! Monitor-facing channel types
//!
//! A monitoring consumer addresses driver readings by (channel, attribute)
//! pair. Drivers expose the pairs they implement through a registry, so new
//! channels can be surfaced from already-decoded telemetry without touching
//! the wire protocol.

/// A reading in milli-degrees Celsius.
///
/// The Basic Management record reports whole degrees; the monitor surface
/// keeps the conventional milli-degree scale, so 55 °C reads as 55_000.
pub type Millicelsius = i32;

/// Measurement channels a drive can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Composite drive temperature
    Temperature,
    /// SMART critical warning bits
    SmartWarning,
    /// Percentage of rated drive life consumed
    DriveLife,
}

/// What aspect of a channel is being accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// Current measured value, read-only
    Input,
}
