//! Drive-facing driver implementations
//!
//! This crate provides concrete drivers speaking the protocols defined in
//! nvsense-protocol over the bus seam defined in nvsense-core:
//!
//! - NVMe Basic Management telemetry (split-read, PEC-validated)
//! - An embedded-hal I2C adapter for running drivers on real hardware

#![no_std]
#![deny(unsafe_code)]

pub mod telemetry;
