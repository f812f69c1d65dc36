//! Hardware-agnostic seams for the NvSense driver stack
//!
//! This crate contains the interfaces between the drive-facing drivers and
//! their environment:
//!
//! - The [`transport::SmbusTransport`] trait the split-read protocol runs
//!   over (implemented by platform HALs or test doubles)
//! - Monitor-facing channel and attribute types for the typed channel
//!   registry

#![no_std]
#![deny(unsafe_code)]

pub mod monitor;
pub mod transport;

pub use monitor::{Attribute, Channel, Millicelsius};
pub use transport::SmbusTransport;
