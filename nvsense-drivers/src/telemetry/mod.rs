//! Drive telemetry drivers

pub mod bus;
pub mod nvme_bmc;

pub use bus::I2cTransport;
pub use nvme_bmc::{Error, NvmeBmc};
