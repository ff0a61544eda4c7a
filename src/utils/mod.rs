//! Utility modules for the service
//!
//! - **error**: Error type and error envelope
//! - **logging**: Subscriber setup
//! - **net**: Admission control

pub mod error;
pub mod logging;
pub mod net;
