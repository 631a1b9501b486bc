// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Driver for the Xilinx MIPI D-PHY soft IP block.
//!
//! The D-PHY exposes an optional AXI4-Lite register bank with a control
//! register, a handful of protocol timers and one status register per lane
//! (a clock lane and up to four data lanes). Everything here is a direct,
//! synchronous access to that bank; there are no interrupts and no buffering.
//!
//! Usage
//! -----
//!
//! ```rust,no_run
//! use xdphy::{config, dphy::{Handle, XDphy}};
//!
//! static TABLE: [config::Config; 1] = [config::Config {
//!     device_id: 0,
//!     base_addr: 0x44A0_0000,
//!     is_register_present: true,
//!     max_lanes_present: 4,
//!     ..config::Config::EMPTY
//! }];
//!
//! let cfg = config::lookup_config(&TABLE, 0).unwrap();
//! let mut phy = XDphy::new();
//! // Safety: 0x44A0_0000 is the D-PHY register window on this platform.
//! unsafe { phy.cfg_initialize(cfg, cfg.base_addr) }.unwrap();
//! phy.reset();
//! phy.configure(Handle::Wakeup, 0x1000).unwrap();
//! phy.enable();
//! ```
//!
//! Misuse of the register interface (writing a status register through
//! [`dphy::XDphy::configure`], addressing a lane that is not implemented,
//! touching registers on a block built without a register interface) is a
//! programming error and panics. Conditions a caller can recover from are
//! reported through [`ErrorCode`].

#![no_std]
#![crate_name = "xdphy"]
#![crate_type = "rlib"]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod dphy;
pub mod registers;
pub mod selftest;

mod errorcode;
mod static_ref;
pub use errorcode::ErrorCode;

#[cfg(test)]
pub(crate) mod testing;
