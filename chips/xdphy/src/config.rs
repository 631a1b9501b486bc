// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Static per-instance configuration of the D-PHY.
//!
//! A board keeps one [`Config`] per D-PHY it instantiates, usually in a
//! `static` table generated alongside the hardware design, and hands the
//! matching entry to [`XDphy::cfg_initialize`](crate::dphy::XDphy::cfg_initialize).

/// Build-time parameters of one D-PHY instance.
///
/// Only `base_addr`, `is_register_present`, `max_lanes_present` and
/// `hs_timeout` are interpreted by the driver. The remaining fields describe
/// how the IP was generated and are carried along for the board's use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub device_id: u32,
    /// Base address of the register interface.
    pub base_addr: usize,
    /// Receiver (`true`) or transmitter (`false`).
    pub is_rx: bool,
    /// Without a register interface the D-PHY is configured statically and
    /// no register may be accessed.
    pub is_register_present: bool,
    /// Number of implemented data lanes, 1 to 4.
    pub max_lanes_present: u8,
    /// Escape clock period in picoseconds.
    pub esc_clk_period: u32,
    pub esc_timeout: u32,
    /// Line rate in Mbps.
    pub hs_line_rate: u32,
    /// HS timeout the block was generated with. The HS timeout register
    /// resets to this value.
    pub hs_timeout: u32,
    pub stable_clk_period: u32,
    pub tx_pll_clkin_period: u32,
    pub wakeup: u32,
    pub enable_timeout_regs: bool,
}

impl Config {
    /// An instance with every field cleared and no register interface.
    pub const EMPTY: Config = Config {
        device_id: 0,
        base_addr: 0,
        is_rx: false,
        is_register_present: false,
        max_lanes_present: 0,
        esc_clk_period: 0,
        esc_timeout: 0,
        hs_line_rate: 0,
        hs_timeout: 0,
        stable_clk_period: 0,
        tx_pll_clkin_period: 0,
        wakeup: 0,
        enable_timeout_regs: false,
    };
}

/// Find the configuration for `device_id` in a board's device table.
pub fn lookup_config(table: &[Config], device_id: u32) -> Option<&Config> {
    table.iter().find(|cfg| cfg.device_id == device_id)
}
