// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! D-PHY instances of the hardware design this board targets.

use xdphy::config::Config;

/// Device the self-test runs against unless told otherwise.
pub const DPHY_DEV_ID: u32 = 0;

pub static DPHY_CONFIG_TABLE: [Config; 2] = [
    // Four lane receiver with the register interface enabled.
    Config {
        device_id: 0,
        base_addr: 0x44A0_0000,
        is_rx: true,
        is_register_present: true,
        max_lanes_present: 4,
        esc_clk_period: 50_000,
        esc_timeout: 25_600,
        hs_line_rate: 1_000,
        hs_timeout: 65_541,
        stable_clk_period: 5_000,
        tx_pll_clkin_period: 0,
        wakeup: 1_000,
        enable_timeout_regs: true,
    },
    // Two lane transmitter configured statically, no register interface.
    Config {
        device_id: 1,
        base_addr: 0x44A1_0000,
        is_rx: false,
        is_register_present: false,
        max_lanes_present: 2,
        esc_clk_period: 50_000,
        esc_timeout: 25_600,
        hs_line_rate: 800,
        hs_timeout: 65_541,
        stable_clk_period: 5_000,
        tx_pll_clkin_period: 5_000,
        wakeup: 1_000,
        enable_timeout_regs: false,
    },
];
