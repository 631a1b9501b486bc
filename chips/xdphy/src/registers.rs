// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register map of the MIPI D-PHY register interface.
//!
//! Offsets and field positions are fixed by the IP block and must not change.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub DphyRegisters {
        /// Control register
        (0x00 => pub(crate) ctrl: ReadWrite<u32, CTRL::Register>),
        /// Core version
        (0x04 => pub(crate) version: ReadOnly<u32>),
        /// Initialization timer
        (0x08 => pub(crate) init: ReadWrite<u32>),
        /// Wakeup timer for ULPS exit
        (0x0C => pub(crate) wakeup: ReadWrite<u32>),
        /// High speed receive timeout
        (0x10 => pub(crate) hs_timeout: ReadWrite<u32>),
        /// Escape mode timeout
        (0x14 => pub(crate) esc_timeout: ReadWrite<u32>),
        /// Clock lane status
        (0x18 => pub(crate) cl_status: ReadOnly<u32, CLSTATUS::Register>),
        /// Data lane 0 to 3 status, abort bits are write-one-to-clear
        (0x1C => pub(crate) dl_status: [ReadWrite<u32, DLSTATUS::Register>; 4]),
        (0x2C => _reserved0),
        /// HS exit timer or IDELAY tap value, depending on the configuration
        (0x30 => pub(crate) hsexit_idelay: ReadWrite<u32, IDELAY::Register>),
        (0x34 => @END),
    }
}

register_bitfields![u32,
    pub CTRL [
        /// Soft reset, held for at least 20 core clock cycles
        SOFT_RESET OFFSET(0) NUMBITS(1) [],
        /// Enable the D-PHY
        DPHY_EN OFFSET(1) NUMBITS(1) []
    ],
    pub CLSTATUS [
        MODE OFFSET(0) NUMBITS(2) [
            LowPower = 0,
            UltraLowPower = 1,
            HighSpeed = 2
        ],
        ULPS OFFSET(2) NUMBITS(1) [],
        STOP OFFSET(3) NUMBITS(1) [],
        /// Clock lane control error (receiver only)
        ERR_CTRL OFFSET(4) NUMBITS(1) []
    ],
    pub DLSTATUS [
        MODE OFFSET(0) NUMBITS(2) [
            LowPower = 0,
            Escape = 1,
            UltraLowPower = 2,
            HighSpeed = 3
        ],
        ULPS OFFSET(2) NUMBITS(1) [],
        STOP OFFSET(3) NUMBITS(1) [],
        ESC_ABORT OFFSET(4) NUMBITS(1) [],
        HS_ABORT OFFSET(5) NUMBITS(1) [],
        PACKET_COUNT OFFSET(16) NUMBITS(16) []
    ],
    pub IDELAY [
        TAP OFFSET(0) NUMBITS(5) [],
        READY OFFSET(31) NUMBITS(1) []
    ]
];

pub const CTRL_OFFSET: usize = 0x00;
pub const VERSION_OFFSET: usize = 0x04;
pub const INIT_OFFSET: usize = 0x08;
pub const WAKEUP_OFFSET: usize = 0x0C;
pub const HSTIMEOUT_OFFSET: usize = 0x10;
pub const ESCTIMEOUT_OFFSET: usize = 0x14;
pub const CLSTATUS_OFFSET: usize = 0x18;
pub const DL0STATUS_OFFSET: usize = 0x1C;
pub const DL1STATUS_OFFSET: usize = 0x20;
pub const DL2STATUS_OFFSET: usize = 0x24;
pub const DL3STATUS_OFFSET: usize = 0x28;
pub const HSEXIT_IDELAY_OFFSET: usize = 0x30;

/// Bytes spanned by the register interface.
pub const REGISTER_SPAN: usize = core::mem::size_of::<DphyRegisters>();

pub const CTRL_SOFTRESET_MASK: u32 = 1 << 0;
pub const CTRL_DPHYEN_MASK: u32 = 1 << 1;

pub const IDELAY_TAP_MASK: u32 = 0x1F;
pub const IDELAY_READY_MASK: u32 = 1 << 31;

pub const CLSTATUS_MODE_MASK: u32 = 0x3;

pub const DLSTATUS_MODE_MASK: u32 = 0x3;
pub const DLSTATUS_ESCABRT_MASK: u32 = 1 << 4;
pub const DLSTATUS_HSABRT_MASK: u32 = 1 << 5;

/// Latched error bits a data lane status write can clear.
pub const DLSTATUS_ABORT_MASK: u32 = DLSTATUS_ESCABRT_MASK | DLSTATUS_HSABRT_MASK;

/// Smallest value accepted for the escape timeout.
pub const TIMEOUT_MIN_VALUE: u32 = 0x800;
/// Largest value accepted for the escape timeout.
pub const TIMEOUT_MAX_VALUE: u32 = 0x10005;

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn offsets_match_field_layout() {
        assert_eq!(offset_of!(DphyRegisters, ctrl), CTRL_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, version), VERSION_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, init), INIT_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, wakeup), WAKEUP_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, hs_timeout), HSTIMEOUT_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, esc_timeout), ESCTIMEOUT_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, cl_status), CLSTATUS_OFFSET);
        assert_eq!(offset_of!(DphyRegisters, dl_status), DL0STATUS_OFFSET);
        assert_eq!(
            offset_of!(DphyRegisters, hsexit_idelay),
            HSEXIT_IDELAY_OFFSET
        );
        assert_eq!(DL1STATUS_OFFSET, DL0STATUS_OFFSET + 4);
        assert_eq!(DL2STATUS_OFFSET, DL0STATUS_OFFSET + 8);
        assert_eq!(DL3STATUS_OFFSET, DL0STATUS_OFFSET + 12);
        assert_eq!(REGISTER_SPAN, 0x34);
    }

    #[test]
    fn masks_match_bitfields() {
        assert_eq!(CTRL::SOFT_RESET::SET.mask(), CTRL_SOFTRESET_MASK);
        assert_eq!(CTRL::DPHY_EN::SET.mask(), CTRL_DPHYEN_MASK);
        assert_eq!(IDELAY::TAP.mask << IDELAY::TAP.shift, IDELAY_TAP_MASK);
        assert_eq!(IDELAY::READY::SET.mask(), IDELAY_READY_MASK);
        assert_eq!(CLSTATUS::MODE.mask << CLSTATUS::MODE.shift, CLSTATUS_MODE_MASK);
        assert_eq!(DLSTATUS::MODE.mask << DLSTATUS::MODE.shift, DLSTATUS_MODE_MASK);
        assert_eq!(DLSTATUS::ESC_ABORT::SET.mask(), DLSTATUS_ESCABRT_MASK);
        assert_eq!(DLSTATUS::HS_ABORT::SET.mask(), DLSTATUS_HSABRT_MASK);
    }
}
