// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! D-PHY instance and register operations.
//!
//! An [`XDphy`] is created empty, bound to a register window with
//! [`XDphy::cfg_initialize`] and then used for the rest of the session. There
//! is no teardown: dropping the instance leaves the hardware as it is.
//!
//! Registers are selected through a [`Handle`]. Each handle carries a
//! [`WritePolicy`] describing what [`XDphy::configure`] does with a value
//! before it reaches the register; [`XDphy::get_info`] reads the same
//! register back unchanged.

use log::{debug, trace};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;

use crate::config::Config;
use crate::registers::{self, DphyRegisters, CTRL, DLSTATUS};
use crate::static_ref::StaticRef;
use crate::ErrorCode;

/// Loop iterations the soft reset bit is held for. The core needs at least
/// 20 clock cycles; the loop has no relation to the actual clock frequency so
/// this is generously over-provisioned.
pub const SOFTRESET_TIMEOUT: u32 = 5000;

/// Highest raw handle value accepted by [`XDphy::configure_raw`] and
/// [`XDphy::get_info_raw`].
pub const HANDLE_MAX: u8 = 10;

/// [`XDphy::activate`] flag that sets the D-PHY enable bit.
pub const ENABLE_FLAG: u8 = 1;
/// [`XDphy::activate`] flag that clears the D-PHY enable bit.
pub const DISABLE_FLAG: u8 = 0;

/// Register selector for [`XDphy::configure`] and [`XDphy::get_info`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Handle {
    /// HS exit / IDELAY tap register
    Idelay = 0,
    InitTimer = 1,
    Wakeup = 2,
    HsTimeout = 3,
    EscTimeout = 4,
    /// Clock lane status
    ClkLane = 5,
    /// Data lane 0 status
    DLane0 = 6,
    DLane1 = 7,
    DLane2 = 8,
    DLane3 = 9,
}

/// What [`XDphy::configure`] does with a value for a given handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
    /// Bits outside the mask are dropped.
    Masked(u32),
    /// Written unmodified.
    Direct,
    /// Written unmodified; values outside `min..=max` are a caller defect.
    Bounded { min: u32, max: u32 },
    /// Status register. Writing it through `configure` would clobber the
    /// latched status, so doing so is a caller defect.
    ReadOnly,
}

impl Handle {
    pub const ALL: [Handle; 10] = [
        Handle::Idelay,
        Handle::InitTimer,
        Handle::Wakeup,
        Handle::HsTimeout,
        Handle::EscTimeout,
        Handle::ClkLane,
        Handle::DLane0,
        Handle::DLane1,
        Handle::DLane2,
        Handle::DLane3,
    ];

    /// Decode a raw handle value.
    ///
    /// Values above [`HANDLE_MAX`] are a caller defect and panic. Values up to
    /// `HANDLE_MAX` that name no register return `None`.
    pub fn from_raw(raw: u8) -> Option<Handle> {
        assert!(
            raw <= HANDLE_MAX,
            "XDphy: handle {} out of range (max {})",
            raw,
            HANDLE_MAX
        );
        Handle::ALL.get(usize::from(raw)).copied()
    }

    pub const fn write_policy(self) -> WritePolicy {
        match self {
            Handle::Idelay => {
                WritePolicy::Masked(registers::IDELAY_READY_MASK | registers::IDELAY_TAP_MASK)
            }
            Handle::InitTimer | Handle::Wakeup | Handle::HsTimeout => WritePolicy::Direct,
            Handle::EscTimeout => WritePolicy::Bounded {
                min: registers::TIMEOUT_MIN_VALUE,
                max: registers::TIMEOUT_MAX_VALUE,
            },
            Handle::ClkLane
            | Handle::DLane0
            | Handle::DLane1
            | Handle::DLane2
            | Handle::DLane3 => WritePolicy::ReadOnly,
        }
    }
}

impl WritePolicy {
    /// The value the register receives for `value`.
    fn apply(self, handle: Handle, value: u32) -> u32 {
        match self {
            WritePolicy::Masked(mask) => value & mask,
            WritePolicy::Direct => value,
            WritePolicy::Bounded { min, max } => {
                assert!(
                    value >= min && value <= max,
                    "XDphy: {:?} value {:#x} outside {:#x}..={:#x}",
                    handle,
                    value,
                    min,
                    max
                );
                value
            }
            WritePolicy::ReadOnly => {
                panic!(
                    "XDphy: {:?} is a status register and cannot be configured",
                    handle
                )
            }
        }
    }
}

/// Whether an instance may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// Never initialized.
    Uninitialized,
    Ready,
    /// Soft reset in progress.
    NotReady,
}

/// Spin for at least `iterations` loop iterations.
///
/// This is not a calibrated delay: how long it takes depends on the core
/// clock and the code generated for the loop. It never yields.
#[inline(never)]
pub fn busy_wait(iterations: u32) {
    let mut remaining = iterations;
    while core::hint::black_box(remaining) > 0 {
        remaining -= 1;
        core::hint::spin_loop();
    }
}

/// One D-PHY instance.
pub struct XDphy {
    config: Config,
    /// Set only when the block has a register interface.
    registers: Option<StaticRef<DphyRegisters>>,
    ready: ReadyState,
}

impl XDphy {
    /// An instance that is not bound to any hardware yet. Every register
    /// operation on it panics until [`XDphy::cfg_initialize`] is called.
    pub const fn new() -> XDphy {
        XDphy {
            config: Config::EMPTY,
            registers: None,
            ready: ReadyState::Uninitialized,
        }
    }

    /// Bind the instance to `config`, with the register interface at
    /// `effective_addr`.
    ///
    /// `effective_addr` replaces `config.base_addr` so a board can translate
    /// the physical address from its device table into a virtual one. Calling
    /// this again simply overwrites the previous binding.
    ///
    /// # Safety
    ///
    /// If `config.is_register_present` is set, `effective_addr` must point to
    /// the register interface of this D-PHY (or memory laid out like it) and
    /// stay mapped for as long as the instance is used.
    pub unsafe fn cfg_initialize(
        &mut self,
        config: &Config,
        effective_addr: usize,
    ) -> Result<(), ErrorCode> {
        assert!(effective_addr != 0, "XDphy: null base address");
        assert!(
            effective_addr % core::mem::align_of::<DphyRegisters>() == 0,
            "XDphy: misaligned base address {:#x}",
            effective_addr
        );

        self.config = *config;
        self.config.base_addr = effective_addr;
        self.registers = if config.is_register_present {
            // Safety: non-null and aligned as checked above, mapped as
            // guaranteed by our caller.
            Some(unsafe { StaticRef::new(effective_addr as *const DphyRegisters) })
        } else {
            None
        };
        self.ready = ReadyState::Ready;

        debug!(
            "XDphy@{:#x}: initialized device {} ({} lanes, register interface {})",
            effective_addr,
            config.device_id,
            config.max_lanes_present,
            if config.is_register_present {
                "present"
            } else {
                "absent"
            }
        );
        Ok(())
    }

    /// Write `value` to the register selected by `handle`, after applying the
    /// handle's [`WritePolicy`].
    ///
    /// Panics for status register handles and for an out of range escape
    /// timeout.
    pub fn configure(&self, handle: Handle, value: u32) -> Result<(), ErrorCode> {
        let regs = self.registers();
        let value = handle.write_policy().apply(handle, value);

        trace!(
            "XDphy@{:#x}: {:?} <- {:#010x}",
            self.config.base_addr,
            handle,
            value
        );
        match handle {
            Handle::Idelay => regs.hsexit_idelay.set(value),
            Handle::InitTimer => regs.init.set(value),
            Handle::Wakeup => regs.wakeup.set(value),
            Handle::HsTimeout => regs.hs_timeout.set(value),
            Handle::EscTimeout => regs.esc_timeout.set(value),
            // Rejected by the write policy above.
            Handle::ClkLane
            | Handle::DLane0
            | Handle::DLane1
            | Handle::DLane2
            | Handle::DLane3 => {}
        }
        Ok(())
    }

    /// [`XDphy::configure`] for a raw handle value. A value up to
    /// [`HANDLE_MAX`] that names no register is ignored.
    pub fn configure_raw(&self, handle: u8, value: u32) -> Result<(), ErrorCode> {
        match Handle::from_raw(handle) {
            Some(handle) => self.configure(handle, value),
            None => {
                // Keep the register interface precondition even for no-ops.
                let _ = self.registers();
                Ok(())
            }
        }
    }

    /// Read the register selected by `handle`.
    pub fn get_info(&self, handle: Handle) -> u32 {
        let regs = self.registers();
        match handle {
            Handle::Idelay => regs.hsexit_idelay.get(),
            Handle::InitTimer => regs.init.get(),
            Handle::Wakeup => regs.wakeup.get(),
            Handle::HsTimeout => regs.hs_timeout.get(),
            Handle::EscTimeout => regs.esc_timeout.get(),
            Handle::ClkLane => regs.cl_status.get(),
            Handle::DLane0 => regs.dl_status[0].get(),
            Handle::DLane1 => regs.dl_status[1].get(),
            Handle::DLane2 => regs.dl_status[2].get(),
            Handle::DLane3 => regs.dl_status[3].get(),
        }
    }

    /// [`XDphy::get_info`] for a raw handle value. A value up to
    /// [`HANDLE_MAX`] that names no register reads as 0.
    pub fn get_info_raw(&self, handle: u8) -> u32 {
        match Handle::from_raw(handle) {
            Some(handle) => self.get_info(handle),
            None => {
                let _ = self.registers();
                0
            }
        }
    }

    /// Whether the block was built with a register interface.
    pub fn get_reg_intfc_present(&self) -> bool {
        self.config.is_register_present
    }

    /// Soft reset the core.
    ///
    /// Holds the reset bit for [`SOFTRESET_TIMEOUT`] loop iterations and
    /// blocks until it is released.
    pub fn reset(&mut self) {
        self.reset_with(|_| busy_wait(SOFTRESET_TIMEOUT));
    }

    /// Soft reset, with `wait` run while the reset bit is held.
    fn reset_with<F: FnOnce(&XDphy)>(&mut self, wait: F) {
        self.registers().ctrl.modify(CTRL::SOFT_RESET::SET);
        self.ready = ReadyState::NotReady;

        wait(self);

        self.registers().ctrl.modify(CTRL::SOFT_RESET::CLEAR);
        self.ready = ReadyState::Ready;
        debug!("XDphy@{:#x}: soft reset done", self.config.base_addr);
    }

    /// Clear the latched escape and/or high speed abort bits of a data lane.
    ///
    /// Bits of `mask` other than the two abort bits are dropped; a mask with
    /// neither abort bit is a caller defect.
    pub fn clear_data_lane(&self, lane: u8, mask: u32) {
        let status = self.data_lane(lane);
        let mask = mask & registers::DLSTATUS_ABORT_MASK;
        assert!(mask != 0, "XDphy: no abort bit selected for lane {}", lane);

        debug!(
            "XDphy@{:#x}: clearing lane {} aborts {:#x}",
            self.config.base_addr, lane, mask
        );
        status.set(mask);
    }

    /// Raw clock lane status.
    pub fn get_clk_lane_status(&self) -> u32 {
        self.registers().cl_status.get()
    }

    /// Mode field of the clock lane status.
    pub fn get_clk_lane_mode(&self) -> u32 {
        self.get_clk_lane_status() & registers::CLSTATUS_MODE_MASK
    }

    /// Raw status of data lane `lane`.
    pub fn get_data_lane_status(&self, lane: u8) -> u32 {
        self.data_lane(lane).get()
    }

    /// Mode field of data lane `lane`.
    pub fn get_data_lane_mode(&self, lane: u8) -> u32 {
        self.get_data_lane_status(lane) & registers::DLSTATUS_MODE_MASK
    }

    /// Set (`ENABLE_FLAG`) or clear (`DISABLE_FLAG`) the D-PHY enable bit.
    /// Any other flag writes the control register back unchanged.
    pub fn activate(&self, flag: u8) {
        let regs = self.registers();
        let mut ctrl = regs.ctrl.extract();

        match flag {
            ENABLE_FLAG => ctrl.modify(CTRL::DPHY_EN::SET),
            DISABLE_FLAG => ctrl.modify(CTRL::DPHY_EN::CLEAR),
            _ => {}
        }
        regs.ctrl.set(ctrl.get());

        debug!(
            "XDphy@{:#x}: {}",
            self.config.base_addr,
            if ctrl.is_set(CTRL::DPHY_EN) {
                "enabled"
            } else {
                "disabled"
            }
        );
    }

    pub fn enable(&self) {
        self.activate(ENABLE_FLAG);
    }

    pub fn disable(&self) {
        self.activate(DISABLE_FLAG);
    }

    /// Contents of the core version register.
    pub fn get_version(&self) -> u32 {
        self.registers().version.get()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready
    }

    pub fn is_ready(&self) -> bool {
        self.ready == ReadyState::Ready
    }

    fn registers(&self) -> &DphyRegisters {
        match self.registers {
            Some(ref regs) => &**regs,
            None => panic!("XDphy: register interface not present"),
        }
    }

    fn data_lane(&self, lane: u8) -> &ReadWrite<u32, DLSTATUS::Register> {
        let regs = self.registers();
        assert!(
            lane < self.config.max_lanes_present,
            "XDphy: data lane {} not present ({} lanes)",
            lane,
            self.config.max_lanes_present
        );
        &regs.dl_status[usize::from(lane)]
    }
}
