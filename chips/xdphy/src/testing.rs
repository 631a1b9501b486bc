// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! An in-memory stand-in for the D-PHY register interface.

use core::cell::UnsafeCell;
use std::boxed::Box;
use std::vec::Vec;

use crate::config::Config;
use crate::registers::REGISTER_SPAN;

/// Plain memory laid out like the register interface. Reads return whatever
/// was last written, which is enough to observe what the driver stores.
pub(crate) struct RegisterWindow {
    words: Box<[UnsafeCell<u32>]>,
}

impl RegisterWindow {
    pub(crate) fn new() -> RegisterWindow {
        let words: Vec<UnsafeCell<u32>> = (0..REGISTER_SPAN / 4)
            .map(|_| UnsafeCell::new(0))
            .collect();
        RegisterWindow {
            words: words.into_boxed_slice(),
        }
    }

    pub(crate) fn base(&self) -> usize {
        self.words.as_ptr() as usize
    }

    pub(crate) fn peek(&self, offset: usize) -> u32 {
        // Safety: in bounds and aligned; all access goes through raw pointers.
        unsafe { self.words[offset / 4].get().read_volatile() }
    }

    pub(crate) fn poke(&self, offset: usize, value: u32) {
        // Safety: as for `peek`.
        unsafe { self.words[offset / 4].get().write_volatile(value) }
    }
}

/// A four lane instance with a register interface.
pub(crate) fn config() -> Config {
    Config {
        device_id: 0,
        base_addr: 0x44A0_0000,
        is_rx: true,
        is_register_present: true,
        max_lanes_present: 4,
        hs_timeout: 0x10005,
        ..Config::EMPTY
    }
}
