// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register interface self-test.

use log::{debug, warn};

use crate::config::{self, Config};
use crate::dphy::{Handle, XDphy};
use crate::ErrorCode;

/// Check that the register interface answers with the values the block was
/// generated with.
///
/// The HS timeout register resets to the `hs_timeout` generic of the IP, so a
/// freshly initialized instance must read it back unchanged.
pub fn self_test(phy: &XDphy) -> Result<(), ErrorCode> {
    let expected = phy.config().hs_timeout;
    let actual = phy.get_info(Handle::HsTimeout);

    if actual != expected {
        warn!(
            "XDphy@{:#x}: HS timeout reads {:#x}, expected {:#x}",
            phy.config().base_addr,
            actual,
            expected
        );
        return Err(ErrorCode::FAIL);
    }
    Ok(())
}

/// Look up `device_id` in `table`, bind a fresh instance at the table's base
/// address and run [`self_test`] on it.
///
/// # Safety
///
/// The base address in the table entry for `device_id` must be the mapped
/// register interface of that D-PHY. See [`run_self_test_with`] for boards
/// that need to translate addresses first.
pub unsafe fn run_self_test(table: &[Config], device_id: u32) -> Result<(), ErrorCode> {
    unsafe {
        run_self_test_with(table, device_id, |cfg| {
            Ok::<_, ErrorCode>(cfg.base_addr)
        })
    }
}

/// As [`run_self_test`], with `translate` turning the table entry into the
/// effective address of its register interface.
///
/// `translate` is only called once a configuration has been found. The
/// instance is dropped before returning, so the address it hands out only
/// needs to stay valid for the duration of this call.
///
/// # Safety
///
/// The address returned by `translate` must satisfy the requirements of
/// [`XDphy::cfg_initialize`].
pub unsafe fn run_self_test_with<E, F>(
    table: &[Config],
    device_id: u32,
    translate: F,
) -> Result<(), E>
where
    E: From<ErrorCode>,
    F: FnOnce(&Config) -> Result<usize, E>,
{
    let cfg = config::lookup_config(table, device_id).ok_or(ErrorCode::NODEVICE)?;
    let effective_addr = translate(cfg)?;

    let mut phy = XDphy::new();
    unsafe { phy.cfg_initialize(cfg, effective_addr) }?;

    if !phy.get_reg_intfc_present() {
        debug!("XDphy: device {} has no register interface", device_id);
        return Err(ErrorCode::NOSUPPORT.into());
    }

    self_test(&phy)?;
    Ok(())
}
