// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Mapping the D-PHY register interface into this process.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::ptr;

use memmap::{MmapMut, MmapOptions};
use tracing::debug;
use xdphy::config::Config;
use xdphy::registers::{CLSTATUS_OFFSET, HSTIMEOUT_OFFSET, REGISTER_SPAN, VERSION_OFFSET};

/// Version register contents of the emulated core (v4.0).
const EMULATED_VERSION: u32 = 0x0400_0000;
/// Clock lane in the stop state after reset.
const EMULATED_CLSTATUS: u32 = 0x8;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot map register window at {addr:#x}: {source}")]
    Map { addr: usize, source: io::Error },
}

/// A mapping that covers one D-PHY register interface.
pub struct RegisterWindow {
    map: MmapMut,
    offset: usize,
}

impl RegisterWindow {
    /// Map the register interface at physical address `phys` from a memory
    /// device such as `/dev/mem` or a UIO node.
    pub fn open(path: &Path, phys: usize) -> Result<RegisterWindow, MapError> {
        let page = page_size();
        let page_base = phys & !(page - 1);
        let offset = phys - page_base;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(path)
            .map_err(|source| MapError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        // Safety: the mapping is only accessed through volatile register
        // reads and writes, so concurrent changes by the device are fine.
        let map = unsafe {
            MmapOptions::new()
                .offset(page_base as u64)
                .len(offset + REGISTER_SPAN)
                .map_mut(&file)
        }
        .map_err(|source| MapError::Map { addr: phys, source })?;

        debug!(
            "mapped {:#x} from {} at {:p}",
            phys,
            path.display(),
            map.as_ptr()
        );
        Ok(RegisterWindow { map, offset })
    }

    /// Anonymous memory standing in for the register interface of `cfg`,
    /// holding the values the core comes out of reset with.
    pub fn emulated(cfg: &Config) -> Result<RegisterWindow, MapError> {
        let map = MmapMut::map_anon(REGISTER_SPAN).map_err(|source| MapError::Map {
            addr: cfg.base_addr,
            source,
        })?;
        let mut window = RegisterWindow { map, offset: 0 };

        window.write(VERSION_OFFSET, EMULATED_VERSION);
        window.write(HSTIMEOUT_OFFSET, cfg.hs_timeout);
        window.write(CLSTATUS_OFFSET, EMULATED_CLSTATUS);

        debug!(
            "emulating device {} at {:p}",
            cfg.device_id,
            window.map.as_ptr()
        );
        Ok(window)
    }

    /// Address of the first register in this process.
    pub fn base(&self) -> usize {
        self.map.as_ptr() as usize + self.offset
    }

    pub fn read(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= REGISTER_SPAN && offset % 4 == 0);
        // Safety: in bounds of the mapping and word aligned.
        unsafe { ptr::read_volatile((self.base() + offset) as *const u32) }
    }

    pub fn write(&mut self, offset: usize, value: u32) {
        assert!(offset + 4 <= REGISTER_SPAN && offset % 4 == 0);
        let reg = (self.base() + offset) as *mut u32;
        // Safety: as for `read`.
        unsafe { ptr::write_volatile(reg, value) }
    }
}

fn page_size() -> usize {
    // Safety: sysconf has no preconditions.
    match unsafe { libc::sysconf(libc::_SC_PAGESIZE) } {
        size if size > 0 => size as usize,
        _ => 0x1000,
    }
}
