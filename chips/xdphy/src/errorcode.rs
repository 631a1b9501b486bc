// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Recoverable failures reported by the driver.

use core::fmt;

/// Failures a caller is expected to handle.
///
/// The numbering matches the Tock kernel's `ErrorCode` so the values can be
/// passed through a syscall interface unchanged. Precondition violations are
/// not represented here; they panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition, e.g. a self-test mismatch
    FAIL = 1,
    /// The block was built without a register interface
    NOSUPPORT = 10,
    /// No configuration exists for the requested device
    NODEVICE = 11,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match self {
            ErrorCode::FAIL => "operation failed",
            ErrorCode::NOSUPPORT => "register interface not present",
            ErrorCode::NODEVICE => "no such device",
        };
        f.write_str(desc)
    }
}
