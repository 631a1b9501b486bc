// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reference to a memory mapped register block.

use core::ops::Deref;
use core::ptr::NonNull;

/// A pointer to a register block that is known to be valid for as long as the
/// driver holding it is used.
///
/// Unlike a `&'static` reference the address may be chosen at run time, once
/// the board has translated it.
#[derive(Debug)]
pub(crate) struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned for `T` and point to memory laid out
    /// as a `T` that stays valid for the lifetime of the `StaticRef`.
    pub(crate) const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef {
            ptr: NonNull::new_unchecked(ptr.cast_mut()),
        }
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Safety: guaranteed by the caller of `StaticRef::new`.
        unsafe { self.ptr.as_ref() }
    }
}
