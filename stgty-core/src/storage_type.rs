//! Storage element types reported by COM structured storage.
//!
//! Mirrors the `STGTY` enumeration from `objidl.h`. The `type` field of a
//! `STATSTG` returned by `IStorage::Stat`, `IStream::Stat` or
//! `ILockBytes::Stat` carries one of these values.
//!
//! # Values
//!
//! ```text
//! STGTY_STORAGE   = 1
//! STGTY_STREAM    = 2
//! STGTY_LOCKBYTES = 3
//! STGTY_PROPERTY  = 4
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of element in a compound file.
///
/// Serializes as its raw `u32` value so that the wire form matches the
/// native `STATSTG` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum StorageType {
    /// A nested storage object (directory-like container).
    Storage = 1,
    /// A stream object.
    Stream = 2,
    /// A byte-array object (`ILockBytes`).
    LockBytes = 3,
    /// A property storage object.
    Property = 4,
}

// Must match the width of the native enum.
const _: () = assert!(std::mem::size_of::<StorageType>() == std::mem::size_of::<u32>());

impl StorageType {
    /// Every storage type, in ascending value order.
    pub const ALL: [StorageType; 4] = [
        StorageType::Storage,
        StorageType::Stream,
        StorageType::LockBytes,
        StorageType::Property,
    ];

    /// Returns the raw value used by the native API.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Looks up a raw value, returning `None` for anything outside the
    /// documented set.
    #[inline]
    pub const fn from_raw(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Storage),
            2 => Some(Self::Stream),
            3 => Some(Self::LockBytes),
            4 => Some(Self::Property),
            _ => None,
        }
    }

    /// Returns the constant name from the Windows SDK headers.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Storage => "STGTY_STORAGE",
            Self::Stream => "STGTY_STREAM",
            Self::LockBytes => "STGTY_LOCKBYTES",
            Self::Property => "STGTY_PROPERTY",
        }
    }

    /// Returns the short lowercase name used by `Display`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Stream => "stream",
            Self::LockBytes => "lockbytes",
            Self::Property => "property",
        }
    }
}

impl TryFrom<u32> for StorageType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_raw(value).ok_or(Error::UnknownStorageType(value))
    }
}

impl From<StorageType> for u32 {
    #[inline]
    fn from(value: StorageType) -> Self {
        value.as_raw()
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for StorageType {
    type Err = Error;

    /// Accepts either the short name (`stream`) or the native constant name
    /// (`STGTY_STREAM`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|ty| {
                name.eq_ignore_ascii_case(ty.short_name())
                    || name.eq_ignore_ascii_case(ty.native_name())
            })
            .ok_or_else(|| Error::UnknownStorageName(s.to_string()))
    }
}
