//! # stgty-core
//!
//! Storage element types for COM structured storage.
//!
//! [`StorageType`] mirrors the Windows `STGTY` enumeration bit for bit: a
//! `#[repr(u32)]` enum with the same discriminants as the native header, so
//! the `type` field of a `STATSTG` can be decoded without guessing.
//!
//! Unknown raw values are never mapped onto a member. Lookups either return
//! `None` ([`StorageType::from_raw`]) or an [`Error`] (`TryFrom<u32>`), and
//! the caller decides what an undocumented value means.
//!
//! ## Example
//!
//! ```rust
//! use stgty_core::StorageType;
//!
//! let ty = StorageType::try_from(2).unwrap();
//! assert_eq!(ty, StorageType::Stream);
//! assert_eq!(ty.native_name(), "STGTY_STREAM");
//! assert!(StorageType::from_raw(5).is_none());
//! ```

pub mod error;
pub mod storage_type;

// Re-exports for convenient access
pub use error::{Error, Result};
pub use storage_type::StorageType;

/// Re-export commonly used types for convenience.
///
/// # Example
///
/// ```rust
/// use stgty_core::prelude::*;
///
/// let ty: StorageType = "STGTY_LOCKBYTES".parse().unwrap();
/// assert_eq!(ty.as_raw(), 3);
/// ```
pub mod prelude {
    pub use crate::{Error, Result, StorageType};
}
