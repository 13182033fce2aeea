//! Shared type definitions for ddlkit
//!
//! This crate holds the pure data side of MySQL string-column mapping:
//!
//! - dialect limits and the named TEXT-tier lengths in [`mysql`]
//! - the [`mysql::ddl::FieldDescriptor`] value object handed to the rule engine
//! - DDL entities (`Column`, `Index`, `Table`) and their SQL text
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        borrow::Cow,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

pub mod mysql;
#[cfg(feature = "serde")]
pub mod serde_helpers;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::mysql::ddl::{FieldDescriptor, IndexKind};
    pub use crate::mysql::{DialectLimits, MySqlStringType, TextTier};
}
