#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

#[cfg(test)]
mod hash_map_proptest;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
pub use hash_table::LoadFactor;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used by [`HashMap`] when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used by [`HashMap`] when none is specified.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Placeholder hasher builder for builds without a default hasher.
        ///
        /// It cannot be constructed; pass a hasher builder explicitly with
        /// [`HashMap::with_hasher`].
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHashBuilder {}

        /// Hasher type of the placeholder [`DefaultHashBuilder`].
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHasher {}

        impl core::hash::BuildHasher for DefaultHashBuilder {
            type Hasher = DefaultHasher;

            fn build_hasher(&self) -> Self::Hasher {
                match *self {}
            }
        }

        impl core::hash::Hasher for DefaultHasher {
            fn finish(&self) -> u64 {
                match *self {}
            }

            fn write(&mut self, _bytes: &[u8]) {
                match *self {}
            }
        }
    }
}
