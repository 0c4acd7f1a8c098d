//! Sharing network registry
//!
//! Networks are pure data: a key, a display name and a URL template. Adding a
//! network means adding a table entry, never code.
//!
//! # Example
//!
//! ```rust
//! use socialize::NetworkRegistry;
//!
//! let registry = NetworkRegistry::builtin();
//! let key = registry.resolve("Mail").unwrap();
//! assert_eq!(registry.get(&key).name, "Email");
//! ```

mod registry;

pub use registry::{NetworkDefinition, NetworkKey, NetworkRegistry, RegistryError};
