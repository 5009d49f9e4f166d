#![forbid(unsafe_code)]

//! Icon lookup for technology and social logos.
//!
//! # Example
//!
//! ```
//! use folio_icons::{IconAsset, IconRegistry, TECH};
//!
//! let mut icons = IconRegistry::with_defaults();
//! icons.insert_in(TECH, "Rust", IconAsset::owned("icons/tech/rust.svg"));
//!
//! assert!(icons.contains("rust", Some(TECH)));
//! assert_eq!(icons.lookup("Vue.js", None).map(IconAsset::path), Some("icons/tech/vue.svg"));
//! assert!(icons.lookup("cobol", None).is_none());
//! ```

pub mod builtin;
pub mod registry;

pub use builtin::{IconAsset, SOCIAL_ICONS, TECH_ICONS};
pub use registry::{
    CategoryView, CategoryViewMut, GENERAL, IconCategory, IconRegistry, SOCIAL, TECH, normalize,
};
