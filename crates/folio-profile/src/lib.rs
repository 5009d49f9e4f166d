#![forbid(unsafe_code)]

//! Profile list and the typewriter profile card.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use folio_profile::ProfileCard;
//!
//! let mut card = ProfileCard::default();
//! card.initialize();
//! card.advance(Duration::from_secs(2));
//! assert_eq!(card.state().displayed_name(), "Julian");
//! assert!(card.state().typing_complete());
//! ```

pub mod config;
pub mod profile;
pub mod typewriter;

pub use config::TypewriterConfig;
pub use profile::{ImageRef, Profile, ProfileError, ProfileList};
pub use typewriter::{BUTTON_SCALE, CardTimer, Phase, ProfileCard, TypewriterState};
