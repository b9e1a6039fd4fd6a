//! # revver
//!
//! A library for parsing, formatting, and bumping release revisions.
//!
//! A revision is a `major.minor.patch` version with an optional codename, plus the number of
//! commits since that version was tagged (the *build*) and the abbreviated sha of the commit. This
//! is exactly what `git describe --tags --long` prints for a repository tagged like
//! `v6.1.3-Edison`:
//!
//! ```text
//! v6.1.3-Edison-59-gf7114dd
//! ```
//!
//! ## Examples
//!
//! Parse a descriptor and render it:
//!
//! ```
//! use revver::prelude::*;
//!
//! let revision = Revision::parse("v6.1-Edison-59-gf7114dd").unwrap();
//! assert_eq!(revision.to_string(), "v6.1.0.59 Edison");       // for display
//! assert_eq!(revision.to_tagline(), "v6.1.0.59-Edison");      // for tags
//! assert_eq!(revision.to_deploy_tagline(), "v6.1.0.59");      // for deploys
//! ```
//!
//! Compute the next revision:
//!
//! ```
//! use revver::prelude::*;
//!
//! let revision = Revision::parse("v6.1.3-Edison-59-gf7114dd").unwrap();
//! assert_eq!(revision.next_major(Some("Archimedes")).to_string(), "v7.0.0 Archimedes");
//! assert_eq!(revision.next(&"minor".parse().unwrap()).to_string(), "v6.2.0 Edison");
//! assert_eq!(revision.next_patch().to_string(), "v6.1.4 Edison");
//! ```
//!
//! Or build one from fields:
//!
//! ```
//! use revver::prelude::*;
//!
//! let revision = Revision::new(RevisionFields {
//!     major: Some(2),
//!     codename: Some("Hyperion".to_owned()),
//!     ..Default::default()
//! })
//! .unwrap();
//! assert!(revision.is_current());
//! assert_eq!(revision.to_tagline(), "v2.0.0-Hyperion");
//! ```
//!
//! ## Important Terms
//!
//! - **Descriptor**: The string form of a revision,
//!   `v<MAJOR>[.<MINOR>[.<PATCH>]][-<CODENAME>]-<BUILD>-<SHA>`. Omitted minor and patch numbers
//!   are `0`.
//! - **Build**: The number of commits since the last tag. `0` means the revision *is* the tag.
//! - **Current**: A revision whose build is `0`. See [`Revision::is_current`].
//! - **Codename**: An optional human-readable name for a release line. Bumping the minor or patch
//!   keeps it. Bumping the major drops it unless a new one is given.
//!
//! ## Prelude
//!
//! revver provides a prelude module for convenience. Use it with:
//!
//! ```
//! use revver::prelude::*;
//! ```
#![warn(missing_docs)]

mod descriptor;
mod error;
mod fields;
mod level;
mod revision;

pub use crate::error::{FieldError, ParseError, RevisionError};
pub use crate::fields::RevisionFields;
pub use crate::level::{Level, UnknownLevel};
pub use crate::revision::{Revision, RevisionInput};

/// A convenience module appropriate for glob imports (`use revver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::FieldError;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Revision;
    #[doc(no_inline)]
    pub use crate::RevisionError;
    #[doc(no_inline)]
    pub use crate::RevisionFields;
    #[doc(no_inline)]
    pub use crate::RevisionInput;
}
