use crate::{
    descriptor,
    error::{FieldError, ParseError, RevisionError},
    fields::RevisionFields,
    level::Level,
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::Serialize;

/// The two shapes of input a [`Revision`] can be created from. See [`Revision::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionInput {
    /// A descriptor string, like `v6.1.3-Edison-59-gf7114dd`.
    Descriptor(String),
    /// A field mapping.
    Fields(RevisionFields),
}

impl From<&str> for RevisionInput {
    fn from(descriptor: &str) -> Self {
        RevisionInput::Descriptor(descriptor.to_owned())
    }
}

impl From<String> for RevisionInput {
    fn from(descriptor: String) -> Self {
        RevisionInput::Descriptor(descriptor)
    }
}

impl From<RevisionFields> for RevisionInput {
    fn from(fields: RevisionFields) -> Self {
        RevisionInput::Fields(fields)
    }
}

/// A Revision identifies a specific point in a project's release history: a `major.minor.patch`
/// version, an optional codename, the number of commits since that version was tagged (the
/// *build*), and the abbreviated sha of the commit.
///
/// Revisions are immutable. They can be [displayed](Revision::to_string) in a few ways and
/// [bumped](Revision::next) to new revisions.
///
/// # Examples
///
/// ```
/// use revver::prelude::*;
///
/// let revision = Revision::parse("v6.1-Edison-59-gf7114dd").unwrap();
/// assert_eq!("v6.1.0.59 Edison", revision.to_string());
/// assert_eq!("v6.1.0.59-Edison", revision.to_tagline());
/// assert_eq!("v6.1.0.59", revision.to_deploy_tagline());
/// assert!(!revision.is_current());
///
/// let next = revision.next_minor();
/// assert_eq!("v6.2.0 Edison", next.to_string());
/// assert!(next.is_current());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Revision {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) codename: Option<String>,
    pub(crate) build: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sha: Option<String>,
}

impl Revision {
    /// Creates a revision from either a descriptor string or a [`RevisionFields`] mapping.
    ///
    /// ```
    /// use revver::prelude::*;
    ///
    /// let from_str = Revision::new("v2.3.1-Hyperion-5-gab3de").unwrap();
    /// let from_fields = Revision::new(RevisionFields {
    ///     major: Some(2),
    ///     minor: Some(3),
    ///     patch: Some(1),
    ///     codename: Some("Hyperion".to_owned()),
    ///     build: Some(5),
    ///     sha: Some("gab3de".to_owned()),
    /// })
    /// .unwrap();
    /// assert_eq!(from_str, from_fields);
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`RevisionError::Parse`] if a descriptor string does not match the grammar. See
    ///   [`Revision::parse`].
    /// - Returns [`RevisionError::Field`] if a mapping lacks `major`. See
    ///   [`Revision::from_fields`].
    pub fn new(input: impl Into<RevisionInput>) -> Result<Self, RevisionError> {
        match input.into() {
            RevisionInput::Descriptor(descriptor) => Ok(Self::parse(&descriptor)?),
            RevisionInput::Fields(fields) => Ok(Self::from_fields(fields)?),
        }
    }

    /// Parses a descriptor string of the form
    /// `v<MAJOR>[.<MINOR>[.<PATCH>]][-<CODENAME>]-<BUILD>-<SHA>`, as printed by
    /// `git describe --tags --long`.
    ///
    /// Surrounding whitespace is ignored and the `v` prefix is optional. Any text between the
    /// version and the build count is taken as the codename, including hyphens.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the descriptor lacks a build or sha segment, or if any of its
    /// numbers are not non-negative integers.
    pub fn parse(descriptor: &str) -> Result<Self, ParseError> {
        descriptor::parse(descriptor)
    }

    /// Creates a revision from a field mapping, applying defaults for everything except `major`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::MissingRequiredField`] if `major` is `None`.
    pub fn from_fields(fields: RevisionFields) -> Result<Self, FieldError> {
        let major = fields
            .major
            .ok_or(FieldError::MissingRequiredField { field: "major" })?;
        Ok(Self {
            major,
            minor: fields.minor.unwrap_or_default(),
            patch: fields.patch.unwrap_or_default(),
            codename: fields.codename,
            build: fields.build.unwrap_or_default(),
            sha: fields.sha,
        })
    }

    /// Creates a current revision (build `0`) with no codename or sha.
    pub fn with_version(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            codename: None,
            build: 0,
            sha: None,
        }
    }

    /// Returns this revision with the given codename.
    pub fn with_codename(self, codename: impl Into<String>) -> Self {
        Self {
            codename: Some(codename.into()),
            ..self
        }
    }

    /// Returns this revision with the given build count.
    pub fn with_build(self, build: u64) -> Self {
        Self { build, ..self }
    }

    /// Returns this revision with the given sha.
    pub fn with_sha(self, sha: impl Into<String>) -> Self {
        Self {
            sha: Some(sha.into()),
            ..self
        }
    }

    /// The major number.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor number.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch number.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The release codename, if any.
    pub fn codename(&self) -> Option<&str> {
        self.codename.as_deref()
    }

    /// The number of commits since the last tag.
    pub fn build(&self) -> u64 {
        self.build
    }

    /// The abbreviated commit sha. Always present for parsed revisions and absent for bumped ones.
    pub fn sha(&self) -> Option<&str> {
        self.sha.as_deref()
    }

    /// Returns true if this revision is exactly a tagged release, i.e. its build is `0`.
    pub fn is_current(&self) -> bool {
        self.build == 0
    }

    /// Returns this revision's fields as a mapping. Feeding the result back into
    /// [`Revision::from_fields`] yields an equal revision.
    pub fn to_fields(&self) -> RevisionFields {
        RevisionFields {
            major: Some(self.major),
            minor: Some(self.minor),
            patch: Some(self.patch),
            codename: self.codename.clone(),
            build: Some(self.build),
            sha: self.sha.clone(),
        }
    }

    /// Formats like [`Display`], but joins the codename with a hyphen instead of a space, e.g.
    /// `v6.1.0.59-Edison`.
    pub fn to_tagline(&self) -> String {
        match &self.codename {
            Some(codename) => format!("{}-{}", Numbers(self), codename),
            None => Numbers(self).to_string(),
        }
    }

    /// Formats only the numbers, never the codename, e.g. `v6.1.0.59`.
    pub fn to_deploy_tagline(&self) -> String {
        Numbers(self).to_string()
    }

    /// Returns the revision after this one at the given level. A [`Level::Major`] bump drops the
    /// codename; use [`Revision::next_major`] to name the new major line.
    pub fn next(&self, level: &Level) -> Self {
        match level {
            Level::Major => self.next_major(None),
            Level::Minor => self.next_minor(),
            Level::Patch => self.next_patch(),
        }
    }

    /// Returns the next major revision: major incremented, everything else reset. The codename is
    /// not carried over; the new major line gets `codename` if one is given.
    ///
    /// ```
    /// use revver::prelude::*;
    ///
    /// let revision = Revision::parse("v6.1.3-Edison-59-gf7114dd").unwrap();
    /// assert_eq!("v7.0.0 Archimedes", revision.next_major(Some("Archimedes")).to_string());
    /// assert_eq!("v7.0.0", revision.next_major(None).to_string());
    /// ```
    pub fn next_major(&self, codename: Option<&str>) -> Self {
        Self {
            major: self.major.saturating_add(1),
            minor: 0,
            patch: 0,
            codename: codename.map(str::to_owned),
            build: 0,
            sha: None,
        }
    }

    /// Returns the next minor revision, keeping the codename.
    pub fn next_minor(&self) -> Self {
        Self {
            major: self.major,
            minor: self.minor.saturating_add(1),
            patch: 0,
            codename: self.codename.clone(),
            build: 0,
            sha: None,
        }
    }

    /// Returns the next patch revision, keeping the codename.
    pub fn next_patch(&self) -> Self {
        Self {
            major: self.major,
            minor: self.minor,
            patch: self.patch.saturating_add(1),
            codename: self.codename.clone(),
            build: 0,
            sha: None,
        }
    }
}

/// The numeric part shared by all renderings: `v<MAJOR>.<MINOR>.<PATCH>`, plus `.<BUILD>` when
/// the revision is not current.
struct Numbers<'r>(&'r Revision);

impl Display for Numbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Revision {
            major,
            minor,
            patch,
            build,
            ..
        } = self.0;
        write!(f, "v{major}.{minor}.{patch}")?;
        if *build > 0 {
            write!(f, ".{build}")?;
        }
        Ok(())
    }
}

impl Display for Revision {
    /// Formats as `v<MAJOR>.<MINOR>.<PATCH>[.<BUILD>][ <CODENAME>]`, e.g. `v6.1.0.59 Edison`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Numbers(self).fmt(f)?;
        if let Some(codename) = &self.codename {
            write!(f, " {codename}")?;
        }
        Ok(())
    }
}

impl FromStr for Revision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<RevisionFields> for Revision {
    type Error = FieldError;

    fn try_from(fields: RevisionFields) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}
