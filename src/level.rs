use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A level of a revision that can be bumped, like `major`, `minor`, or `patch`.
///
/// See [`Revision::next`](crate::Revision::next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// The major level. Bumping it resets minor and patch, and drops the codename.
    Major,
    /// The minor level. Bumping it resets patch.
    Minor,
    /// The patch level.
    Patch,
}

impl Level {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Level`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Level `{0}` should be one of `major`, `minor`, or `patch`")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Level::Major),
            "minor" => Ok(Level::Minor),
            "patch" => Ok(Level::Patch),
            _ => Err(UnknownLevel(s.to_owned())),
        }
    }
}
