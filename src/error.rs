/// Errors that occur when parsing a descriptor string (e.g. `v6.1.3-Edison-59-gf7114dd`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The descriptor string was empty (or only whitespace).
    #[error("Descriptor should not be empty")]
    Empty,

    /// The descriptor string did not have a `-<BUILD>` segment before the sha.
    #[error("Descriptor `{descriptor}` should have a build segment (e.g. `v1.2.3-4-gabc1234`)")]
    MissingBuild {
        /// The descriptor string that was being parsed.
        descriptor: String,
    },

    /// The final `-<SHA>` segment of the descriptor string was absent or empty.
    #[error("Descriptor `{descriptor}` should end with a sha segment (e.g. `v1.2.3-4-gabc1234`)")]
    MissingSha {
        /// The descriptor string that was being parsed.
        descriptor: String,
    },

    /// The major number could not be parsed as a non-negative integer.
    #[error("Major `{major}` in descriptor `{descriptor}` should be a non-negative integer")]
    InvalidMajor {
        /// The text found where the major number was expected.
        major: String,
        /// The descriptor string that was being parsed.
        descriptor: String,
    },

    /// The minor or patch number could not be parsed as a non-negative integer.
    #[error("{name} `{value}` in descriptor `{descriptor}` should be a non-negative integer")]
    InvalidComponent {
        /// Either `Minor` or `Patch`.
        name: &'static str,
        /// The text found where the number was expected.
        value: String,
        /// The descriptor string that was being parsed.
        descriptor: String,
    },

    /// The version segment had more than three dot-separated numbers.
    #[error("Version `{version}` in descriptor `{descriptor}` should have at most major, minor, and patch numbers")]
    TooManyComponents {
        /// The version segment of the descriptor.
        version: String,
        /// The descriptor string that was being parsed.
        descriptor: String,
    },

    /// The build segment could not be parsed as a non-negative integer.
    #[error("Build `{build}` in descriptor `{descriptor}` should be a non-negative integer")]
    InvalidBuild {
        /// The text found where the build count was expected.
        build: String,
        /// The descriptor string that was being parsed.
        descriptor: String,
    },
}

/// Errors that occur when building a revision from a [`RevisionFields`](crate::RevisionFields)
/// mapping.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A field that has no default was not provided.
    #[error("Field `{field}` is required to create a revision")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Errors that occur when creating a revision from either input shape.
///
/// This is returned by [`Revision::new`](crate::Revision::new), which accepts both descriptor
/// strings and field mappings. The more specific constructors return the more specific errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    /// Wraps a [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Wraps a [`FieldError`].
    #[error(transparent)]
    Field(#[from] FieldError),
}
