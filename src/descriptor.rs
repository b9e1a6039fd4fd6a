//! Parsing of descriptor strings, the output of `git describe --tags --long`.
//!
//! The grammar is `v<MAJOR>[.<MINOR>[.<PATCH>]][-<CODENAME>]-<BUILD>-<SHA>`. Segments are split
//! positionally: the last is the sha, the second-to-last is the build count, the first is the
//! version, and whatever sits between the version and the build is the codename (hyphens and
//! all).

use crate::{error::ParseError, revision::Revision};
use tracing::{debug, trace};

/// Parses a string of ASCII digits as a non-negative integer.
///
/// Unlike `u64::from_str`, this rejects a leading `+`.
pub(crate) fn parse_number(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

pub(crate) fn parse(descriptor: &str) -> Result<Revision, ParseError> {
    match parse_segments(descriptor) {
        Ok(revision) => {
            trace!(
                descriptor,
                major = revision.major,
                minor = revision.minor,
                patch = revision.patch,
                codename = revision.codename.as_deref(),
                build = revision.build,
                sha = revision.sha.as_deref(),
                "Parsed revision descriptor"
            );
            Ok(revision)
        }
        Err(error) => {
            debug!(descriptor, %error, "Rejected revision descriptor");
            Err(error)
        }
    }
}

fn parse_segments(descriptor: &str) -> Result<Revision, ParseError> {
    let trimmed = descriptor.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut segments = trimmed.rsplitn(3, '-');
    // rsplitn always yields at least one item
    let sha = segments.next().unwrap_or_default();
    if sha.is_empty() {
        return Err(ParseError::MissingSha {
            descriptor: trimmed.to_owned(),
        });
    }
    let (build, rest) = match (segments.next(), segments.next()) {
        (Some(build), Some(rest)) => (build, rest),
        _ => {
            return Err(ParseError::MissingBuild {
                descriptor: trimmed.to_owned(),
            })
        }
    };

    let build = parse_number(build).ok_or_else(|| ParseError::InvalidBuild {
        build: build.to_owned(),
        descriptor: trimmed.to_owned(),
    })?;

    let (version, codename) = match rest.split_once('-') {
        Some((version, codename)) => (version, Some(codename)),
        None => (rest, None),
    };
    let codename = codename
        .filter(|codename| !codename.is_empty())
        .map(str::to_owned);

    let (major, minor, patch) = parse_version(version, trimmed)?;

    Ok(Revision {
        major,
        minor,
        patch,
        codename,
        build,
        sha: Some(sha.to_owned()),
    })
}

fn parse_version(version: &str, descriptor: &str) -> Result<(u64, u64, u64), ParseError> {
    let numbers = version
        .strip_prefix(['v', 'V'])
        .unwrap_or(version);
    let mut components = numbers.split('.');

    // split always yields at least one item, even for an empty string
    let major = components.next().unwrap_or_default();
    let major = parse_number(major).ok_or_else(|| ParseError::InvalidMajor {
        major: major.to_owned(),
        descriptor: descriptor.to_owned(),
    })?;

    let mut component = |name: &'static str| -> Result<u64, ParseError> {
        components.next().map_or(Ok(0), |value| {
            parse_number(value).ok_or_else(|| ParseError::InvalidComponent {
                name,
                value: value.to_owned(),
                descriptor: descriptor.to_owned(),
            })
        })
    };
    let minor = component("Minor")?;
    let patch = component("Patch")?;

    if components.next().is_some() {
        return Err(ParseError::TooManyComponents {
            version: version.to_owned(),
            descriptor: descriptor.to_owned(),
        });
    }

    Ok((major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn parts(revision: &Revision) -> (u64, u64, u64, Option<&str>, u64, Option<&str>) {
        (
            revision.major,
            revision.minor,
            revision.patch,
            revision.codename.as_deref(),
            revision.build,
            revision.sha.as_deref(),
        )
    }

    #[rstest]
    #[case("v6-Edison-59-gf7114dd", (6, 0, 0, Some("Edison"), 59, Some("gf7114dd")))]
    #[case("v6.1-Edison-59-gf7114dd", (6, 1, 0, Some("Edison"), 59, Some("gf7114dd")))]
    #[case("v6.1.3-Edison-59-gf7114dd", (6, 1, 3, Some("Edison"), 59, Some("gf7114dd")))]
    #[case("v6.1.2-Edison-0-gf7114dd", (6, 1, 2, Some("Edison"), 0, Some("gf7114dd")))]
    #[case("v6.1.2-20-gf7114dd", (6, 1, 2, None, 20, Some("gf7114dd")))]
    #[case("v6.1.2-0-gf7114dd", (6, 1, 2, None, 0, Some("gf7114dd")))]
    fn test_parse_ok(
        #[case] descriptor: &str,
        #[case] expected: (u64, u64, u64, Option<&str>, u64, Option<&str>),
    ) {
        let revision = parse(descriptor).unwrap();
        assert_eq!(expected, parts(&revision));
    }

    #[test]
    fn test_parse_hyphenated_codename() {
        let revision = parse("v2.0-Big-Sur-3-gabc1234").unwrap();
        assert_eq!(
            (2, 0, 0, Some("Big-Sur"), 3, Some("gabc1234")),
            parts(&revision)
        );
    }

    #[rstest]
    #[case("6.1.3-Edison-59-gf7114dd")]
    #[case("V6.1.3-Edison-59-gf7114dd")]
    #[case("v6.1.3-Edison-59-gf7114dd\n")]
    #[case("  v6.1.3-Edison-59-gf7114dd")]
    fn test_parse_lenient_prefix_and_whitespace(#[case] descriptor: &str) {
        let revision = parse(descriptor).unwrap();
        assert_eq!(
            (6, 1, 3, Some("Edison"), 59, Some("gf7114dd")),
            parts(&revision)
        );
    }

    #[test]
    fn test_parse_empty_codename_is_absent() {
        let revision = parse("v1--3-gabc").unwrap();
        assert_eq!(None, revision.codename);
    }

    #[rstest]
    #[case("")]
    #[case(" \n")]
    fn test_parse_empty(#[case] descriptor: &str) {
        assert_eq!(Err(ParseError::Empty), parse(descriptor));
    }

    #[rstest]
    #[case("v6.1.3")]
    #[case("v6.1.3-gf7114dd")]
    fn test_parse_missing_build(#[case] descriptor: &str) {
        assert!(matches!(
            parse(descriptor),
            Err(ParseError::MissingBuild { .. })
        ));
    }

    #[test]
    fn test_parse_missing_sha() {
        assert!(matches!(
            parse("v6.1.3-Edison-59-"),
            Err(ParseError::MissingSha { .. })
        ));
    }

    #[rstest]
    #[case("vX.1.3-Edison-59-gf7114dd", "X")]
    #[case("v-Edison-59-gf7114dd", "")]
    #[case("v+6-Edison-59-gf7114dd", "+6")]
    fn test_parse_invalid_major(#[case] descriptor: &str, #[case] expected_major: &str) {
        match parse(descriptor) {
            Err(ParseError::InvalidMajor { major, .. }) => assert_eq!(expected_major, major),
            other => panic!("expected InvalidMajor, got {other:?}"),
        }
    }

    #[rstest]
    #[case("v6.x-Edison-59-gf7114dd", "Minor")]
    #[case("v6.1.-Edison-59-gf7114dd", "Patch")]
    fn test_parse_invalid_component(#[case] descriptor: &str, #[case] expected_name: &str) {
        match parse(descriptor) {
            Err(ParseError::InvalidComponent { name, .. }) => assert_eq!(expected_name, name),
            other => panic!("expected InvalidComponent, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_too_many_components() {
        assert!(matches!(
            parse("v6.1.3.4-Edison-59-gf7114dd"),
            Err(ParseError::TooManyComponents { .. })
        ));
    }

    #[rstest]
    #[case("v6.1.3-Edison-fifty-gf7114dd")]
    #[case("v6.1.3-Edison--gf7114dd")]
    fn test_parse_invalid_build(#[case] descriptor: &str) {
        assert!(matches!(
            parse(descriptor),
            Err(ParseError::InvalidBuild { .. })
        ));
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("0042", Some(42))]
    #[case("", None)]
    #[case("+1", None)]
    #[case("-1", None)]
    #[case("99999999999999999999999", None)]
    fn test_parse_number(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(expected, parse_number(text));
    }
}
