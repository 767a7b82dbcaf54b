//! Run reference token codec
//!
//! A token encodes a job's full name and a build number as
//! `<jobName>#<buildNumber>`. Job names may contain `#` themselves, so the
//! primary decoder splits at the last separator.
//!
//! The legacy accessors [`job_name_of`] and [`build_number_of`] split at the
//! first separator instead. Environment projections have always exposed those
//! values, so they are kept as-is even though they disagree with [`decode`]
//! for job names containing `#`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Separator between job name and build number.
pub const TOKEN_SEPARATOR: char = '#';

/// Largest build number a token may carry (the host stores signed 32-bit numbers).
pub const MAX_BUILD_NUMBER: u32 = i32::MAX.unsigned_abs();

/// A token split into its job name and build number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedToken {
    /// Full name of the job, e.g. `folder/my-job`.
    pub job_name: String,

    /// Build number within the job.
    pub build_number: u32,
}

impl DecodedToken {
    /// Creates a decoded token from its parts.
    #[must_use]
    pub fn new(job_name: impl Into<String>, build_number: u32) -> Self {
        Self {
            job_name: job_name.into(),
            build_number,
        }
    }
}

impl fmt::Display for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.job_name, self.build_number)
    }
}

/// Encodes a job name and build number into a token.
///
/// # Examples
///
/// ```
/// use runref_domain::token::{decode, encode};
///
/// let token = encode("team/api", 42);
/// assert_eq!(token, "team/api#42");
/// assert_eq!(decode(&token).unwrap().build_number, 42);
/// ```
#[must_use]
pub fn encode(job_name: &str, build_number: u32) -> String {
    format!("{job_name}{TOKEN_SEPARATOR}{build_number}")
}

/// Decodes a token, splitting at the last `#`.
///
/// # Errors
///
/// Returns [`DomainError::MalformedReference`] when the token has no `#`,
/// when the job name before it is empty, or when the text after it is not a
/// plain base-10 integer no larger than [`MAX_BUILD_NUMBER`].
pub fn decode(token: &str) -> DomainResult<DecodedToken> {
    let Some(separator) = token.rfind(TOKEN_SEPARATOR) else {
        return Err(DomainError::malformed(token, "missing '#' separator"));
    };
    if separator == 0 {
        return Err(DomainError::malformed(token, "job name is empty"));
    }

    let job_name = &token[..separator];
    let number_text = &token[separator + TOKEN_SEPARATOR.len_utf8()..];
    let build_number = parse_build_number(number_text).ok_or_else(|| {
        DomainError::malformed(
            token,
            format!("build number '{number_text}' is not a base-10 integer"),
        )
    })?;

    Ok(DecodedToken::new(job_name, build_number))
}

/// Parses ASCII digits only. `u32::from_str` alone would accept a leading `+`.
fn parse_build_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse()
        .ok()
        .filter(|&number| number <= MAX_BUILD_NUMBER)
}

/// Returns the segment before the first `#` (legacy accessor).
///
/// Returns the whole token when it contains no `#`.
#[must_use]
pub fn job_name_of(token: &str) -> &str {
    token
        .split_once(TOKEN_SEPARATOR)
        .map_or(token, |(job_name, _)| job_name)
}

/// Returns the segment between the first and second `#` (legacy accessor).
///
/// The text is returned unparsed. `None` when the token has no `#`.
#[must_use]
pub fn build_number_of(token: &str) -> Option<&str> {
    token.split(TOKEN_SEPARATOR).nth(1)
}
