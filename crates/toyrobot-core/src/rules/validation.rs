//! Error-accumulating validation pipeline
//!
//! Every check in a pipeline runs, even after an earlier one has failed. The
//! result is either the validated value or every violation, in the order the
//! checks were declared.
//!
//! # Example
//!
//! ```
//! use toyrobot_core::errors::RobotError;
//! use toyrobot_core::rules::validation::validate_all;
//!
//! let x = "abc";
//! let y = "2.5";
//! let result = validate_all(&[
//!     &|| check(x),
//!     &|| check(y),
//! ]);
//! assert_eq!(result.unwrap_err().len(), 2);
//!
//! fn check(token: &str) -> Result<(), RobotError> {
//!     token
//!         .parse::<i64>()
//!         .map(|_| ())
//!         .map_err(|_| RobotError::NonIntegerCoordinate { received: token.to_string() })
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::RobotError;

/// A check that does not need the value under validation
pub type Check<'a> = &'a dyn Fn() -> Result<(), RobotError>;

/// A check run against a borrowed subject
pub type SubjectCheck<'a, T> = &'a dyn Fn(&T) -> Result<(), RobotError>;

/// Non-empty, ordered list of violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    first: RobotError,
    rest: Vec<RobotError>,
}

impl Violations {
    pub fn single(err: RobotError) -> Self {
        Self {
            first: err,
            rest: Vec::new(),
        }
    }

    /// Build from any sequence of errors; `None` when the sequence is empty
    pub fn from_errors(errors: impl IntoIterator<Item = RobotError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// The earliest violation, used to classify the whole list
    pub fn first(&self) -> &RobotError {
        &self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &RobotError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn contains(&self, err: &RobotError) -> bool {
        self.iter().any(|e| e == err)
    }

    pub fn into_vec(self) -> Vec<RobotError> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }

    /// Player-facing messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// Put `err` in front of the existing violations
    pub fn prepend(self, err: RobotError) -> Self {
        Self {
            first: err,
            rest: self.into_vec(),
        }
    }

    /// Append the violations of `other` after our own
    pub fn extend(&mut self, other: Violations) {
        self.rest.extend(other.into_vec());
    }

    /// Join the outcomes of independent pipelines, keeping their order
    pub fn combine(
        results: impl IntoIterator<Item = Result<(), Violations>>,
    ) -> Result<(), Violations> {
        let mut acc: Option<Violations> = None;
        for result in results {
            if let Err(violations) = result {
                match acc.as_mut() {
                    Some(existing) => existing.extend(violations),
                    None => acc = Some(violations),
                }
            }
        }
        acc.map_or(Ok(()), Err)
    }
}

impl From<RobotError> for Violations {
    fn from(err: RobotError) -> Self {
        Self::single(err)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for err in &self.rest {
            write!(f, "\n{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Run every check and aggregate the failures
pub fn validate_all(checks: &[Check<'_>]) -> Result<(), Violations> {
    let failures = checks.iter().filter_map(|check| check().err());
    Violations::from_errors(failures).map_or(Ok(()), Err)
}

/// Run every check against `value`, handing the value back when all pass
pub fn validated<T>(value: T, checks: &[SubjectCheck<'_, T>]) -> Result<T, Violations> {
    let failures = checks.iter().filter_map(|check| check(&value).err());
    match Violations::from_errors(failures) {
        Some(violations) => Err(violations),
        None => Ok(value),
    }
}

/// Applicative product of two independent parses
pub fn both<A, B>(
    a: Result<A, RobotError>,
    b: Result<B, RobotError>,
) -> Result<(A, B), Violations> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(Violations::single(e)),
        (Err(a), Err(b)) => Err(Violations {
            first: a,
            rest: vec![b],
        }),
    }
}

/// Parse a token that must be written as a plain integer
///
/// The token is accepted only when re-rendering the parsed value gives the
/// token back, so `2.5`, `2a`, `+2`, `02` and `" 2"` are all rejected.
/// A token too large for `T` is rejected as well.
pub fn parse_integer_token<T>(token: &str) -> Option<T>
where
    T: FromStr + ToString,
{
    let value = token.parse::<T>().ok()?;
    (value.to_string() == token).then_some(value)
}
