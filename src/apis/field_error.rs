// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT

//! Path-qualified validation errors.
//!
//! A [`FieldError`] holds every violation found while walking a resource. Each
//! [`Violation`] names the field path(s) it concerns relative to the value
//! that produced it; callers re-root a child's errors into their own
//! coordinate space with [`FieldError::via_field`] and
//! [`FieldError::via_index`] before folding them in with [`FieldError::also`].
//!
//! An empty `FieldError` means the value is valid.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("missing field(s)")]
    MissingField,
    #[error("must not set the field(s)")]
    DisallowedField,
    #[error("expected exactly one, got both")]
    MultipleOneOf,
    #[error("expected exactly one, got neither")]
    MissingOneOf,
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub paths: Vec<String>,
    pub details: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.paths.join(", "))?;
        if let Some(details) = &self.details {
            write!(f, "\n{}", details)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldError {
    violations: Vec<Violation>,
}

impl FieldError {
    fn single(kind: ViolationKind, paths: Vec<String>) -> FieldError {
        FieldError {
            violations: vec![Violation {
                kind,
                paths,
                details: None,
            }],
        }
    }

    pub fn missing_field(path: impl Into<String>) -> FieldError {
        FieldError::single(ViolationKind::MissingField, vec![path.into()])
    }

    pub fn disallowed_field(path: impl Into<String>) -> FieldError {
        FieldError::single(ViolationKind::DisallowedField, vec![path.into()])
    }

    /// More than one of `paths` claims something only one of them may own.
    pub fn multiple_one_of<I, S>(paths: I) -> FieldError
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::single(
            ViolationKind::MultipleOneOf,
            paths.into_iter().map(Into::into).collect(),
        )
    }

    pub fn missing_one_of<I, S>(paths: I) -> FieldError
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::single(
            ViolationKind::MissingOneOf,
            paths.into_iter().map(Into::into).collect(),
        )
    }

    pub fn invalid_value(value: impl fmt::Display, path: impl Into<String>) -> FieldError {
        FieldError::single(
            ViolationKind::InvalidValue(value.to_string()),
            vec![path.into()],
        )
    }

    /// Attaches `details` to every violation that does not carry any yet.
    pub fn with_details(mut self, details: impl Into<String>) -> FieldError {
        let details = details.into();
        for violation in self.violations.iter_mut() {
            violation.details.get_or_insert_with(|| details.clone());
        }
        self
    }

    /// Appends the violations of `other` after those of `self`.
    pub fn also(mut self, other: FieldError) -> FieldError {
        self.violations.extend(other.violations);
        self
    }

    /// Prefixes every carried path with the field `segment`.
    pub fn via_field(self, segment: &str) -> FieldError {
        self.map_paths(|path| join_path(segment, path))
    }

    /// Prefixes every carried path with the array index `[index]`.
    pub fn via_index(self, index: usize) -> FieldError {
        let segment = format!("[{}]", index);
        self.map_paths(|path| join_path(&segment, path))
    }

    /// Equivalent to `via_index(index).via_field(field)`.
    pub fn via_field_index(self, field: &str, index: usize) -> FieldError {
        self.via_index(index).via_field(field)
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Every path named by any violation, in accumulation order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .flat_map(|v| v.paths.iter().map(String::as_str))
    }

    pub fn into_result(self) -> Result<(), FieldError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn map_paths(mut self, f: impl Fn(&str) -> String) -> FieldError {
        for violation in self.violations.iter_mut() {
            for path in violation.paths.iter_mut() {
                *path = f(path);
            }
        }
        self
    }
}

fn join_path(segment: &str, path: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else if path.starts_with('[') {
        format!("{}{}", segment, path)
    } else {
        format!("{}.{}", segment, path)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

impl FromIterator<FieldError> for FieldError {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> FieldError {
        iter.into_iter().fold(FieldError::default(), FieldError::also)
    }
}
