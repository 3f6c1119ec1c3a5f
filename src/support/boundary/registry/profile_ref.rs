use std::{fmt, str::FromStr};

use thiserror::Error;

/// A configuration reference to a named profile: `<name::library>`.
///
/// # Examples
///
/// ```
/// use twine_inlet_profiles::support::boundary::registry::ProfileRef;
///
/// let reference: ProfileRef = " <x_velocity::libudf> ".parse().unwrap();
/// assert_eq!(reference.name(), "x_velocity");
/// assert_eq!(reference.library(), "libudf");
/// assert_eq!(reference.to_string(), "<x_velocity::libudf>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileRef {
    name: String,
    library: String,
}

/// Errors from parsing a [`ProfileRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseProfileRefError {
    #[error("profile reference must be enclosed in angle brackets")]
    MissingBrackets,
    #[error("profile reference must have the form <name::library>")]
    MissingSeparator,
    #[error("profile reference has an empty name")]
    EmptyName,
    #[error("profile reference has an empty library")]
    EmptyLibrary,
}

impl ProfileRef {
    /// Creates a reference from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty after trimming.
    pub fn new(
        name: impl Into<String>,
        library: impl Into<String>,
    ) -> Result<Self, ParseProfileRefError> {
        let name = name.into().trim().to_owned();
        let library = library.into().trim().to_owned();

        if name.is_empty() {
            return Err(ParseProfileRefError::EmptyName);
        }
        if library.is_empty() {
            return Err(ParseProfileRefError::EmptyLibrary);
        }

        Ok(Self { name, library })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }
}

impl FromStr for ProfileRef {
    type Err = ParseProfileRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or(ParseProfileRefError::MissingBrackets)?;

        let (name, library) = inner
            .split_once("::")
            .ok_or(ParseProfileRefError::MissingSeparator)?;

        Self::new(name, library)
    }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}::{}>", self.name, self.library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_whitespace_is_trimmed() {
        let reference: ProfileRef = "< x_velocity :: libudf >".parse().unwrap();
        assert_eq!(reference, ProfileRef::new("x_velocity", "libudf").unwrap());
    }

    #[test]
    fn malformed_references() {
        assert_eq!(
            "x_velocity::libudf".parse::<ProfileRef>(),
            Err(ParseProfileRefError::MissingBrackets)
        );
        assert_eq!(
            "<x_velocity::libudf".parse::<ProfileRef>(),
            Err(ParseProfileRefError::MissingBrackets)
        );
        assert_eq!(
            "<udf/src/xvelocity.c>".parse::<ProfileRef>(),
            Err(ParseProfileRefError::MissingSeparator)
        );
        assert_eq!(
            "<::libudf>".parse::<ProfileRef>(),
            Err(ParseProfileRefError::EmptyName)
        );
        assert_eq!(
            "<x_velocity:: >".parse::<ProfileRef>(),
            Err(ParseProfileRefError::EmptyLibrary)
        );
    }
}
