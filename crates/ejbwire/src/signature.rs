//! # Method Signatures
//!
//! A method is identified on the wire by its name and the fully qualified
//! names of its formal parameter types, in declaration order. Overloads
//! differ only in that list.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::error::Result;

/// Name and ordered parameter types of a remote method.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MethodSignature {
    name: String,
    parameter_types: Vec<String>,
}

impl MethodSignature {
    /// Order of `parameter_types` is kept as given; duplicates are kept too.
    pub fn new<I, S>(name: impl Into<String>, parameter_types: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '(', ')', ',']) {
            return Err(Error::InvalidSignature(name));
        }

        let parameter_types: Vec<String> = parameter_types.into_iter().map(Into::into).collect();
        if let Some(bad) = parameter_types
            .iter()
            .find(|ty| ty.is_empty() || ty.contains(['/', '(', ')', ',']))
        {
            return Err(Error::InvalidSignature(format!("{}: bad parameter type '{}'", name, bad)));
        }

        Ok(Self { name, parameter_types })
    }

    /// A method without parameters.
    pub fn nullary(name: impl Into<String>) -> Result<Self> {
        Self::new(name, std::iter::empty::<String>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// Parses `name(type, type, ...)`. Whitespace around tokens is ignored.
impl FromStr for MethodSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidSignature(s.to_string());

        let (name, rest) = s.trim().split_once('(').ok_or_else(invalid)?;
        let params = rest.strip_suffix(')').ok_or_else(invalid)?;

        let params = params.trim();
        if params.is_empty() {
            return Self::nullary(name.trim());
        }
        Self::new(name.trim(), params.split(',').map(str::trim))
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_types.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let sig: MethodSignature = "doWork(int, java.lang.String)".parse().unwrap();
        assert_eq!(sig.name(), "doWork");
        assert_eq!(sig.parameter_types(), ["int", "java.lang.String"]);
        assert_eq!(sig.to_string(), "doWork(int,java.lang.String)");
    }

    #[test]
    fn test_parse_nullary() {
        let sig: MethodSignature = " ping( ) ".parse().unwrap();
        assert_eq!(sig.name(), "ping");
        assert_eq!(sig.arity(), 0);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let sig: MethodSignature = "f(long,int,long)".parse().unwrap();
        assert_eq!(sig.parameter_types(), ["long", "int", "long"]);
    }

    #[test]
    fn test_array_parameter_types() {
        let sig: MethodSignature = "bulk([Ljava.lang.String;,[I)".parse().unwrap();
        assert_eq!(sig.parameter_types(), ["[Ljava.lang.String;", "[I"]);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["doWork", "doWork(int", "(int)", "f(int,,long)", "f(a/b)", "f(int))"] {
            assert!(
                matches!(bad.parse::<MethodSignature>(), Err(Error::InvalidSignature(_))),
                "{bad} should not parse"
            );
        }
    }
}
