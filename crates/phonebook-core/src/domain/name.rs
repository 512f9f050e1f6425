use crate::error::CoreError;
use std::fmt;

/// Contact name. Unique within a directory and immutable once a record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;
    use crate::error::CoreError;

    #[test]
    fn name_rejects_empty() {
        assert_eq!(Name::parse(""), Err(CoreError::EmptyName));
    }

    #[test]
    fn name_keeps_whitespace_as_is() {
        let name = Name::parse(" ").unwrap();
        assert_eq!(name.as_str(), " ");
    }
}
