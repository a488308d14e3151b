// src/domain/language.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// A lowercase language code such as "en" or "de".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "language code cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

/// The process-wide set of configured languages, validated once at bootstrap.
/// The slug allocator refuses to work with languages outside this set, and an
/// empty set is rejected outright so a misconfigured deployment fails before
/// serving any save.
#[derive(Debug, Clone)]
pub struct LanguageSet {
    codes: Vec<LanguageCode>,
}

impl LanguageSet {
    pub fn new(codes: Vec<LanguageCode>) -> DomainResult<Self> {
        if codes.is_empty() {
            return Err(DomainError::Validation(
                "at least one language must be configured".into(),
            ));
        }
        let mut deduped: Vec<LanguageCode> = Vec::with_capacity(codes.len());
        for code in codes {
            if !deduped.contains(&code) {
                deduped.push(code);
            }
        }
        Ok(Self { codes: deduped })
    }

    pub fn from_codes<I, S>(codes: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes
            .into_iter()
            .map(LanguageCode::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(codes)
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trimmed_and_lowercased() {
        let code = LanguageCode::new(" EN ").unwrap();
        assert_eq!(code.as_str(), "en");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(LanguageCode::new("  ").is_err());
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(LanguageSet::new(vec![]).is_err());
        assert!(LanguageSet::from_codes(Vec::<String>::new()).is_err());
    }

    #[test]
    fn duplicates_are_collapsed_preserving_order() {
        let set = LanguageSet::from_codes(["en", "de", "en"]).unwrap();
        let codes: Vec<&str> = set.iter().map(LanguageCode::as_str).collect();
        assert_eq!(codes, ["en", "de"]);
    }
}
