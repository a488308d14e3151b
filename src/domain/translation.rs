// src/domain/translation.rs
use crate::domain::language::LanguageCode;
use std::collections::BTreeMap;

/// Language-keyed container for the translatable parts of an entity.
///
/// Translated fields never live on the entity itself; they are composed in
/// through one of these, so the per-language lifecycle (slug allocation,
/// active flags) stays explicit at the call sites that touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet<T> {
    entries: BTreeMap<LanguageCode, T>,
}

impl<T> TranslationSet<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the translation for a language, returning the
    /// previous entry when one existed.
    pub fn insert(&mut self, language: LanguageCode, translation: T) -> Option<T> {
        self.entries.insert(language, translation)
    }

    pub fn get(&self, language: &LanguageCode) -> Option<&T> {
        self.entries.get(language)
    }

    pub fn get_mut(&mut self, language: &LanguageCode) -> Option<&mut T> {
        self.entries.get_mut(language)
    }

    pub fn remove(&mut self, language: &LanguageCode) -> Option<T> {
        self.entries.remove(language)
    }

    pub fn contains(&self, language: &LanguageCode) -> bool {
        self.entries.contains_key(language)
    }

    /// Fallback accessor for display contexts that accept any language.
    pub fn any(&self) -> Option<(&LanguageCode, &T)> {
        self.entries.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(LanguageCode, T)> for TranslationSet<T> {
    fn from_iter<I: IntoIterator<Item = (LanguageCode, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
