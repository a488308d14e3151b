// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::{LanguageCode, LanguageSet};

/// Domain service producing per-language unique slugs for articles.
///
/// The save path first attempts the plain title-derived base and only calls
/// [`SlugAllocator::next_free`] after the storage layer has rejected it with
/// a uniqueness conflict. The suffix search reads the existing slug set and
/// picks the first free `{base}_{n}`; between that read and the subsequent
/// write a concurrent save can still take the candidate. That window is a
/// known property of this design: the conflict retry happens once, for the
/// unsuffixed base only, and a collision at the suffix step surfaces to the
/// caller.
pub struct SlugAllocator {
    languages: LanguageSet,
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAllocator {
    /// `languages` is the process-wide configured set, validated non-empty
    /// at bootstrap; construction does not re-check it beyond the type.
    pub fn new(
        languages: LanguageSet,
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            languages,
            read_repo,
            generator,
        }
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    /// Normalize a title into its slug base. Deterministic, and idempotent
    /// when re-applied to its own output. An empty result is legal: titles
    /// made only of stripped characters produce the degenerate base "".
    pub fn base_slug(&self, title: &ArticleTitle) -> ArticleSlug {
        ArticleSlug::new(self.generator.slugify(title.as_str()))
    }

    /// Find the first suffixed candidate `{base}_{n}` (n starting at 1) not
    /// taken by another article's translation in `language`. `exclude` drops
    /// the saving article's own slugs from consideration so a re-save does
    /// not collide with itself.
    pub async fn next_free(
        &self,
        language: &LanguageCode,
        base: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        if !self.languages.contains(language) {
            return Err(DomainError::Validation(format!(
                "language {language} is not configured"
            )));
        }

        let taken = self
            .read_repo
            .slugs_starting_with(language, base.as_str(), exclude)
            .await?;

        tracing::debug!(
            base = %base,
            language = %language,
            taken = taken.len(),
            "slug base taken, searching for free suffix"
        );

        // Unbounded counter; terminates because `taken` is finite.
        let mut counter = 1u64;
        loop {
            let candidate = format!("{}_{}", base.as_str(), counter);
            if !taken.iter().any(|slug| slug == &candidate) {
                return Ok(ArticleSlug::new(candidate));
            }
            counter += 1;
        }
    }
}
