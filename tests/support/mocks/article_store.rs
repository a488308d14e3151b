// tests/support/mocks/article_store.rs
use async_trait::async_trait;
use gazette_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleRevision, ArticleRevisionRepository,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use gazette_core::domain::errors::{DomainError, DomainResult};
use gazette_core::domain::language::LanguageCode;
use gazette_core::domain::user::UserId;
use std::collections::BTreeMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Default)]
struct State {
    next_id: i64,
    articles: BTreeMap<i64, Article>,
    revisions: Vec<ArticleRevision>,
}

/// In-memory article store backing read, write and revision repositories in
/// tests. Enforces the `(language, slug)` uniqueness constraint the way the
/// real store does, answering violations with `DomainError::Conflict`.
#[derive(Default)]
pub struct InMemoryArticleStore {
    state: Mutex<State>,
}

impl InMemoryArticleStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn revision_count(&self) -> usize {
        self.state.lock().unwrap().revisions.len()
    }

    fn check_slug_uniqueness(
        state: &State,
        candidate: &Article,
    ) -> DomainResult<()> {
        for (language, translation) in candidate.translations.iter() {
            let Some(slug) = &translation.slug else {
                continue;
            };
            let taken = state.articles.values().any(|other| {
                other.id != candidate.id
                    && other
                        .translation(language)
                        .and_then(|t| t.slug.as_ref())
                        .is_some_and(|other_slug| other_slug == slug)
            });
            if taken {
                return Err(DomainError::Conflict(format!(
                    "slug {slug} already exists in language {language}"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let stored = Article {
            id: ArticleId::new(id)?,
            author: article.author,
            owner: article.owner,
            section: article.section,
            categories: article.categories,
            tags: article.tags,
            publishing_date: article.publishing_date,
            featured_image: article.featured_image,
            translations: article.translations,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        Self::check_slug_uniqueness(&state, &stored)?;
        state.articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);
        let mut article = state
            .articles
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(publishing_date) = update.publishing_date {
            article.publishing_date = publishing_date;
        }
        if let Some(categories) = update.categories {
            article.categories = categories;
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        if let Some(featured_image) = update.featured_image {
            article.featured_image = featured_image;
        }
        if let Some(translations) = update.translations {
            article.translations = translations;
        }
        article.updated_at = update.updated_at;

        Self::check_slug_uniqueness(&state, &article)?;
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.state.lock().unwrap().articles.remove(&i64::from(id));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(
        &self,
        language: &LanguageCode,
        slug: &gazette_core::domain::article::ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .find(|article| {
                article
                    .translation(language)
                    .and_then(|t| t.slug.as_ref())
                    .is_some_and(|s| s == slug)
            })
            .cloned())
    }

    async fn slugs_starting_with(
        &self,
        language: &LanguageCode,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .filter(|article| exclude.is_none_or(|id| article.id != id))
            .filter_map(|article| {
                article
                    .translation(language)
                    .and_then(|t| t.slug.as_ref())
                    .map(|slug| slug.as_str().to_string())
            })
            .filter(|slug| slug.starts_with(prefix))
            .collect())
    }

    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .articles
            .values()
            .filter(|article| article.has_active_translation())
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.publishing_date.cmp(&a.publishing_date));
        articles.truncate(limit as usize);
        Ok(articles)
    }
}

#[async_trait]
impl ArticleRevisionRepository for InMemoryArticleStore {
    async fn append(&self, article: &Article, edited_by: Option<UserId>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let version = state
            .revisions
            .iter()
            .filter(|revision| revision.article_id == article.id)
            .count() as i32
            + 1;
        let revision = ArticleRevision::new(
            article.id,
            version,
            article.publishing_date,
            article.translations.clone(),
            edited_by,
            article.updated_at,
        );
        state.revisions.push(revision);
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .revisions
            .iter()
            .filter(|revision| revision.article_id == article_id)
            .cloned()
            .collect())
    }
}

/// Write repository wrapper that fails the next N inserts or updates with a
/// uniqueness conflict, standing in for a concurrent writer that wins the
/// race between the duplicate check and the actual write.
pub struct ConflictInjectingWriter {
    inner: Arc<dyn ArticleWriteRepository>,
    remaining: AtomicUsize,
}

impl ConflictInjectingWriter {
    pub fn new(inner: Arc<dyn ArticleWriteRepository>, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            inner,
            remaining: AtomicUsize::new(failures),
        })
    }

    fn try_consume_failure(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl ArticleWriteRepository for ConflictInjectingWriter {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        if self.try_consume_failure() {
            return Err(DomainError::Conflict("slug already exists in language".into()));
        }
        self.inner.insert(article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if self.try_consume_failure() {
            return Err(DomainError::Conflict("slug already exists in language".into()));
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
