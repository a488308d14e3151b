// src/application/ports/urls.rs
use crate::domain::article::value_objects::ArticleSlug;

/// URL-reversal collaborator: builds the canonical link for an article from
/// its section namespace and slug. Routing itself lives outside this crate.
pub trait UrlReverser: Send + Sync {
    fn article_url(&self, namespace: &str, slug: &ArticleSlug) -> String;
}
