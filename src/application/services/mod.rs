// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, sections::SectionCommandService},
        ports::{directory::UserDirectory, time::Clock, urls::UrlReverser, util::SlugGenerator},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{
            repository::{
                ArticleReadRepository, ArticleRevisionRepository, ArticleWriteRepository,
            },
            services::SlugAllocator,
        },
        author::repository::AuthorProfileRepository,
        language::LanguageSet,
        section::repository::SectionConfigRepository,
    },
};

/// Fully wired application façade. Construction is the bootstrap point: the
/// `LanguageSet` argument is already validated non-empty, so a deployment
/// without language configuration never gets this far.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub section_commands: Arc<SectionCommandService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        languages: LanguageSet,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_revision_repo: Arc<dyn ArticleRevisionRepository>,
        author_repo: Arc<dyn AuthorProfileRepository>,
        section_repo: Arc<dyn SectionConfigRepository>,
        directory: Arc<dyn UserDirectory>,
        url_reverser: Arc<dyn UrlReverser>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(
            languages,
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&article_revision_repo),
            Arc::clone(&author_repo),
            Arc::clone(&directory),
            Arc::clone(&slug_allocator),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_revision_repo),
            Arc::clone(&url_reverser),
        ));

        let section_commands = Arc::new(SectionCommandService::new(Arc::clone(&section_repo)));

        Self {
            article_commands,
            article_queries,
            section_commands,
        }
    }
}
