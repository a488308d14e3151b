// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{
            ArticleSlug, ArticleTitle, ArticleTranslation, NewArticle,
            value_objects::{CategoryId, ImageRef, SeoMetadata, Tag},
        },
        author::AuthorProfileId,
        language::LanguageCode,
        section::SectionConfigId,
        translation::TranslationSet,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub owner: i64,
    pub author: Option<i64>,
    pub section: i64,
    pub language: String,
    pub title: String,
    pub slug: Option<String>,
    pub lead_in: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub categories: Vec<i64>,
    pub tags: Vec<String>,
    pub publishing_date: DateTime<Utc>,
    pub featured_image: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    owner: Option<i64>,
    author: Option<i64>,
    section: Option<i64>,
    language: Option<String>,
    title: Option<String>,
    slug: Option<String>,
    lead_in: String,
    meta_title: String,
    meta_description: String,
    meta_keywords: String,
    categories: Vec<i64>,
    tags: Vec<String>,
    publishing_date: Option<DateTime<Utc>>,
    featured_image: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn owner(mut self, owner: i64) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn author(mut self, author: i64) -> Self {
        self.author = Some(author);
        self
    }

    pub fn section(mut self, section: i64) -> Self {
        self.section = Some(section);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn lead_in(mut self, lead_in: impl Into<String>) -> Self {
        self.lead_in = lead_in.into();
        self
    }

    pub fn meta_title(mut self, meta_title: impl Into<String>) -> Self {
        self.meta_title = meta_title.into();
        self
    }

    pub fn meta_description(mut self, meta_description: impl Into<String>) -> Self {
        self.meta_description = meta_description.into();
        self
    }

    pub fn meta_keywords(mut self, meta_keywords: impl Into<String>) -> Self {
        self.meta_keywords = meta_keywords.into();
        self
    }

    pub fn categories(mut self, categories: Vec<i64>) -> Self {
        self.categories = categories;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn publishing_date(mut self, publishing_date: DateTime<Utc>) -> Self {
        self.publishing_date = Some(publishing_date);
        self
    }

    pub fn featured_image(mut self, featured_image: impl Into<String>) -> Self {
        self.featured_image = Some(featured_image.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            owner: self.owner.ok_or("owner is required")?,
            author: self.author,
            section: self.section.ok_or("section is required")?,
            language: self.language.ok_or("language is required")?,
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            lead_in: self.lead_in,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            meta_keywords: self.meta_keywords,
            categories: self.categories,
            tags: self.tags,
            publishing_date: self.publishing_date.ok_or("publishing date is required")?,
            featured_image: self.featured_image,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let owner = UserId::new(command.owner)?;
        let section = SectionConfigId::new(command.section)?;
        let language = LanguageCode::new(command.language)?;
        let title = ArticleTitle::new(command.title)?;

        let author = match command.author {
            Some(id) => AuthorProfileId::new(id)?,
            None => self.resolve_author(owner).await?,
        };

        let tags = command
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = command.categories.into_iter().map(CategoryId).collect();

        let explicit_slug = command.slug.map(ArticleSlug::new);
        let mut translation = ArticleTranslation::new(title)
            .with_lead_in(command.lead_in)
            .with_meta(SeoMetadata {
                meta_title: command.meta_title,
                meta_description: command.meta_description,
                meta_keywords: command.meta_keywords,
            });
        let allocate = explicit_slug.is_none();
        translation.slug = explicit_slug;

        let mut translations = TranslationSet::new();
        translations.insert(language.clone(), translation);

        let now = self.clock.now();
        let new_article = NewArticle {
            author,
            owner,
            section,
            categories,
            tags,
            publishing_date: command.publishing_date,
            featured_image: command.featured_image.map(ImageRef::new),
            translations,
            created_at: now,
            updated_at: now,
        };

        let created = if allocate {
            self.insert_with_allocated_slug(&language, new_article)
                .await?
        } else {
            // A pre-set slug never goes through the allocator; collisions on
            // it surface as-is.
            self.write_repo.insert(new_article).await?
        };

        self.revision_repo.append(&created, Some(owner)).await?;
        Ok(created.into())
    }
}
