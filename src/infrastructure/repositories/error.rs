use crate::domain::errors::DomainError;

const CNT_TRANSLATION_LANGUAGE_SLUG: &str = "article_translations_language_slug_key";
const CNT_AUTHOR_USER: &str = "author_profiles_user_id_key";
const CNT_SECTION_NAMESPACE: &str = "section_configs_namespace_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_SECTION: &str = "articles_section_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TRANSLATION_LANGUAGE_SLUG => {
                        DomainError::Conflict("slug already exists in language".into())
                    }
                    CNT_AUTHOR_USER => {
                        DomainError::Conflict("author profile already exists for user".into())
                    }
                    CNT_SECTION_NAMESPACE => {
                        DomainError::Conflict("namespace already exists".into())
                    }
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_ARTICLE_SECTION => DomainError::NotFound("section not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
