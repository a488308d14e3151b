use crate::application::ports::{urls::UrlReverser, util::SlugGenerator};
use crate::domain::article::value_objects::ArticleSlug;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        // slug::slugify returns "" for input with no sluggable characters;
        // that degenerate base is legal downstream.
        slugify(input)
    }
}

/// Path-style URL reverser for deployments without a routing framework:
/// `/{namespace}/{slug}/`.
#[derive(Default, Clone)]
pub struct PathUrlReverser;

impl UrlReverser for PathUrlReverser {
    fn article_url(&self, namespace: &str, slug: &ArticleSlug) -> String {
        format!("/{}/{}/", namespace, slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_is_deterministic() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("My Story"), generator.slugify("My Story"));
        assert_eq!(generator.slugify("My Story"), "my-story");
    }

    #[test]
    fn slugify_is_idempotent_on_its_own_output() {
        let generator = DefaultSlugGenerator;
        for title in ["My Story", "Äpfel & Birnen", "  spaced  out  ", "2024 in review"] {
            let once = generator.slugify(title);
            assert_eq!(generator.slugify(&once), once);
        }
    }

    #[test]
    fn slugify_of_stripped_characters_is_empty() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("!!!"), "");
        assert_eq!(generator.slugify(""), "");
    }

    #[test]
    fn article_url_joins_namespace_and_slug() {
        let reverser = PathUrlReverser;
        let url = reverser.article_url("news", &ArticleSlug::new("my-story"));
        assert_eq!(url, "/news/my-story/");
    }
}
