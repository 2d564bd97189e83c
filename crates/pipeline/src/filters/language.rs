use crate::traits::FilmFilter;
use catalog_model::Film;

/// Keeps films whose original language equals the given one, ignoring case.
///
/// Films without a recorded language never match.
pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_lowercase(),
        }
    }
}

impl FilmFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.original_language
            .as_deref()
            .is_some_and(|language| language.to_lowercase() == self.language)
    }
}
