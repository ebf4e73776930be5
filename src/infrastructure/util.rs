use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugger backed by the `slug` crate; non-ASCII letters are transliterated first.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
