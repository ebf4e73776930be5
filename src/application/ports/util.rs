// src/application/ports/util.rs
/// Turns a human-readable name into a lowercase, hyphenated url segment.
/// Returns an empty string when nothing usable remains.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
