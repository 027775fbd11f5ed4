//! Language detection from file extensions
//!
//! Fixed extension mapping used to label the fenced code block in the user
//! prompt. Unknown extensions fall back to [`FALLBACK_LANGUAGE`] at the
//! request-construction boundary.

use std::path::Path;

/// Language assumed when the extension is unrecognized.
pub const FALLBACK_LANGUAGE: &str = "python";

/// Extension to language mapping, lowercase extensions without the dot.
pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("cc", "cpp"),
    ("hpp", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("go", "go"),
    ("rs", "rust"),
    ("php", "php"),
    ("rb", "ruby"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("scala", "scala"),
];

/// Detect the programming language from a filename's extension.
#[must_use]
pub fn detect_language(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename).extension()?.to_str()?.to_lowercase();
    language_for_extension(&extension)
}

/// Look up the language for a bare extension (without the dot).
#[must_use]
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}
