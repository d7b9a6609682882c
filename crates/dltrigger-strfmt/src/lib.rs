//! Filename formatting for saved downloads.

/// Replaces every character outside `[A-Za-z0-9]` with `_` and lowercases the rest.
///
/// Runs of separators are not collapsed, `"My Book! (2024)"` becomes `"my_book___2024_"`.
/// Replacement counts UTF-16 code units as browsers do, a character outside the BMP yields `__`.
#[must_use]
pub fn filename_stem(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if c.is_ascii_alphanumeric() {
                std::iter::repeat_n(c.to_ascii_lowercase(), 1)
            } else {
                std::iter::repeat_n('_', c.len_utf16())
            }
        })
        .collect()
}

/// Builds a save-as filename from the page title text.
///
/// Without a title the `default_stem` is used, which goes through the same formatting.
#[must_use]
pub fn filename_from_title(title: Option<&str>, default_stem: &str, extension: &str) -> String {
    let stem = filename_stem(title.unwrap_or(default_stem));
    format!("{stem}.{extension}")
}
