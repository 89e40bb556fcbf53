//! String and HTML-fragment helpers.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+)\]\(([^()]+)\)").expect("link regex"));

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n").expect("newline regex"));

static SCHEME_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((?:http|https?|ftps?|sftp)://(?:[a-z0-9-]+\.)+[a-z0-9]{2,4}\S*)")
        .expect("scheme url regex")
});

static WWW_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(www\.(?:[a-z0-9-]+\.)+[a-z0-9]{2,4}\S*)").expect("www url regex")
});

static EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z0-9_]*$").expect("ext regex"));

static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\\/]+\.[^\\/]+$").expect("file name regex"));

/// Build a highlighter wrapping each occurrence of the words in `word` with
/// `<mark>` tags.
///
/// `word` is split on `delimiter`; empty pieces are ignored and the rest are
/// matched literally and case-insensitively. An empty `word` (or one made only
/// of delimiters) leaves the input unchanged.
pub fn highlight(word: &str, delimiter: &str) -> impl Fn(&str) -> String {
    let pattern = word
        .split(delimiter)
        .filter(|piece| !piece.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>();
    let matcher = if pattern.is_empty() {
        None
    } else {
        match Regex::new(&format!("(?i)({})", pattern.join("|"))) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(error = %err, "highlight pattern rejected; leaving text unchanged");
                None
            }
        }
    };

    move |text: &str| match &matcher {
        Some(re) => re.replace_all(text, "<mark>$1</mark>").into_owned(),
        None => text.to_string(),
    }
}

/// Strip every `<...>` tag, keeping the text between tags.
///
/// `None` yields an empty string.
pub fn remove_tag(html: Option<&str>) -> String {
    match html {
        Some(html) => TAG_RE.replace_all(html, "").into_owned(),
        None => String::new(),
    }
}

/// Turn markdown-style `[title](link)` into `<a href="link">title</a>`.
pub fn add_link(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Replace line breaks (`\n` or `\r\n`) with `<br />`.
pub fn nl2br(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => NEWLINE_RE.replace_all(text, "<br />").into_owned(),
        _ => String::new(),
    }
}

/// Wrap URLs in anchors.
///
/// URLs with a scheme are linked as-is. Only when none are present, bare
/// `www.` hosts are linked with an `http://` prefix.
pub fn enable_url(text: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return String::new();
    };
    if SCHEME_URL_RE.is_match(text) {
        return SCHEME_URL_RE
            .replace_all(text, r#"<a href="$1">$1</a>"#)
            .into_owned();
    }
    if WWW_URL_RE.is_match(text) {
        return WWW_URL_RE
            .replace_all(text, r#"<a href="http://$1">$1</a>"#)
            .into_owned();
    }
    text.to_string()
}

/// Format an integer with `,` thousands separators.
pub fn number_with_commas(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if num < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Convert `camelCase` to `kebab-case`.
///
/// Input that already contains `-` or `_` is not camel case and is returned
/// unchanged.
pub fn camel_to_kebab(text: &str) -> String {
    if text.contains(['-', '_']) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 4);
    for (i, ch) in text.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Drop the last extension from `filename`.
pub fn remove_ext(filename: &str) -> String {
    EXT_RE.replace(filename, "").into_owned()
}

/// Last path segment of `path` that looks like a file name.
///
/// Falls back to the whole `path` if no segment has an extension. The
/// extension is kept only when `keep_ext` is set.
pub fn get_file_name(path: &str, keep_ext: bool) -> String {
    let name = FILE_NAME_RE.find(path).map_or(path, |found| found.as_str());
    if keep_ext {
        name.to_string()
    } else {
        remove_ext(name)
    }
}
