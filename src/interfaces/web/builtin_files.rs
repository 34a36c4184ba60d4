use rust_embed::Embed;
use std::borrow::Cow;

/// ファイルシステムに依存しない組み込みページ
#[derive(Embed)]
#[folder = "builtin/"]
#[include = "*.htm"]
struct BuiltinFiles;

const NOT_FOUND_FILE: &str = "notfound.htm";

const NOT_FOUND_FALLBACK: &[u8] = b"<html><body><p>Not found.</p></body></html>";

/// Body of every 404 response.
pub fn not_found_page() -> Cow<'static, [u8]> {
    BuiltinFiles::get(NOT_FOUND_FILE)
        .map(|file| file.data)
        .unwrap_or(Cow::Borrowed(NOT_FOUND_FALLBACK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page_is_embedded() {
        assert!(BuiltinFiles::get(NOT_FOUND_FILE).is_some());

        let page = not_found_page();
        let text = std::str::from_utf8(&page).unwrap();
        assert!(text.contains("not found"));
        assert!(text.contains("href=\"/\""));
    }
}
