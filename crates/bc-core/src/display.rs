//! Formatting helpers shared by the setup and dashboard views.

use url::Url;

const TELEGRAM_HOSTS: [&str; 2] = ["t.me", "telegram.me"];

/// `abcdef...wxyz` form of an API key for list rows.
///
/// Short keys are not padded: head and tail may overlap.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// Name suggestion for a channel url: the first path segment of a Telegram
/// link, otherwise the url itself.
pub fn extract_channel_name(url: &str) -> String {
    telegram_handle(url).unwrap_or_else(|| url.to_owned())
}

fn telegram_handle(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if !TELEGRAM_HOSTS.iter().any(|known| host.contains(known)) {
        return None;
    }
    parsed
        .path_segments()?
        .find(|segment| !segment.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_keys() {
        assert_eq!(mask_api_key("ABCDEF1234567890WXYZ"), "ABCDEF...WXYZ");
    }

    #[test]
    fn short_keys_keep_overlapping_head_and_tail() {
        assert_eq!(mask_api_key("short"), "short...hort");
        assert_eq!(mask_api_key("abc"), "abc...abc");
        assert_eq!(mask_api_key(""), "...");
    }

    #[test]
    fn masking_respects_char_boundaries() {
        assert_eq!(mask_api_key("ключключключ"), "ключкл...ключ");
    }

    #[test]
    fn telegram_links_yield_first_segment() {
        assert_eq!(extract_channel_name("https://t.me/cryptoboxes"), "cryptoboxes");
        assert_eq!(extract_channel_name("https://telegram.me//news/"), "news");
        assert_eq!(extract_channel_name("https://t.me/boxes/42"), "boxes");
    }

    #[test]
    fn other_links_and_garbage_come_back_unchanged() {
        for url in [
            "https://example.com/cryptoboxes",
            "t.me/cryptoboxes",
            "https://t.me/",
            "not a url",
        ] {
            assert_eq!(extract_channel_name(url), url);
        }
    }
}
