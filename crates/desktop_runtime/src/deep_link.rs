//! `?open=about,chess` style deep links that open windows on boot.

use crate::model::WindowId;

/// Windows requested by the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    /// Recognized windows, first mention wins.
    pub open: Vec<WindowId>,
    /// Tokens that did not name a window.
    pub rejected: Vec<String>,
}

/// Parses every `open=` parameter of `query` (with or without the leading `?`).
pub fn parse_deep_link_query(query: &str) -> DeepLink {
    let mut deep_link = DeepLink::default();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if percent_decode(key) != "open" {
            continue;
        }
        let value = percent_decode(value);
        for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<WindowId>() {
                Ok(id) if !deep_link.open.contains(&id) => deep_link.open.push(id),
                Ok(_) => {}
                Err(err) => deep_link.rejected.push(err.0),
            }
        }
    }

    deep_link
}

/// Decodes `%XX` escapes and `+` in one query component. Malformed escapes pass through.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = escaped {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            b'+' => out.push(b' '),
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Reads the deep link from the current browser location.
pub fn current_deep_link() -> DeepLink {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        parse_deep_link_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DeepLink::default()
    }
}

/// Windows to open at boot: configured ones first, then URL requests so those end up in front.
pub fn boot_sequence(boot_open: &[WindowId], deep_link: &DeepLink) -> Vec<WindowId> {
    boot_open
        .iter()
        .chain(deep_link.open.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_comma_separated_tokens_in_order() {
        let parsed = parse_deep_link_query("?open=chess,about,now-playing");
        assert_eq!(
            parsed.open,
            vec![WindowId::Chess, WindowId::About, WindowId::NowPlaying]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn unknown_tokens_are_collected_and_skipped() {
        let parsed = parse_deep_link_query("open=snake,minesweeper,,sudoku");
        assert_eq!(parsed.open, vec![WindowId::Snake, WindowId::Sudoku]);
        assert_eq!(parsed.rejected, vec!["minesweeper".to_string()]);
    }

    #[test]
    fn repeated_parameters_merge_without_duplicates() {
        let parsed = parse_deep_link_query("?open=essays&theme=dark&open=essays%2Cbreakout");
        assert_eq!(parsed.open, vec![WindowId::Essays, WindowId::Breakout]);
    }

    #[test]
    fn percent_encoded_tokens_are_decoded_before_matching() {
        let parsed = parse_deep_link_query("?open=now%2Dplaying%2cchess+,%61bout");
        assert_eq!(
            parsed.open,
            vec![WindowId::NowPlaying, WindowId::Chess, WindowId::About]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn malformed_escapes_are_kept_literally() {
        let parsed = parse_deep_link_query("?open=chess%2,snake%");
        assert_eq!(parsed.open, Vec::<WindowId>::new());
        assert_eq!(
            parsed.rejected,
            vec!["chess%2".to_string(), "snake%".to_string()]
        );
    }

    #[test]
    fn query_without_open_yields_nothing() {
        assert_eq!(parse_deep_link_query("?theme=dark"), DeepLink::default());
        assert_eq!(parse_deep_link_query(""), DeepLink::default());
    }

    #[test]
    fn boot_sequence_puts_deep_links_last() {
        let deep_link = parse_deep_link_query("?open=chess");
        assert_eq!(
            boot_sequence(&[WindowId::About], &deep_link),
            vec![WindowId::About, WindowId::Chess]
        );
    }
}
