use std::borrow::Cow;

/// Decode one `application/x-www-form-urlencoded` component as UTF-8.
///
/// `+` is a space, `%XX` escapes become raw bytes, and the bytes are then read
/// as UTF-8. Invalid sequences are replaced with U+FFFD instead of failing.
pub fn decode_component(raw: &[u8]) -> String {
    let spaced: Cow<[u8]> = if raw.contains(&b'+') {
        Cow::Owned(raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect())
    } else {
        Cow::Borrowed(raw)
    };
    let bytes = urlencoding::decode_binary(&spaced);
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse a URL-encoded query string or form body into ordered pairs.
pub fn parse_urlencoded(raw: &[u8]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for pair in raw.split(|&b| b == b'&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, |&b| b == b'=');
        let key_enc = parts.next().unwrap_or_default();
        let val_enc = parts.next().unwrap_or_default();
        pairs.push((decode_component(key_enc), decode_component(val_enc)));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_is_space() {
        assert_eq!(decode_component(b"hello+world"), "hello world");
        assert_eq!(decode_component(b"a%2Bb"), "a+b");
    }

    #[test]
    fn test_percent_escapes_are_utf8() {
        // "홍길동"
        assert_eq!(decode_component(b"%ED%99%8D%EA%B8%B8%EB%8F%99"), "홍길동");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(decode_component(b"ab%FF"), "ab\u{FFFD}");
    }

    #[test]
    fn test_pairs_keep_order_and_skip_empty() {
        let pairs = parse_urlencoded(b"user_id=alice&&user_pw=secret&flag");
        assert_eq!(
            pairs,
            vec![
                ("user_id".to_string(), "alice".to_string()),
                ("user_pw".to_string(), "secret".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let pairs = parse_urlencoded(b"user_pw=a=b");
        assert_eq!(pairs[0].1, "a=b");
    }
}
