/// Parse an `application/x-www-form-urlencoded` body into ordered pairs.
///
/// `+` decodes to a space. Sequences that do not percent-decode to UTF-8
/// are kept as sent.
pub fn parse_urlencoded_pairs(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, '=');
        let key = decode_component(parts.next().unwrap_or(""));
        let val = decode_component(parts.next().unwrap_or(""));
        pairs.push((key, val));
    }
    pairs
}

fn decode_component(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
