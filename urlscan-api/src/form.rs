//! Minimal urlencoded form decoding. The scan form submits repeated fields
//! (`scanType`, `selectedTemplates`), which rules out a plain key→value map.

/// Decode an `application/x-www-form-urlencoded` body into key/value pairs,
/// preserving repeats and order.
pub fn parse(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// First value for `key`, or the empty string when absent.
pub fn first<'a>(form: &'a [(String, String)], key: &str) -> &'a str {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// All values for `key`, in submission order.
pub fn all(form: &[(String, String)], key: &str) -> Vec<String> {
    form.iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .collect()
}
