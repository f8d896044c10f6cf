/// Every user-visible string on the card.
///
/// Defaults are the Romanian texts of the card; the recipient can be
/// swapped through the page URL (`?name=...`).
#[derive(Clone, Debug, PartialEq)]
pub struct CardText {
    pub recipient: String,
    pub accept_label: String,
    pub decline_label: String,
    pub success_title: String,
    pub success_message: String,
    pub success_note: String,
    pub restart_label: String,
}

pub const DEFAULT_RECIPIENT: &str = "Olivia";
pub const NAME_QUERY_KEY: &str = "name";

impl Default for CardText {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            accept_label: "DA".to_string(),
            decline_label: "NU".to_string(),
            success_title: "Yay!".to_string(),
            success_message: "Abia aștept!".to_string(),
            success_note: "M-ai făcut cel mai fericit! ❤️".to_string(),
            restart_label: "Încearcă din nou".to_string(),
        }
    }
}

impl CardText {
    pub fn question(&self) -> String {
        format!("{}, vrei să fii iubita mea de Valentine’s Day?", self.recipient)
    }

    /// Build the text from a URL query string such as `?name=Ana%20Maria`.
    pub fn from_query(query: &str) -> Self {
        let mut text = Self::default();
        if let Some(name) = query_value(query, NAME_QUERY_KEY) {
            text.recipient = name;
        }
        text
    }
}

/// Decoded, trimmed, non-empty value of `key` in `query`.
pub fn query_value(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .and_then(|(_, raw)| {
            let spaced = raw.replace('+', " ");
            let decoded = urlencoding::decode(&spaced).ok()?;
            let trimmed = decoded.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
}
