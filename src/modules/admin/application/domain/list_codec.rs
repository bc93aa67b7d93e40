// src/modules/admin/application/domain/list_codec.rs

//! Text <-> list transform for multi-value form fields.
//!
//! Forms carry lists (features, technologies, image URLs, ...) as delimited
//! text. Parsing splits on the delimiter, trims every entry and drops the
//! empty ones, keeping order. There is no escaping: an entry that contains
//! the delimiter cannot be represented, so `format` refuses it instead of
//! producing text that would parse back into a different list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCodec {
    /// `"React, Node.js, Stripe"`
    Comma,
    /// One entry per line
    Lines,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListCodecError {
    #[error("entry {entry:?} contains the list delimiter {delimiter:?}")]
    EmbeddedDelimiter { entry: String, delimiter: char },
}

impl ListCodec {
    pub fn delimiter(self) -> char {
        match self {
            ListCodec::Comma => ',',
            ListCodec::Lines => '\n',
        }
    }

    fn separator(self) -> &'static str {
        match self {
            ListCodec::Comma => ", ",
            ListCodec::Lines => "\n",
        }
    }

    pub fn parse(self, text: &str) -> Vec<String> {
        text.split(self.delimiter())
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Entries are trimmed and blanks dropped, mirroring what `parse` would
    /// keep, so `parse(format(xs)?)` equals the normalized `xs`.
    pub fn format<S: AsRef<str>>(self, items: &[S]) -> Result<String, ListCodecError> {
        let delimiter = self.delimiter();
        let mut kept = Vec::with_capacity(items.len());

        for item in items {
            let entry = item.as_ref().trim();
            if entry.contains(delimiter) {
                return Err(ListCodecError::EmbeddedDelimiter {
                    entry: entry.to_string(),
                    delimiter,
                });
            }
            if !entry.is_empty() {
                kept.push(entry);
            }
        }

        Ok(kept.join(self.separator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_parse_trims_and_drops_empty_entries() {
        let parsed = ListCodec::Comma.parse("React, Node.js, Stripe");
        assert_eq!(parsed, vec!["React", "Node.js", "Stripe"]);

        let parsed = ListCodec::Comma.parse(" ,React,,  Node.js ,");
        assert_eq!(parsed, vec!["React", "Node.js"]);
    }

    #[test]
    fn lines_parse_handles_crlf_and_blank_lines() {
        let parsed = ListCodec::Lines.parse("first\r\n\n  second  \n\r\nthird");
        assert_eq!(parsed, vec!["first", "second", "third"]);
    }

    #[test]
    fn parse_of_blank_text_is_empty() {
        assert!(ListCodec::Comma.parse("").is_empty());
        assert!(ListCodec::Lines.parse("   \n  ").is_empty());
    }

    #[test]
    fn format_then_parse_reproduces_normalized_list() {
        let items = vec!["  Rust ", "", "actix-web", "serde"];
        let text = ListCodec::Comma.format(&items).unwrap();

        assert_eq!(text, "Rust, actix-web, serde");
        assert_eq!(
            ListCodec::Comma.parse(&text),
            vec!["Rust", "actix-web", "serde"]
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = ListCodec::Lines.parse("a\n\n b \nc");
        let text = ListCodec::Lines.format(&once).unwrap();
        let twice = ListCodec::Lines.parse(&text);

        assert_eq!(once, twice);
        assert_eq!(ListCodec::Lines.format(&twice).unwrap(), text);
    }

    #[test]
    fn format_rejects_embedded_delimiter() {
        let err = ListCodec::Comma
            .format(&["Stripe", "Node.js, Express"])
            .unwrap_err();

        assert_eq!(
            err,
            ListCodecError::EmbeddedDelimiter {
                entry: "Node.js, Express".to_string(),
                delimiter: ',',
            }
        );
    }

    #[test]
    fn commas_are_fine_in_line_lists() {
        let text = ListCodec::Lines
            .format(&["Auto replies, FAQs", "Lead qualification"])
            .unwrap();
        assert_eq!(text, "Auto replies, FAQs\nLead qualification");
    }
}
