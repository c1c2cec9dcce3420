use crate::domain::value::PhoneNumber;

/// Extract candidate phone numbers from a contact-list text.
///
/// One entry per line; blank lines and `#` comments are skipped. For CSV
/// lines only the first column is taken. No validation happens here.
pub fn parse_contact_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(',') {
            Some((first, _)) => first.trim(),
            None => line,
        })
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, Default)]
/// Recipient state for one send form.
///
/// Holds numbers loaded from a file upload and numbers typed into the
/// textarea separately; uploaded numbers take precedence when both are
/// present. Construct one per form submission instead of sharing a
/// long-lived instance.
pub struct ContactSet {
    uploaded: Vec<PhoneNumber>,
    manual: Vec<PhoneNumber>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the uploaded numbers with whatever in `raw` parses
    /// canonically. Invalid entries are dropped. Returns how many were kept.
    pub fn load_uploaded<I, S>(&mut self, raw: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.uploaded = raw
            .into_iter()
            .filter_map(|entry| PhoneNumber::parse(entry.as_ref()).ok())
            .collect();
        self.uploaded.len()
    }

    /// Discard the uploaded numbers, falling back to manual entry.
    pub fn clear_uploaded(&mut self) {
        self.uploaded.clear();
    }

    /// Parse a multiline textarea value into manual numbers, skipping
    /// invalid lines. Returns how many were kept.
    pub fn set_manual_lines(&mut self, text: &str) -> usize {
        self.manual = parse_contact_lines(text)
            .iter()
            .filter_map(|entry| PhoneNumber::parse(entry).ok())
            .collect();
        self.manual.len()
    }

    pub fn uploaded(&self) -> &[PhoneNumber] {
        &self.uploaded
    }

    pub fn manual(&self) -> &[PhoneNumber] {
        &self.manual
    }

    /// The numbers a submit would actually send: uploaded when present,
    /// manual otherwise.
    pub fn effective(&self) -> &[PhoneNumber] {
        if self.uploaded.is_empty() {
            &self.manual
        } else {
            &self.uploaded
        }
    }

    pub fn is_empty(&self) -> bool {
        self.effective().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_contact_lines_skips_blanks_and_comments() {
        let text = "254700000001\n\n# office list\n 254700000002 \n";
        assert_eq!(
            parse_contact_lines(text),
            vec!["254700000001".to_owned(), "254700000002".to_owned()]
        );
    }

    #[test]
    fn parse_contact_lines_takes_first_csv_column() {
        let text = "254700000001,Alice\n254700000002 , Bob, Nairobi\n";
        assert_eq!(
            parse_contact_lines(text),
            vec!["254700000001".to_owned(), "254700000002".to_owned()]
        );
    }

    #[test]
    fn uploaded_numbers_win_over_manual_entry() {
        let mut contacts = ContactSet::new();
        contacts.set_manual_lines("254711111111\n254722222222");
        assert_eq!(contacts.effective().len(), 2);

        let kept = contacts.load_uploaded(["254700000001", "254700000002", "254700000003"]);
        assert_eq!(kept, 3);
        assert_eq!(contacts.effective().len(), 3);
        assert_eq!(contacts.effective()[0].as_digits(), "254700000001");

        contacts.clear_uploaded();
        assert_eq!(contacts.effective().len(), 2);
        assert_eq!(contacts.effective()[0].as_digits(), "254711111111");
    }

    #[test]
    fn invalid_lines_are_dropped_silently() {
        let mut contacts = ContactSet::new();
        let kept = contacts.set_manual_lines("254700000001\nbogus\n555-1234\n");
        assert_eq!(kept, 1);
        assert_eq!(contacts.effective().len(), 1);

        let kept = contacts.load_uploaded(["nope", "254700000009"]);
        assert_eq!(kept, 1);
        assert_eq!(contacts.effective()[0].as_digits(), "254700000009");
    }

    #[test]
    fn empty_set_reports_empty() {
        let contacts = ContactSet::new();
        assert!(contacts.is_empty());
        assert!(contacts.effective().is_empty());
    }
}
