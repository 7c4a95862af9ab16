//! # List Filter
//!
//! Query-string filtering for book listings. Only one dimension applies per
//! request, chosen in fixed priority: name, then reading, then finished.

use super::model::Book;

/// Raw `?name=&reading=&finished=` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooksQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl BooksQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins and
    /// unknown keys are ignored, so no query string is ever rejected.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// The single filter applied to a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    /// Case-insensitive substring of the name, stored lowercased
    Name(String),
    Reading(bool),
    Finished(bool),
}

impl ListFilter {
    /// Pick the filter from query parameters. Empty values count as absent;
    /// for the boolean flags only `"1"` means true.
    pub fn from_query(query: &BooksQuery) -> Self {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        if let Some(name) = present(&query.name) {
            return ListFilter::Name(name.to_lowercase());
        }
        if let Some(reading) = present(&query.reading) {
            return ListFilter::Reading(reading == "1");
        }
        if let Some(finished) = present(&query.finished) {
            return ListFilter::Finished(finished == "1");
        }
        ListFilter::All
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Name(needle) => book.name.to_lowercase().contains(needle.as_str()),
            ListFilter::Reading(reading) => book.reading == *reading,
            ListFilter::Finished(finished) => book.finished == *finished,
        }
    }
}
