use std::collections::HashMap;

use crate::kind::MediaKind;

/// A set of title names used for membership checks (top-rated, award
/// winners).
///
/// Names are compared after trimming and lowercasing, so
/// `"  The Godfather "` matches `"the godfather"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownTitleSet {
    /// normalized name -> first spelling seen
    names: HashMap<String, String>,
}

impl KnownTitleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        let key = normalize(name);
        if key.is_empty() {
            return false;
        }
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name.trim().to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names as first supplied (trimmed), sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.values().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownTitleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// The four known-title sets supplied at the start of a run.
#[derive(Debug, Clone, Default)]
pub struct KnownTitles {
    pub top_rated_movies: KnownTitleSet,
    pub top_rated_series: KnownTitleSet,
    pub award_winning_movies: KnownTitleSet,
    pub award_winning_series: KnownTitleSet,
}

impl KnownTitles {
    pub fn top_rated(&self, media: MediaKind) -> &KnownTitleSet {
        match media {
            MediaKind::Movie => &self.top_rated_movies,
            MediaKind::Series => &self.top_rated_series,
        }
    }

    pub fn award_winning(&self, media: MediaKind) -> &KnownTitleSet {
        match media {
            MediaKind::Movie => &self.award_winning_movies,
            MediaKind::Series => &self.award_winning_series,
        }
    }

    /// Names to resolve through title search for one kind: top-rated first,
    /// then award winners, without duplicates.
    pub fn lookup_names(&self, media: MediaKind) -> Vec<&str> {
        let mut names = self.top_rated(media).names();
        for name in self.award_winning(media).names() {
            if !self.top_rated(media).contains(name) {
                names.push(name);
            }
        }
        names
    }

    pub fn total(&self) -> usize {
        self.top_rated_movies.len()
            + self.top_rated_series.len()
            + self.award_winning_movies.len()
            + self.award_winning_series.len()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_ignores_case_and_padding() {
        let set: KnownTitleSet = ["The Godfather", "Parasite"].into_iter().collect();
        assert!(set.contains("  the godfather "));
        assert!(set.contains("PARASITE"));
        assert!(!set.contains("The Godfather Part II"));
    }

    #[test]
    fn blank_names_are_ignored() {
        let set: KnownTitleSet = ["", "   ", "Heat"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(!set.contains(""));
    }

    #[test]
    fn lookup_names_skips_titles_listed_twice() {
        let known = KnownTitles {
            top_rated_movies: ["Heat", "Alien"].into_iter().collect(),
            award_winning_movies: ["heat", "Parasite"].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(
            known.lookup_names(MediaKind::Movie),
            vec!["Alien", "Heat", "Parasite"]
        );
        assert!(known.lookup_names(MediaKind::Series).is_empty());
        assert_eq!(known.total(), 4);
    }
}
