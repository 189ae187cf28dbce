use crate::model::contact::Contact;
use crate::model::roster::Roster;
use std::num::NonZeroUsize;

/// Roster plus the keyword filter that defines the displayed list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    roster: Roster,
    keywords: Option<Vec<String>>,
}

impl CatalogState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            keywords: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Installs a new roster wholesale and resets the filter.
    pub fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.keywords = None;
    }

    /// Restricts the displayed list to names containing any keyword.
    pub fn set_filter(&mut self, keywords: Vec<String>) {
        self.keywords = Some(keywords);
    }

    pub fn clear_filter(&mut self) {
        self.keywords = None;
    }

    /// Roster positions of the displayed contacts, in roster order.
    pub fn visible_positions(&self) -> Vec<usize> {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, contact)| self.is_visible(contact))
            .map(|(position, _)| position)
            .collect()
    }

    /// Displayed contacts, in roster order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.roster
            .iter()
            .filter(|contact| self.is_visible(contact))
            .collect()
    }

    /// Maps a one-based displayed index to a roster position.
    pub fn resolve(&self, index: NonZeroUsize) -> Option<usize> {
        self.visible_positions().get(index.get() - 1).copied()
    }

    fn is_visible(&self, contact: &Contact) -> bool {
        let Some(keywords) = &self.keywords else {
            return true;
        };
        contact.name.as_str().split_whitespace().any(|word| {
            keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}
