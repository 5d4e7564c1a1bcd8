//! Occurrence counting for category labels

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by label, iterated in first-encounter order
#[derive(Debug, Clone)]
pub struct Tally<L> {
    entries: Vec<(L, usize)>,
    positions: HashMap<L, usize>,
}

impl<L: Eq + Hash + Clone> Tally<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Record one occurrence of `label`
    pub fn add(&mut self, label: L) {
        match self.positions.get(&label) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(label.clone(), self.entries.len());
                self.entries.push((label, 1));
            }
        }
    }

    /// Count for `label`, or `None` if it never occurred
    pub fn get(&self, label: &L) -> Option<usize> {
        self.positions
            .get(label)
            .map(|&position| self.entries[position].1)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Labels and counts in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.entries.iter().map(|(label, count)| (label, *count))
    }
}

impl<L: PartialEq> PartialEq for Tally<L> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<L: Eq + Hash + Clone> Default for Tally<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Eq + Hash + Clone> FromIterator<L> for Tally<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for label in iter {
            tally.add(label);
        }
        tally
    }
}

/// Count how often each label occurs
///
/// Any label type is accepted, so labels outside the standard categories are
/// counted too. Labels that never occur are absent rather than zero.
pub fn tally<I, L>(labels: I) -> Tally<L>
where
    I: IntoIterator<Item = L>,
    L: Eq + Hash + Clone,
{
    labels.into_iter().collect()
}
