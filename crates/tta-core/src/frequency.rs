use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

/// Occurrence counts that remember when each item first appeared
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    tallies: HashMap<String, Tally>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        if let Some(tally) = self.tallies.get_mut(item) {
            tally.count += 1;
            return;
        }

        let first_seen = self.tallies.len();
        self.tallies.insert(
            item.to_string(),
            Tally {
                count: 1,
                first_seen,
            },
        );
    }

    /// Count for `item`, 0 if never seen
    pub fn get(&self, item: &str) -> usize {
        self.tallies.get(item).map_or(0, |t| t.count)
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.tallies.values().map(|t| t.count).sum()
    }

    /// Descending by count; equal counts keep first-seen order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut items: Vec<(&str, Tally)> = self
            .tallies
            .iter()
            .map(|(item, tally)| (item.as_str(), *tally))
            .collect();

        items.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        items
            .into_iter()
            .map(|(item, tally)| (item, tally.count))
            .collect()
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for item in iter {
            self.add(item.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
