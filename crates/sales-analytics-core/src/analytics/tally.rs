use std::cmp::Ordering;
use std::collections::HashMap;

/// One grouping key with its accumulator and the position at which the key
/// was first encountered in the source data.
#[derive(Debug, Clone)]
pub(crate) struct Group<T> {
    pub(crate) key: String,
    pub(crate) first_seen: usize,
    pub(crate) tally: T,
}

#[derive(Debug)]
pub(crate) struct Tallies<T> {
    index_by_key: HashMap<String, usize>,
    groups: Vec<Group<T>>,
}

impl<T: Default> Tallies<T> {
    pub(crate) fn new() -> Self {
        Self {
            index_by_key: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: &str) -> &mut T {
        let index = match self.index_by_key.get(key) {
            Some(existing) => *existing,
            None => {
                let first_seen = self.groups.len();
                self.index_by_key.insert(key.to_string(), first_seen);
                self.groups.push(Group {
                    key: key.to_string(),
                    first_seen,
                    tally: T::default(),
                });
                first_seen
            }
        };
        &mut self.groups[index].tally
    }

    /// Orders groups by `compare`, breaking ties by first-seen position.
    pub(crate) fn into_ranked_by<F>(self, compare: F) -> Vec<Group<T>>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut groups = self.groups;
        groups.sort_by(|left, right| {
            compare(&left.tally, &right.tally).then_with(|| left.first_seen.cmp(&right.first_seen))
        });
        groups
    }
}
