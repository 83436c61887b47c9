use std::cmp::Ordering;
use std::ops::Index;
use crate::core::types::Occurrence;

/// Finds where an occurrence of `frequency` goes in `prefix`, which is sorted
/// by non-increasing frequency.
///
/// Returns the target index together with every midpoint probed, in probing
/// order. On an equal frequency the search stops at the midpoint it landed on,
/// so placement inside a run of ties depends on the search path.
pub fn insertion_point(prefix: &[Occurrence], frequency: u32) -> (usize, Vec<usize>) {
    let mut midpoints = Vec::new();
    if prefix.is_empty() {
        return (0, midpoints);
    }

    let mut low: isize = 0;
    let mut high: isize = prefix.len() as isize - 1;
    let mut target = 0usize;

    while low <= high {
        let mid = (low + high) / 2;
        midpoints.push(mid as usize);
        target = mid as usize;

        match frequency.cmp(&prefix[mid as usize].frequency) {
            Ordering::Greater => high = mid - 1,
            Ordering::Less => {
                low = mid + 1;
                // Last step of the search: the slot right after mid
                if high <= mid {
                    target = mid as usize + 1;
                }
            }
            Ordering::Equal => break,
        }
    }

    (target, midpoints)
}

/// Occurrences of one keyword, kept in non-increasing frequency order.
/// Holds at most one occurrence per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceList {
    occurrences: Vec<Occurrence>,
}

impl OccurrenceList {
    pub fn new() -> Self {
        OccurrenceList {
            occurrences: Vec::new(),
        }
    }

    pub fn single(occurrence: Occurrence) -> Self {
        OccurrenceList {
            occurrences: vec![occurrence],
        }
    }

    /// Append `occurrence` and move it into its ranked position.
    /// Returns the midpoints probed by the binary search.
    pub fn insert(&mut self, occurrence: Occurrence) -> Vec<usize> {
        self.occurrences.push(occurrence);
        self.insert_last_occurrence()
    }

    /// Moves the last element into place. Everything before it must already be
    /// sorted. A list of one element needs no probing.
    pub fn insert_last_occurrence(&mut self) -> Vec<usize> {
        if self.occurrences.len() <= 1 {
            return Vec::new();
        }

        let last = match self.occurrences.pop() {
            Some(occurrence) => occurrence,
            None => return Vec::new(),
        };
        let (target, midpoints) = insertion_point(&self.occurrences, last.frequency);
        self.occurrences.insert(target, last);

        midpoints
    }

    pub fn is_sorted(&self) -> bool {
        self.occurrences
            .windows(2)
            .all(|pair| pair[0].frequency >= pair[1].frequency)
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Occurrence> {
        self.occurrences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.occurrences.iter()
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.occurrences.iter().map(|occ| occ.document.as_str())
    }
}

impl Index<usize> for OccurrenceList {
    type Output = Occurrence;

    fn index(&self, index: usize) -> &Occurrence {
        &self.occurrences[index]
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.iter()
    }
}
