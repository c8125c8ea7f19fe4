//! Buchführung, welche Punktbereiche bereits als Geometrie hochgeladen sind.

use std::ops::Range;

/// Sortierte, disjunkte und nicht aneinandergrenzende Punktbereiche.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct CoveredRanges {
    ranges: Vec<Range<usize>>,
}

impl CoveredRanges {
    /// Teilbereiche von `range`, die noch nicht abgedeckt sind.
    pub(super) fn missing(&self, range: Range<usize>) -> Vec<Range<usize>> {
        let mut gaps = Vec::new();
        let mut cursor = range.start;
        for covered in &self.ranges {
            if covered.end <= cursor {
                continue;
            }
            if covered.start >= range.end {
                break;
            }
            if covered.start > cursor {
                gaps.push(cursor..covered.start);
            }
            cursor = cursor.max(covered.end);
            if cursor >= range.end {
                break;
            }
        }
        if cursor < range.end {
            gaps.push(cursor..range.end);
        }
        gaps
    }

    /// Markiert `range` als abgedeckt und verschmilzt angrenzende Bereiche.
    pub(super) fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut merged = range;
        let mut result = Vec::with_capacity(self.ranges.len() + 1);
        let mut placed = false;
        for covered in self.ranges.drain(..) {
            if covered.end < merged.start {
                result.push(covered);
            } else if covered.start > merged.end {
                if !placed {
                    result.push(merged.clone());
                    placed = true;
                }
                result.push(covered);
            } else {
                merged = merged.start.min(covered.start)..merged.end.max(covered.end);
            }
        }
        if !placed {
            result.push(merged);
        }
        self.ranges = result;
    }

    /// Summe der abgedeckten Punkte.
    pub(super) fn covered_len(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::CoveredRanges;

    #[test]
    fn test_missing_on_empty_is_whole_range() {
        let covered = CoveredRanges::default();
        assert_eq!(covered.missing(2..8), vec![2..8]);
    }

    #[test]
    fn test_insert_merges_adjacent_and_overlapping() {
        let mut covered = CoveredRanges::default();
        covered.insert(0..4);
        covered.insert(8..10);
        covered.insert(4..6);
        assert_eq!(covered.ranges, vec![0..6, 8..10]);

        covered.insert(5..9);
        assert_eq!(covered.ranges, vec![0..10]);
        assert_eq!(covered.covered_len(), 10);
    }

    #[test]
    fn test_missing_reports_only_gaps() {
        let mut covered = CoveredRanges::default();
        covered.insert(2..4);
        covered.insert(6..8);

        assert_eq!(covered.missing(0..10), vec![0..2, 4..6, 8..10]);
        assert_eq!(covered.missing(2..4), Vec::<std::ops::Range<usize>>::new());
        assert_eq!(covered.missing(3..7), vec![4..6]);
    }
}
