//! Birth year → identity-document number range.
//!
//! National document numbers are issued roughly sequentially, so the birth
//! year narrows down where a person's number falls. The mapping is a
//! heuristic, not a derivation: late registrations, naturalization waves and
//! reissues push real numbers outside any clean bucket. Buckets therefore
//! overlap at their edges and are wider than the nominal decade blocks.

/// A closed interval of document numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub min: u64,
    pub max: u64,
}

impl IdRange {
    pub const fn contains(&self, n: u64) -> bool {
        n >= self.min && n <= self.max
    }

    /// How many numbers a walk at `step` visits.
    pub fn walk_len(&self, step: u64) -> u64 {
        let step = step.max(1);
        (self.max - self.min) / step + 1
    }
}

/// `(last birth year, min, max)`.
type Bucket = (u32, u64, u64);

/// Argentine DNI, sequential nationwide since 1968. The 60M block is skipped
/// (reserved for foreign residents' tax ids).
const ARGENTINA: &[Bucket] = &[
    (1949, 1_000_000, 4_999_999),
    (1959, 4_000_000, 9_999_999),
    (1969, 9_000_000, 19_999_999),
    (1979, 18_000_000, 29_999_999),
    (1984, 27_000_000, 34_999_999),
    (1989, 33_000_000, 39_999_999),
    (1994, 38_000_000, 45_999_999),
    (1999, 44_000_000, 51_999_999),
    (2004, 50_000_000, 57_999_999),
    (2009, 55_000_000, 59_999_999),
    (2015, 70_000_000, 74_999_999),
];

const ARGENTINA_LATEST: IdRange = IdRange {
    min: 73_000_000,
    max: 79_999_999,
};

/// Ordered year buckets plus the range for anyone born after the last one.
#[derive(Debug, Clone)]
pub struct RangeTable {
    buckets: Vec<Bucket>,
    latest: IdRange,
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::argentina()
    }
}

impl RangeTable {
    pub fn argentina() -> Self {
        Self {
            buckets: ARGENTINA.to_vec(),
            latest: ARGENTINA_LATEST,
        }
    }

    pub fn new(buckets: Vec<(u32, u64, u64)>, latest: IdRange) -> Self {
        Self { buckets, latest }
    }

    /// First bucket whose last year is at or after `birth_year`.
    pub fn estimate(&self, birth_year: u32) -> IdRange {
        self.buckets
            .iter()
            .find(|(last, _, _)| birth_year <= *last)
            .map(|&(_, min, max)| IdRange { min, max })
            .unwrap_or(self.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1940, 1_000_000, 4_999_999)]
    #[case(1949, 1_000_000, 4_999_999)]
    #[case(1950, 4_000_000, 9_999_999)]
    #[case(1990, 38_000_000, 45_999_999)]
    #[case(2012, 70_000_000, 74_999_999)]
    #[case(2020, 73_000_000, 79_999_999)]
    fn bucket_lookup(#[case] year: u32, #[case] min: u64, #[case] max: u64) {
        assert_eq!(RangeTable::argentina().estimate(year), IdRange { min, max });
    }

    #[test]
    fn neighbouring_buckets_overlap() {
        let table = RangeTable::argentina();
        for pair in ARGENTINA.windows(2) {
            let (early, late) = (pair[0], pair[1]);
            if late.1 < 60_000_000 {
                assert!(late.1 <= early.2, "{early:?} and {late:?} do not overlap");
            }
        }
        assert!(table.estimate(1994).contains(44_500_000));
        assert!(table.estimate(1995).contains(44_500_000));
    }

    #[test]
    fn walk_len() {
        let r = IdRange { min: 0, max: 9_999 };
        assert_eq!(r.walk_len(1_000), 10);
        assert_eq!(r.walk_len(0), 10_000);
    }
}
