//! The four benchmark cases

use crate::candidate::{Candidate, Operation};
use crate::data::Dataset;
use crate::error::Result;

/// Which dataset a case walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The single large document
    Large,
    /// Every document of the line file, one call each
    Small,
}

/// A fixed (operation, dataset) pairing
#[derive(Debug, Clone, Copy)]
pub struct BenchCase {
    pub label: &'static str,
    pub operation: Operation,
    pub shape: Shape,
}

/// Decode cases first, then encode cases
pub const CASES: [BenchCase; 4] = [
    BenchCase {
        label: "loads (large obj)",
        operation: Operation::Decode,
        shape: Shape::Large,
    },
    BenchCase {
        label: "loads (small objs)",
        operation: Operation::Decode,
        shape: Shape::Small,
    },
    BenchCase {
        label: "dumps (large obj)",
        operation: Operation::Encode,
        shape: Shape::Large,
    },
    BenchCase {
        label: "dumps (small objs)",
        operation: Operation::Encode,
        shape: Shape::Small,
    },
];

impl BenchCase {
    pub fn applies_to(&self, candidate: &Candidate) -> bool {
        candidate.supports(self.operation)
    }

    /// One pass of the case over its dataset
    pub fn run(&self, candidate: &mut Candidate, data: &Dataset) -> Result<()> {
        match (self.operation, self.shape) {
            (Operation::Decode, Shape::Large) => candidate.decode(&data.large_raw),
            (Operation::Decode, Shape::Small) => {
                for line in &data.small_raw {
                    candidate.decode(line)?;
                }
                Ok(())
            }
            (Operation::Encode, Shape::Large) => candidate.encode(&data.large).map(|_| ()),
            (Operation::Encode, Shape::Small) => {
                for value in &data.small {
                    candidate.encode(value)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Codec;
    use crate::config::EncodeStyle;

    fn dataset() -> Dataset {
        Dataset::from_parts(r#"{"a": 1}"#.to_string(), "{\"a\":1}\n{\"b\":2}\n").unwrap()
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, case) in CASES.iter().enumerate() {
            assert!(CASES[i + 1..].iter().all(|other| other.label != case.label));
        }
    }

    #[test]
    fn test_every_case_runs() {
        let data = dataset();
        let mut candidate = Candidate::new("serde_json", "1", Codec::SerdeJson {
            style: EncodeStyle::Compact,
        });
        for case in &CASES {
            assert!(case.applies_to(&candidate));
            case.run(&mut candidate, &data).unwrap();
        }
    }

    #[test]
    fn test_encode_only_candidate() {
        let canonical = Candidate::new("canonical", "1", Codec::Canonical);
        let applicable: Vec<&str> = CASES
            .iter()
            .filter(|case| case.applies_to(&canonical))
            .map(|case| case.label)
            .collect();
        assert_eq!(applicable, vec!["dumps (large obj)", "dumps (small objs)"]);
    }

    #[test]
    fn test_bad_line_fails_the_case() {
        let mut data = dataset();
        data.small_raw.push("{\"c\":".to_string());
        let mut candidate = Candidate::new("serde_json", "1", Codec::SerdeJson {
            style: EncodeStyle::Compact,
        });
        assert!(CASES[1].run(&mut candidate, &data).is_err());
    }
}
