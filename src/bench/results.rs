//! Result table
//! case label -> candidate display name -> seconds per iteration, both in insertion order

use std::fmt;

const NAME_WIDTH: usize = 25;
const COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Default)]
struct CaseColumn {
    label: String,
    entries: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    columns: Vec<CaseColumn>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the per-iteration time of `candidate` on case `label`
    pub fn record(&mut self, label: &str, candidate: &str, seconds: f64) {
        let idx = match self.columns.iter().position(|c| c.label == label) {
            Some(idx) => idx,
            None => {
                self.columns.push(CaseColumn {
                    label: label.to_string(),
                    entries: Vec::new(),
                });
                self.columns.len() - 1
            }
        };

        let entries = &mut self.columns[idx].entries;
        match entries.iter_mut().find(|(name, _)| name == candidate) {
            Some(entry) => entry.1 = seconds,
            None => entries.push((candidate.to_string(), seconds)),
        }
    }

    pub fn get(&self, label: &str, candidate: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|c| c.label == label)?
            .entries
            .iter()
            .find(|(name, _)| name == candidate)
            .map(|(_, seconds)| *seconds)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Candidate names in first-seen order across all columns
    pub fn candidates(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for column in &self.columns {
            for (name, _) in &column.entries {
                if !seen.contains(&name.as_str()) {
                    seen.push(name);
                }
            }
        }
        seen
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();

        write!(f, "{:width$}", "", width = NAME_WIDTH)?;
        for label in &labels {
            write!(f, " {:>width$}", label, width = COLUMN_WIDTH)?;
        }
        writeln!(f)?;

        for candidate in self.candidates() {
            write!(f, "{:<width$}", candidate, width = NAME_WIDTH)?;
            for label in &labels {
                let seconds = self.get(label, candidate).unwrap_or(0.0);
                write!(f, " {:>width$.6}", seconds, width = COLUMN_WIDTH)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut table = ResultTable::new();
        table.record("dumps", "canonical 1", 0.5);
        table.record("loads", "json 1", 0.1);
        table.record("dumps", "json 1", 0.2);

        assert_eq!(table.labels(), vec!["dumps", "loads"]);
        assert_eq!(table.candidates(), vec!["canonical 1", "json 1"]);
        assert_eq!(table.get("loads", "canonical 1"), None);
    }

    #[test]
    fn test_record_overwrites() {
        let mut table = ResultTable::new();
        table.record("loads", "json 1", 0.1);
        table.record("loads", "json 1", 0.3);
        assert_eq!(table.get("loads", "json 1"), Some(0.3));
        assert_eq!(table.candidates().len(), 1);
    }

    #[test]
    fn test_render() {
        let mut table = ResultTable::new();
        table.record("loads (large obj)", "serde_json 1.0", 0.25);
        table.record("dumps (large obj)", "serde_json 1.0", 0.125);
        table.record("dumps (large obj)", "canonical 1.0", 1.5);

        let expected = format!(
            "{}\n{}\n{}\n",
            format!(
                "{} {:>20} {:>20}",
                " ".repeat(25),
                "loads (large obj)",
                "dumps (large obj)"
            ),
            format!("{:<25} {:>20} {:>20}", "serde_json 1.0", "0.250000", "0.125000"),
            format!("{:<25} {:>20} {:>20}", "canonical 1.0", "0.000000", "1.500000"),
        );
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ResultTable::new().to_string(), format!("{}\n", " ".repeat(25)));
    }
}
