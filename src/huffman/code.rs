use std::fmt::{self, Debug};

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCode<S> {
    pub symbol: S,
    pub weight: f64,
    pub code: String,
}

/// Snapshot of every symbol's code, used for diagnostics only.
/// Sorted by code length, then by code.
pub struct CodeTable<S> {
    entries: Vec<SymbolCode<S>>,
}

impl<S> CodeTable<S> {
    pub fn new(mut entries: Vec<SymbolCode<S>>) -> Self {
        entries.sort_by(|a, b| {
            a.code
                .len()
                .cmp(&b.code.len())
                .then_with(|| a.code.cmp(&b.code))
        });
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolCode<S>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Sum of weight times code length over all symbols.
    pub fn weighted_path_length(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.weight * e.code.len() as f64)
            .sum()
    }

    pub fn average_code_length(&self) -> f64 {
        let total_weight = self.total_weight();
        if total_weight == 0.0 {
            return 0.0;
        }
        self.weighted_path_length() / total_weight
    }

    /// Sum of 2^-length. Exactly 1.0 for a full binary tree.
    pub fn kraft_sum(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| 0.5_f64.powi(e.code.len() as i32))
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        // after sorting, a prefix always comes before the codes it prefixes,
        // but not necessarily right before them
        self.entries.iter().enumerate().all(|(index, shorter)| {
            self.entries[index + 1..]
                .iter()
                .all(|longer| !longer.code.starts_with(&shorter.code))
        })
    }
}

impl<S: Debug> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code_width = self
            .entries
            .iter()
            .map(|e| e.code.len())
            .max()
            .unwrap_or(0)
            .max("code".len());
        writeln!(f, "{:<8} {:<code_width$} weight", "symbol", "code")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<8} {:<code_width$} {}",
                format!("{:?}", entry.symbol),
                entry.code,
                entry.weight
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{CodeTable, SymbolCode};

    fn create_test_table(codes: &[(char, f64, &str)]) -> CodeTable<char> {
        CodeTable::new(
            codes
                .iter()
                .map(|&(symbol, weight, code)| SymbolCode {
                    symbol,
                    weight,
                    code: code.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_entries_are_sorted_by_length_then_code() {
        let table = create_test_table(&[
            ('D', 1.0, "111"),
            ('A', 1.0, "0"),
            ('C', 1.0, "110"),
            ('B', 1.0, "10"),
        ]);
        let symbols: Vec<char> = table.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_metrics_of_complete_code() {
        let table = create_test_table(&[
            ('A', 0.60, "0"),
            ('B', 0.25, "10"),
            ('C', 0.10, "110"),
            ('D', 0.05, "111"),
        ]);
        assert!((table.weighted_path_length() - 1.55).abs() < 1e-9);
        assert!((table.average_code_length() - 1.55).abs() < 1e-9);
        assert_eq!(table.kraft_sum(), 1.0);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_prefix_violation_is_detected() {
        let table = create_test_table(&[('A', 1.0, "0"), ('B', 1.0, "01"), ('C', 1.0, "1")]);
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_display_lists_every_symbol() {
        let table = create_test_table(&[('A', 3.0, "0"), ('B', 1.0, "1")]);
        let rendered = table.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("'A'"));
        assert!(rendered.contains("'B'"));
    }
}
