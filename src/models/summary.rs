//! Per-category totals

use std::collections::HashMap;

/// Running sums keyed by category, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category's total
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    /// Total for a category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&i| self.entries[i].1)
    }

    /// Iterate (category, total) in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, t)| (c.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, t)| t).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_first_occurrence_order() {
        let mut totals = CategoryTotals::new();
        totals.add("Rent", 500.0);
        totals.add("Food", 10.0);
        totals.add("Rent", 25.0);
        totals.add("Bus", 2.5);

        let order: Vec<_> = totals.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Rent", "Food", "Bus"]);
        assert_eq!(totals.get("Rent"), Some(525.0));
        assert_eq!(totals.len(), 3);
        assert_eq!(totals.grand_total(), 537.5);
    }

    #[test]
    fn test_empty() {
        let totals = CategoryTotals::new();
        assert!(totals.is_empty());
        assert_eq!(totals.get("Food"), None);
        assert_eq!(totals.grand_total(), 0.0);
    }
}
