//! Ranking and rendering of the final language breakdown.

use crate::stats::LanguagePercentages;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLanguage {
    pub rank: usize,
    pub language: String,
    pub percentage: f64,
}

/// Highest share first, at most `show_num` entries, ranks starting at 1.
///
/// Equal percentages are ordered by language name.
pub fn rank(percentages: &LanguagePercentages, show_num: usize) -> Vec<RankedLanguage> {
    let mut entries: Vec<(&String, f64)> = percentages.iter().map(|(l, &p)| (l, p)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    entries
        .into_iter()
        .take(show_num)
        .enumerate()
        .map(|(i, (language, percentage))| RankedLanguage {
            rank: i + 1,
            language: language.clone(),
            percentage,
        })
        .collect()
}

/// `<rank>. <language> <percentage>%`, one line per entry.
pub fn render_text(ranked: &[RankedLanguage]) -> String {
    ranked
        .iter()
        .map(|r| format!("{}. {} {}%\n", r.rank, r.language, r.percentage))
        .collect()
}

pub fn render_json(ranked: &[RankedLanguage]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pct(entries: &[(&str, f64)]) -> LanguagePercentages {
        entries.iter().map(|(l, p)| (l.to_string(), *p)).collect()
    }

    fn names(ranked: &[RankedLanguage]) -> Vec<&str> {
        ranked.iter().map(|r| r.language.as_str()).collect()
    }

    #[test]
    fn sorts_descending_by_percentage() {
        let ranked = rank(&pct(&[("C", 20.0), ("A", 50.0), ("B", 30.0)]), 10);

        assert_eq!(names(&ranked), vec!["A", "B", "C"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn top_language_is_rank_one() {
        let ranked = rank(&pct(&[("Rust", 90.0), ("Shell", 10.0)]), 1);

        assert_eq!(
            ranked,
            vec![RankedLanguage {
                rank: 1,
                language: "Rust".into(),
                percentage: 90.0
            }]
        );
    }

    #[test]
    fn show_num_is_clamped_to_available_languages() {
        let ranked = rank(&pct(&[("A", 60.0), ("B", 40.0)]), 10);
        assert_eq!(ranked.len(), 2);

        assert!(rank(&pct(&[("A", 100.0)]), 0).is_empty());
    }

    #[test]
    fn ties_are_broken_by_name() {
        let ranked = rank(&pct(&[("Zig", 25.0), ("Ada", 25.0), ("Go", 50.0)]), 10);
        assert_eq!(names(&ranked), vec!["Go", "Ada", "Zig"]);
    }

    #[test]
    fn text_uses_shortest_decimal_form() {
        let ranked = rank(&pct(&[("TypeScript", 83.33), ("JavaScript", 16.67)]), 10);
        assert_eq!(
            render_text(&ranked),
            "1. TypeScript 83.33%\n2. JavaScript 16.67%\n"
        );

        let whole = rank(&pct(&[("Go", 50.0), ("Rust", 50.0)]), 10);
        assert_eq!(render_text(&whole), "1. Go 50%\n2. Rust 50%\n");
    }

    #[test]
    fn json_lists_rank_language_and_percentage() {
        let ranked = rank(&pct(&[("Rust", 75.5), ("C", 24.5)]), 10);
        let value: serde_json::Value = serde_json::from_str(&render_json(&ranked).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"rank": 1, "language": "Rust", "percentage": 75.5},
                {"rank": 2, "language": "C", "percentage": 24.5}
            ])
        );
    }
}
