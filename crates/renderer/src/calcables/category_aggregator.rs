//! Groups raw entries into colored, size-ordered categories.

use std::collections::HashMap;

use ring_charts_shared::{Category, RawEntry, Rgb};

const CATEGORY_SATURATION: f32 = 0.9;
const CATEGORY_LIGHTNESS: f32 = 0.5;

/// Aggregate entries by exact label match.
///
/// Colors are handed out in first-seen group order, before sorting, so a
/// category keeps its color regardless of where its amount ranks. The
/// result is sorted by amount descending; the sort is stable, so equal
/// amounts keep first-seen order.
pub fn aggregate(entries: &[RawEntry]) -> Vec<Category> {
    let mut groups: Vec<(&str, f64)> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match group_index.get(entry.category.as_str()) {
            Some(&index) => groups[index].1 += entry.amount,
            None => {
                group_index.insert(entry.category.as_str(), groups.len());
                groups.push((entry.category.as_str(), entry.amount));
            }
        }
    }

    let count = groups.len();
    let mut categories: Vec<Category> = groups
        .into_iter()
        .enumerate()
        .map(|(index, (name, amount))| Category {
            name: name.to_string(),
            amount,
            color: category_color(index, count),
        })
        .collect();

    categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    log::trace!(
        "Aggregated {} entries into {} categories",
        entries.len(),
        categories.len()
    );
    categories
}

/// Evenly spread hue for group `index` out of `count`.
pub fn category_color(index: usize, count: usize) -> Rgb {
    let hue = if count == 0 {
        0.0
    } else {
        360.0 * index as f32 / count as f32
    };
    Rgb::from_hsl(hue, CATEGORY_SATURATION, CATEGORY_LIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[(f64, &str)]) -> Vec<RawEntry> {
        raw.iter()
            .map(|(amount, category)| RawEntry::new(*amount, *category))
            .collect()
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_groups_and_sums() {
        let categories = aggregate(&entries(&[
            (10.0, "Food"),
            (200.0, "Rent"),
            (15.5, "Food"),
            (4.0, "Taxi"),
        ]));

        assert_eq!(names(&categories), vec!["Rent", "Food", "Taxi"]);
        assert_eq!(categories[0].amount, 200.0);
        assert_eq!(categories[1].amount, 25.5);
        assert_eq!(categories[2].amount, 4.0);
    }

    #[test]
    fn test_labels_match_exactly() {
        let categories = aggregate(&entries(&[(1.0, "food"), (1.0, "Food"), (1.0, "Food ")]));
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let categories = aggregate(&entries(&[
            (50.0, "B"),
            (100.0, "A"),
            (50.0, "C"),
            (25.0, "D"),
            (25.0, "B"),
            (75.0, "C"),
            (50.0, "E"),
        ]));

        // B=75, A=100, C=125, D=25, E=50
        assert_eq!(names(&categories), vec!["C", "A", "B", "E", "D"]);

        let tied = aggregate(&entries(&[(5.0, "x"), (5.0, "y"), (5.0, "z")]));
        assert_eq!(names(&tied), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_color_follows_group_order_not_rank() {
        let categories = aggregate(&entries(&[(1.0, "small"), (3.0, "big"), (2.0, "mid")]));

        assert_eq!(names(&categories), vec!["big", "mid", "small"]);

        let color_of = |name: &str| {
            categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.color)
                .unwrap()
        };
        assert_eq!(color_of("small"), category_color(0, 3));
        assert_eq!(color_of("big"), category_color(1, 3));
        assert_eq!(color_of("mid"), category_color(2, 3));
        assert_eq!(color_of("small"), Rgb::new(242, 13, 13));
    }

    #[test]
    fn test_colors_are_deterministic() {
        let input = entries(&[(3.0, "a"), (1.0, "b"), (2.0, "c"), (9.0, "a")]);
        assert_eq!(aggregate(&input), aggregate(&input));
    }

    #[test]
    fn test_nan_amount_sorts_without_panicking() {
        let categories = aggregate(&entries(&[
            (1.0, "a"),
            (f64::NAN, "b"),
            (3.0, "c"),
            (f64::NAN, "d"),
            (2.0, "e"),
        ]));

        assert_eq!(categories.len(), 5);
        let finite: Vec<_> = categories
            .iter()
            .filter(|c| !c.amount.is_nan())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(finite, vec!["c", "e", "a"]);
    }

    #[test]
    fn test_zero_and_negative_amounts_are_plain_arithmetic() {
        let categories = aggregate(&entries(&[(0.0, "zero"), (-5.0, "neg"), (5.0, "neg")]));
        assert_eq!(categories.len(), 2);
        assert!(categories.iter().all(|c| c.amount == 0.0));
        assert_eq!(names(&categories), vec!["zero", "neg"]);
    }
}
