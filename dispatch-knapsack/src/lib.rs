//! Exact 0/1 knapsack equipment planner.
//!
//! This crate provides [`KnapsackPlanner`], the default implementation of the
//! [`LoadoutPlanner`] trait. Each catalogued item is either carried whole or
//! left behind; the planner maximises total importance without exceeding the
//! carry capacity, using the classic dynamic programme over
//! `(items considered, capacity used)`.
//!
//! Time and memory are both `O(n · C)`, where `C` is the capacity clamped to
//! the combined weight of all candidate items.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use dispatch_core::{EquipmentItem, Loadout, LoadoutPlanner};
use log::debug;

/// `LoadoutPlanner` that solves the 0/1 knapsack problem exactly.
///
/// # Examples
/// ```
/// use dispatch_core::{EquipmentItem, LoadoutPlanner};
/// use dispatch_knapsack::KnapsackPlanner;
///
/// let items = [
///     EquipmentItem::new("taser", 2, 0),
///     EquipmentItem::new("fire extinguisher", 5, 6),
///     EquipmentItem::new("fire axe", 8, 5),
/// ];
/// let loadout = KnapsackPlanner.plan(&items, 15);
/// assert_eq!(loadout.total_importance(), 11);
/// assert_eq!(loadout.total_weight(), 13);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackPlanner;

impl LoadoutPlanner for KnapsackPlanner {
    fn plan(&self, items: &[EquipmentItem], capacity: u32) -> Loadout {
        solve(items, capacity)
    }
}

/// Choose the subset of `items` with maximum total importance whose total
/// weight does not exceed `capacity`.
///
/// Chosen items keep their input order. Items heavier than `capacity` are
/// never selected, and an empty input yields an empty loadout. When several
/// subsets reach the optimum the one found by walking the table backwards
/// from the last item is returned: an item is taken only when its row beats
/// the row above, so on an exact tie the lower-indexed item is kept.
#[must_use]
pub fn solve(items: &[EquipmentItem], capacity: u32) -> Loadout {
    if items.is_empty() {
        return Loadout::empty();
    }

    let combined: u64 = items.iter().map(|item| u64::from(item.weight())).sum();
    let width = usize::try_from(combined.min(u64::from(capacity))).unwrap_or(usize::MAX);
    let columns = width.saturating_add(1);

    let rows = items.iter().fold(vec![vec![0_u64; columns]], |mut rows, item| {
        let next = rows.last().map(|above| next_row(above, item)).unwrap_or_default();
        rows.push(next);
        rows
    });

    let mut remaining = width;
    let mut chosen: Vec<EquipmentItem> = Vec::new();
    for (item, pair) in items.iter().zip(rows.windows(2)).rev() {
        let [above, current] = pair else {
            continue;
        };
        if current.get(remaining) != above.get(remaining) {
            chosen.push(item.clone());
            remaining = remaining.saturating_sub(item_weight(item));
        }
    }
    chosen.reverse();

    let loadout = Loadout::from_items(chosen);
    debug!(
        "knapsack chose {} of {} items: weight {}/{capacity}, importance {}",
        loadout.items().len(),
        items.len(),
        loadout.total_weight(),
        loadout.total_importance()
    );
    loadout
}

fn item_weight(item: &EquipmentItem) -> usize {
    usize::try_from(item.weight()).unwrap_or(usize::MAX)
}

/// Extend the table by one item: `best[w] = max(above[w], above[w - weight] + importance)`.
fn next_row(above: &[u64], item: &EquipmentItem) -> Vec<u64> {
    let weight = item_weight(item);
    let importance = u64::from(item.importance());
    above
        .iter()
        .enumerate()
        .map(|(budget, &without)| {
            budget
                .checked_sub(weight)
                .and_then(|rest| above.get(rest))
                .map_or(without, |&with| without.max(with.saturating_add(importance)))
        })
        .collect()
}
