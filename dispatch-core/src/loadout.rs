//! Equipment loadouts and the planner boundary that chooses them.
//!
//! The [`LoadoutPlanner`] trait abstracts the optimiser that picks which
//! catalogued items an officer carries. Planners are given the candidate
//! items and a carry capacity and return a [`Loadout`].

use crate::EquipmentItem;

/// The equipment chosen for a single dispatch.
///
/// # Examples
/// ```
/// use dispatch_core::{EquipmentItem, Loadout};
///
/// let loadout = Loadout::from_items(vec![
///     EquipmentItem::new("fire extinguisher", 5, 6),
///     EquipmentItem::new("fire axe", 8, 5),
/// ]);
/// assert_eq!(loadout.total_weight(), 13);
/// assert_eq!(loadout.total_importance(), 11);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    items: Vec<EquipmentItem>,
    total_weight: u64,
    total_importance: u64,
}

impl Loadout {
    /// A loadout carrying nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_weight: 0,
            total_importance: 0,
        }
    }

    /// Build a loadout from chosen items, summing their weight and importance.
    #[must_use]
    pub fn from_items(items: Vec<EquipmentItem>) -> Self {
        let total_weight = items.iter().map(|item| u64::from(item.weight())).sum();
        let total_importance = items.iter().map(|item| u64::from(item.importance())).sum();
        Self {
            items,
            total_weight,
            total_importance,
        }
    }

    /// Chosen items.
    #[must_use]
    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    /// Sum of item weights.
    #[must_use]
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Sum of item importances.
    #[must_use]
    pub const fn total_importance(&self) -> u64 {
        self.total_importance
    }

    /// Report whether nothing was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the loadout and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<EquipmentItem> {
        self.items
    }
}

/// Choose the equipment an officer carries.
///
/// Implementations must never return a loadout whose total weight exceeds
/// `capacity`, and must be deterministic for identical inputs. Planners must
/// be `Send + Sync` so engines can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::{EquipmentItem, Loadout, LoadoutPlanner};
///
/// /// Takes items in order while they fit.
/// struct FirstFit;
///
/// impl LoadoutPlanner for FirstFit {
///     fn plan(&self, items: &[EquipmentItem], capacity: u32) -> Loadout {
///         let mut used = 0_u32;
///         let chosen = items
///             .iter()
///             .filter(|item| {
///                 let fits = used.saturating_add(item.weight()) <= capacity;
///                 if fits {
///                     used = used.saturating_add(item.weight());
///                 }
///                 fits
///             })
///             .cloned()
///             .collect();
///         Loadout::from_items(chosen)
///     }
/// }
///
/// let items = [EquipmentItem::new("radio", 1, 2), EquipmentItem::new("stretcher", 14, 7)];
/// assert_eq!(FirstFit.plan(&items, 10).items().len(), 1);
/// ```
pub trait LoadoutPlanner: Send + Sync {
    /// Select a subset of `items` whose total weight fits within `capacity`.
    fn plan(&self, items: &[EquipmentItem], capacity: u32) -> Loadout;
}
