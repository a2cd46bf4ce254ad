//! Equipment items and the static catalog keyed by emergency type.

use std::collections::BTreeMap;

/// A piece of equipment an officer may carry.
///
/// Weight and importance are unsigned, so both are non-negative by
/// construction.
///
/// # Examples
/// ```
/// use dispatch_core::EquipmentItem;
///
/// let item = EquipmentItem::new("fire extinguisher", 5, 6);
/// assert_eq!(item.name(), "fire extinguisher");
/// assert_eq!((item.weight(), item.importance()), (5, 6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentItem {
    name: String,
    weight: u32,
    importance: u32,
}

impl EquipmentItem {
    /// Construct an item.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: u32, importance: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            importance,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Carry weight.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Utility of carrying the item to this kind of emergency.
    #[must_use]
    pub const fn importance(&self) -> u32 {
        self.importance
    }
}

/// Mapping from emergency type to the equipment relevant to it.
///
/// Emergency types are matched after trimming surrounding whitespace and
/// folding ASCII case, so `" Fire Alarm"` finds the `"fire alarm"` entry.
///
/// # Examples
/// ```
/// use dispatch_core::{EquipmentCatalog, EquipmentItem};
///
/// let catalog = EquipmentCatalog::new()
///     .with_entry("Flood", vec![EquipmentItem::new("sandbags", 10, 7)]);
/// assert_eq!(catalog.items_for("flood").map(<[_]>::len), Some(1));
/// assert!(catalog.items_for("earthquake").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentCatalog {
    entries: BTreeMap<String, Vec<EquipmentItem>>,
}

fn normalise_type(emergency_type: &str) -> String {
    emergency_type.trim().to_ascii_lowercase()
}

impl EquipmentCatalog {
    /// Construct an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the items listed for an emergency type.
    #[must_use]
    pub fn with_entry(mut self, emergency_type: &str, items: Vec<EquipmentItem>) -> Self {
        self.insert(emergency_type, items);
        self
    }

    /// Add or replace the items listed for an emergency type.
    pub fn insert(&mut self, emergency_type: &str, items: Vec<EquipmentItem>) {
        self.entries.insert(normalise_type(emergency_type), items);
    }

    /// Items for `emergency_type`, or `None` when the type is not catalogued.
    #[must_use]
    pub fn items_for(&self, emergency_type: &str) -> Option<&[EquipmentItem]> {
        self.entries
            .get(&normalise_type(emergency_type))
            .map(Vec::as_slice)
    }

    /// Iterate the catalogued emergency types in lexical order.
    pub fn emergency_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of catalogued emergency types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The campus catalog covering the emergency types the dispatcher
    /// recognises out of the box.
    #[must_use]
    pub fn campus() -> Self {
        let table: [(&str, &[(&str, u32, u32)]); 7] = [
            (
                "fire alarm",
                &[
                    ("taser", 2, 0),
                    ("fire extinguisher", 5, 6),
                    ("fire axe", 8, 5),
                    ("smoke hood", 2, 3),
                    ("flashlight", 1, 2),
                ],
            ),
            (
                "fighting",
                &[
                    ("taser", 2, 8),
                    ("baton", 3, 6),
                    ("handcuffs", 1, 7),
                    ("riot shield", 9, 4),
                    ("body camera", 1, 3),
                ],
            ),
            (
                "theft",
                &[
                    ("handcuffs", 1, 6),
                    ("flashlight", 1, 4),
                    ("body camera", 1, 5),
                    ("evidence kit", 4, 5),
                    ("taser", 2, 3),
                ],
            ),
            (
                "alcohol overdose",
                &[
                    ("first aid kit", 3, 7),
                    ("oxygen tank", 8, 6),
                    ("blanket", 2, 3),
                    ("breathalyzer", 1, 4),
                    ("radio", 1, 2),
                ],
            ),
            (
                "drug overdose",
                &[
                    ("naloxone kit", 1, 10),
                    ("first aid kit", 3, 6),
                    ("oxygen tank", 8, 5),
                    ("defibrillator", 6, 7),
                    ("gloves", 1, 2),
                ],
            ),
            (
                "acute non lethal injury",
                &[
                    ("first aid kit", 3, 8),
                    ("splint", 2, 5),
                    ("ice pack", 1, 3),
                    ("crutches", 6, 2),
                    ("wheelchair", 12, 4),
                ],
            ),
            (
                "potentially lethal injury",
                &[
                    ("defibrillator", 6, 9),
                    ("trauma kit", 5, 9),
                    ("oxygen tank", 8, 6),
                    ("tourniquet", 1, 8),
                    ("stretcher", 14, 7),
                ],
            ),
        ];

        table
            .into_iter()
            .fold(Self::new(), |catalog, (emergency_type, items)| {
                let entry = items
                    .iter()
                    .map(|&(name, weight, importance)| EquipmentItem::new(name, weight, importance))
                    .collect();
                catalog.with_entry(emergency_type, entry)
            })
    }
}
