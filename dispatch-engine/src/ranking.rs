//! Order zones by travel distance to an incident.

use dispatch_core::{DistanceError, DistanceProvider, ZoneId, ZoneLayout, checked_distance};
use log::warn;

/// A zone with a usable distance to the incident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedZone {
    /// The zone.
    pub zone: ZoneId,
    /// Distance from its anchor to the incident, in metres.
    pub distance_meters: f64,
}

/// A zone whose distance could not be determined.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedZone {
    /// The zone.
    pub zone: ZoneId,
    /// The lookup failure.
    pub error: DistanceError,
}

/// Zones split into those ranked by distance and those excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRanking {
    ranked: Vec<RankedZone>,
    excluded: Vec<ExcludedZone>,
}

impl ZoneRanking {
    /// Reachable zones, nearest first.
    #[must_use]
    pub fn ranked(&self) -> &[RankedZone] {
        &self.ranked
    }

    /// Zones left out because their lookup failed, in zone order.
    #[must_use]
    pub fn excluded(&self) -> &[ExcludedZone] {
        &self.excluded
    }

    /// Identifiers of the excluded zones.
    pub fn excluded_zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.excluded.iter().map(|excluded| excluded.zone)
    }
}

/// Rank every zone of `layout` by distance from its anchor to `location`.
///
/// Each anchor is queried once. Ties keep ascending zone order. A failed,
/// negative or non-finite lookup excludes the zone; it is never treated as
/// distance zero.
///
/// # Examples
/// ```
/// use dispatch_core::{DistanceTable, ZoneId, ZoneLayout};
/// use dispatch_engine::rank_zones;
///
/// # fn main() -> Result<(), dispatch_core::ZoneLayoutError> {
/// let layout = ZoneLayout::new(["A", "B", "C"])?;
/// let table = DistanceTable::new()
///     .with_route("A", "Quad", 500.0)
///     .with_route("B", "Quad", 100.0);
/// let ranking = rank_zones(&layout, &table, "Quad");
/// let order: Vec<ZoneId> = ranking.ranked().iter().map(|r| r.zone).collect();
/// assert_eq!(order, [ZoneId::new(1), ZoneId::new(0)]);
/// assert_eq!(ranking.excluded_zones().collect::<Vec<_>>(), [ZoneId::new(2)]);
/// # Ok(())
/// # }
/// ```
pub fn rank_zones<P>(layout: &ZoneLayout, provider: &P, location: &str) -> ZoneRanking
where
    P: DistanceProvider + ?Sized,
{
    let mut ranking = ZoneRanking::default();
    for zone in layout.iter() {
        match checked_distance(provider, zone.anchor(), location) {
            Ok(distance_meters) => ranking.ranked.push(RankedZone {
                zone: zone.id(),
                distance_meters,
            }),
            Err(error) => {
                warn!("excluding zone {} from dispatch to '{location}': {error}", zone.id());
                ranking.excluded.push(ExcludedZone {
                    zone: zone.id(),
                    error,
                });
            }
        }
    }
    ranking.ranked.sort_by(|a, b| {
        a.distance_meters
            .total_cmp(&b.distance_meters)
            .then_with(|| a.zone.cmp(&b.zone))
    });
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::DistanceTable;
    use dispatch_core::test_support::{FailingDistanceProvider, UniformDistanceProvider};
    use rstest::{fixture, rstest};

    #[fixture]
    fn layout() -> ZoneLayout {
        ZoneLayout::new(["A", "B", "C"]).expect("valid layout")
    }

    fn order(ranking: &ZoneRanking) -> Vec<u8> {
        ranking.ranked().iter().map(|r| r.zone.get()).collect()
    }

    #[rstest]
    fn nearest_zone_comes_first(layout: ZoneLayout) {
        let table = DistanceTable::new()
            .with_route("A", "Quad", 300.0)
            .with_route("B", "Quad", 100.0)
            .with_route("C", "Quad", 200.0);
        let ranking = rank_zones(&layout, &table, "Quad");
        assert_eq!(order(&ranking), [1, 2, 0]);
        assert!(ranking.excluded().is_empty());
    }

    #[rstest]
    fn equal_distances_keep_zone_order(layout: ZoneLayout) {
        let ranking = rank_zones(&layout, &UniformDistanceProvider(50.0), "Quad");
        assert_eq!(order(&ranking), [0, 1, 2]);
    }

    #[rstest]
    fn failures_exclude_zones_instead_of_ranking_them_first(layout: ZoneLayout) {
        let provider = FailingDistanceProvider::new(UniformDistanceProvider(50.0)).failing_for("A");
        let ranking = rank_zones(&layout, &provider, "Quad");
        assert_eq!(order(&ranking), [1, 2]);
        assert_eq!(ranking.excluded_zones().collect::<Vec<_>>(), [ZoneId::new(0)]);
    }

    #[rstest]
    #[case(-5.0)]
    #[case(f64::NAN)]
    fn unusable_distances_exclude_zones(layout: ZoneLayout, #[case] meters: f64) {
        let ranking = rank_zones(&layout, &UniformDistanceProvider(meters), "Quad");
        assert!(ranking.ranked().is_empty());
        assert_eq!(ranking.excluded().len(), 3);
    }
}
