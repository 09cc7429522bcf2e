//! Categorical grouping of bodies for selection menus.
//!
//! Buckets live bodies by [`BodyCategory`] in a fixed display order so
//! pickers can show planets, near-Earth objects, and the rest under
//! separate headings instead of one flat list.

use bevy::prelude::Entity;

use crate::body::CelestialBody;
use crate::types::BodyCategory;

/// Display order for category sections.
pub const CATEGORY_ORDER: [BodyCategory; 5] = [
    BodyCategory::Sun,
    BodyCategory::Planet,
    BodyCategory::NearEarthObject,
    BodyCategory::Custom,
    BodyCategory::Artificial,
];

/// One selectable entry within a category section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry {
    pub entity: Entity,
    pub name: String,
}

/// Buckets bodies by category, in [`CATEGORY_ORDER`], preserving the
/// input order within each bucket. Empty categories are omitted.
pub fn group_by_category<'a>(
    bodies: impl IntoIterator<Item = (Entity, &'a CelestialBody)>,
) -> Vec<(BodyCategory, Vec<GroupEntry>)> {
    let mut buckets: Vec<(BodyCategory, Vec<GroupEntry>)> = CATEGORY_ORDER
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();

    for (entity, body) in bodies {
        if let Some((_, entries)) = buckets
            .iter_mut()
            .find(|(category, _)| *category == body.category)
        {
            entries.push(GroupEntry {
                entity,
                name: body.name.clone(),
            });
        }
    }

    buckets.retain(|(_, entries)| !entries.is_empty());
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{planets, sun};
    use bevy::prelude::World;

    fn spawn_all(world: &mut World) -> Vec<(Entity, CelestialBody)> {
        let mut records = vec![sun()];
        records.extend(planets());
        records
            .into_iter()
            .map(|record| {
                let entity = world.spawn_empty().id();
                (entity, CelestialBody::from_record(&record))
            })
            .collect()
    }

    #[test]
    fn test_groups_follow_category_order() {
        let mut world = World::new();
        let bodies = spawn_all(&mut world);
        let groups = group_by_category(bodies.iter().map(|(entity, body)| (*entity, body)));

        let categories: Vec<BodyCategory> = groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            categories,
            vec![BodyCategory::Sun, BodyCategory::Planet],
            "empty categories must be omitted, the rest ordered"
        );
    }

    #[test]
    fn test_groups_preserve_input_order_within_a_bucket() {
        let mut world = World::new();
        let bodies = spawn_all(&mut world);
        let groups = group_by_category(bodies.iter().map(|(entity, body)| (*entity, body)));

        let (_, planet_entries) = groups
            .iter()
            .find(|(category, _)| *category == BodyCategory::Planet)
            .unwrap();
        let names: Vec<&str> = planet_entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names[..3], ["Mercury", "Venus", "Earth"]);
        assert_eq!(planet_entries.len(), 8);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let groups = group_by_category(std::iter::empty());
        assert!(groups.is_empty());
    }
}
