//! Recording performed care.

use uuid::Uuid;

use crate::date::Timestamp;
use crate::plant::{CareAction, CareEvent, Plant};

/// Record `action` on `plant`, returning the new event and the updated plant.
///
/// Water, fertilize and repot overwrite the matching `last_*` timestamp.
/// Prune, mist and rotate have no cadence and leave the plant unchanged.
/// The input plant is not modified; callers store both results together.
pub fn record_event(
    plant: &Plant,
    action: CareAction,
    performed_at: Timestamp,
    notes: impl Into<String>,
) -> (CareEvent, Plant) {
    let event = CareEvent {
        id: Uuid::new_v4().to_string(),
        plant_id: plant.id.clone(),
        action,
        performed_at,
        notes: notes.into(),
    };
    let mut updated = plant.clone();
    apply_event(&mut updated, &event);
    (event, updated)
}

/// Fold an already-recorded event into a plant's "last performed" fields.
pub fn apply_event(plant: &mut Plant, event: &CareEvent) {
    match event.action {
        CareAction::Water => plant.last_watered = Some(event.performed_at),
        CareAction::Fertilize => plant.last_fertilized = Some(event.performed_at),
        CareAction::Repot => plant.last_repotted = Some(event.performed_at),
        CareAction::Prune | CareAction::Mist | CareAction::Rotate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_timestamp;
    use chrono::Utc;

    fn plant() -> Plant {
        Plant::new("p1", "aloe-vera", parse_timestamp("2024-01-01").unwrap())
    }

    #[test]
    fn water_updates_last_watered_only() {
        let at = parse_timestamp("2024-06-01T09:00:00Z").unwrap();
        let (event, updated) = record_event(&plant(), CareAction::Water, at, "deep soak");
        assert_eq!(event.plant_id, "p1");
        assert_eq!(event.action, CareAction::Water);
        assert_eq!(event.notes, "deep soak");
        assert_eq!(updated.last_watered, Some(at));
        assert_eq!(updated.last_fertilized, None);
        assert_eq!(updated.last_repotted, None);
    }

    #[test]
    fn repot_and_fertilize_update_their_fields() {
        let at = parse_timestamp("2024-04-02").unwrap();
        let (_, fert) = record_event(&plant(), CareAction::Fertilize, at, "");
        assert_eq!(fert.last_fertilized, Some(at));
        let (_, repot) = record_event(&fert, CareAction::Repot, at, "");
        assert_eq!(repot.last_repotted, Some(at));
        assert_eq!(repot.last_fertilized, Some(at));
    }

    #[test]
    fn non_cadence_actions_only_log() {
        let original = plant();
        for action in [CareAction::Prune, CareAction::Mist, CareAction::Rotate] {
            let (event, updated) = record_event(&original, action, Utc::now().fixed_offset(), "");
            assert_eq!(event.action, action);
            assert_eq!(updated, original);
        }
    }
}
