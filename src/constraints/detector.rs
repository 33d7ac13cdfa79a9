//! Exhaustive conflict scan over a timetable.
//!
//! # Complexity
//! O(b² × d × s) for b batches, d days, s slots.

use crate::constraints::is_lab_room;
use crate::models::{Conflict, Timetable};

/// Reports every faculty and non-lab room collision between batch pairs.
///
/// Each unordered batch pair colliding at a coordinate yields one entry per
/// kind; a pair sharing both faculty and room yields two. Emission order
/// is batch index ascending, then day order, then slot order, then the
/// partner batch ascending. The scan is pure, so repeated calls return
/// identical lists.
pub fn detect_conflicts(timetable: &Timetable) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let batches = &timetable.batches;

    for (i, batch) in batches.iter().enumerate() {
        for coord in timetable.coords() {
            let Some(class) = batch.get(coord) else {
                continue;
            };
            let day = timetable.days[coord.day];
            let slot = timetable.time_slots[coord.slot];

            for (j, other_batch) in batches.iter().enumerate().skip(i + 1) {
                let Some(other) = other_batch.get(coord) else {
                    continue;
                };
                if other.faculty == class.faculty {
                    conflicts.push(Conflict::faculty(day, slot, coord, (i, j), &class.faculty));
                }
                if other.room == class.room && !is_lab_room(&class.room) {
                    conflicts.push(Conflict::room(day, slot, coord, (i, j), &class.room));
                }
            }
        }
    }

    conflicts
}
