//! Point admissibility check for a single class placement.

use crate::models::{ClassAssignment, Coord, Timetable};

/// A candidate placement: `class` for `batch` at `coord`.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Batch receiving the class.
    pub batch: usize,
    /// Target coordinate.
    pub coord: Coord,
    /// Class to place.
    pub class: &'a ClassAssignment,
}

impl<'a> Placement<'a> {
    /// Creates a placement.
    pub fn new(batch: usize, coord: Coord, class: &'a ClassAssignment) -> Self {
        Self {
            batch,
            coord,
            class,
        }
    }
}

/// Whether a room name denotes a shareable lab (contains "lab",
/// case-insensitive).
pub fn is_lab_room(room: &str) -> bool {
    room.to_ascii_lowercase().contains("lab")
}

/// Whether a placement is admissible against the current timetable.
///
/// For every other batch, the class at the same coordinate (if any) must
/// not share the candidate's faculty, and must not share its room unless
/// the room is a lab. The candidate's own batch is not inspected.
pub fn is_valid_assignment(timetable: &Timetable, placement: &Placement<'_>) -> bool {
    let candidate = placement.class;
    let shared_room_ok = is_lab_room(&candidate.room);

    timetable
        .batches
        .iter()
        .filter(|b| b.id != placement.batch)
        .filter_map(|b| b.get(placement.coord))
        .all(|other| {
            if other.faculty == candidate.faculty {
                return false;
            }
            !(other.room == candidate.room && !shared_room_ok && !is_lab_room(&other.room))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_time_slots, Weekday};

    fn two_batch_timetable() -> Timetable {
        let mut tt = Timetable::empty(
            vec![Weekday::Monday],
            build_time_slots("09:00", "11:00", 6),
            2,
        );
        tt.batches[0].set(
            Coord::new(0, 0),
            ClassAssignment::new("Math", "Dr. X", "Room 101"),
        );
        tt
    }

    #[test]
    fn test_lab_detection() {
        assert!(is_lab_room("Chemistry Lab"));
        assert!(is_lab_room("LAB-2"));
        assert!(!is_lab_room("Room 101"));
    }

    #[test]
    fn test_faculty_clash_rejected() {
        let tt = two_batch_timetable();
        let class = ClassAssignment::new("Physics", "Dr. X", "Room 102");
        assert!(!is_valid_assignment(&tt, &Placement::new(1, Coord::new(0, 0), &class)));
        // Different slot is fine.
        assert!(is_valid_assignment(&tt, &Placement::new(1, Coord::new(0, 1), &class)));
    }

    #[test]
    fn test_room_clash_rejected() {
        let tt = two_batch_timetable();
        let class = ClassAssignment::new("Physics", "Dr. Y", "Room 101");
        assert!(!is_valid_assignment(&tt, &Placement::new(1, Coord::new(0, 0), &class)));
    }

    #[test]
    fn test_lab_room_shareable() {
        let mut tt = two_batch_timetable();
        tt.batches[0].set(
            Coord::new(0, 1),
            ClassAssignment::new("Chemistry", "Dr. X", "Chem Lab"),
        );
        let class = ClassAssignment::new("Biology", "Dr. Y", "Chem Lab");
        assert!(is_valid_assignment(&tt, &Placement::new(1, Coord::new(0, 1), &class)));
    }

    #[test]
    fn test_own_batch_not_inspected() {
        let tt = two_batch_timetable();
        let class = ClassAssignment::new("Physics", "Dr. X", "Room 101");
        assert!(is_valid_assignment(&tt, &Placement::new(0, Coord::new(0, 0), &class)));
    }

    #[test]
    fn test_accepted_placement_stays_accepted() {
        let mut tt = two_batch_timetable();
        let class = ClassAssignment::new("Physics", "Dr. Y", "Room 102");
        let placement = Placement::new(1, Coord::new(0, 0), &class);
        assert!(is_valid_assignment(&tt, &placement));
        tt.batches[1].set(Coord::new(0, 0), class.clone());
        assert!(is_valid_assignment(&tt, &Placement::new(1, Coord::new(0, 0), &class)));
    }
}
