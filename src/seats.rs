//! Seat labels and the ordered roster a template lays out.

use crate::model::Crew;

/// How positional seat names are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatLabelStyle {
    /// `Bow`, `2` .. `7`, `Stroke`
    Standard,
    /// `BOW`, `2` .. `7`, `STK`
    Compact,
    /// `Bow`, `Two` .. `Seven`, `Stroke`
    Formal,
}

const EIGHT_STANDARD: [&str; 8] = ["Bow", "2", "3", "4", "5", "6", "7", "Stroke"];
const EIGHT_COMPACT: [&str; 8] = ["BOW", "2", "3", "4", "5", "6", "7", "STK"];
const EIGHT_FORMAL: [&str; 8] = ["Bow", "Two", "Three", "Four", "Five", "Six", "Seven", "Stroke"];
const FOUR_STANDARD: [&str; 4] = ["Bow", "2", "3", "Stroke"];
const FOUR_COMPACT: [&str; 4] = ["BOW", "2", "3", "STK"];
const FOUR_FORMAL: [&str; 4] = ["Bow", "Two", "Three", "Stroke"];

fn positional_table(style: SeatLabelStyle, seats: u32) -> &'static [&'static str] {
    match (seats, style) {
        (8, SeatLabelStyle::Standard) => &EIGHT_STANDARD,
        (8, SeatLabelStyle::Compact) => &EIGHT_COMPACT,
        (8, SeatLabelStyle::Formal) => &EIGHT_FORMAL,
        (4, SeatLabelStyle::Standard) => &FOUR_STANDARD,
        (4, SeatLabelStyle::Compact) => &FOUR_COMPACT,
        (4, SeatLabelStyle::Formal) => &FOUR_FORMAL,
        _ => &[],
    }
}

/// Label for seat `index` (0 = bow) in a boat of `seats`.
///
/// Indices past the positional table, including every index of a boat
/// without one, use the 1-based seat number.
pub fn seat_label(style: SeatLabelStyle, seats: u32, index: usize) -> String {
    positional_table(style, seats)
        .get(index)
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

/// Labels for `count` rowers in a boat of `seats`.
pub fn seat_labels(style: SeatLabelStyle, seats: u32, count: usize) -> Vec<String> {
    (0..count).map(|i| seat_label(style, seats, i)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Seat(usize),
    Cox,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub kind: RowKind,
    pub label: String,
    pub name: String,
}

impl RosterRow {
    /// `"{label}: {name}"`
    pub fn inline(&self) -> String {
        format!("{}: {}", self.label, self.name)
    }

    pub fn is_seat(&self) -> bool {
        matches!(self.kind, RowKind::Seat(_))
    }
}

/// The crew laid out for drawing: seats bow to stroke, then cox, then coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub seats: Vec<RosterRow>,
    pub cox: Option<RosterRow>,
    pub coach: Option<RosterRow>,
}

impl Roster {
    pub fn new(crew: &Crew, style: SeatLabelStyle) -> Self {
        let (cox_label, coach_label) = match style {
            SeatLabelStyle::Compact => ("COX", "COACH"),
            _ => ("Cox", "Coach"),
        };
        let seats = crew
            .crew_names
            .iter()
            .enumerate()
            .map(|(i, name)| RosterRow {
                kind: RowKind::Seat(i),
                label: seat_label(style, crew.boat_type.seats, i),
                name: name.trim().to_string(),
            })
            .collect();
        let role = |kind, label: &str, name: Option<&str>| {
            name.map(|name| RosterRow {
                kind,
                label: label.to_string(),
                name: name.to_string(),
            })
        };
        Self {
            seats,
            cox: role(RowKind::Cox, cox_label, crew.cox()),
            coach: role(RowKind::Coach, coach_label, crew.coach()),
        }
    }

    /// Cox then coach, whichever are present.
    pub fn extras(&self) -> impl Iterator<Item = &RosterRow> {
        self.cox.iter().chain(self.coach.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &RosterRow> {
        self.seats.iter().chain(self.extras())
    }

    pub fn extra_count(&self) -> usize {
        self.extras().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoatType;

    fn crew(seats: u32, names: usize) -> Crew {
        Crew {
            name: "Test".into(),
            club_name: "Club".into(),
            race_name: "Race".into(),
            boat_type: BoatType::new(seats, "Boat", ""),
            crew_names: (0..names).map(|i| format!("Rower {i}")).collect(),
            cox_name: None,
            coach_name: None,
        }
    }

    #[test]
    fn eight_uses_positional_names() {
        assert_eq!(
            seat_labels(SeatLabelStyle::Standard, 8, 8),
            EIGHT_STANDARD.map(String::from).to_vec()
        );
        assert_eq!(seat_label(SeatLabelStyle::Compact, 8, 7), "STK");
        assert_eq!(seat_label(SeatLabelStyle::Formal, 8, 1), "Two");
    }

    #[test]
    fn four_uses_positional_names() {
        assert_eq!(
            seat_labels(SeatLabelStyle::Standard, 4, 4),
            vec!["Bow", "2", "3", "Stroke"]
        );
    }

    #[test]
    fn other_boats_are_numbered() {
        assert_eq!(seat_labels(SeatLabelStyle::Standard, 2, 2), vec!["1", "2"]);
        assert_eq!(seat_labels(SeatLabelStyle::Formal, 1, 1), vec!["1"]);
    }

    #[test]
    fn overlong_roster_falls_back_to_index() {
        let labels = seat_labels(SeatLabelStyle::Standard, 4, 6);
        assert_eq!(labels, vec!["Bow", "2", "3", "Stroke", "5", "6"]);
    }

    #[test]
    fn short_roster_keeps_positional_prefix() {
        let labels = seat_labels(SeatLabelStyle::Standard, 8, 6);
        assert_eq!(labels, vec!["Bow", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn roster_orders_cox_before_coach() {
        let mut c = crew(8, 8);
        c.cox_name = Some("Sarah".into());
        c.coach_name = Some("Coach Roberts".into());
        let roster = Roster::new(&c, SeatLabelStyle::Standard);
        let kinds: Vec<_> = roster.all().map(|r| r.kind).collect();
        assert_eq!(kinds.len(), 10);
        assert_eq!(kinds[8], RowKind::Cox);
        assert_eq!(kinds[9], RowKind::Coach);
        assert_eq!(roster.cox.as_ref().unwrap().inline(), "Cox: Sarah");
    }

    #[test]
    fn blank_roles_are_omitted() {
        let mut c = crew(1, 1);
        c.cox_name = Some(String::new());
        let roster = Roster::new(&c, SeatLabelStyle::Compact);
        assert!(roster.cox.is_none());
        assert!(roster.coach.is_none());
        assert_eq!(roster.seats[0].label, "1");
    }
}
