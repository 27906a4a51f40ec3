//! Static content: the characters offered on the home screen and the
//! developer credits shown on the about screen.

/// A character the home screen offers, by SWAPI id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: &'static str,
    pub id: u32,
}

pub const ROSTER: &[RosterEntry] = &[
    RosterEntry { name: "Luke Skywalker", id: 1 },
    RosterEntry { name: "Darth Vader", id: 4 },
    RosterEntry { name: "Obi-Wan Kenobi", id: 10 },
    RosterEntry { name: "Leia Organa", id: 5 },
    RosterEntry { name: "R2-D2", id: 3 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Developer {
    /// Student registration number.
    pub ra: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

pub const DEVELOPERS: &[Developer] = &[
    Developer {
        ra: "1135371",
        name: "André Izolani Rien",
        email: "1135371@atitus.edu.br",
    },
    Developer {
        ra: "1135044",
        name: "Arthur Dezingrini",
        email: "1135044@atitus.edu.br",
    },
    Developer {
        ra: "1135192",
        name: "Gabriel viecili",
        email: "1135192@atitus.edu.br",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique() {
        let mut ids: Vec<u32> = ROSTER.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ROSTER.len());
    }

    #[test]
    fn test_three_developers() {
        assert_eq!(DEVELOPERS.len(), 3);
        assert!(DEVELOPERS.iter().all(|d| d.email.starts_with(d.ra)));
    }
}
