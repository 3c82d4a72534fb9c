//! Run-cap arithmetic for cart submission.
//!
//! A horse may run at most twice and a competitor at most seven times across
//! all non-rejected teams, counting both the submitted batch and what is
//! already on file. The batch-side tallies here are pure; the service layer
//! pairs them with historical counts read inside the submit transaction.

use uuid::Uuid;

use crate::registration::dto::TeamEntry;

pub const HORSE_RUN_CAP: usize = 2;
pub const COMPETITOR_RUN_CAP: usize = 7;
pub const MAX_TEAMS_PER_CART: usize = 7;

/// Case-insensitive, whitespace-trimmed identity of a horse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseKey {
    pub name: String,
    pub owner: String,
}

impl HorseKey {
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            owner: owner.trim().to_lowercase(),
        }
    }

    /// A team without a named horse has nothing to cap.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

/// Batch occurrences of one horse, keeping the first-seen spelling for
/// error messages.
#[derive(Debug)]
pub struct HorseTally {
    pub key: HorseKey,
    pub name: String,
    pub owner: String,
    pub count: usize,
}

/// Tally each named horse in the batch, in first-appearance order.
pub fn horse_tallies(teams: &[TeamEntry]) -> Vec<HorseTally> {
    let mut tallies: Vec<HorseTally> = Vec::new();
    for team in teams {
        let name = team.horse_name.as_deref().unwrap_or("");
        let owner = team.horse_owner.as_deref().unwrap_or("");
        let key = HorseKey::new(name, owner);
        if key.is_blank() {
            continue;
        }
        match tallies.iter_mut().find(|t| t.key == key) {
            Some(tally) => tally.count += 1,
            None => tallies.push(HorseTally {
                key,
                name: name.trim().to_string(),
                owner: owner.trim().to_string(),
                count: 1,
            }),
        }
    }
    tallies
}

/// Tally each competitor's batch appearances, rider and skier slots alike.
pub fn competitor_tallies(teams: &[TeamEntry]) -> Vec<(Uuid, usize)> {
    fn bump(tallies: &mut Vec<(Uuid, usize)>, id: Uuid) {
        match tallies.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => tallies.push((id, 1)),
        }
    }

    let mut tallies: Vec<(Uuid, usize)> = Vec::new();
    for team in teams {
        bump(&mut tallies, team.rider_id);
        bump(&mut tallies, team.skier_id);
    }
    tallies
}

pub fn exceeds_cap(batch: usize, existing: i64, cap: usize) -> bool {
    existing.max(0) as usize + batch > cap
}

/// Structural checks on the batch itself: size bounds and distinct members
/// per team. Everything else needs the database.
pub fn validate_batch_shape(teams: &[TeamEntry]) -> Result<(), String> {
    if teams.is_empty() {
        return Err("At least one team is required".into());
    }
    if teams.len() > MAX_TEAMS_PER_CART {
        return Err(format!(
            "A registration cart is limited to {} teams",
            MAX_TEAMS_PER_CART
        ));
    }
    for team in teams {
        if team.rider_id == team.skier_id {
            return Err("A team's rider and skier must be different competitors".into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rider: Uuid, skier: Uuid, horse: Option<(&str, &str)>) -> TeamEntry {
        TeamEntry {
            rider_id: rider,
            skier_id: skier,
            horse_name: horse.map(|(n, _)| n.to_string()),
            horse_owner: horse.map(|(_, o)| o.to_string()),
            division: None,
        }
    }

    #[test]
    fn horse_key_normalizes_case_and_whitespace() {
        assert_eq!(HorseKey::new("  Star ", "Jane DOE"), HorseKey::new("star", "jane doe"));
        assert_ne!(HorseKey::new("Star", "Jane"), HorseKey::new("Star", "John"));
    }

    #[test]
    fn horse_tallies_merge_spelling_variants() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let teams = vec![
            entry(a, b, Some(("Star", "Jane"))),
            entry(a, c, Some(("  STAR ", "jane"))),
            entry(a, b, Some(("Comet", "Jane"))),
        ];
        let tallies = horse_tallies(&teams);
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].count, 2);
        assert_eq!(tallies[0].name, "Star");
        assert_eq!(tallies[1].count, 1);
    }

    #[test]
    fn unnamed_horses_are_exempt() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let teams = vec![
            entry(a, b, None),
            entry(a, b, Some(("   ", "Jane"))),
        ];
        assert!(horse_tallies(&teams).is_empty());
    }

    #[test]
    fn competitor_tallies_count_both_slots() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let teams = vec![
            entry(a, b, None),
            entry(a, c, None),
            entry(c, a, None),
        ];
        let tallies = competitor_tallies(&teams);
        let count_of = |id: Uuid| tallies.iter().find(|(u, _)| *u == id).map(|(_, c)| *c);
        assert_eq!(count_of(a), Some(3));
        assert_eq!(count_of(b), Some(1));
        assert_eq!(count_of(c), Some(2));
    }

    #[test]
    fn cap_is_inclusive() {
        // 2 existing runs + nothing new is fine; one more is not.
        assert!(!exceeds_cap(0, 2, HORSE_RUN_CAP));
        assert!(!exceeds_cap(2, 0, HORSE_RUN_CAP));
        assert!(exceeds_cap(1, 2, HORSE_RUN_CAP));
        assert!(exceeds_cap(3, 0, HORSE_RUN_CAP));
        assert!(!exceeds_cap(7, 0, COMPETITOR_RUN_CAP));
        assert!(exceeds_cap(1, 7, COMPETITOR_RUN_CAP));
    }

    #[test]
    fn batch_shape_rejects_empty_and_oversized_carts() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(validate_batch_shape(&[]).is_err());

        let seven: Vec<_> = (0..7).map(|_| entry(a, b, None)).collect();
        assert!(validate_batch_shape(&seven).is_ok());

        let eight: Vec<_> = (0..8).map(|_| entry(a, b, None)).collect();
        let err = validate_batch_shape(&eight).unwrap_err();
        assert!(err.contains("7"));
    }

    #[test]
    fn batch_shape_rejects_self_partnering() {
        let a = Uuid::new_v4();
        let err = validate_batch_shape(&[entry(a, a, None)]).unwrap_err();
        assert!(err.contains("different"));
    }
}
