use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::registration::caps::{
    self, HorseTally, COMPETITOR_RUN_CAP, HORSE_RUN_CAP,
};
use crate::registration::dto::{SubmitCartRequest, TeamRegistrationRow};
use crate::registration::repo;
use crate::registration::repo_types::{CartStatus, TeamWithCreator};

/// Submissions retry a few times when SERIALIZABLE transactions collide.
const SUBMIT_ATTEMPTS: u32 = 3;

/// Replace the caller's draft with a validated batch of teams.
///
/// Stale-draft cleanup, both run-cap checks, the profile update and the
/// cart/team inserts run in one SERIALIZABLE transaction; a failed check
/// persists nothing.
pub async fn submit_registration_cart(
    db: &PgPool,
    actor: Uuid,
    req: &SubmitCartRequest,
) -> Result<(), AppError> {
    if actor != req.user_id {
        return Err(AppError::Unauthorized);
    }
    caps::validate_batch_shape(&req.teams).map_err(AppError::Validation)?;

    let mut attempt = 0;
    loop {
        attempt += 1;
        match try_submit(db, req).await {
            Ok(()) => {
                info!(user_id = %req.user_id, teams = req.teams.len(), "registration cart submitted");
                return Ok(());
            }
            Err(AppError::Database(e))
                if AppError::is_serialization_failure(&e) && attempt < SUBMIT_ATTEMPTS =>
            {
                warn!(user_id = %req.user_id, attempt, "serialization conflict on submit, retrying");
            }
            Err(e) => return Err(e),
        }
    }
}

async fn try_submit(db: &PgPool, req: &SubmitCartRequest) -> Result<(), AppError> {
    let mut tx = db.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(&mut *tx)
        .await?;

    repo::delete_pending_carts(&mut tx, req.user_id).await?;

    for tally in caps::horse_tallies(&req.teams) {
        let existing = repo::count_horse_runs(&mut tx, &tally.key.name, &tally.key.owner).await?;
        if caps::exceeds_cap(tally.count, existing, HORSE_RUN_CAP) {
            return Err(AppError::Validation(horse_cap_message(&tally, existing)));
        }
    }

    for (competitor_id, count) in caps::competitor_tallies(&req.teams) {
        let existing = repo::count_competitor_runs(&mut tx, competitor_id).await?;
        if caps::exceeds_cap(count, existing, COMPETITOR_RUN_CAP) {
            let name = repo::lookup_full_name(&mut tx, competitor_id)
                .await?
                .unwrap_or_else(|| competitor_id.to_string());
            return Err(AppError::Validation(competitor_cap_message(
                &name,
                existing,
                count,
            )));
        }
    }

    if let Some(info) = &req.additional_info {
        repo::apply_additional_info(&mut tx, req.user_id, info).await?;
    }

    let cart = repo::insert_cart(&mut tx, req.user_id).await?;
    for entry in &req.teams {
        repo::insert_team(&mut tx, cart.id, entry).await?;
    }

    tx.commit().await?;
    Ok(())
}

fn horse_cap_message(tally: &HorseTally, existing: i64) -> String {
    let horse = if tally.owner.is_empty() {
        format!("Horse \"{}\"", tally.name)
    } else {
        format!("Horse \"{}\" (owner: {})", tally.name, tally.owner)
    };
    format!(
        "{} is limited to {} runs: {} already registered, {} in this submission",
        horse, HORSE_RUN_CAP, existing, tally.count
    )
}

fn competitor_cap_message(name: &str, existing: i64, batch: usize) -> String {
    format!(
        "{} is limited to {} runs: {} already registered, {} in this submission",
        name, COMPETITOR_RUN_CAP, existing, batch
    )
}

/// PENDING -> SUBMITTED. Success even when there is no draft to finalize.
pub async fn finalize_registration(db: &PgPool, actor: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if actor != user_id {
        return Err(AppError::Unauthorized);
    }
    let moved = repo::transition_cart(db, user_id, CartStatus::Pending, CartStatus::Submitted).await?;
    if moved > 0 {
        info!(user_id = %user_id, "registration finalized");
    }
    Ok(())
}

/// SUBMITTED -> PENDING, reopening the cart for edits.
pub async fn reopen_registration(db: &PgPool, actor: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if actor != user_id {
        return Err(AppError::Unauthorized);
    }
    let moved = repo::transition_cart(db, user_id, CartStatus::Submitted, CartStatus::Pending).await?;
    if moved > 0 {
        info!(user_id = %user_id, "registration reopened");
    }
    Ok(())
}

pub async fn get_user_team_registrations(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Vec<TeamRegistrationRow>, AppError> {
    Ok(repo::list_for_user(db, user_id).await?)
}

/// A team can be scratched by its rider, its skier, or the cart owner.
pub fn can_scratch(actor: Uuid, team: &TeamWithCreator) -> bool {
    actor == team.rider_id || actor == team.skier_id || actor == team.creator_id
}

/// Competitor-initiated hard delete of a team.
pub async fn scratch_team(db: &PgPool, actor: Uuid, team_id: Uuid) -> Result<(), AppError> {
    let team = repo::find_team_with_creator(db, team_id)
        .await?
        .ok_or(AppError::NotFound("Team"))?;

    if !can_scratch(actor, &team) {
        warn!(actor = %actor, team_id = %team_id, "scratch denied");
        return Err(AppError::Unauthorized);
    }

    repo::delete_team(db, team_id).await?;
    info!(actor = %actor, team_id = %team_id, "team scratched");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::caps::HorseKey;

    fn team(rider: Uuid, skier: Uuid, creator: Uuid) -> TeamWithCreator {
        TeamWithCreator {
            id: Uuid::new_v4(),
            rider_id: rider,
            skier_id: skier,
            creator_id: creator,
        }
    }

    #[test]
    fn any_of_the_three_stakeholders_may_scratch() {
        let rider = Uuid::new_v4();
        let skier = Uuid::new_v4();
        let creator = Uuid::new_v4();
        let t = team(rider, skier, creator);

        assert!(can_scratch(rider, &t));
        assert!(can_scratch(skier, &t));
        assert!(can_scratch(creator, &t));
        assert!(!can_scratch(Uuid::new_v4(), &t));
    }

    #[test]
    fn horse_cap_message_names_horse_owner_and_limit() {
        let tally = HorseTally {
            key: HorseKey::new("Star", "Jane Doe"),
            name: "Star".into(),
            owner: "Jane Doe".into(),
            count: 1,
        };
        let msg = horse_cap_message(&tally, 2);
        assert!(msg.contains("Star"));
        assert!(msg.contains("Jane Doe"));
        assert!(msg.contains("limited to 2 runs"));
    }

    #[test]
    fn horse_cap_message_omits_empty_owner() {
        let tally = HorseTally {
            key: HorseKey::new("Comet", ""),
            name: "Comet".into(),
            owner: "".into(),
            count: 3,
        };
        let msg = horse_cap_message(&tally, 0);
        assert!(msg.contains("Comet"));
        assert!(!msg.contains("owner:"));
    }

    #[test]
    fn competitor_cap_message_names_the_competitor() {
        let msg = competitor_cap_message("Sam Rider", 6, 2);
        assert!(msg.contains("Sam Rider"));
        assert!(msg.contains("limited to 7 runs"));
    }
}
