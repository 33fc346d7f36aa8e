//! Matching runs: load profiles in scope, filter unmatchable records, score
//! every remaining (candidate × offer) pair and upsert the results.
//!
//! All three triggers share this path and `engine::compute_match`.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::matching::engine::compute_match;
use crate::matching::store::{MatchStore, OfferScope, StoreError};
use crate::matching::weights::ScoringWeights;
use crate::models::profile::{CandidateProfile, EmployerProfile, JobOffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "id", rename_all = "snake_case")]
pub enum MatchTrigger {
    /// Every completed candidate against every active offer.
    All,
    /// One candidate against every active offer.
    Candidate(Uuid),
    /// Every offer of one employer against every completed candidate.
    Employer(Uuid),
    /// One offer against every completed candidate.
    Offer(Uuid),
}

impl MatchTrigger {
    fn candidate_filter(self) -> Option<Uuid> {
        match self {
            MatchTrigger::Candidate(id) => Some(id),
            _ => None,
        }
    }

    fn offer_scope(self) -> OfferScope {
        match self {
            MatchTrigger::Employer(id) => OfferScope::Employer(id),
            MatchTrigger::Offer(id) => OfferScope::Offer(id),
            MatchTrigger::All | MatchTrigger::Candidate(_) => OfferScope::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TestsIncomplete,
    OfferInactive,
    RequirementsIncomplete,
    MissingEmployerProfile,
    EmployerProfileIncomplete,
    CultureIncomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkippedKind {
    Candidate,
    Offer,
}

/// A record left out of a run. Every pair involving it is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub kind: SkippedKind,
    pub id: Option<Uuid>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy)]
pub struct PlannedPair<'a> {
    pub candidate: &'a CandidateProfile,
    pub employer: &'a EmployerProfile,
    pub offer: &'a JobOffer,
}

#[derive(Debug, Default)]
pub struct MatchPlan<'a> {
    pub pairs: Vec<PlannedPair<'a>>,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub trigger: MatchTrigger,
    pub candidates_considered: usize,
    pub offers_considered: usize,
    pub scored: usize,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("candidate {0} not found")]
    UnknownCandidate(Uuid),

    #[error("employer {0} not found")]
    UnknownEmployer(Uuid),

    #[error("job offer {0} not found")]
    UnknownOffer(Uuid),
}

/// Splits the records in the trigger's scope into scoreable pairs and skipped
/// records. Pairs come out candidate-major, in input order.
pub fn plan_pairs<'a>(
    candidates: &'a [CandidateProfile],
    employers: &'a [EmployerProfile],
    offers: &'a [JobOffer],
    trigger: MatchTrigger,
) -> MatchPlan<'a> {
    let mut plan = MatchPlan::default();
    let employers_by_id: HashMap<Uuid, &EmployerProfile> =
        employers.iter().map(|e| (e.user_id, e)).collect();

    let mut ready_candidates = Vec::new();
    for candidate in candidates
        .iter()
        .filter(|c| trigger.candidate_filter().map_or(true, |id| c.id == id))
    {
        if candidate.is_matchable() {
            ready_candidates.push(candidate);
        } else {
            plan.skipped.push(Skipped {
                kind: SkippedKind::Candidate,
                id: Some(candidate.id),
                reason: SkipReason::TestsIncomplete,
            });
        }
    }

    let mut ready_offers = Vec::new();
    for offer in offers.iter().filter(|o| offer_in_scope(o, trigger)) {
        match offer_readiness(offer, &employers_by_id) {
            Ok(employer) => ready_offers.push((employer, offer)),
            Err(reason) => plan.skipped.push(Skipped {
                kind: SkippedKind::Offer,
                id: offer.id,
                reason,
            }),
        }
    }

    for candidate in ready_candidates {
        for &(employer, offer) in &ready_offers {
            plan.pairs.push(PlannedPair {
                candidate,
                employer,
                offer,
            });
        }
    }

    plan
}

fn offer_in_scope(offer: &JobOffer, trigger: MatchTrigger) -> bool {
    match trigger {
        MatchTrigger::Employer(id) => offer.employer_id == id,
        MatchTrigger::Offer(id) => offer.id == Some(id),
        MatchTrigger::All | MatchTrigger::Candidate(_) => true,
    }
}

fn offer_readiness<'a>(
    offer: &JobOffer,
    employers: &HashMap<Uuid, &'a EmployerProfile>,
) -> Result<&'a EmployerProfile, SkipReason> {
    if !offer.is_active {
        return Err(SkipReason::OfferInactive);
    }
    if !offer.requirements_completed {
        return Err(SkipReason::RequirementsIncomplete);
    }
    let employer = employers
        .get(&offer.employer_id)
        .copied()
        .ok_or(SkipReason::MissingEmployerProfile)?;
    if !employer.profile_completed {
        return Err(SkipReason::EmployerProfileIncomplete);
    }
    if !employer.culture_completed {
        return Err(SkipReason::CultureIncomplete);
    }
    Ok(employer)
}

/// Runs one trigger end to end. A store failure aborts the run; results
/// already upserted stay in place and are replaced by the next run.
pub async fn run_matching(
    store: &dyn MatchStore,
    weights: &ScoringWeights,
    trigger: MatchTrigger,
) -> Result<RunSummary, RunError> {
    info!(?trigger, "Starting matching run");

    let candidates = store.load_candidates(trigger.candidate_filter()).await?;
    if let MatchTrigger::Candidate(id) = trigger {
        if candidates.is_empty() {
            return Err(RunError::UnknownCandidate(id));
        }
    }

    let offers = store.load_offers(trigger.offer_scope()).await?;
    if let MatchTrigger::Offer(id) = trigger {
        if offers.is_empty() {
            return Err(RunError::UnknownOffer(id));
        }
    }

    let mut employer_ids: BTreeSet<Uuid> = offers.iter().map(|o| o.employer_id).collect();
    if let MatchTrigger::Employer(id) = trigger {
        employer_ids.insert(id);
    }
    let employer_ids: Vec<Uuid> = employer_ids.into_iter().collect();
    let employers = store.load_employers(&employer_ids).await?;
    if let MatchTrigger::Employer(id) = trigger {
        if !employers.iter().any(|e| e.user_id == id) {
            return Err(RunError::UnknownEmployer(id));
        }
    }

    let plan = plan_pairs(&candidates, &employers, &offers, trigger);
    for skipped in &plan.skipped {
        debug!(kind = ?skipped.kind, id = ?skipped.id, reason = ?skipped.reason, "Skipping record");
    }

    let mut scored = 0;
    for pair in &plan.pairs {
        let result = compute_match(pair.candidate, pair.employer, pair.offer, weights);
        store.upsert_match(&result).await?;
        scored += 1;
    }

    info!(
        ?trigger,
        scored,
        skipped = plan.skipped.len(),
        "Matching run finished"
    );

    Ok(RunSummary {
        trigger,
        candidates_considered: candidates.len(),
        offers_considered: offers.len(),
        scored,
        skipped: plan.skipped,
    })
}
