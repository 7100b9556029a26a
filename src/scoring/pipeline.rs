//! Scoring a batch of profiles into a [`ScoreMap`].

use tracing::debug;

use super::types::{CandidateProfile, ScoreProvider};
use crate::anneal::ScoreMap;

/// Scores every profile once and collects the results by profile id.
///
/// The first provider failure is returned unchanged. Duplicate ids keep
/// the score of the last profile.
pub fn score_candidates<P: ScoreProvider>(
    provider: &P,
    profiles: &[CandidateProfile],
) -> Result<ScoreMap, P::Error> {
    let mut scores = ScoreMap::new();
    for profile in profiles {
        let score = provider.score(profile)?;
        debug!(provider = provider.name(), id = %profile.id, score, "scored candidate");
        scores.insert(profile.id.clone(), score);
    }
    Ok(scores)
}
