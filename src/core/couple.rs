use crate::domain::model::{Actor, Actress};
use crate::domain::ports::CastSource;
use rand::seq::IteratorRandom;

/// Loads both collections concurrently and picks one random member of each.
pub async fn random_couple<S: CastSource + ?Sized>(source: &S) -> Option<(Actress, Actor)> {
    let (actresses, actors) = tokio::join!(source.get_all_actresses(), source.get_all_actors());

    if actresses.is_empty() || actors.is_empty() {
        tracing::warn!(
            "Cannot form a couple from {} actresses and {} actors",
            actresses.len(),
            actors.len()
        );
        return None;
    }

    let mut rng = rand::thread_rng();
    let actress = actresses.into_iter().choose(&mut rng)?;
    let actor = actors.into_iter().choose(&mut rng)?;

    tracing::debug!("Picked couple: {} and {}", actress.name(), actor.name());
    Some((actress, actor))
}
