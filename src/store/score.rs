use super::kv::KeyValueStore;

/// Key the best score lives under
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Where the best score survives between runs.
///
/// Neither operation can fail from the caller's point of view: an unreadable
/// value loads as 0 and a failed write is dropped.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

/// [`ScoreStore`] on top of any [`KeyValueStore`]
pub struct BestScoreStore<K> {
    kv: K,
}

impl<K: KeyValueStore> BestScoreStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }
}

impl<K: KeyValueStore> ScoreStore for BestScoreStore<K> {
    fn load(&self) -> u32 {
        match self.kv.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unreadable best score");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                tracing::warn!("could not load best score: {err:#}");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(err) = self.kv.set(BEST_SCORE_KEY, &score.to_string()) {
            tracing::warn!(score, "could not save best score: {err:#}");
        }
    }
}
