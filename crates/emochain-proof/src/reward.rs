use emochain_types::EmotionScore;

/// Base reward in satoshis per score point. Policy constant mirrored by the
/// contract; not a protocol invariant.
pub const BASE_REWARD: u64 = 1000;

/// Reward for a score: `round(BASE_REWARD * score)`, exact integer math on
/// the tenths representation.
pub fn estimate_reward(score: EmotionScore) -> u64 {
    u64::from(score.tenths()) * (BASE_REWARD / 10)
}
