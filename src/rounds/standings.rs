//! Per-player running totals and winner computation.

/// Running totals, one per player. Player numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    totals: Vec<f64>,
}

impl Standings {
    pub fn new(num_players: usize) -> Self {
        Self {
            totals: vec![0.0; num_players],
        }
    }

    pub fn num_players(&self) -> usize {
        self.totals.len()
    }

    /// Add a finished turn's score to `player`'s total.
    pub fn record(&mut self, player: usize, score: f64) {
        debug_assert!(score >= 0.0, "turn scores are never negative");
        if let Some(total) = player.checked_sub(1).and_then(|i| self.totals.get_mut(i)) {
            *total += score;
        }
    }

    pub fn total(&self, player: usize) -> Option<f64> {
        player.checked_sub(1).and_then(|i| self.totals.get(i)).copied()
    }

    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Highest total, or `None` with no players.
    pub fn best_score(&self) -> Option<f64> {
        self.totals.iter().copied().reduce(f64::max)
    }

    /// Every player whose total equals the best score, in player order.
    /// Ties are all reported; a best score of zero still has winners.
    pub fn winners(&self) -> Vec<usize> {
        let Some(best) = self.best_score() else {
            return Vec::new();
        };
        self.totals
            .iter()
            .enumerate()
            .filter(|&(_, &total)| total == best)
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn reset(&mut self) {
        self.totals.iter_mut().for_each(|total| *total = 0.0);
    }
}
