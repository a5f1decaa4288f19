//! Payoff-rank partitions of one player's strategies
//!
//! Classes are listed best first. Each class is a set of strategies treated
//! as tied; the strategies of class `k` occupy ranks
//! `rank_offset(k) .. rank_offset(k) + len`. Merging and splitting return a
//! new partition rather than editing one in place.

use std::collections::BTreeSet;

/// Strategies presumed to earn equal payoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankClass(BTreeSet<usize>);

impl RankClass {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowest-numbered member; the representative used for payoff checks.
    pub fn first(&self) -> usize {
        *self.0.first().expect("rank classes are never empty")
    }

    pub fn contains(&self, strategy: usize) -> bool {
        self.0.contains(&strategy)
    }

    /// Members in ascending strategy order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRanking {
    classes: Vec<RankClass>,
}

impl PartitionRanking {
    /// Strict ranking by descending value, one singleton class per strategy.
    ///
    /// Returns the first pair of strategies whose values lie within
    /// `tolerance` of each other, since a tie cannot be ranked.
    pub fn by_payoff(values: &[f64], tolerance: f64) -> Result<Self, (usize, usize)> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));
        if let Some(pair) = order
            .windows(2)
            .find(|w| values[w[0]] - values[w[1]] <= tolerance)
        {
            return Err((pair[0].min(pair[1]), pair[0].max(pair[1])));
        }
        Ok(Self::from_classes(order.into_iter().map(|st| vec![st]).collect()))
    }

    /// Build from explicit classes, best first. Panics unless the classes
    /// are non-empty and cover `0..n` exactly once.
    pub fn from_classes(classes: Vec<Vec<usize>>) -> Self {
        let classes: Vec<RankClass> = classes
            .into_iter()
            .map(|members| RankClass(members.into_iter().collect()))
            .collect();
        let total: usize = classes.iter().map(RankClass::len).sum();
        let mut seen = vec![false; total];
        for class in &classes {
            assert!(!class.is_empty(), "rank classes must be non-empty");
            for st in class.iter() {
                assert!(st < total && !seen[st], "strategy {} placed twice or out of range", st);
                seen[st] = true;
            }
        }
        PartitionRanking { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[RankClass] {
        &self.classes
    }

    pub fn class(&self, k: usize) -> &RankClass {
        &self.classes[k]
    }

    pub fn num_strategies(&self) -> usize {
        self.classes.iter().map(RankClass::len).sum()
    }

    /// Number of strategies ranked above class `k`.
    pub fn rank_offset(&self, k: usize) -> usize {
        self.classes[..k].iter().map(RankClass::len).sum()
    }

    /// Fuse classes `k` and `k + 1`; later classes move up one place.
    pub fn merge(&self, k: usize) -> Self {
        assert!(k + 1 < self.classes.len(), "no class below {}", k);
        let mut classes = self.classes.clone();
        let lower = classes.remove(k + 1);
        classes[k].0.extend(lower.0);
        PartitionRanking { classes }
    }

    /// Split class `k` so that the members in `top` form class `k` and the
    /// rest form class `k + 1`; later classes move down one place.
    pub fn split(&self, k: usize, top: &[usize]) -> Self {
        let class = &self.classes[k];
        assert!(
            !top.is_empty() && top.len() < class.len(),
            "split must leave both parts non-empty"
        );
        assert!(top.iter().all(|&st| class.contains(st)), "split members must belong to class {}", k);
        let upper: BTreeSet<usize> = top.iter().copied().collect();
        let lower: BTreeSet<usize> = class.0.difference(&upper).copied().collect();
        let mut classes = self.classes.clone();
        classes[k] = RankClass(upper);
        classes.insert(k + 1, RankClass(lower));
        PartitionRanking { classes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(p: &PartitionRanking) -> Vec<Vec<usize>> {
        p.classes().iter().map(|c| c.iter().collect()).collect()
    }

    #[test]
    fn test_by_payoff_orders_descending() {
        let p = PartitionRanking::by_payoff(&[1.0, 3.0, 2.0], 1e-10).unwrap();
        assert_eq!(members(&p), vec![vec![1], vec![2], vec![0]]);
        assert_eq!(p.rank_offset(2), 2);
        assert_eq!(p.num_strategies(), 3);
    }

    #[test]
    fn test_by_payoff_rejects_ties() {
        let err = PartitionRanking::by_payoff(&[2.0, 1.0, 2.0], 1e-10).unwrap_err();
        assert_eq!(err, (0, 2));
    }

    #[test]
    fn test_merge_shifts_later_classes_up() {
        let p = PartitionRanking::from_classes(vec![vec![2], vec![0], vec![3], vec![1]]);
        let merged = p.merge(1);
        assert_eq!(members(&merged), vec![vec![2], vec![0, 3], vec![1]]);
        assert_eq!(merged.num_strategies(), 4);
        // the source partition is untouched
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn test_split_shifts_later_classes_down() {
        let p = PartitionRanking::from_classes(vec![vec![0, 1, 3], vec![2]]);
        let split = p.split(0, &[3]);
        assert_eq!(members(&split), vec![vec![3], vec![0, 1], vec![2]]);
        assert_eq!(split.rank_offset(2), 3);
    }

    #[test]
    fn test_merge_then_split_restores_order() {
        let p = PartitionRanking::from_classes(vec![vec![1], vec![0], vec![2]]);
        assert_eq!(p.merge(0).split(0, &[1]), p);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_split_requires_proper_subset() {
        let p = PartitionRanking::from_classes(vec![vec![0, 1]]);
        p.split(0, &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn test_from_classes_rejects_duplicates() {
        PartitionRanking::from_classes(vec![vec![0, 1], vec![1]]);
    }
}
