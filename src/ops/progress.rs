use crate::model::task::Task;

/// Motivational label bucket derived from completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HypeTier {
    ReadyToConquer,
    GettingStarted,
    GainingMomentum,
    CrushingIt,
    BossEnergy,
    AbsoluteLegend,
}

impl HypeTier {
    pub fn for_percentage(percentage: u32) -> HypeTier {
        match percentage {
            100.. => HypeTier::AbsoluteLegend,
            80.. => HypeTier::BossEnergy,
            60.. => HypeTier::CrushingIt,
            40.. => HypeTier::GainingMomentum,
            20.. => HypeTier::GettingStarted,
            _ => HypeTier::ReadyToConquer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HypeTier::AbsoluteLegend => "ABSOLUTE LEGEND",
            HypeTier::BossEnergy => "BOSS BABE ENERGY",
            HypeTier::CrushingIt => "CRUSHING IT",
            HypeTier::GainingMomentum => "GAINING MOMENTUM",
            HypeTier::GettingStarted => "GETTING STARTED",
            HypeTier::ReadyToConquer => "READY TO CONQUER",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            HypeTier::AbsoluteLegend => "\u{1F451}",
            HypeTier::BossEnergy => "\u{26A1}",
            HypeTier::CrushingIt => "\u{1F4AA}",
            HypeTier::GainingMomentum => "\u{1F680}",
            HypeTier::GettingStarted => "\u{1F331}",
            HypeTier::ReadyToConquer => "\u{2728}",
        }
    }

    pub fn encouragement(self) -> &'static str {
        match self {
            HypeTier::AbsoluteLegend => "You did it all! Time to celebrate!",
            HypeTier::BossEnergy => "Almost there, superstar!",
            HypeTier::CrushingIt => "You're on fire today!",
            HypeTier::GainingMomentum => "Keep this energy going!",
            HypeTier::GettingStarted => "Every step counts, babe!",
            HypeTier::ReadyToConquer => "Your journey starts here!",
        }
    }
}

/// The next 25%-step target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Tasks that must be done to reach `percent`
    pub tasks: usize,
    pub percent: u32,
}

/// Completion summary for the hype meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    /// 0..=100, rounded half up
    pub percentage: u32,
    pub tier: HypeTier,
    /// Only between 0% and 100% (exclusive)
    pub next_milestone: Option<Milestone>,
}

impl Progress {
    pub fn from_tasks(tasks: &[Task]) -> Progress {
        let done = tasks.iter().filter(|t| t.is_done()).count();
        Progress::from_counts(done, tasks.len())
    }

    pub fn from_counts(done: usize, total: usize) -> Progress {
        let percentage = percentage(done, total);
        Progress {
            done,
            total,
            percentage,
            tier: HypeTier::for_percentage(percentage),
            next_milestone: next_milestone(percentage, total),
        }
    }

    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.percentage == 100
    }
}

/// `round(100 * done / total)`, 0 for an empty collection
pub fn percentage(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor(x + 0.5) in integers
    ((200 * done + total) / (2 * total)) as u32
}

/// `ceil(total * step / 100)` where `step` is the next multiple of 25 above
/// the current percentage. `None` at 0% and 100%.
pub fn next_milestone(percentage: u32, total: usize) -> Option<Milestone> {
    if percentage == 0 || percentage >= 100 {
        return None;
    }
    let percent = (percentage / 25 + 1) * 25;
    Some(Milestone {
        tasks: (total * percent as usize).div_ceil(100),
        percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_is_zero_percent() {
        let p = Progress::from_counts(0, 0);
        assert_eq!(p.percentage, 0);
        assert_eq!(p.tier, HypeTier::ReadyToConquer);
        assert_eq!(p.next_milestone, None);
        assert!(!p.all_complete());
    }

    #[test]
    fn half_done() {
        let p = Progress::from_counts(2, 4);
        assert_eq!(p.percentage, 50);
        assert_eq!(p.tier, HypeTier::GainingMomentum);
        assert_eq!(p.next_milestone, Some(Milestone { tasks: 3, percent: 75 }));
    }

    #[test]
    fn all_done_is_top_tier() {
        let p = Progress::from_counts(4, 4);
        assert_eq!(p.percentage, 100);
        assert_eq!(p.tier, HypeTier::AbsoluteLegend);
        assert_eq!(p.tier.label(), "ABSOLUTE LEGEND");
        assert_eq!(p.next_milestone, None);
        assert!(p.all_complete());
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 200), 1); // 0.5
        assert_eq!(percentage(1, 201), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(HypeTier::for_percentage(19), HypeTier::ReadyToConquer);
        assert_eq!(HypeTier::for_percentage(20), HypeTier::GettingStarted);
        assert_eq!(HypeTier::for_percentage(40), HypeTier::GainingMomentum);
        assert_eq!(HypeTier::for_percentage(60), HypeTier::CrushingIt);
        assert_eq!(HypeTier::for_percentage(79), HypeTier::CrushingIt);
        assert_eq!(HypeTier::for_percentage(80), HypeTier::BossEnergy);
        assert_eq!(HypeTier::for_percentage(99), HypeTier::BossEnergy);
        assert!(HypeTier::AbsoluteLegend > HypeTier::BossEnergy);
    }

    #[test]
    fn tier_texts() {
        let p = Progress::from_counts(4, 5);
        assert_eq!(p.tier.label(), "BOSS BABE ENERGY");
        let p = Progress::from_counts(1, 4);
        assert_eq!(p.tier.label(), "GETTING STARTED");
        assert_eq!(p.tier.encouragement(), "Every step counts, babe!");
    }

    #[test]
    fn milestone_rounds_task_count_up() {
        // 1 of 3 = 33% -> next 50% of 3 tasks = 1.5 -> 2
        assert_eq!(next_milestone(33, 3), Some(Milestone { tasks: 2, percent: 50 }));
        // 99% -> 100%
        assert_eq!(next_milestone(99, 200), Some(Milestone { tasks: 200, percent: 100 }));
        // exactly on a step moves to the following one
        assert_eq!(next_milestone(25, 8), Some(Milestone { tasks: 4, percent: 50 }));
    }
}
