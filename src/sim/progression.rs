//! Year-driven progression: garbage spawn rate and milestone captions

use serde::{Deserialize, Serialize};

/// From `from_year` on, garbage arrives every `delay_ticks` ticks
///
/// `delay_ticks: None` declares a quiet era with no garbage at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayTier {
    pub from_year: i32,
    pub delay_ticks: Option<u32>,
}

/// Piecewise mapping from year to garbage inter-arrival delay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarbageSchedule {
    tiers: Vec<DelayTier>,
}

impl Default for GarbageSchedule {
    fn default() -> Self {
        let tier = |from_year, delay| DelayTier {
            from_year,
            delay_ticks: Some(delay),
        };
        Self {
            tiers: vec![
                tier(1961, 20),
                tier(1969, 14),
                tier(1981, 10),
                tier(1995, 8),
                tier(2010, 6),
                tier(2020, 2),
            ],
        }
    }
}

impl GarbageSchedule {
    /// Build from tiers sorted by `from_year`
    pub fn new(tiers: Vec<DelayTier>) -> Result<Self, String> {
        let schedule = Self { tiers };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Delay for `year`; `None` means no garbage this era
    pub fn delay_for(&self, year: i32) -> Option<u32> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.from_year <= year)
            .and_then(|tier| tier.delay_ticks)
    }

    pub fn tiers(&self) -> &[DelayTier] {
        &self.tiers
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self
            .tiers
            .windows(2)
            .any(|pair| pair[0].from_year >= pair[1].from_year)
        {
            return Err("garbage_schedule years must be strictly increasing".into());
        }
        if self.tiers.iter().any(|tier| tier.delay_ticks == Some(0)) {
            return Err("garbage_schedule delays must be at least one tick".into());
        }
        Ok(())
    }
}

/// Space-race milestones, shown only in their exact year
const MILESTONES: [(i32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong walked on the Moon!"),
    (1971, "Salyut 1, the first orbital station"),
    (1981, "Space Shuttle Columbia launched"),
    (1998, "ISS construction began"),
    (2011, "MESSENGER reached Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Caption for exactly `year`, if it is a milestone
pub fn milestone(year: i32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, caption)| *caption)
}

/// Status-line text for `year`
pub fn year_caption(year: i32) -> String {
    match milestone(year) {
        Some(caption) => format!("Year {year}: {caption}"),
        None => format!("Year {year}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_boundaries() {
        let schedule = GarbageSchedule::default();
        assert_eq!(schedule.delay_for(1957), None);
        assert_eq!(schedule.delay_for(1960), None);
        assert_eq!(schedule.delay_for(1961), Some(20));
        assert_eq!(schedule.delay_for(1968), Some(20));
        assert_eq!(schedule.delay_for(1969), Some(14));
        assert_eq!(schedule.delay_for(1994), Some(10));
        assert_eq!(schedule.delay_for(2019), Some(6));
        assert_eq!(schedule.delay_for(2020), Some(2));
        assert_eq!(schedule.delay_for(3000), Some(2));
    }

    fn tier(from_year: i32, delay_ticks: Option<u32>) -> DelayTier {
        DelayTier {
            from_year,
            delay_ticks,
        }
    }

    #[test]
    fn test_quiet_era_in_the_middle() {
        let schedule = GarbageSchedule::new(vec![
            tier(2000, Some(5)),
            tier(2005, None),
            tier(2010, Some(3)),
        ])
        .unwrap();
        assert_eq!(schedule.delay_for(2004), Some(5));
        assert_eq!(schedule.delay_for(2007), None);
        assert_eq!(schedule.delay_for(2010), Some(3));
    }

    #[test]
    fn test_schedule_rejects_unsorted_and_zero_delay() {
        assert!(GarbageSchedule::new(vec![tier(2000, Some(5)), tier(1990, Some(3))]).is_err());
        assert!(GarbageSchedule::new(vec![tier(2000, Some(0))]).is_err());
    }

    #[test]
    fn test_schedule_json_shape() {
        let schedule: GarbageSchedule = serde_json::from_str(
            r#"[{"from_year": 1990, "delay_ticks": null}, {"from_year": 1995, "delay_ticks": 4}]"#,
        )
        .unwrap();
        assert_eq!(schedule.delay_for(1992), None);
        assert_eq!(schedule.delay_for(1996), Some(4));
    }

    #[test]
    fn test_milestone_only_on_exact_year() {
        assert_eq!(milestone(1961), Some("Gagarin flew!"));
        assert_eq!(milestone(1962), None);
        assert_eq!(year_caption(1957), "Year 1957: First Sputnik");
        assert_eq!(year_caption(1958), "Year 1958");
    }
}
