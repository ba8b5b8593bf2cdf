use crate::types::{Priority, Stage, Status};
use serde::{Deserialize, Serialize};

/// A tracked character asset and the status of each of its production stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: String,
    pub priority: Priority,
    pub illustration: Status,
    pub chibi: Status,
    pub spine2d: Status,
    pub spine_anim: Status,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        priority: Priority,
        [illustration, chibi, spine2d, spine_anim]: [Status; 4],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            priority,
            illustration,
            chibi,
            spine2d,
            spine_anim,
        }
    }

    pub fn status(&self, stage: Stage) -> Status {
        match stage {
            Stage::Illustration => self.illustration,
            Stage::Chibi => self.chibi,
            Stage::Spine2d => self.spine2d,
            Stage::SpineAnim => self.spine_anim,
        }
    }

    /// Stage statuses in `Stage::all()` order.
    pub fn statuses(&self) -> [Status; 4] {
        [self.illustration, self.chibi, self.spine2d, self.spine_anim]
    }

    pub fn done_stages(&self) -> usize {
        self.statuses()
            .iter()
            .filter(|s| matches!(s, Status::Done))
            .count()
    }

    /// Completed stages as a percentage of all stages (0, 25, 50, 75 or 100).
    pub fn progress(&self) -> u32 {
        let total = Stage::all().len();
        crate::stats::percent(self.done_stages(), total)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        Character::new(
            "9000",
            "Test",
            "npc",
            Priority::P1,
            [Status::Done, Status::Revision, Status::Doing, Status::Todo],
        )
    }

    #[test]
    fn status_by_stage() {
        let c = sample();
        assert_eq!(c.status(Stage::Illustration), Status::Done);
        assert_eq!(c.status(Stage::Chibi), Status::Revision);
        assert_eq!(c.status(Stage::Spine2d), Status::Doing);
        assert_eq!(c.status(Stage::SpineAnim), Status::Todo);
    }

    #[test]
    fn statuses_follow_stage_order() {
        let c = sample();
        let statuses = c.statuses();
        for stage in Stage::all() {
            assert_eq!(statuses[stage.index()], c.status(*stage));
        }
    }

    #[test]
    fn progress_counts_only_done() {
        let mut c = sample();
        assert_eq!(c.done_stages(), 1);
        assert_eq!(c.progress(), 25);

        c.chibi = Status::Done;
        c.spine2d = Status::Done;
        c.spine_anim = Status::Done;
        assert_eq!(c.progress(), 100);
    }

    #[test]
    fn character_yaml_roundtrip() {
        let c = sample();
        let yaml = serde_yaml::to_string(&c).unwrap();
        assert!(yaml.contains("spine_anim: todo"));
        let parsed: Character = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, c);
    }
}
