//! Click escalation for the yes/no buttons.
//!
//! Every "No" press moves the button somewhere else and counts towards the
//! "No" pop-up; the count is shared by both question slots that have a "No"
//! button. "Yes" on the first question escalates the same way towards the
//! "Yes" pop-up, while "Yes" on the third question always ends the card.

pub const ESCALATION_THRESHOLD: u32 = 3;

/// Counts presses and fires once when the count hits the threshold exactly,
/// starting over afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickCounter {
    count: u32,
    threshold: u32,
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new(ESCALATION_THRESHOLD)
    }
}

impl ClickCounter {
    pub const fn new(threshold: u32) -> Self {
        Self { count: 0, threshold }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Count a press; `true` when this press reached the threshold.
    pub fn register(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count == self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Count a press without checking the threshold.
    pub fn bump(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionSlot {
    First,
    Third,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOutcome {
    Relocate,
    RelocateAndShowModal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesOutcome {
    Nothing,
    ShowModal,
    Finale,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Escalation {
    no: ClickCounter,
    yes: ClickCounter,
}

impl Escalation {
    pub fn no_clicks(&self) -> u32 {
        self.no.count()
    }

    pub fn yes_clicks(&self) -> u32 {
        self.yes.count()
    }

    pub fn on_no(&mut self) -> NoOutcome {
        if self.no.register() {
            NoOutcome::RelocateAndShowModal
        } else {
            NoOutcome::Relocate
        }
    }

    pub fn on_yes(&mut self, slot: QuestionSlot) -> YesOutcome {
        match slot {
            QuestionSlot::First if self.yes.register() => YesOutcome::ShowModal,
            QuestionSlot::First => YesOutcome::Nothing,
            QuestionSlot::Third => {
                self.yes.bump();
                YesOutcome::Finale
            }
        }
    }
}

/// New top-left corner for a fleeing button, keeping it fully on screen.
/// `samples` are uniform draws in [0, 1) for x and y.
pub fn relocation(viewport: (f64, f64), button: (f64, f64), samples: (f64, f64)) -> (f64, f64) {
    let room_x = (viewport.0 - button.0).max(0.0);
    let room_y = (viewport.1 - button.1).max(0.0);
    (samples.0 * room_x, samples.1 * room_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_no_shows_modal_and_resets() {
        let mut esc = Escalation::default();
        assert_eq!(esc.on_no(), NoOutcome::Relocate);
        assert_eq!(esc.on_no(), NoOutcome::Relocate);
        assert_eq!(esc.on_no(), NoOutcome::RelocateAndShowModal);
        assert_eq!(esc.no_clicks(), 0);
        assert_eq!(esc.on_no(), NoOutcome::Relocate);
        assert_eq!(esc.no_clicks(), 1);
    }

    #[test]
    fn first_slot_yes_escalates_like_no() {
        let mut esc = Escalation::default();
        let outcomes: Vec<_> = (0..6).map(|_| esc.on_yes(QuestionSlot::First)).collect();
        assert_eq!(
            outcomes,
            vec![
                YesOutcome::Nothing,
                YesOutcome::Nothing,
                YesOutcome::ShowModal,
                YesOutcome::Nothing,
                YesOutcome::Nothing,
                YesOutcome::ShowModal,
            ]
        );
    }

    #[test]
    fn third_slot_yes_always_ends() {
        let mut esc = Escalation::default();
        esc.on_yes(QuestionSlot::First);
        esc.on_yes(QuestionSlot::First);
        assert_eq!(esc.on_yes(QuestionSlot::Third), YesOutcome::Finale);
        assert_eq!(esc.on_yes(QuestionSlot::Third), YesOutcome::Finale);
        assert_eq!(esc.yes_clicks(), 4);
    }

    #[test]
    fn counters_are_independent() {
        let mut esc = Escalation::default();
        esc.on_no();
        esc.on_no();
        assert_eq!(esc.on_yes(QuestionSlot::First), YesOutcome::Nothing);
        assert_eq!(esc.no_clicks(), 2);
        assert_eq!(esc.yes_clicks(), 1);
    }

    #[test]
    fn relocation_stays_inside_viewport() {
        assert_eq!(relocation((800.0, 600.0), (100.0, 40.0), (0.0, 0.0)), (0.0, 0.0));
        let (x, y) = relocation((800.0, 600.0), (100.0, 40.0), (0.999, 0.999));
        assert!(x < 700.0 && y < 560.0);
        // Button wider than the viewport pins to the edge.
        assert_eq!(relocation((50.0, 50.0), (100.0, 100.0), (0.5, 0.5)), (0.0, 0.0));
    }
}
