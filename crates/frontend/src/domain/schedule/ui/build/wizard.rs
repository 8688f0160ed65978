//! The build-page wizard: a fixed linear sequence of steps with clamped
//! navigation, chrome derived purely from the current index, and
//! stale-response gating for the date-scoped step loads.

/// Remote data a step needs when it becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepData {
    None,
    FlyingShell,
    DutyShell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub data: StepData,
}

/// Navigation controls to show for a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub show_prev: bool,
    pub show_next: bool,
    pub show_build: bool,
}

/// A completed `prev_next` move: where it went and what the entered step
/// wants loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub load: StepData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    steps: Vec<Step>,
    current: usize,
}

impl Wizard {
    /// Steps must be non-empty; starts at the first step.
    pub fn new(steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");
        Self { steps, current: 0 }
    }

    /// The four steps of the schedule build page.
    pub fn build_page() -> Self {
        Self::new(vec![
            Step { label: "Start", data: StepData::None },
            Step { label: "Flying Lines", data: StepData::FlyingShell },
            Step { label: "Duties", data: StepData::DutyShell },
            Step { label: "Review", data: StepData::None },
        ])
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    /// Move one step forward or back. The target index clamps to the valid
    /// range; a move that would leave it unchanged returns None. A Some
    /// result carries the data scope of the entered step so the caller can
    /// kick off its load.
    pub fn prev_next(&mut self, delta: i32) -> Option<Transition> {
        let last = self.steps.len() - 1;
        let target = self
            .current
            .saturating_add_signed(delta as isize)
            .min(last);
        if target == self.current {
            return None;
        }
        let from = self.current;
        self.current = target;
        Some(Transition {
            from,
            to: target,
            load: self.steps[target].data,
        })
    }

    /// Which navigation controls are visible. A pure function of the
    /// current index: "previous" everywhere but the first step, "build"
    /// instead of "next" on the last one.
    pub fn chrome(&self) -> Chrome {
        let last = self.steps.len() - 1;
        Chrome {
            show_prev: self.current > 0,
            show_next: self.current < last,
            show_build: self.current == last,
        }
    }
}

/// Gate for one scope of date-scoped fetches. Every issued request gets a
/// token; only the most recently issued token is accepted, so a response
/// that arrives after a newer request was issued is dropped instead of
/// overwriting the newer data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a request about to be sent; supersedes all
    /// earlier tokens of this gate.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a response carrying this token is still the one we want.
    pub fn accepts(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_step() {
        let wizard = Wizard::build_page();
        assert_eq!(wizard.current(), 0);
        assert_eq!(wizard.step_count(), 4);
        assert_eq!(
            wizard.chrome(),
            Chrome { show_prev: false, show_next: true, show_build: false }
        );
    }

    #[test]
    fn forward_from_first_reveals_prev_and_requests_load() {
        let mut wizard = Wizard::build_page();
        let t = wizard.prev_next(1).unwrap();
        assert_eq!((t.from, t.to), (0, 1));
        assert_eq!(t.load, StepData::FlyingShell);
        assert_eq!(wizard.current(), 1);
        assert!(wizard.chrome().show_prev);
    }

    #[test]
    fn three_forward_reaches_last_and_swaps_next_for_build() {
        let mut wizard = Wizard::build_page();
        assert_eq!(wizard.prev_next(1).unwrap().load, StepData::FlyingShell);
        assert_eq!(wizard.prev_next(1).unwrap().load, StepData::DutyShell);
        let t = wizard.prev_next(1).unwrap();
        assert_eq!(t.to, 3);
        assert_eq!(t.load, StepData::None);
        let chrome = wizard.chrome();
        assert!(!chrome.show_next);
        assert!(chrome.show_build);
        assert!(chrome.show_prev);
    }

    #[test]
    fn backward_from_last_swaps_build_back_for_next() {
        let mut wizard = Wizard::build_page();
        for _ in 0..3 {
            wizard.prev_next(1);
        }
        let t = wizard.prev_next(-1).unwrap();
        assert_eq!(t.to, 2);
        assert_eq!(t.load, StepData::DutyShell);
        let chrome = wizard.chrome();
        assert!(chrome.show_next);
        assert!(!chrome.show_build);
    }

    #[test]
    fn clamps_at_both_boundaries() {
        let mut wizard = Wizard::build_page();
        assert!(wizard.prev_next(-1).is_none());
        assert_eq!(wizard.current(), 0);

        for _ in 0..3 {
            wizard.prev_next(1);
        }
        assert!(wizard.prev_next(1).is_none());
        assert_eq!(wizard.current(), 3);
    }

    #[test]
    fn boundary_states_are_not_absorbing() {
        let mut wizard = Wizard::build_page();
        wizard.prev_next(1);
        wizard.prev_next(-1);
        assert_eq!(wizard.current(), 0);
        assert!(wizard.prev_next(1).is_some());
    }

    #[test]
    fn stale_response_is_dropped() {
        // fetch for day D, then day D+1 before D resolves
        let mut gate = RequestGate::new();
        let token_d = gate.begin();
        let token_d1 = gate.begin();

        // D+1 resolves first and is accepted
        assert!(gate.accepts(token_d1));
        // D's late response must not overwrite it
        assert!(!gate.accepts(token_d));
    }

    #[test]
    fn reissued_scope_supersedes_navigated_away_load() {
        let mut gate = RequestGate::new();
        let stale = gate.begin();
        // user navigated away and back, triggering a new load
        let fresh = gate.begin();
        assert!(!gate.accepts(stale));
        assert!(gate.accepts(fresh));
    }
}
