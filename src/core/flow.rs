//! Linear question flow: Q1 -> Q2 -> Q3 -> celebration.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    First,
    Second,
    Third,
    Celebration,
}

impl Stage {
    /// Element id of the panel that represents this stage.
    pub fn panel_id(self) -> &'static str {
        match self {
            Stage::First => "question1",
            Stage::Second => "question2",
            Stage::Third => "question3",
            Stage::Celebration => "celebration",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Celebration)
    }
}

/// Forward controls. Evasive "no" buttons are deliberately absent: they
/// never move the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    FirstYes,
    SecondNext,
    ThirdYes,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::FirstYes, Control::SecondNext, Control::ThirdYes];

    pub fn target(self) -> Stage {
        match self {
            Control::FirstYes => Stage::Second,
            Control::SecondNext => Stage::Third,
            Control::ThirdYes => Stage::Celebration,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Control::FirstYes => "yesBtn1",
            Control::SecondNext => "nextBtn",
            Control::ThirdYes => "yesBtn3",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuestionFlow {
    stage: Stage,
}

impl QuestionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Move to the control's target stage. Before the celebration the
    /// outcome depends only on the control, so repeated or out-of-order
    /// triggers are harmless. No control leaves the celebration.
    pub fn trigger(&mut self, control: Control) -> Stage {
        if self.stage.is_terminal() {
            log::debug!("[flow] {:?} ignored at {:?}", control, self.stage);
            return self.stage;
        }
        let next = control.target();
        if next != self.stage {
            log::info!("[flow] {:?} -> {:?}", self.stage, next);
        }
        self.stage = next;
        next
    }
}
