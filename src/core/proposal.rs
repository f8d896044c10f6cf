use super::anim::{
    transition_progress, Presence, CELEBRATION_HEART_PULSE, CELEBRATION_HEART_WIGGLE,
    PROMPT_HEART_PULSE,
};
use super::burst::BurstSession;
use super::confetti::ConfettiSystem;
use super::constants::CARD_TRANSITION_MS;
use super::evasive::EvasiveControl;
use super::hearts::HeartField;
use super::rng::RandomSource;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalState {
    Unanswered,
    Accepted,
}

/// Which card is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardView {
    Prompt,
    Celebration,
}

/// Cross-fade between the two cards. The prompt finishes leaving before the
/// celebration starts entering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardStage {
    PromptEntering { since_ms: f64 },
    Prompt,
    PromptExiting { since_ms: f64 },
    CelebrationEntering { since_ms: f64 },
    Celebration,
}

impl CardStage {
    pub fn view(&self) -> CardView {
        match self {
            CardStage::PromptEntering { .. } | CardStage::Prompt | CardStage::PromptExiting { .. } => {
                CardView::Prompt
            }
            CardStage::CelebrationEntering { .. } | CardStage::Celebration => CardView::Celebration,
        }
    }

    pub fn presence(&self, now_ms: f64) -> Presence {
        match *self {
            CardStage::PromptEntering { since_ms } | CardStage::CelebrationEntering { since_ms } => {
                Presence::at(transition_progress(since_ms, now_ms, CARD_TRANSITION_MS))
            }
            CardStage::PromptExiting { since_ms } => {
                Presence::at(1.0 - transition_progress(since_ms, now_ms, CARD_TRANSITION_MS))
            }
            CardStage::Prompt | CardStage::Celebration => Presence::SHOWN,
        }
    }

    /// Start fading the prompt out. An unfinished enter is reversed from
    /// its current progress.
    fn exit_prompt(self, now_ms: f64) -> Self {
        let since_ms = match self {
            CardStage::PromptEntering { since_ms } => {
                let entered_ms = (now_ms - since_ms).clamp(0.0, CARD_TRANSITION_MS);
                now_ms - (CARD_TRANSITION_MS - entered_ms)
            }
            _ => now_ms,
        };
        CardStage::PromptExiting { since_ms }
    }

    /// Move past any transition that has run its course.
    fn settle(self, now_ms: f64) -> Self {
        let done = |since_ms: f64| now_ms - since_ms >= CARD_TRANSITION_MS;
        match self {
            CardStage::PromptEntering { since_ms } if done(since_ms) => CardStage::Prompt,
            CardStage::PromptExiting { since_ms } if done(since_ms) => {
                CardStage::CelebrationEntering {
                    since_ms: since_ms + CARD_TRANSITION_MS,
                }
                .settle(now_ms)
            }
            CardStage::CelebrationEntering { since_ms } if done(since_ms) => CardStage::Celebration,
            other => other,
        }
    }
}

/// What a single frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub hearts_replaced: u32,
    pub confetti_calls: u32,
}

/// Top-level card state: the heart field, the prompt with its evasive
/// button, and the celebration that follows acceptance.
///
/// Typical usage:
/// - Construct with `ProposalApp::mount(viewport, now_ms, rng)`
/// - Call `frame(now_ms, dt)` once per animation frame
/// - Route input to `on_decline_proximity`, `on_decline_activate`, `accept`
///   and `restart`
pub struct ProposalApp<R> {
    rng: R,
    state: ProposalState,
    field: HeartField,
    evasive: Option<EvasiveControl>,
    burst: Option<BurstSession>,
    confetti: ConfettiSystem,
    stage: CardStage,
    viewport: Vec2,
    mounted_at_ms: f64,
    accepted_at_ms: Option<f64>,
}

impl<R: RandomSource> ProposalApp<R> {
    pub fn mount(viewport: Vec2, now_ms: f64, rng: R) -> Self {
        Self::mount_from(viewport, now_ms, 0, rng)
    }

    fn mount_from(viewport: Vec2, now_ms: f64, first_heart_id: u64, mut rng: R) -> Self {
        let field = HeartField::mount(viewport.y, now_ms, first_heart_id, &mut rng);
        Self {
            rng,
            state: ProposalState::Unanswered,
            field,
            evasive: Some(EvasiveControl::new()),
            burst: None,
            confetti: ConfettiSystem::new(),
            stage: CardStage::PromptEntering { since_ms: now_ms },
            viewport,
            mounted_at_ms: now_ms,
            accepted_at_ms: None,
        }
    }

    /// Accept the proposal. Returns false if it was already accepted.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if self.state != ProposalState::Unanswered {
            return false;
        }
        self.state = ProposalState::Accepted;
        self.accepted_at_ms = Some(now_ms);
        let mut burst = BurstSession::start(now_ms);
        log::info!("[flow] accepted; burst runs until {:.0}", burst.end_ms());
        // first emission lands with the click, the rest follow per frame
        if let Some(call) = burst.next_call(now_ms, &mut self.rng) {
            self.confetti.fire(&call, self.viewport, &mut self.rng);
        }
        self.burst = Some(burst);
        self.stage = self.stage.exit_prompt(now_ms);
        true
    }

    /// Reinitialize everything as if the page had just loaded.
    ///
    /// Heart ids keep counting up so the fresh window never reuses an id.
    pub fn restart(&mut self, now_ms: f64, viewport: Vec2) {
        self.field.unmount();
        if let Some(burst) = self.burst.as_mut() {
            burst.cancel();
        }
        let next_id = self.field.next_id();
        self.field = HeartField::mount(viewport.y, now_ms, next_id, &mut self.rng);
        self.state = ProposalState::Unanswered;
        self.evasive = Some(EvasiveControl::new());
        self.burst = None;
        self.confetti.clear();
        self.stage = CardStage::PromptEntering { since_ms: now_ms };
        self.viewport = viewport;
        self.mounted_at_ms = now_ms;
        self.accepted_at_ms = None;
        log::info!("[flow] restarted");
    }

    /// Hover, touch-start or focus on the decline button.
    pub fn on_decline_proximity(&mut self) -> Option<Vec2> {
        let evasive = self.evasive.as_mut()?;
        Some(evasive.on_proximity(&mut self.rng))
    }

    /// A click that actually reached the decline button. Changes nothing.
    pub fn on_decline_activate(&self) {
        if let Some(evasive) = &self.evasive {
            evasive.on_activate();
        }
    }

    pub fn frame(&mut self, now_ms: f64, dt: Duration) -> FrameReport {
        let mut report = FrameReport {
            hearts_replaced: self.field.tick(dt, now_ms, &mut self.rng),
            ..FrameReport::default()
        };

        if let Some(evasive) = self.evasive.as_mut() {
            evasive.step(dt.as_secs_f32());
        }

        if let Some(burst) = self.burst.as_mut() {
            if let Some(call) = burst.next_call(now_ms, &mut self.rng) {
                self.confetti.fire(&call, self.viewport, &mut self.rng);
                report.confetti_calls += 1;
            }
        }
        self.confetti.tick();

        self.stage = self.stage.settle(now_ms);
        if self.stage.view() == CardView::Celebration && self.evasive.is_some() {
            // prompt has left the screen
            self.evasive = None;
        }
        report
    }

    /// Track the viewport for confetti origins. The heart fall target keeps
    /// the height sampled at mount.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }
}

impl<R> ProposalApp<R> {
    /// Scale and rotation (degrees) of the heart icon on the visible card.
    pub fn heart_icon(&self, now_ms: f64) -> (f32, f32) {
        match (self.stage.view(), self.accepted_at_ms) {
            (CardView::Celebration, Some(accepted_at_ms)) => {
                let t = ((now_ms - accepted_at_ms) / 1000.0) as f32;
                (CELEBRATION_HEART_PULSE.sample(t), CELEBRATION_HEART_WIGGLE.sample(t))
            }
            _ => {
                let t = ((now_ms - self.mounted_at_ms) / 1000.0) as f32;
                (PROMPT_HEART_PULSE.sample(t), 0.0)
            }
        }
    }

    pub fn state(&self) -> ProposalState {
        self.state
    }

    pub fn field(&self) -> &HeartField {
        &self.field
    }

    pub fn evasive(&self) -> Option<&EvasiveControl> {
        self.evasive.as_ref()
    }

    pub fn burst(&self) -> Option<&BurstSession> {
        self.burst.as_ref()
    }

    pub fn confetti(&self) -> &ConfettiSystem {
        &self.confetti
    }

    pub fn stage(&self) -> CardStage {
        self.stage
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
