use glam::Vec2;

use crate::api::config::ActivityConfig;
use crate::api::types::{ActivityEvent, SoundEvent};
use crate::assets::provider::AssetProvider;
use crate::core::containment::Containment;
use crate::core::mask::GlyphMask;
use crate::core::rng::Rng;
use crate::core::sampler::TargetPixels;
use crate::core::tracer::PointerTracer;
use crate::core::transition::{Transition, TransitionTick};
use crate::render::frame::BrushMark;

// Command kinds (host shell -> core), carried by InputEvent::Custom.
// A negative `a` payload on select-letter asks for a random letter.
pub const CMD_SELECT_LETTER: u32 = 1;
pub const CMD_SKIP_NEXT: u32 = 2;
pub const CMD_SKIP_PREVIOUS: u32 = 3;
pub const CMD_RETURN_TO_MENU: u32 = 4;

// Event kinds (core -> host shell).
/// a = letter index, b = target count.
pub const EVENT_LETTER_LOADED: f32 = 1.0;
/// a = letter index.
pub const EVENT_LETTER_COMPLETE: f32 = 2.0;
pub const EVENT_MENU_REQUESTED: f32 = 3.0;

/// All state for one tracing activity: the active letter, its mask and
/// completion targets, the pointer tracer and the transition state machine.
///
/// Owned as a plain value and driven by explicit calls: pointer events as
/// they arrive, `step` once per fixed logic tick. No ambient globals.
pub struct Session {
    config: ActivityConfig,
    rng: Rng,
    letter: usize,
    containment: Containment,
    targets: TargetPixels,
    tracer: PointerTracer,
    transition: Transition,
    just_loaded: bool,
    active: bool,
    /// Brush marks stamped since the letter loaded (the strokes layer).
    marks: Vec<BrushMark>,
    fade_alpha: f32,
    /// Sound commands emitted since the last frame flush.
    pub sounds: Vec<SoundEvent>,
    /// UI events emitted since the last frame flush.
    pub events: Vec<ActivityEvent>,
}

impl Session {
    pub fn new(config: ActivityConfig, seed: u64) -> Self {
        let transition = Transition::new(config.transition_ms, config.step_ms);
        let containment = Containment::new(&config, None);
        Self {
            config,
            rng: Rng::new(seed),
            letter: 0,
            containment,
            targets: TargetPixels::empty(),
            tracer: PointerTracer::new(),
            transition,
            just_loaded: false,
            active: false,
            marks: Vec::new(),
            fade_alpha: 0.0,
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    // -- Read surface for the navigation UI --

    pub fn config(&self) -> &ActivityConfig {
        &self.config
    }

    /// Active letter index, 0-25.
    pub fn current_letter(&self) -> usize {
        self.letter
    }

    /// Completion targets still standing for the active letter.
    pub fn remaining_targets(&self) -> usize {
        self.targets.remaining()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// Whether the activity is running (false before the first letter and
    /// after a return-to-menu command).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer(&self) -> Vec2 {
        self.tracer.position()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.tracer.is_down()
    }

    pub fn marks(&self) -> &[BrushMark] {
        &self.marks
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    pub fn has_mask(&self) -> bool {
        self.containment.has_mask()
    }

    // -- Navigation commands --

    /// Start (or restart) the activity on a specific letter.
    pub fn select_letter(&mut self, letter: usize, provider: &dyn AssetProvider) {
        self.transition.cancel();
        self.letter = letter % self.config.letter_count;
        self.active = true;
        self.load_letter(provider);
    }

    /// Start the activity on a letter picked uniformly at random.
    pub fn select_random_letter(&mut self, provider: &dyn AssetProvider) {
        let letter = self.rng.next_int(self.config.letter_count as u32) as usize;
        self.select_letter(letter, provider);
    }

    /// Advance to the next letter, canceling any in-progress fade.
    pub fn skip_next(&mut self, provider: &dyn AssetProvider) {
        if !self.active {
            return;
        }
        self.transition.cancel();
        self.letter = (self.letter + 1) % self.config.letter_count;
        self.load_letter(provider);
    }

    /// Go back one letter, wrapping from the first to the last.
    /// Never passes through the transition state.
    pub fn skip_previous(&mut self, provider: &dyn AssetProvider) {
        if !self.active {
            return;
        }
        self.transition.cancel();
        self.letter = (self.letter + self.config.letter_count - 1) % self.config.letter_count;
        self.load_letter(provider);
    }

    /// Leave the activity (the host shows its menu again).
    pub fn stop(&mut self) {
        self.active = false;
        self.transition.cancel();
        self.tracer.pointer_up();
        self.sounds.push(SoundEvent::PAINT_LOOP_STOP);
        self.events.push(ActivityEvent {
            kind: EVENT_MENU_REQUESTED,
            ..Default::default()
        });
    }

    /// Reset all per-letter state atomically for the current letter index:
    /// mask, targets, strokes and fade are reassigned together.
    fn load_letter(&mut self, provider: &dyn AssetProvider) {
        let mask = provider.glyph_image(self.letter).and_then(|image| {
            GlyphMask::extract(
                image,
                self.config.canvas_width,
                self.config.canvas_height,
                self.config.mask_validation_samples,
                &mut self.rng,
            )
        });
        if mask.is_none() {
            log::warn!(
                "letter {} has no usable mask, containment falls back to center bounds",
                self.letter
            );
        }
        self.containment = Containment::new(&self.config, mask);
        self.targets =
            TargetPixels::sample(self.containment.mask(), self.config.target_cap, &mut self.rng);
        self.marks.clear();
        self.fade_alpha = 0.0;
        self.just_loaded = true;
        self.sounds.push(SoundEvent::letter(self.letter));
        self.events.push(ActivityEvent {
            kind: EVENT_LETTER_LOADED,
            a: self.letter as f32,
            b: self.targets.remaining() as f32,
            c: 0.0,
        });
        log::info!(
            "letter {} loaded with {} targets",
            self.letter,
            self.targets.remaining()
        );
    }

    // -- Pointer events, applied synchronously as they arrive --

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        let mark = self.tracer.pointer_down(
            Vec2::new(x, y),
            &self.config,
            &self.containment,
            &mut self.targets,
        );
        self.apply_paint(mark);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        let mark = self.tracer.pointer_move(
            Vec2::new(x, y),
            &self.config,
            &self.containment,
            &mut self.targets,
        );
        self.apply_paint(mark);
    }

    pub fn pointer_up(&mut self) {
        if !self.active {
            return;
        }
        self.tracer.pointer_up();
        self.sounds.push(SoundEvent::PAINT_LOOP_STOP);
    }

    fn apply_paint(&mut self, mark: Option<BrushMark>) {
        if let Some(mark) = mark {
            self.marks.push(mark);
            // Replace semantics: the host stops any running paint loop
            // before starting this one.
            self.sounds.push(SoundEvent::PAINT_LOOP_START);
        }
    }

    // -- Frame tick --

    /// One fixed logic step (one simulated frame).
    pub fn step(&mut self, provider: &dyn AssetProvider) {
        if !self.active {
            return;
        }

        if self.just_loaded {
            // Fresh letter: settle the target set from the final mask state
            self.targets = TargetPixels::sample(
                self.containment.mask(),
                self.config.target_cap,
                &mut self.rng,
            );
            self.just_loaded = false;
        }

        // Completion is only observable with the pointer lifted
        if !self.tracer.is_down()
            && self.targets.remaining() < self.config.completion_threshold
            && self.transition.begin()
        {
            self.sounds.push(SoundEvent::letter(self.letter));
            self.events.push(ActivityEvent {
                kind: EVENT_LETTER_COMPLETE,
                a: self.letter as f32,
                b: 0.0,
                c: 0.0,
            });
            log::info!(
                "letter {} complete with {} targets left",
                self.letter,
                self.targets.remaining()
            );
        }

        match self.transition.tick() {
            TransitionTick::Idle => {}
            TransitionTick::Hold => self.fade_alpha = 0.0,
            TransitionTick::Fade(alpha) => self.fade_alpha = alpha,
            TransitionTick::Finished => {
                self.fade_alpha = 0.0;
                self.letter = (self.letter + 1) % self.config.letter_count;
                self.load_letter(provider);
            }
        }
    }

    /// Drop per-frame transient data (drained by the runner each frame).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}
