use crate::api::config::ActivityConfig;
use crate::api::types::ActivityEvent;
use crate::assets::provider::AssetProvider;
use crate::core::clock::FrameClock;
use crate::core::session::{
    Session, CMD_RETURN_TO_MENU, CMD_SELECT_LETTER, CMD_SKIP_NEXT, CMD_SKIP_PREVIOUS,
};
use crate::input::queue::{InputEvent, InputQueue};
use crate::render::compose::build_frame;
use crate::render::frame::Frame;

/// Wires the session to a host shell: input queue in, composed frame and
/// flat sound/event buffers out. One `tick` per host animation frame.
///
/// Everything runs on the caller's thread; input is applied before the
/// frame's logic steps, so event handlers and the frame tick never race.
pub struct ActivityRunner<P: AssetProvider> {
    session: Session,
    provider: P,
    input: InputQueue,
    clock: FrameClock,
    frame: Frame,
    /// Flat buffer of sound event codes for host reads.
    sound_buffer: Vec<u32>,
}

impl<P: AssetProvider> ActivityRunner<P> {
    pub fn new(provider: P, config: ActivityConfig, seed: u64) -> Self {
        let clock = FrameClock::new(config.step_ms);
        Self {
            session: Session::new(config, seed),
            provider,
            input: InputQueue::new(),
            clock,
            frame: Frame::new(),
            sound_buffer: Vec::new(),
        }
    }

    /// Begin the activity on a letter (the host's picker selection).
    /// Queued as a command so the load's pronunciation and letter-loaded
    /// event land inside the next tick's output buffers.
    pub fn start(&mut self, letter: usize) {
        self.input.push(InputEvent::Custom {
            kind: CMD_SELECT_LETTER,
            a: letter as f32,
            b: 0.0,
            c: 0.0,
        });
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: apply pending input, run the fixed logic steps,
    /// rebuild the frame and the flat output buffers.
    pub fn tick(&mut self, dt_ms: f32) {
        self.session.clear_frame_data();

        // Input first: each pointer event is its own paint attempt, and the
        // most recent position wins before any logic step runs.
        for event in self.input.drain() {
            self.apply_input(event);
        }

        let steps = self.clock.accumulate(dt_ms);
        for _ in 0..steps {
            self.session.step(&self.provider);
        }

        build_frame(&self.session, &mut self.frame);

        self.sound_buffer.clear();
        for sound in &self.session.sounds {
            self.sound_buffer.push(sound.0);
        }
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.session.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.session.pointer_move(x, y),
            InputEvent::PointerUp { .. } => self.session.pointer_up(),
            InputEvent::Custom { kind, a, .. } => match kind {
                CMD_SELECT_LETTER => {
                    if a < 0.0 {
                        self.session.select_random_letter(&self.provider);
                    } else {
                        self.session.select_letter(a as usize, &self.provider);
                    }
                }
                CMD_SKIP_NEXT => self.session.skip_next(&self.provider),
                CMD_SKIP_PREVIOUS => self.session.skip_previous(&self.provider),
                CMD_RETURN_TO_MENU => self.session.stop(),
                _ => log::warn!("ignoring unknown command kind {kind}"),
            },
        }
    }

    // -- Read surface for the host --

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Sound event codes emitted during the last tick.
    pub fn sound_events(&self) -> &[u32] {
        &self.sound_buffer
    }

    /// UI events emitted during the last tick.
    pub fn events(&self) -> &[ActivityEvent] {
        &self.session.events
    }

    pub fn current_letter(&self) -> usize {
        self.session.current_letter()
    }

    pub fn remaining_targets(&self) -> usize {
        self.session.remaining_targets()
    }
}
