//! The controller which decides when frames are drawn. It owns the parameters and the animation
//! state and is the only thing that writes to either. The display is reached through the [`Ui`]
//! trait, which reports user input as [`ControlEvent`]s and shows whatever the controller hands
//! it.

use crate::{
    figure::{Figure, build_figure},
    grid::SpatialGrid,
    params::{ParameterRange, WaveParameters},
};
use std::time::Duration;

pub const PAUSED_HINT: &str = "点击左侧“播放/暂停”按钮开始动画。";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    SetAmplitude(f64),
    SetFrequency(f64),
    SetSpeed(f64),
    TogglePlayback,
    Quit,
}

/// Whether the animation is playing, and how much simulated time has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    running: bool,
    phase: f64,
}

impl AnimationState {
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    fn toggle(&mut self) {
        self.running = !self.running;
    }

    fn advance(&mut self, dt: f64) {
        self.phase += dt;
    }
}

/// Everything the display needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub figure: Figure,
    pub params: WaveParameters,
    pub running: bool,
    pub phase: f64,
    pub hint: Option<&'static str>,
}

pub trait Ui {
    /// Replace the chart and redraw the controls. The previous frame is discarded.
    fn present(&mut self, view: View) -> anyhow::Result<()>;

    /// Input received since the last call, without blocking.
    fn poll_events(&mut self) -> anyhow::Result<Vec<ControlEvent>>;

    /// Blocks until there is at least one event.
    fn wait_for_events(&mut self) -> anyhow::Result<Vec<ControlEvent>>;

    fn sleep(&mut self, duration: Duration);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Simulated seconds between frames.
    pub time_step: f64,
    /// Wall clock time between frames.
    pub frame_delay: Duration,
    pub max_frames_per_activation: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_step: 0.05,
            frame_delay: Duration::from_millis(50),
            max_frames_per_activation: 400,
        }
    }
}

/// How an activation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Nothing more to draw until the user does something. Either the paused frame was drawn or
    /// the animation used up its frame budget.
    Idle,
    /// The animation was paused part way through, and the paused frame should be drawn straight
    /// away.
    Interrupted,
    Quit,
}

pub struct Session {
    params: WaveParameters,
    state: AnimationState,
    grid: SpatialGrid,
    config: SessionConfig,
    quit_requested: bool,
}

impl Session {
    pub fn new(
        params: WaveParameters,
        grid: SpatialGrid,
        config: SessionConfig,
    ) -> Self {
        Self {
            params,
            state: AnimationState::default(),
            grid,
            config,
            quit_requested: false,
        }
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Parameter changes take effect from the next frame drawn, including part way through an
    /// animation.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SetAmplitude(value) => {
                self.params.amplitude = ParameterRange::AMPLITUDE.quantize(value);
            }
            ControlEvent::SetFrequency(value) => {
                self.params.frequency = ParameterRange::FREQUENCY.quantize(value);
            }
            ControlEvent::SetSpeed(value) => {
                self.params.speed = ParameterRange::SPEED.quantize(value);
            }
            ControlEvent::TogglePlayback => {
                self.state.toggle();
                log::info!(
                    "{} at t = {:.2}",
                    if self.state.running { "playing" } else { "paused" },
                    self.state.phase
                );
            }
            ControlEvent::Quit => self.quit_requested = true,
        }
    }

    fn view(&self, hint: Option<&'static str>) -> View {
        View {
            figure: build_figure(&self.params, self.state.phase, &self.grid),
            params: self.params,
            running: self.state.running,
            phase: self.state.phase,
            hint,
        }
    }

    /// Draws the paused frame, or animates until paused or out of frames. Phase and running are
    /// left as they are on exit so the next activation resumes where this one stopped.
    pub fn activate(&mut self, ui: &mut impl Ui) -> anyhow::Result<Activation> {
        if self.quit_requested {
            return Ok(Activation::Quit);
        }
        if !self.state.running {
            ui.present(self.view(Some(PAUSED_HINT)))?;
            return Ok(Activation::Idle);
        }
        let mut num_frames = 0;
        while num_frames < self.config.max_frames_per_activation {
            if !self.state.running || self.quit_requested {
                break;
            }
            ui.present(self.view(None))?;
            self.state.advance(self.config.time_step);
            num_frames += 1;
            ui.sleep(self.config.frame_delay);
            for event in ui.poll_events()? {
                self.apply(event);
            }
        }
        log::debug!(
            "activation drew {} frames, t = {:.2}",
            num_frames,
            self.state.phase
        );
        Ok(if self.quit_requested {
            Activation::Quit
        } else if self.state.running {
            Activation::Idle
        } else {
            Activation::Interrupted
        })
    }

    /// Runs activations until the user quits. While idle, any input starts another activation.
    pub fn run(&mut self, ui: &mut impl Ui) -> anyhow::Result<()> {
        loop {
            match self.activate(ui)? {
                Activation::Quit => return Ok(()),
                Activation::Interrupted => (),
                Activation::Idle => {
                    for event in ui.wait_for_events()? {
                        self.apply(event);
                    }
                }
            }
        }
    }
}
