//! Everything about the standing wave demonstrator that doesn't need a display. The physics
//! (sampling the two travelling waves and locating the nodes of their sum), a description of the
//! chart drawn each frame, and the controller which decides when frames get drawn. The graphical
//! side lives in the `standing_wave_widgets` and `standing_wave_app` crates.

pub mod figure;
pub mod grid;
pub mod nodes;
pub mod params;
pub mod sampler;
pub mod session;

pub use figure::{Figure, build_figure};
pub use grid::SpatialGrid;
pub use nodes::locate_nodes;
pub use params::{ParameterRange, WaveParameters};
pub use sampler::{WaveSamples, sample_waves};
pub use session::{
    Activation, AnimationState, ControlEvent, PAUSED_HINT, Session,
    SessionConfig, Ui, View,
};
