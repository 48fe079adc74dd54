pub mod config;
pub mod control;
pub mod error;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod logging;
pub mod render;
pub mod tree;
pub mod types;

pub use config::TreeConfig;
pub use control::{
    Control, ControlId, EventContext, InteractionState, PaintContext, Panel, Widget,
};
pub use error::{RangeError, TreeError};
pub use event::{Event, InputFrame, InputState, Key, KeyInput, Modifiers, MouseButton};
pub use focus::{Arbiter, FocusChange};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{Grid, GridPlacement, LayoutPhase, Point, Rect, Size, Track};
pub use logging::{init_file_logger, LogInitError};
pub use render::{DrawCommand, DrawList, Painter, TextureId};
pub use tree::{ControlTree, TreeEvent};
pub use types::*;
