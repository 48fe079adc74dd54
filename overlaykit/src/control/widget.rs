use super::{ControlId, InteractionState};
use crate::event::KeyInput;
use crate::layout::{Point, Rect, Size};
use crate::render::Painter;
use crate::types::Style;

/// Passed to every input hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventContext {
    pub id: ControlId,
    /// Absolute bounds of the control this tick.
    pub bounds: Rect,
    pub pointer: Point,
}

pub struct PaintContext<'a> {
    pub id: ControlId,
    /// Absolute bounds, valid once the tree has been laid out.
    pub bounds: Rect,
    pub style: &'a Style,
    pub state: InteractionState,
    pub focused: bool,
    pub enabled: bool,
}

/// The behaviour a control plugs into the tree.
///
/// Only `paint` is required. Everything else has a default: the declared size
/// for measure, a rectangle test for containment and no-op hooks.
///
/// Pointer hooks (`on_enter` through `on_click`) follow the pointer only.
/// Focus moving between controls fires `on_blur` then `on_focus`, never
/// `on_leave` or `on_enter`.
pub trait Widget {
    fn paint(&self, cx: &PaintContext<'_>, painter: &mut dyn Painter);

    /// Desired size given the space on offer. `None` keeps the declared size.
    fn measure(&self, _available: Size) -> Option<Size> {
        None
    }

    fn contains(&self, bounds: Rect, point: Point) -> bool {
        bounds.contains(point)
    }

    fn on_enter(&mut self, _cx: &EventContext) {}

    fn on_leave(&mut self, _cx: &EventContext) {}

    /// Fires every tick the pointer is inside.
    fn on_move(&mut self, _cx: &EventContext) {}

    fn on_press(&mut self, _cx: &EventContext) {}

    /// Fires on every release of a press, wherever the pointer is.
    fn on_release(&mut self, _cx: &EventContext) {}

    /// Fires only for the release that won arbitration.
    fn on_click(&mut self, _cx: &EventContext) {}

    fn on_key(&mut self, _cx: &EventContext, _key: &KeyInput) {}

    /// Fires when the control gains focus, from a click or `set_focus`.
    fn on_focus(&mut self, _cx: &EventContext) {}

    /// Fires on the previous holder when focus moves away or is cleared.
    fn on_blur(&mut self, _cx: &EventContext) {}
}

/// Plain surface: fills its background and strokes its border, if the style
/// has them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel;

impl Widget for Panel {
    fn paint(&self, cx: &PaintContext<'_>, painter: &mut dyn Painter) {
        if let Some(background) = &cx.style.background {
            painter.fill_rect(cx.bounds, background);
        }
        if let Some(border) = &cx.style.border {
            if cx.style.border_width > 0.0 {
                painter.stroke_rect(cx.bounds, border, cx.style.border_width);
            }
        }
    }
}
