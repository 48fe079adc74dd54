//! The per-tick input state machine.

use super::ControlTree;
use crate::control::{ControlId, EventContext};
use crate::error::TreeError;
use crate::event::{Event, InputFrame};
use crate::focus::{Arbiter, FocusChange};
use crate::layout::{Point, Rect};
use crate::types::HoverPolicy;

struct Tick<'a> {
    input: &'a InputFrame,
    pressed_edge: bool,
    focused: Option<ControlId>,
    released: Vec<ControlId>,
}

impl ControlTree {
    /// Run one input tick over the subtree under `root`.
    ///
    /// Each visible, enabled control is processed container first, then its
    /// children back-to-front. Releases inside a control make it a click
    /// candidate; once the walk is done the arbiter picks at most one winner,
    /// which takes focus and gets the click.
    pub fn update(
        &mut self,
        root: ControlId,
        input: &InputFrame,
        arbiter: &mut Arbiter,
    ) -> Result<Vec<Event>, TreeError> {
        self.node(root)?;
        arbiter.retain(|id| self.nodes.contains_key(id));

        let mut events = Vec::new();
        let pressed_edge = arbiter.track_pointer(input.pointer_down);
        self.pointer = input.pointer;

        if !input.host_focused {
            log::trace!("[update] host unfocused, skipping tick");
            return Ok(events);
        }

        let mut tick = Tick {
            input,
            pressed_edge,
            focused: arbiter.focused(),
            released: Vec::new(),
        };
        let origin = self.parent_origin(root);
        self.update_node(root, origin, true, &mut tick, &mut events);

        // Register in paint order so the arbiter's reverse scan meets the
        // topmost control first.
        let order = self.paint_order(root);
        let mut released = tick.released;
        released.sort_by_key(|id| order.iter().position(|o| o == id));
        for id in &released {
            arbiter.register(*id);
        }

        let winner = arbiter.arbitrate(|id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.focusable && node.is_live())
        });

        if let Some(winner) = winner {
            let change = arbiter.set_focus(Some(winner));
            self.fire_focus_change(change, &mut events);

            if let Ok(bounds) = self.absolute_bounds(winner) {
                let cx = EventContext {
                    id: winner,
                    bounds,
                    pointer: input.pointer,
                };
                self.nodes[winner].widget.on_click(&cx);
                events.push(Event::Click {
                    target: winner,
                    position: input.pointer,
                });
            }
        }

        Ok(events)
    }

    /// Move focus programmatically. `None` clears it.
    pub fn set_focus(
        &mut self,
        arbiter: &mut Arbiter,
        target: Option<ControlId>,
    ) -> Result<Vec<Event>, TreeError> {
        arbiter.retain(|id| self.nodes.contains_key(id));
        if let Some(id) = target {
            if !self.node(id)?.focusable {
                return Err(TreeError::NotFocusable(id));
            }
        }

        let mut events = Vec::new();
        let change = arbiter.set_focus(target);
        self.fire_focus_change(change, &mut events);
        Ok(events)
    }

    fn fire_focus_change(&mut self, change: Option<FocusChange>, events: &mut Vec<Event>) {
        let Some(change) = change else {
            return;
        };

        if let Some(previous) = change.previous {
            if let Ok(bounds) = self.absolute_bounds(previous) {
                let cx = self.context(previous, bounds);
                self.nodes[previous].widget.on_blur(&cx);
                events.push(Event::Blur { target: previous });
            }
        }

        if let Some(current) = change.current {
            if let Ok(bounds) = self.absolute_bounds(current) {
                let cx = self.context(current, bounds);
                self.nodes[current].widget.on_focus(&cx);
                events.push(Event::Focus { target: current });
            }
        }
    }

    fn context(&self, id: ControlId, bounds: Rect) -> EventContext {
        EventContext {
            id,
            bounds,
            pointer: self.pointer,
        }
    }

    fn update_node(
        &mut self,
        id: ControlId,
        parent_origin: Point,
        within: bool,
        tick: &mut Tick<'_>,
        events: &mut Vec<Event>,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.is_live() {
            // Hiding or disabling a control ends whatever interaction it was in.
            self.reset_interaction(id);
            return;
        }

        let bounds = node.bounds.offset(parent_origin);
        let children = node.children.clone();
        let inside = self.process(id, bounds, within, tick, events);

        // Children are clipped to their ancestors, as in hit testing.
        for child in children.into_iter().rev() {
            self.update_node(child, bounds.origin(), inside, tick, events);
        }
    }

    /// Step one control's state machine. Returns whether the pointer is
    /// inside it; `within` is false when an ancestor already excludes it.
    fn process(
        &mut self,
        id: ControlId,
        bounds: Rect,
        within: bool,
        tick: &mut Tick<'_>,
        events: &mut Vec<Event>,
    ) -> bool {
        let input = tick.input;
        let pointer = input.pointer;
        let node = &mut self.nodes[id];
        let inside = within && node.widget.contains(bounds, pointer);
        let cx = EventContext {
            id,
            bounds,
            pointer,
        };

        if inside && !node.hovered {
            node.hovered = true;
            node.widget.on_enter(&cx);
            events.push(Event::Enter { target: id });
        }

        let hold = node.pressed && node.hover_policy == HoverPolicy::HoldWhilePressed;
        if !inside && node.hovered && !hold {
            node.hovered = false;
            node.widget.on_leave(&cx);
            events.push(Event::Leave { target: id });
        }

        if inside {
            node.widget.on_move(&cx);
            events.push(Event::Move {
                target: id,
                position: pointer,
            });
        }

        if tick.pressed_edge && inside && !node.pressed {
            node.pressed = true;
            node.widget.on_press(&cx);
            events.push(Event::Press {
                target: id,
                position: pointer,
            });
        } else if !input.pointer_down && node.pressed {
            node.pressed = false;
            node.widget.on_release(&cx);
            events.push(Event::Release {
                target: id,
                position: pointer,
            });
            if inside {
                tick.released.push(id);
            } else if node.hovered {
                // Held back by HoldWhilePressed.
                node.hovered = false;
                node.widget.on_leave(&cx);
                events.push(Event::Leave { target: id });
            }
        }

        if tick.focused == Some(id) {
            for key in &input.keys {
                node.widget.on_key(&cx, key);
                events.push(Event::Key {
                    target: id,
                    input: *key,
                });
            }
        }

        log::trace!(
            "[update] {:?} inside={} state={:?}",
            id,
            inside,
            node.interaction()
        );
        inside
    }

    fn reset_interaction(&mut self, id: ControlId) {
        let mut ids = self.descendants(id);
        ids.push(id);
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                node.hovered = false;
                node.pressed = false;
            }
        }
    }
}
