use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtBtn,
    MouseEvent, MouseEventKind,
};
use overlaykit::{
    hit_test, hit_test_focusable, Arbiter, Control, ControlId, ControlTree, Event, EventContext,
    HoverPolicy, InputFrame, InputState, InteractionState, Key, KeyInput, Modifiers, Painter, PaintContext,
    Panel, Point, TreeConfig, TreeError, Widget,
};

fn scene() -> (ControlTree, ControlId) {
    let mut tree = ControlTree::new();
    let root = tree.insert(Control::panel().size(200.0, 200.0));
    (tree, root)
}

fn button(tree: &mut ControlTree, parent: ControlId, x: f32, y: f32, w: f32, h: f32) -> ControlId {
    tree.add(
        parent,
        Control::leaf(Panel).position(x, y).size(w, h).focusable(true),
    )
    .unwrap()
}

fn names(events: &[Event], id: ControlId) -> Vec<&'static str> {
    events
        .iter()
        .filter(|event| event.target() == id)
        .map(|event| match event {
            Event::Enter { .. } => "enter",
            Event::Leave { .. } => "leave",
            Event::Move { .. } => "move",
            Event::Press { .. } => "press",
            Event::Release { .. } => "release",
            Event::Click { .. } => "click",
            Event::Key { .. } => "key",
            Event::Focus { .. } => "focus",
            Event::Blur { .. } => "blur",
        })
        .collect()
}

fn clicks(events: &[Event]) -> Vec<ControlId> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Click { target, .. } => Some(*target),
            _ => None,
        })
        .collect()
}

fn focus_changes(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches!(event, Event::Focus { .. } | Event::Blur { .. }))
        .cloned()
        .collect()
}

/// Press and release at the same point. Returns the release tick's events.
fn click(
    tree: &mut ControlTree,
    root: ControlId,
    arbiter: &mut Arbiter,
    x: f32,
    y: f32,
) -> Vec<Event> {
    tree.update(root, &InputFrame::at(x, y).down(true), arbiter)
        .unwrap();
    tree.update(root, &InputFrame::at(x, y), arbiter).unwrap()
}

/// Records which hooks fired.
struct Recorder {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Widget for Recorder {
    fn paint(&self, _cx: &PaintContext<'_>, _painter: &mut dyn Painter) {}

    fn on_enter(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("enter");
    }

    fn on_leave(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("leave");
    }

    fn on_move(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("move");
    }

    fn on_press(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("press");
    }

    fn on_release(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("release");
    }

    fn on_click(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("click");
    }

    fn on_key(&mut self, _cx: &EventContext, _key: &KeyInput) {
        self.log.borrow_mut().push("key");
    }

    fn on_focus(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("focus");
    }

    fn on_blur(&mut self, _cx: &EventContext) {
        self.log.borrow_mut().push("blur");
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 30.0, 3.0);

    assert_eq!(hit_test(&tree, root, Point::new(15.0, 11.0)), Some(btn));
    assert_eq!(hit_test(&tree, root, Point::new(5.0, 5.0)), Some(root));
    assert_eq!(hit_test(&tree, root, Point::new(250.0, 250.0)), None);
}

#[test]
fn test_hit_test_far_edges_are_exclusive() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 30.0, 10.0);

    assert_eq!(hit_test(&tree, root, Point::new(10.0, 10.0)), Some(btn));
    assert_eq!(hit_test(&tree, root, Point::new(40.0, 15.0)), Some(root));
    assert_eq!(hit_test(&tree, root, Point::new(20.0, 20.0)), Some(root));
}

#[test]
fn test_hit_test_overlapping_controls() {
    // Later children are on top
    let (mut tree, root) = scene();
    let bottom = button(&mut tree, root, 10.0, 10.0, 50.0, 50.0);
    let top = button(&mut tree, root, 30.0, 30.0, 50.0, 50.0);

    assert_eq!(hit_test(&tree, root, Point::new(40.0, 40.0)), Some(top));
    assert_eq!(hit_test(&tree, root, Point::new(15.0, 15.0)), Some(bottom));
}

#[test]
fn test_hit_test_nested_uses_parent_offsets() {
    let (mut tree, root) = scene();
    let panel = tree
        .add(root, Control::panel().position(50.0, 50.0).size(100.0, 100.0))
        .unwrap();
    let inner = button(&mut tree, panel, 10.0, 10.0, 20.0, 20.0);

    assert_eq!(hit_test(&tree, root, Point::new(65.0, 65.0)), Some(inner));
    assert_eq!(hit_test(&tree, root, Point::new(15.0, 15.0)), Some(root));
    assert_eq!(hit_test(&tree, root, Point::new(55.0, 55.0)), Some(panel));
}

#[test]
fn test_hit_test_skips_hidden() {
    let (mut tree, root) = scene();
    let bottom = button(&mut tree, root, 10.0, 10.0, 50.0, 50.0);
    let top = button(&mut tree, root, 10.0, 10.0, 50.0, 50.0);

    tree.set_visible(top, false).unwrap();
    assert_eq!(hit_test(&tree, root, Point::new(20.0, 20.0)), Some(bottom));

    tree.set_visible(root, false).unwrap();
    assert_eq!(hit_test(&tree, root, Point::new(20.0, 20.0)), None);
}

#[test]
fn test_hit_test_focusable() {
    let (mut tree, root) = scene();
    let panel = tree
        .add(root, Control::panel().position(0.0, 0.0).size(100.0, 100.0))
        .unwrap();
    let input = button(&mut tree, panel, 10.0, 10.0, 30.0, 10.0);

    assert_eq!(hit_test_focusable(&tree, root, Point::new(15.0, 15.0)), Some(input));
    // Neither the panel nor the root is focusable
    assert_eq!(hit_test_focusable(&tree, root, Point::new(80.0, 80.0)), None);
    assert_eq!(hit_test(&tree, root, Point::new(80.0, 80.0)), Some(panel));
}

#[test]
fn test_child_outside_parent_is_clipped_in_update() {
    let (mut tree, root) = scene();
    let panel = tree
        .add(root, Control::panel().position(0.0, 0.0).size(50.0, 50.0))
        .unwrap();
    let child = button(&mut tree, panel, 40.0, 40.0, 30.0, 30.0);
    let mut arbiter = Arbiter::new();

    // (60, 60) is inside the child's own rect but outside its parent
    assert_eq!(hit_test(&tree, root, Point::new(60.0, 60.0)), Some(root));

    let events = click(&mut tree, root, &mut arbiter, 60.0, 60.0);
    assert!(clicks(&events).is_empty());
    assert!(names(&events, child).is_empty());
    assert_eq!(tree.interaction(child).unwrap(), InteractionState::Idle);
    assert_eq!(arbiter.focused(), None);

    // The visible corner still works
    let events = click(&mut tree, root, &mut arbiter, 45.0, 45.0);
    assert_eq!(clicks(&events), [child]);
}

// ============================================================================
// Pointer State Machine
// ============================================================================

#[test]
fn test_enter_move_leave() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["enter", "move"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Hovered);

    // Move fires every tick the pointer is inside
    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["move"]);

    let events = tree.update(root, &InputFrame::at(100.0, 100.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["leave"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Idle);
}

#[test]
fn test_press_release_click() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    let events = tree
        .update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    assert_eq!(names(&events, btn), ["enter", "move", "press"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Pressed);

    // Holding the button is not another press
    let events = tree
        .update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    assert_eq!(names(&events, btn), ["move"]);

    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["move", "release", "focus", "click"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Hovered);
    assert_eq!(arbiter.focused(), Some(btn));
}

#[test]
fn test_hooks_fire_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (mut tree, root) = scene();
    tree.add(
        root,
        Control::leaf(Recorder { log: log.clone() })
            .position(10.0, 10.0)
            .size(50.0, 20.0)
            .focusable(true),
    )
    .unwrap();
    let mut arbiter = Arbiter::new();

    click(&mut tree, root, &mut arbiter, 20.0, 15.0);
    tree.update(root, &InputFrame::at(150.0, 150.0), &mut arbiter)
        .unwrap();

    assert_eq!(
        *log.borrow(),
        ["enter", "move", "press", "move", "release", "focus", "click", "leave"]
    );
}

#[test]
fn test_release_outside_is_not_a_click() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    tree.update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    let events = tree
        .update(root, &InputFrame::at(100.0, 100.0).down(true), &mut arbiter)
        .unwrap();
    assert_eq!(names(&events, btn), ["leave"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Pressed);

    let events = tree.update(root, &InputFrame::at(100.0, 100.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["release"]);
    assert!(clicks(&events).is_empty());
    assert_eq!(arbiter.focused(), None);
}

#[test]
fn test_press_requires_down_edge_inside() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    tree.update(root, &InputFrame::at(100.0, 100.0).down(true), &mut arbiter)
        .unwrap();
    let events = tree
        .update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    assert_eq!(names(&events, btn), ["enter", "move"]);

    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["move"]);
    assert!(clicks(&events).is_empty());
}

#[test]
fn test_hold_while_pressed_defers_leave() {
    let (mut tree, root) = scene();
    let btn = tree
        .add(
            root,
            Control::leaf(Panel)
                .position(10.0, 10.0)
                .size(50.0, 20.0)
                .focusable(true)
                .hover_policy(HoverPolicy::HoldWhilePressed),
        )
        .unwrap();
    let mut arbiter = Arbiter::new();

    tree.update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    let events = tree
        .update(root, &InputFrame::at(100.0, 100.0).down(true), &mut arbiter)
        .unwrap();
    assert!(names(&events, btn).is_empty());
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Pressed);

    let events = tree.update(root, &InputFrame::at(100.0, 100.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["release", "leave"]);
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Idle);
    assert!(clicks(&events).is_empty());
}

#[test]
fn test_default_hover_policy_comes_from_config() {
    let mut tree =
        ControlTree::with_config(TreeConfig::new().hover_policy(HoverPolicy::HoldWhilePressed));
    let plain = tree.insert(Control::leaf(Panel));
    let tracking = tree.insert(Control::leaf(Panel).hover_policy(HoverPolicy::Track));

    assert_eq!(tree.hover_policy(plain).unwrap(), HoverPolicy::HoldWhilePressed);
    assert_eq!(tree.hover_policy(tracking).unwrap(), HoverPolicy::Track);
}

#[test]
fn test_unfocused_host_produces_no_events() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    let frame = InputFrame::at(20.0, 15.0).down(true).host_focused(false);
    let events = tree.update(root, &frame, &mut arbiter).unwrap();
    assert!(events.is_empty());
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Idle);
}

#[test]
fn test_hiding_resets_interaction_silently() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    tree.update(root, &InputFrame::at(20.0, 15.0).down(true), &mut arbiter)
        .unwrap();
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Pressed);

    tree.set_visible(btn, false).unwrap();
    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert!(names(&events, btn).is_empty());
    assert!(clicks(&events).is_empty());
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Idle);

    tree.set_visible(btn, true).unwrap();
    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["enter", "move"]);
}

#[test]
fn test_disabling_container_resets_subtree() {
    let (mut tree, root) = scene();
    let panel = tree
        .add(root, Control::panel().position(0.0, 0.0).size(100.0, 100.0))
        .unwrap();
    let btn = button(&mut tree, panel, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Hovered);

    tree.set_enabled(panel, false).unwrap();
    let events = tree.update(root, &InputFrame::at(20.0, 15.0), &mut arbiter).unwrap();
    assert!(names(&events, btn).is_empty());
    assert!(names(&events, panel).is_empty());
    assert_eq!(tree.interaction(btn).unwrap(), InteractionState::Idle);
}

// ============================================================================
// Click Arbitration
// ============================================================================

#[test]
fn test_topmost_overlapping_control_wins() {
    let (mut tree, root) = scene();
    let a = button(&mut tree, root, 10.0, 10.0, 100.0, 100.0);
    let b = button(&mut tree, root, 50.0, 50.0, 100.0, 100.0);
    let mut arbiter = Arbiter::new();

    let events = click(&mut tree, root, &mut arbiter, 60.0, 60.0);

    assert_eq!(clicks(&events), [b]);
    assert_eq!(arbiter.focused(), Some(b));
    // A still sees its own release
    assert_eq!(names(&events, a), ["move", "release"]);
    assert!(arbiter.candidates().is_empty());
}

#[test]
fn test_nested_child_wins_over_container() {
    let (mut tree, root) = scene();
    let panel = tree
        .add(
            root,
            Control::panel()
                .position(10.0, 10.0)
                .size(100.0, 100.0)
                .focusable(true),
        )
        .unwrap();
    let inner = button(&mut tree, panel, 10.0, 10.0, 20.0, 20.0);
    let mut arbiter = Arbiter::new();

    let events = click(&mut tree, root, &mut arbiter, 25.0, 25.0);
    assert_eq!(clicks(&events), [inner]);

    let events = click(&mut tree, root, &mut arbiter, 80.0, 80.0);
    assert_eq!(clicks(&events), [panel]);
    assert_eq!(arbiter.focused(), Some(panel));
}

#[test]
fn test_non_focusable_controls_never_click() {
    let (mut tree, root) = scene();
    let label = tree
        .add(root, Control::leaf(Panel).position(10.0, 10.0).size(50.0, 20.0))
        .unwrap();
    let mut arbiter = Arbiter::new();

    let events = click(&mut tree, root, &mut arbiter, 20.0, 15.0);
    assert_eq!(names(&events, label), ["move", "release"]);
    assert!(clicks(&events).is_empty());
    assert_eq!(arbiter.focused(), None);
}

#[test]
fn test_non_focusable_overlay_passes_click_through() {
    let (mut tree, root) = scene();
    let target = button(&mut tree, root, 10.0, 10.0, 50.0, 50.0);
    tree.add(root, Control::leaf(Panel).position(10.0, 10.0).size(50.0, 50.0))
        .unwrap();
    let mut arbiter = Arbiter::new();

    let events = click(&mut tree, root, &mut arbiter, 20.0, 20.0);
    assert_eq!(clicks(&events), [target]);
}

#[test]
fn test_independent_roots_keep_separate_focus() {
    let mut tree = ControlTree::new();
    let left = tree.insert(Control::panel().size(100.0, 100.0));
    let right = tree.insert(Control::panel().size(100.0, 100.0));
    let a = button(&mut tree, left, 0.0, 0.0, 50.0, 50.0);
    let b = button(&mut tree, right, 0.0, 0.0, 50.0, 50.0);
    let mut left_arbiter = Arbiter::new();
    let mut right_arbiter = Arbiter::new();

    let down = InputFrame::at(10.0, 10.0).down(true);
    let up = InputFrame::at(10.0, 10.0);
    tree.update(left, &down, &mut left_arbiter).unwrap();
    tree.update(right, &down, &mut right_arbiter).unwrap();
    let left_events = tree.update(left, &up, &mut left_arbiter).unwrap();
    let right_events = tree.update(right, &up, &mut right_arbiter).unwrap();

    assert_eq!(clicks(&left_events), [a]);
    assert_eq!(clicks(&right_events), [b]);
    assert_eq!(left_arbiter.focused(), Some(a));
    assert_eq!(right_arbiter.focused(), Some(b));
}

#[test]
fn test_arbiter_picks_last_focusable_and_clears() {
    let mut tree = ControlTree::new();
    let a = tree.insert(Control::leaf(Panel).focusable(true));
    let b = tree.insert(Control::leaf(Panel).focusable(true));
    let c = tree.insert(Control::leaf(Panel));
    let mut arbiter = Arbiter::new();

    arbiter.register(a);
    arbiter.register(b);
    arbiter.register(b);
    arbiter.register(c);
    assert_eq!(arbiter.candidates(), [a, b, c]);

    let focusable = |id: ControlId| tree.is_focusable(id).unwrap_or(false);
    assert_eq!(arbiter.arbitrate(focusable), Some(b));
    assert!(arbiter.candidates().is_empty());

    arbiter.register(c);
    assert_eq!(arbiter.arbitrate(focusable), None);
    assert!(arbiter.candidates().is_empty());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_transfer_fires_once() {
    let (mut tree, root) = scene();
    let a = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let b = button(&mut tree, root, 10.0, 100.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    let events = click(&mut tree, root, &mut arbiter, 20.0, 15.0);
    assert_eq!(focus_changes(&events), [Event::Focus { target: a }]);

    let events = click(&mut tree, root, &mut arbiter, 20.0, 105.0);
    assert_eq!(
        focus_changes(&events),
        [Event::Blur { target: a }, Event::Focus { target: b }]
    );

    // Clicking the focus holder again clicks but does not refocus
    let events = click(&mut tree, root, &mut arbiter, 20.0, 105.0);
    assert!(focus_changes(&events).is_empty());
    assert_eq!(clicks(&events), [b]);
}

#[test]
fn test_set_focus_programmatically() {
    let (mut tree, root) = scene();
    let a = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let label = tree.add(root, Control::leaf(Panel)).unwrap();
    let mut arbiter = Arbiter::new();

    let events = tree.set_focus(&mut arbiter, Some(a)).unwrap();
    assert_eq!(events, [Event::Focus { target: a }]);
    assert!(arbiter.is_focused(a));

    assert!(tree.set_focus(&mut arbiter, Some(a)).unwrap().is_empty());

    assert_eq!(
        tree.set_focus(&mut arbiter, Some(label)),
        Err(TreeError::NotFocusable(label))
    );
    assert_eq!(arbiter.focused(), Some(a));

    let events = tree.set_focus(&mut arbiter, None).unwrap();
    assert_eq!(events, [Event::Blur { target: a }]);
    assert_eq!(arbiter.focused(), None);
}

#[test]
fn test_focus_transfer_fires_focus_hooks_only() {
    let (mut tree, root) = scene();
    let a_log = Rc::new(RefCell::new(Vec::new()));
    let b_log = Rc::new(RefCell::new(Vec::new()));
    let a = tree
        .add(
            root,
            Control::leaf(Recorder { log: a_log.clone() })
                .position(10.0, 10.0)
                .size(50.0, 20.0)
                .focusable(true),
        )
        .unwrap();
    let b = tree
        .add(
            root,
            Control::leaf(Recorder { log: b_log.clone() })
                .position(10.0, 100.0)
                .size(50.0, 20.0)
                .focusable(true),
        )
        .unwrap();
    let mut arbiter = Arbiter::new();
    tree.update(root, &InputFrame::at(150.0, 150.0), &mut arbiter)
        .unwrap();

    tree.set_focus(&mut arbiter, Some(a)).unwrap();
    let events = tree.set_focus(&mut arbiter, Some(b)).unwrap();
    let events = [events, tree.update(root, &InputFrame::at(150.0, 150.0), &mut arbiter).unwrap()]
        .concat();

    assert_eq!(*a_log.borrow(), ["focus", "blur"]);
    assert_eq!(*b_log.borrow(), ["focus"]);
    assert_eq!(names(&events, a), ["blur"]);
    assert_eq!(names(&events, b), ["focus"]);
}

#[test]
fn test_released_focus_holder_is_dropped() {
    let (mut tree, root) = scene();
    let a = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let b = button(&mut tree, root, 10.0, 100.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();
    tree.set_focus(&mut arbiter, Some(a)).unwrap();

    tree.remove_child(root, a).unwrap();
    let events = tree.update(root, &InputFrame::new(), &mut arbiter).unwrap();
    assert!(focus_changes(&events).is_empty());
    assert_eq!(arbiter.focused(), None);

    let events = tree.set_focus(&mut arbiter, Some(b)).unwrap();
    assert_eq!(events, [Event::Focus { target: b }]);
}

#[test]
fn test_keys_go_to_focused_control() {
    let (mut tree, root) = scene();
    let a = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let b = button(&mut tree, root, 10.0, 100.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();
    tree.set_focus(&mut arbiter, Some(a)).unwrap();

    let frame = InputFrame::at(150.0, 150.0)
        .key(KeyInput::new(Key::Char('h')))
        .key(KeyInput::new(Key::Enter));
    let events = tree.update(root, &frame, &mut arbiter).unwrap();

    let keys: Vec<Key> = events
        .iter()
        .filter_map(|event| match event {
            Event::Key { target, input } if *target == a => Some(input.key),
            _ => None,
        })
        .collect();
    assert_eq!(keys, [Key::Char('h'), Key::Enter]);
    assert!(names(&events, b).is_empty());
}

#[test]
fn test_keys_without_focus_are_dropped() {
    let (mut tree, root) = scene();
    button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();

    let frame = InputFrame::at(150.0, 150.0).key(KeyInput::new(Key::Tab));
    let events = tree.update(root, &frame, &mut arbiter).unwrap();
    assert!(!events.iter().any(|event| matches!(event, Event::Key { .. })));
}

// ============================================================================
// Input Source
// ============================================================================

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_input_state_folds_terminal_events() {
    let mut input = InputState::new();
    input.apply_all(&[
        mouse(MouseEventKind::Moved, 3, 4),
        mouse(MouseEventKind::Down(CtBtn::Left), 5, 6),
        CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
        CrosstermEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char('b'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )),
    ]);

    let frame = input.take_frame();
    assert_eq!(frame.pointer, Point::new(5.0, 6.0));
    assert!(frame.pointer_down);
    assert!(frame.host_focused);
    assert_eq!(frame.keys.len(), 1);
    assert_eq!(frame.keys[0].key, Key::Char('a'));
    assert!(frame.keys[0].modifiers.ctrl);

    // Keys drain, pointer state persists
    let frame = input.take_frame();
    assert!(frame.keys.is_empty());
    assert!(frame.pointer_down);

    input.apply(&mouse(MouseEventKind::Up(CtBtn::Left), 5, 6));
    input.apply(&mouse(MouseEventKind::Down(CtBtn::Right), 5, 6));
    input.apply(&CrosstermEvent::FocusLost);
    let frame = input.take_frame();
    assert!(!frame.pointer_down);
    assert!(!frame.host_focused);
}

#[test]
fn test_input_state_drives_a_click() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();
    let mut input = InputState::new();

    input.apply(&mouse(MouseEventKind::Down(CtBtn::Left), 20, 15));
    tree.update(root, &input.take_frame(), &mut arbiter).unwrap();
    input.apply(&mouse(MouseEventKind::Up(CtBtn::Left), 20, 15));
    let events = tree.update(root, &input.take_frame(), &mut arbiter).unwrap();

    assert_eq!(clicks(&events), [btn]);
}

#[test]
fn test_key_inputs_are_hashable() {
    let ctrl_a = KeyInput {
        key: Key::Char('a'),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
    };
    let mut bindings = HashSet::new();
    bindings.insert(ctrl_a);
    bindings.insert(KeyInput::new(Key::Char('a')));
    bindings.insert(ctrl_a);

    assert_eq!(bindings.len(), 2);
    assert!(bindings.contains(&KeyInput::new(Key::Char('a'))));
}

#[test]
fn test_press_and_release_between_frames_still_clicks() {
    let (mut tree, root) = scene();
    let btn = button(&mut tree, root, 10.0, 10.0, 50.0, 20.0);
    let mut arbiter = Arbiter::new();
    let mut input = InputState::new();

    // A fast click lands entirely inside one poll
    input.apply_all(&[
        mouse(MouseEventKind::Down(CtBtn::Left), 20, 15),
        mouse(MouseEventKind::Up(CtBtn::Left), 20, 15),
    ]);
    let frame = input.take_frame();
    assert!(frame.pointer_down);
    let events = tree.update(root, &frame, &mut arbiter).unwrap();
    assert_eq!(names(&events, btn), ["enter", "move", "press"]);

    let frame = input.take_frame();
    assert!(!frame.pointer_down);
    let events = tree.update(root, &frame, &mut arbiter).unwrap();
    assert_eq!(clicks(&events), [btn]);

    let events = tree.update(root, &input.take_frame(), &mut arbiter).unwrap();
    assert!(clicks(&events).is_empty());
}
