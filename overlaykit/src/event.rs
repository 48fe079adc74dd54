use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::control::ControlId;
use crate::layout::Point;

/// What happened to which control during a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer entered the control.
    Enter { target: ControlId },
    /// Pointer left the control.
    Leave { target: ControlId },
    /// Pointer is inside the control this tick.
    Move { target: ControlId, position: Point },
    Press { target: ControlId, position: Point },
    Release { target: ControlId, position: Point },
    /// The release won arbitration.
    Click { target: ControlId, position: Point },
    /// Key delivered to the focused control.
    Key { target: ControlId, input: KeyInput },
    /// Control gained focus.
    Focus { target: ControlId },
    /// Control lost focus.
    Blur { target: ControlId },
}

impl Event {
    pub fn target(&self) -> ControlId {
        match self {
            Self::Enter { target }
            | Self::Leave { target }
            | Self::Move { target, .. }
            | Self::Press { target, .. }
            | Self::Release { target, .. }
            | Self::Click { target, .. }
            | Self::Key { target, .. }
            | Self::Focus { target }
            | Self::Blur { target } => *target,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Input for one tick. Everything not present means "nothing happened".
#[derive(Debug, Clone, PartialEq)]
pub struct InputFrame {
    pub pointer: Point,
    pub pointer_down: bool,
    /// Keys in arrival order. All of them are delivered during the tick.
    pub keys: Vec<KeyInput>,
    /// Whether the host surface has input focus. Without it no control updates.
    pub host_focused: bool,
}

impl Default for InputFrame {
    fn default() -> Self {
        Self {
            pointer: Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            pointer_down: false,
            keys: Vec::new(),
            host_focused: true,
        }
    }
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer at `(x, y)`, button up.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pointer: Point::new(x, y),
            ..Self::default()
        }
    }

    pub fn pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Point::new(x, y);
        self
    }

    pub fn down(mut self, down: bool) -> Self {
        self.pointer_down = down;
        self
    }

    pub fn key(mut self, input: KeyInput) -> Self {
        self.keys.push(input);
        self
    }

    pub fn host_focused(mut self, focused: bool) -> Self {
        self.host_focused = focused;
        self
    }
}

/// Folds a stream of terminal events into per-tick [`InputFrame`]s.
///
/// Pointer position, button state and host focus persist across ticks; keys
/// are queued until the next [`take_frame`](Self::take_frame). A press is
/// latched, so a down and up folded into one tick still yield a down frame
/// followed by an up frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    frame: InputFrame,
    press_latched: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    return;
                }
                let input = KeyInput::with_modifiers(key_event.code.into(), key_event.modifiers.into());
                log::trace!("[input] queued key {:?}", input);
                self.frame.keys.push(input);
            }

            CrosstermEvent::Mouse(mouse_event) => {
                self.frame.pointer =
                    Point::new(f32::from(mouse_event.column), f32::from(mouse_event.row));
                match mouse_event.kind {
                    MouseEventKind::Down(button) if MouseButton::from(button) == MouseButton::Left => {
                        self.frame.pointer_down = true;
                        self.press_latched = true;
                    }
                    MouseEventKind::Up(button) if MouseButton::from(button) == MouseButton::Left => {
                        self.frame.pointer_down = false;
                    }
                    _ => {}
                }
            }

            CrosstermEvent::FocusGained => self.frame.host_focused = true,
            CrosstermEvent::FocusLost => self.frame.host_focused = false,

            _ => {}
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a CrosstermEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// The frame for this tick. Drains the key queue and any latched press.
    pub fn take_frame(&mut self) -> InputFrame {
        let keys = std::mem::take(&mut self.frame.keys);
        let mut frame = InputFrame {
            keys,
            ..self.frame.clone()
        };
        if std::mem::take(&mut self.press_latched) {
            frame.pointer_down = true;
        }
        frame
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
