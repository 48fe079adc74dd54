//! A 3x2 grid of buttons driven by terminal mouse input.
//!
//! Click a button to focus it, type to send it keys, `q` or Escape quits.
//! Logs go to `grid_demo.log`.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use overlaykit::{
    init_file_logger, Arbiter, Color, Control, ControlTree, Edges, EventContext, Grid,
    HorizontalAlignment, InputState, InteractionState, Key, KeyInput, PaintContext, Painter,
    Panel, Point, Rect, Style, TextureId, VerticalAlignment, Widget,
};
use simplelog::LevelFilter;

struct Button {
    label: String,
    clicks: u32,
    typed: String,
}

impl Button {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            clicks: 0,
            typed: String::new(),
        }
    }
}

impl Widget for Button {
    fn paint(&self, cx: &PaintContext<'_>, painter: &mut dyn Painter) {
        let background = match cx.state {
            InteractionState::Pressed => Color::oklch(0.55, 0.15, 30.0),
            InteractionState::Hovered => Color::oklch(0.45, 0.1, 250.0),
            InteractionState::Idle => Color::oklch(0.3, 0.05, 250.0),
        };
        painter.fill_rect(cx.bounds, &background);
        if cx.focused {
            painter.stroke_rect(cx.bounds, &Color::oklch(0.85, 0.15, 90.0), 1.0);
        }

        let text = format!("{} ({}) {}", self.label, self.clicks, self.typed);
        let origin = Point::new(cx.bounds.x + 2.0, cx.bounds.center().y.floor());
        painter.text(origin, &text, &Color::WHITE);
    }

    fn on_click(&mut self, _cx: &EventContext) {
        self.clicks += 1;
        log::info!("[demo] {} clicked {} time(s)", self.label, self.clicks);
    }

    fn on_key(&mut self, _cx: &EventContext, key: &KeyInput) {
        match key.key {
            Key::Char(c) => self.typed.push(c),
            Key::Backspace => {
                self.typed.pop();
            }
            _ => {}
        }
    }
}

/// Draws into the terminal, one cell per unit.
struct TermPainter<'a> {
    out: &'a mut Stdout,
    result: io::Result<()>,
}

impl TermPainter<'_> {
    fn cells(rect: Rect) -> (u16, u16, u16, u16) {
        let clamp = |v: f32| v.round().clamp(0.0, f32::from(u16::MAX)) as u16;
        (clamp(rect.x), clamp(rect.y), clamp(rect.width), clamp(rect.height))
    }

    fn run(&mut self, f: impl FnOnce(&mut Stdout) -> io::Result<()>) {
        if self.result.is_ok() {
            self.result = f(self.out);
        }
    }
}

fn ct(color: &Color) -> CtColor {
    let rgb = color.to_rgb();
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Painter for TermPainter<'_> {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        let (x, y, w, h) = Self::cells(rect);
        let row = " ".repeat(usize::from(w));
        self.run(|out| {
            queue!(out, SetBackgroundColor(ct(color)))?;
            for dy in 0..h {
                queue!(out, cursor::MoveTo(x, y + dy), Print(&row))?;
            }
            Ok(())
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color, _thickness: f32) {
        let (x, y, w, h) = Self::cells(rect);
        if w < 2 || h < 2 {
            return;
        }
        let horizontal = "─".repeat(usize::from(w - 2));
        self.run(|out| {
            queue!(
                out,
                SetForegroundColor(ct(color)),
                cursor::MoveTo(x, y),
                Print(format!("┌{horizontal}┐")),
                cursor::MoveTo(x, y + h - 1),
                Print(format!("└{horizontal}┘")),
            )?;
            for dy in 1..h - 1 {
                queue!(
                    out,
                    cursor::MoveTo(x, y + dy),
                    Print("│"),
                    cursor::MoveTo(x + w - 1, y + dy),
                    Print("│"),
                )?;
            }
            Ok(())
        });
    }

    fn line(&mut self, from: Point, to: Point, color: &Color, thickness: f32) {
        let rect = Rect::new(
            from.x.min(to.x),
            from.y.min(to.y),
            (to.x - from.x).abs().max(thickness),
            (to.y - from.y).abs().max(thickness),
        );
        self.fill_rect(rect, color);
    }

    fn text(&mut self, origin: Point, text: &str, color: &Color) {
        let (x, y, _, _) = Self::cells(Rect::from_origin_size(origin, Default::default()));
        self.run(|out| {
            queue!(
                out,
                SetForegroundColor(ct(color)),
                cursor::MoveTo(x, y),
                Print(text)
            )
        });
    }

    fn blit(&mut self, texture: TextureId, dest: Rect) {
        log::debug!("[demo] no textures in a terminal, skipping {:?} at {:?}", texture, dest);
    }
}

fn build(tree: &mut ControlTree, width: f32, height: f32) -> overlaykit::ControlId {
    let root = tree.insert(
        Control::grid(Panel, Grid::parse("*, 2*, *", "3, *, *"))
            .size(width, height)
            .padding(Edges::all(1.0))
            .style(Style::new().background(Color::oklch(0.18, 0.02, 250.0))),
    );

    let title = Control::leaf(Title)
        .cell(0, 0)
        .span(3, 1)
        .align(HorizontalAlignment::Center, VerticalAlignment::Center)
        .size(40.0, 1.0);
    let _ = tree.add(root, title);

    for (i, label) in ["one", "two", "three", "four", "five", "six"]
        .into_iter()
        .enumerate()
    {
        let button = Control::leaf(Button::new(label))
            .cell(i % 3, 1 + i / 3)
            .margin(Edges::all(1.0))
            .focusable(true);
        let _ = tree.add(root, button);
    }

    root
}

struct Title;

impl Widget for Title {
    fn paint(&self, cx: &PaintContext<'_>, painter: &mut dyn Painter) {
        painter.text(
            cx.bounds.origin(),
            "overlaykit grid demo - q to quit",
            &Color::WHITE,
        );
    }
}

fn run(out: &mut Stdout) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut tree = ControlTree::new();
    let root = build(&mut tree, f32::from(width), f32::from(height));
    let mut arbiter = Arbiter::new();
    let mut input = InputState::new();

    loop {
        let mut events = Vec::new();
        if event::poll(Duration::from_millis(50))? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        for event in &events {
            match event {
                CrosstermEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    return Ok(());
                }
                CrosstermEvent::Resize(w, h) => {
                    let _ = tree.set_size(root, f32::from(*w), f32::from(*h));
                }
                _ => {}
            }
        }
        input.apply_all(&events);

        tree.layout(root).map_err(io::Error::other)?;
        let fired = tree
            .update(root, &input.take_frame(), &mut arbiter)
            .map_err(io::Error::other)?;
        for event in fired {
            log::trace!("[demo] {:?}", event);
        }

        queue!(out, ResetColor, terminal::Clear(terminal::ClearType::All))?;
        let mut painter = TermPainter {
            out: &mut *out,
            result: Ok(()),
        };
        tree.paint(root, &arbiter, &mut painter)
            .map_err(io::Error::other)?;
        painter.result?;
        out.flush()?;
    }
}

fn main() -> io::Result<()> {
    if let Err(err) = init_file_logger("grid_demo.log", LevelFilter::Debug) {
        eprintln!("logging disabled: {err}");
    }

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    queue!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture,
        event::EnableFocusChange
    )?;
    out.flush()?;

    let result = run(&mut out);

    queue!(
        out,
        event::DisableFocusChange,
        event::DisableMouseCapture,
        ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    result
}
