// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal demo canvas.
//!
//! Draws a small mind map as boxes (ratatui + crossterm) and drives a [`TextEditor`] over it.
//! One terminal cell is one canvas pixel.

use std::{env, error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::EditConfig;
use crate::edit::{CanvasEvent, Outcome, Phase, TextEditor};
use crate::error::EditError;
use crate::geometry::{scene_to_screen, SceneRect, ScreenRect};
use crate::host::{NodeTree, Scene, ShortcutHost, Viewport};
use crate::memory::{MemoryCanvas, Metrics};
use crate::model::{Node, NodeId, NodeKind, TextStyle, Theme};
use crate::overlay::OverlayWidget;

const SELECTED_COLOR: Color = Color::LightGreen;
const SUMMARY_COLOR: Color = Color::LightBlue;
const CUSTOM_COLOR: Color = Color::DarkGray;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const PAN_STEP_X: f64 = 4.0;
const PAN_STEP_Y: f64 = 2.0;
const ZOOM_STEP: f64 = 0.25;
const MIN_SCALE: f64 = 0.25;
const MAX_SCALE: f64 = 3.0;
const LOG_ENV: &str = "INLAY_LOG";

/// Runs the interactive demo until Esc (or Ctrl+C) while no edit is open.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing()?;
    let mut terminal = TerminalSession::new()?;
    let size = terminal.size()?;
    let mut app = App::new(canvas_area(size))?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(width, height) => {
                    app.resize(canvas_area(Rect::new(0, 0, width, height)))?
                }
                _ => {}
            }
        }
    }

    app.shutdown();
    Ok(())
}

/// Installs a stderr subscriber filtered by `INLAY_LOG`, if set.
fn init_tracing() -> Result<(), Box<dyn Error>> {
    let Ok(filter) = env::var(LOG_ENV) else {
        return Ok(());
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(filter)?)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;
    Ok(())
}

fn canvas_area(terminal: Rect) -> ScreenRect {
    ScreenRect::new(
        f64::from(terminal.x),
        f64::from(terminal.y),
        f64::from(terminal.width),
        f64::from(terminal.height.saturating_sub(1)),
    )
}

/// The demo mind map, laid out in cells.
pub fn demo_canvas(area: ScreenRect) -> MemoryCanvas {
    let style = TextStyle { font_size: 1.0, line_height: 1.0, ..TextStyle::default() };
    let theme = Theme { padding_x: 1.0, ..Theme::default() };
    let mut canvas = MemoryCanvas::new(area).with_theme(theme).with_metrics(Metrics::Cells, 1.0);

    let entries: [(&str, &str, f64, f64); 6] = [
        ("n:root", "Inlay", 34.0, 8.0),
        ("n:parse", "Parse input", 4.0, 2.0),
        ("n:layout", "Lay out boxes", 4.0, 14.0),
        ("n:render", "Render", 62.0, 2.0),
        ("n:ship", "Ship it", 62.0, 14.0),
        ("n:chart", "[chart]", 34.0, 18.0),
    ];
    for (id, text, x, y) in entries {
        let Ok(id) = NodeId::new(id) else {
            continue;
        };
        let mut node = Node::new(id, text).with_style(style);
        if text == "[chart]" {
            node = node.with_kind(NodeKind::CustomContent);
        }
        canvas.insert_node(node, x, y);
    }
    if let (Ok(summary), Ok(owner)) = (NodeId::new("n:summary"), NodeId::new("n:root")) {
        let node = Node::new(summary, "Pipeline").with_style(style).with_generalization_of(owner);
        canvas.insert_node(node, 34.0, 2.0);
    }
    canvas
}

struct App {
    canvas: MemoryCanvas,
    editor: TextEditor,
    order: Vec<NodeId>,
    selected: usize,
    status: String,
    should_quit: bool,
}

impl App {
    fn new(area: ScreenRect) -> Result<Self, EditError> {
        let config = EditConfig {
            auto_enter_edit_on_keydown: true,
            max_inline_wrap_width: 40.0,
            overlay_padding: (1.0, 0.0),
            ..EditConfig::default()
        };
        config.validate()?;

        let mut canvas = demo_canvas(area);
        let editor = TextEditor::new(config, canvas.keymap());
        let order: Vec<NodeId> = canvas.nodes().map(|node| node.id().clone()).collect();
        let mut app = Self {
            canvas,
            editor,
            order,
            selected: 0,
            status: String::new(),
            should_quit: false,
        };
        let root = app.order.iter().position(|id| id.as_str() == "n:root").unwrap_or(0);
        app.select(root);
        Ok(app)
    }

    fn selected_id(&self) -> Option<&NodeId> {
        self.order.get(self.selected)
    }

    fn select(&mut self, index: usize) {
        if self.order.is_empty() {
            return;
        }
        self.selected = index % self.order.len();
        let id = self.order[self.selected].clone();
        self.canvas.set_active([id]);
    }

    fn resize(&mut self, area: ScreenRect) -> Result<(), EditError> {
        self.canvas.set_canvas(area);
        self.dispatch(CanvasEvent::TransformChanged)
    }

    fn dispatch(&mut self, event: CanvasEvent) -> Result<(), EditError> {
        let outcome = self.editor.handle_event(&mut self.canvas, event)?;
        self.report(outcome);
        Ok(())
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Closed { commands, advance } => {
                self.status = match commands {
                    0 => "no change".to_owned(),
                    1 => "saved".to_owned(),
                    n => format!("saved {n} nodes"),
                };
                if advance {
                    self.select(self.selected + 1);
                }
            }
            Outcome::Rejected(rejection) => self.status = format!("cannot edit: {rejection:?}"),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<(), EditError> {
        if self.editor.phase() == Phase::Open {
            if key.code == KeyCode::Esc {
                let outcome = self.editor.close(&mut self.canvas);
                self.report(outcome);
                return Ok(());
            }
            return self.dispatch(CanvasEvent::KeyDown(key));
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('z') if ctrl => {
                if let Some(id) = self.canvas.undo() {
                    self.status = format!("undo {id}");
                }
            }
            KeyCode::Char('y') if ctrl => {
                if let Some(id) = self.canvas.redo() {
                    self.status = format!("redo {id}");
                }
            }
            KeyCode::Tab => {
                self.dispatch(CanvasEvent::BeforeActiveNodeChange)?;
                self.select(self.selected + 1);
            }
            KeyCode::BackTab => {
                self.dispatch(CanvasEvent::BeforeActiveNodeChange)?;
                self.select(self.selected + self.order.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_id().cloned() {
                    self.dispatch(CanvasEvent::NodeDoubleActivate(id))?;
                }
            }
            KeyCode::Left => self.pan(PAN_STEP_X, 0.0)?,
            KeyCode::Right => self.pan(-PAN_STEP_X, 0.0)?,
            KeyCode::Up => self.pan(0.0, PAN_STEP_Y)?,
            KeyCode::Down => self.pan(0.0, -PAN_STEP_Y)?,
            KeyCode::Char('+') => self.zoom(ZOOM_STEP)?,
            KeyCode::Char('-') => self.zoom(-ZOOM_STEP)?,
            _ => self.dispatch(CanvasEvent::KeyDown(key))?,
        }
        Ok(())
    }

    fn pan(&mut self, dx: f64, dy: f64) -> Result<(), EditError> {
        self.canvas.pan_by(dx, dy);
        self.dispatch(CanvasEvent::TransformChanged)
    }

    fn zoom(&mut self, delta: f64) -> Result<(), EditError> {
        let scale = (self.canvas.transform().scale + delta).clamp(MIN_SCALE, MAX_SCALE);
        self.canvas.set_scale(scale);
        self.status = format!("zoom {:.0}%", scale * 100.0);
        self.dispatch(CanvasEvent::TransformChanged)
    }

    fn shutdown(&mut self) {
        self.editor.dispose(&mut self.canvas);
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let canvas_area = layout[0];
    let footer_area = layout[1];

    let transform = app.canvas.transform();
    let screen = app.canvas.canvas();
    let active = app.canvas.active_nodes().to_vec();

    for node in app.canvas.nodes() {
        let (Some(geometry), Some(size)) =
            (app.canvas.node_geometry(node.id()), app.canvas.node_size(node.id()))
        else {
            continue;
        };
        let bounds = SceneRect::new(geometry.bounds.x, geometry.bounds.y, size.width, size.height);
        let rect = scene_to_screen(&bounds, &transform, &screen).to_cells().intersection(canvas_area);
        if rect.is_empty() {
            continue;
        }
        let border = if active.contains(node.id()) {
            SELECTED_COLOR
        } else if node.is_generalization() {
            SUMMARY_COLOR
        } else if node.kind() == NodeKind::CustomContent {
            CUSTOM_COLOR
        } else {
            Color::Reset
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(node.text())
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border))),
            rect,
        );
    }

    if let Some(overlay) = app.editor.overlay() {
        let widget = OverlayWidget::new(overlay);
        if let Some((x, y)) = widget.cursor(canvas_area) {
            frame.set_cursor(x, y);
        }
        frame.render_widget(widget, canvas_area);
    }

    frame.render_widget(Paragraph::new(footer_line(app)), footer_area);
}

fn footer_line(app: &App) -> Line<'static> {
    let keys: &[(&str, &str)] = if app.editor.is_open() {
        &[("Enter", "save"), ("Tab", "save+next"), ("S-Enter", "newline"), ("Esc", "save")]
    } else {
        &[
            ("F2/Enter", "edit"),
            ("Tab", "select"),
            ("arrows", "pan"),
            ("+/-", "zoom"),
            ("C-z/C-y", "undo/redo"),
            ("Esc", "quit"),
        ]
    };
    let mut spans = Vec::with_capacity(keys.len() * 2 + 1);
    for (key, label) in keys {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled((*label).to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    if !app.status.is_empty() {
        spans.push(Span::raw(format!("  {}", app.status)));
    }
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
