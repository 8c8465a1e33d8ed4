//! Interactive terminal view.
//!
//! Layout: the five inputs across the top, the drawing in the middle with a
//! status panel beside it, key help along the bottom. The drawing is
//! rasterized with resvg and shown with ratatui-image.
//!
//! ## Rust Lesson: `Box<dyn Trait>` for runtime-chosen types
//!
//! Which image protocol the terminal speaks (Sixel, Kitty, halfblocks) is
//! only known at runtime, so ratatui-image hands back a
//! `Box<dyn StatefulProtocol>`. The box owns a value whose concrete type we
//! never name; calls go through a vtable.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use ratatui_image::{
    StatefulImage,
    picker::{Picker, ProtocolType},
    protocol::StatefulProtocol,
};

use rosette::{Command, Session, SpiralRenderer, Surface};

use super::Cli;
use crate::config::Config;
use crate::form::InputForm;
use crate::keys::{Action, map_key};
use crate::logging::tui_log_path;
use crate::raster::Rasterizer;

/// Pixel size assumed for one terminal cell when sizing the surface.
const CELL_PIXELS: (u16, u16) = (8, 16);

struct App {
    session: Session,
    form: InputForm,
    rasterizer: Rasterizer,
    picker: Picker,
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Inner area of the image panel from the last frame.
    image_area: Rect,
    /// Area the current surface was sized for.
    sized_for: Option<Rect>,
    needs_render: bool,
    error: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(config: &Config, cli: &Cli) -> Self {
        let session = Session::new(
            config.inputs(&cli.params),
            config.view_state(&cli.view),
            Surface::default(),
            SpiralRenderer::new(config.theme.clone()),
        );
        let form = InputForm::from_inputs(session.inputs());

        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new(CELL_PIXELS));
        picker.protocol_type = ProtocolType::Sixel;

        Self {
            session,
            form,
            rasterizer: Rasterizer::new(),
            picker,
            image_state: None,
            image_area: Rect::default(),
            sized_for: None,
            // The first frame sizes the surface, which triggers the first render.
            needs_render: false,
            error: None,
            should_quit: false,
        }
    }

    /// Resize the surface when the image panel changed size.
    fn sync_surface(&mut self) {
        if self.sized_for == Some(self.image_area) {
            return;
        }
        let surface = Surface::fit_container(
            f64::from(self.image_area.width) * f64::from(CELL_PIXELS.0),
            f64::from(self.image_area.height) * f64::from(CELL_PIXELS.1),
        );
        self.sized_for = Some(self.image_area);
        self.apply(Command::Resize(surface));
    }

    fn apply(&mut self, command: Command) {
        if self.session.apply(command) {
            self.needs_render = true;
        }
    }

    /// Re-render when something asked for it. Form values are read fresh
    /// every time, so zooming also picks up edited inputs.
    fn update_image(&mut self) {
        if !self.needs_render {
            return;
        }
        self.needs_render = false;
        self.session.set_inputs(self.form.to_inputs());

        match self.rasterizer.render(&mut self.session) {
            Ok((image, _)) => {
                self.image_state = Some(self.picker.new_resize_protocol(image));
                self.error = None;
            }
            Err(e) => {
                log::error!("render failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Command(command) => self.apply(command),
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrev => self.form.focus_prev(),
            Action::Insert(c) => self.form.insert(c),
            Action::Backspace => self.form.backspace(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }
}

/// Launch the TUI.
pub fn run_tui(config: &Config, cli: &Cli) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().context("no terminal to draw on")?;
    if cols == 0 || rows == 0 {
        log::error!("terminal reports a {cols}x{rows} size");
        bail!("terminal has no drawing area ({cols}x{rows})");
    }
    log::info!("starting TUI on a {cols}x{rows} terminal, logging to {}", tui_log_path().display());

    let mut app = App::new(config, cli);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update_image();
        terminal.draw(|frame| ui(frame, app))?;

        // The first frame and every resize tell us the real panel size.
        app.sync_surface();

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle(map_key(key)),
                Event::Resize(cols, rows) => log::debug!("terminal resized to {cols}x{rows}"),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10), Constraint::Length(3)])
        .split(frame.area());

    // Input fields
    let field_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(main_layout[0]);

    for (i, field) in app.form.fields().iter().enumerate() {
        let style = if i == app.form.focus() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let input = Paragraph::new(field.value.as_str())
            .style(style)
            .block(
                Block::default()
                    .title(format!(" {} ", field.label))
                    .borders(Borders::ALL)
                    .border_style(style),
            );
        frame.render_widget(input, field_layout[i]);
    }

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(26)])
        .split(main_layout[1]);

    // Drawing
    let border_color = if app.error.is_some() { Color::Red } else { Color::Green };
    let image_block = Block::default()
        .title(" Spiral ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = image_block.inner(middle[0]);
    frame.render_widget(image_block, middle[0]);
    app.image_area = inner_area;

    if let Some(ref mut image_state) = app.image_state {
        frame.render_stateful_widget(StatefulImage::new(None), inner_area, image_state);
    }

    // Status
    let view = app.session.view();
    let surface = app.session.surface();
    let vertices = app.session.last_stats().map_or(0, |s| s.vertices);
    let mut status = format!(
        "Zoom: {:.0}%\nThickness: {}\n[#] {}\nSurface: {}x{}\nVertices: {}",
        view.scale() * 100.0,
        rosette::render::format_number(view.line_thickness()),
        view.grid_button_label(),
        surface.width,
        surface.height,
        vertices,
    );
    if let Some(ref error) = app.error {
        status.push_str("\n\n");
        status.push_str(error);
    }
    let stats = Paragraph::new(status)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(stats, middle[1]);

    // Help
    let help = Paragraph::new("Enter generate  Tab/↑↓ field  # grid  > < zoom  ] [ thickness  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, main_layout[2]);
}
