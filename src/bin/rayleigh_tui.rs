//! Rayleigh Scattering Demo - Terminal User Interface
//!
//! Press `s` (or Enter) to start the animation, `q` to quit.
//! App logic lives in `rayleigh::tui::rayleigh_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use rayleigh::config::RayleighConfig;
    use rayleigh::tui::RayleighApp;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => RayleighConfig::load(&path).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{path}: {e}"))
        })?,
        None => RayleighConfig::embedded(),
    };
    tui::run(RayleighApp::from_config(config))
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::{Backend, CrosstermBackend},
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        symbols::Marker,
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle, Line as CanvasLine, Points, Rectangle},
            Block, Borders, Gauge, Paragraph,
        },
        Frame, Terminal,
    };
    use rayleigh::colormap::Rgba;
    use rayleigh::renderers::DrawSink;
    use rayleigh::scene::{Point, Scene, SCENE_BOUNDS};
    use rayleigh::tui::RayleighApp;
    use std::io;
    use std::time::{Duration, Instant};

    /// Run the TUI application.
    ///
    /// The terminal is restored even when the event loop fails.
    pub fn run(mut app: RayleighApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let result = Terminal::new(CrosstermBackend::new(stdout))
            .and_then(|mut terminal| {
                let result = run_loop(&mut terminal, &mut app);
                let shown = terminal.show_cursor();
                result.and(shown)
            });

        let restored = disable_raw_mode().and(execute!(io::stdout(), LeaveAlternateScreen));
        result.and(restored)
    }

    fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut RayleighApp) -> io::Result<()> {
        let idle_poll = Duration::from_millis(50);

        loop {
            terminal.draw(|f| ui(f, app))?;

            let now = Instant::now();
            let timeout = if app.session.is_running() {
                app.session.clock().time_until_next(now)
            } else {
                idle_poll
            };
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                return Ok(());
            }

            app.update(Instant::now());
        }
    }

    /// Terminal colour for `c` composited over a black background.
    fn to_color(c: Rgba) -> Color {
        let a = c.a.clamp(0.0, 1.0);
        let (r, g, b) = Rgba::rgb(c.r * a, c.g * a, c.b * a).to_u8();
        Color::Rgb(r, g, b)
    }

    const FILL_ALPHA: f64 = 0.8;

    /// Frame contents collected from the scene through the sink interface.
    #[derive(Debug, Default)]
    struct CanvasFrame {
        line: Option<([Point; 2], Color)>,
        points: Vec<Point>,
        points_color: Option<Color>,
        fill: Option<(f64, Color)>,
        text: String,
    }

    impl DrawSink for CanvasFrame {
        fn set_line(&mut self, endpoints: Option<[Point; 2]>, color: Rgba) {
            self.line = endpoints.map(|e| (e, to_color(color)));
        }

        fn set_points(&mut self, points: &[Point], color: Rgba, opacity: f64) {
            self.points = points.to_vec();
            self.points_color = Some(to_color(color.with_alpha(opacity)));
        }

        fn set_rect_fill(&mut self, width: f64, color: Rgba) {
            self.fill = (width > 0.0).then(|| (width, to_color(color.with_alpha(FILL_ALPHA))));
        }

        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
    }

    impl CanvasFrame {
        fn from_scene(scene: &Scene) -> Self {
            let mut frame = Self::default();
            scene.present(&mut frame);
            frame
        }
    }

    fn ui(f: &mut Frame, app: &RayleighApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_scene_canvas(f, chunks[1], app);
        render_progress(f, chunks[2], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &RayleighApp) {
        let running = app.session.is_running();
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " RAYLEIGH SCATTERING ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if running { "[RUNNING]" } else { "[READY]" },
                Style::default().fg(if running { Color::Green } else { Color::Yellow }),
            ),
            Span::raw(" | "),
            Span::styled(app.status_line(), Style::default().fg(Color::White)),
        ])])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls: [S/Enter] Start  [Q] Quit"),
        );
        f.render_widget(title, area);
    }

    /// Largest centred rect whose inner area is twice as wide as it is tall,
    /// so scene units come out square on terminal cells.
    fn equal_aspect(area: Rect) -> Rect {
        let inner_w = area.width.saturating_sub(2);
        let inner_h = area.height.saturating_sub(2);
        let h = inner_h.min(inner_w / 2);
        let width = (h * 2 + 2).min(area.width);
        let height = (h + 2).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn render_scene_canvas(f: &mut Frame, area: Rect, app: &RayleighApp) {
        let area = equal_aspect(area);
        let scene = app.scene();
        let frame = CanvasFrame::from_scene(scene);
        let [lo, hi] = SCENE_BOUNDS;
        let cell_width = (hi - lo) / f64::from(area.width.saturating_sub(2).max(1));
        let cell_height = (hi - lo) / f64::from(area.height.saturating_sub(2).max(1));

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Scene"))
            .marker(Marker::Braille)
            .x_bounds(SCENE_BOUNDS)
            .y_bounds(SCENE_BOUNDS)
            .paint(|ctx| {
                let particle = &scene.particle;
                ctx.draw(&Circle {
                    x: particle.center.0,
                    y: particle.center.1,
                    radius: particle.radius,
                    color: to_color(particle.fill),
                });

                let ind = &scene.indicator;
                ctx.draw(&Rectangle {
                    x: ind.origin.0,
                    y: ind.origin.1,
                    width: ind.track_width,
                    height: ind.height,
                    color: Color::Gray,
                });
                if let Some((width, color)) = frame.fill {
                    ctx.draw(&Rectangle {
                        x: ind.origin.0,
                        y: ind.origin.1,
                        width,
                        height: ind.height,
                        color,
                    });
                }

                if let Some(([a, b], color)) = frame.line {
                    ctx.draw(&CanvasLine::new(a.0, a.1, b.0, b.1, color));
                }

                if let Some(color) = frame.points_color {
                    if !frame.points.is_empty() {
                        ctx.draw(&Points {
                            coords: &frame.points,
                            color,
                        });
                    }
                }

                ctx.layer();
                let (ax, ay) = scene.label.anchor;
                let style = Style::default()
                    .fg(to_color(scene.label.color))
                    .add_modifier(Modifier::BOLD);
                for (i, line) in frame.text.lines().enumerate() {
                    let half = line.chars().count() as f64 * cell_width / 2.0;
                    ctx.print(
                        ax - half,
                        ay - i as f64 * cell_height,
                        Span::styled(line.to_string(), style),
                    );
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_progress(f: &mut Frame, area: Rect, app: &RayleighApp) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let clock = app.session.clock();
        let total = clock.total_frames().max(1);
        let delivered = clock.frames_delivered();
        let percent = (u64::from(delivered) * 100 / u64::from(total)).min(100);
        let frames = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Frames"))
            .gauge_style(Style::default().fg(Color::Blue))
            .percent(percent as u16)
            .label(format!("{delivered}/{total}"));
        f.render_widget(frames, chunks[0]);

        let indicator = &app.scene().indicator;
        let label = app
            .last_outcome
            .as_ref()
            .and_then(|o| o.wavelength_nm)
            .map_or_else(|| "approach".to_string(), |nm| format!("{nm:.1} nm"));
        let wavelength = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Wavelength"))
            .gauge_style(Style::default().fg(to_color(indicator.fill_color)))
            .ratio(indicator.fill_fraction())
            .label(label);
        f.render_widget(wavelength, chunks[1]);
    }

}
