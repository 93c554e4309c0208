use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use vitrina_core::AppConfig;
use vitrina_tui::{
    app::App,
    event::{AppEvent, EventHandler, FormSubmitResult},
    input::{handle_key_event, Action},
    widgets::{MenuWidget, NavbarWidget, PageWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Vitrina"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config).await;

    // Restore terminal even when the loop bailed out
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("showcase exited with error: {e:#}");
    }
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config.clone(), (size.width, size.height), Instant::now());

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    // Channel for the simulated contact-form send
    let (form_tx, mut form_rx) = mpsc::unbounded_channel::<FormSubmitResult>();

    // Checked at the END of each iteration to pick the NEXT iteration's
    // tick rate, so a scroll action gets the high frame rate immediately
    let mut needs_fast_update = false;

    loop {
        let now = Instant::now();

        // Process any completed sends (non-blocking)
        while let Ok(FormSubmitResult::Sent) = form_rx.try_recv() {
            app.form_submitted(now);
            app.set_status("Message sent");
        }

        app.tick(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Navbar on top, body below, status bar at the bottom
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(app.navbar_height()),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            NavbarWidget::render(frame, layout[0], &app);
            PageWidget::render(frame, layout[1], &mut app, now);
            StatusBarWidget::render(frame, layout[2], &app);

            if app.menu_open {
                MenuWidget::render(frame, layout[1], &app);
            }
        })?;

        // Handle events (faster tick rate while something animates)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &form_tx);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, Instant::now());
                }
                AppEvent::Resize(_, _) => {
                    // Body sizes are recomputed during the next draw
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action, form_tx: &mpsc::UnboundedSender<FormSubmitResult>) {
    let now = Instant::now();
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => {
            app.scroll_page_by(app.config.ui.scroll.scroll_lines as i32);
        }
        Action::ScrollUp => {
            app.scroll_page_by(-(app.config.ui.scroll.scroll_lines as i32));
        }
        Action::ScrollHalfPageDown => {
            app.scroll_page_by((app.body_height / 2).max(1) as i32);
        }
        Action::ScrollHalfPageUp => {
            app.scroll_page_by(-((app.body_height / 2).max(1) as i32));
        }
        Action::JumpToTop => {
            app.jump_to_top(now);
        }
        Action::JumpToBottom => {
            app.jump_to_bottom(now);
        }
        Action::JumpToSection(index) => {
            app.jump_to_section(index, now);
        }
        Action::ToggleMenu => {
            app.toggle_menu();
        }
        Action::CycleFocus => {
            app.focus_next();
        }
        Action::CarouselPrev => {
            app.carousel.previous(now);
        }
        Action::CarouselNext => {
            app.carousel.next(now);
        }
        Action::SubmitForm => {
            if app.submit_form() {
                app.set_status("Sending message...");
                let latency = Duration::from_millis(app.config.form.submit_latency_ms);
                let tx = form_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(latency).await;
                    let _ = tx.send(FormSubmitResult::Sent);
                });
            }
        }
        Action::CloseOverlay => {
            app.menu_open = false;
        }
        Action::None => {}
    }
}
