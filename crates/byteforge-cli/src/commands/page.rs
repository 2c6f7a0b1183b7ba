use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use byteforge_core::{AppConfig, ContactClient};
use byteforge_page::{
    app::App,
    contact_form::ContactForm,
    event::{AppEvent, EventHandler, SubmitResult},
    input::{handle_key_event, handle_mouse_event, Action},
    scroll::NavigatorConfigExt,
    widgets::{
        ContactModalWidget, PageLayout, SectionViewWidget, SideNavWidget, StatusBarWidget,
    },
    Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let client = ContactClient::from_config(&config.contact)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("ByteForge"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    client: ContactClient,
) -> Result<()> {
    let mut app = App::new(config.clone(), Theme::default(), Instant::now());

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_tick(
        config.navigator.tick_rate_ms,
        config.navigator.animation_tick_duration(),
    );

    // Create channel for async submission results
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmitResult>();

    let size = terminal.size()?;
    let mut layout = PageLayout::new(Rect::new(0, 0, size.width, size.height));
    app.set_viewport_height(layout.sections.height);

    // Main loop
    loop {
        // Process any completed submissions (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            let outcome = match result {
                SubmitResult::Success => Ok(()),
                SubmitResult::Failure { error } => Err(error),
            };
            app.finish_contact(outcome, Instant::now());
        }

        app.update(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            layout = PageLayout::new(frame.area());
            app.set_viewport_height(layout.sections.height);

            SectionViewWidget::render(frame, layout.sections, &app);
            SideNavWidget::render(frame, layout.side_nav, &app);
            StatusBarWidget::render(frame, layout.status, &app);

            if let Some(form) = &app.contact {
                ContactModalWidget::render(frame, form, &app.theme);
            }
        })?;

        // Handle events (use faster tick rate during animations)
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, &app),
                AppEvent::Mouse(mouse) => {
                    handle_mouse_event(mouse, config.navigator.wheel_notch_delta)
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => Action::None,
            };
            handle_action(&mut app, action, &layout, &client, &submit_tx);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    layout: &PageLayout,
    client: &ContactClient,
    submit_tx: &mpsc::UnboundedSender<SubmitResult>,
) {
    let now = Instant::now();

    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::Nav(key) => {
            if let Some(outcome) = app.nav_key(key.code(), now) {
                debug!(?outcome, "Key navigation");
            }
        }
        Action::Wheel(delta) => {
            if let Some(outcome) = app.wheel(delta, now) {
                debug!(?outcome, "Wheel navigation");
            }
        }
        Action::SelectNav(index) => {
            app.side_nav.select_index(index);
        }
        Action::OpenContact => app.signals().open_contact("keyboard"),
        Action::NextCta => app.focus_next_cta(),
        Action::ActivateCta => app.activate_cta(),
        Action::Click(column, row) => {
            if app.is_contact_open() {
                return;
            }
            if let Some(item) = SideNavWidget::item_at(layout.side_nav, &app.side_nav, column, row) {
                app.side_nav.select(item);
            }
        }
        Action::FormNext => with_form(app, |form| form.focus_next()),
        Action::FormPrev => with_form(app, |form| form.focus_prev()),
        Action::FormInput(c) => with_form(app, |form| form.input_char(c)),
        Action::FormBackspace => with_form(app, |form| form.backspace()),
        Action::FormCycle(forward) => with_form(app, |form| form.cycle_need(forward)),
        Action::FormSubmit => {
            if let Some(request) = app.submit_contact() {
                let client = client.clone();
                let tx = submit_tx.clone();

                // Spawn submission as background task
                tokio::spawn(async move {
                    match client.submit(&request).await {
                        Ok(()) => {
                            let _ = tx.send(SubmitResult::Success);
                        }
                        Err(e) => {
                            warn!("Contact submission failed: {}", e);
                            let _ = tx.send(SubmitResult::Failure {
                                error: e.to_string(),
                            });
                        }
                    }
                });
            }
        }
        Action::CloseContact => app.close_contact(),
        Action::None => {}
    }
}

fn with_form(app: &mut App, f: impl FnOnce(&mut ContactForm)) {
    if let Some(form) = app.contact.as_mut() {
        f(form);
    }
}
