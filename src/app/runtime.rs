use super::*;
use std::time::Duration;

pub(crate) fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    storage: Box<dyn Storage>,
) -> Result<()> {
    let mut app = App::new(config, storage);
    const IDLE_POLL_MS: u64 = 100;
    const MAX_EVENTS_PER_FRAME: u16 = 64;
    let mut needs_draw = true;

    loop {
        if needs_draw {
            let area = terminal.size().context("terminal size")?;
            app.update_viewport(area.width, area.height);
            app.ensure_render_cache();
            terminal.draw(|f| ui::draw(f, &app))?;
            needs_draw = false;
        }

        if app.should_quit {
            break;
        }

        if !event::poll(Duration::from_millis(IDLE_POLL_MS)).context("event poll")? {
            continue;
        }

        let mut wheel_delta: i32 = 0;
        let mut drained_events: u16 = 0;

        loop {
            match event::read().context("event read")? {
                Event::Key(key) => {
                    if !matches!(key.kind, KeyEventKind::Release) {
                        app.handle_key(key);
                        needs_draw = true;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => wheel_delta -= 1,
                    MouseEventKind::ScrollDown => wheel_delta += 1,
                    _ => {}
                },
                Event::Paste(text) => {
                    app.handle_paste_event(&text);
                    needs_draw = true;
                }
                Event::Resize(_, _) => {
                    needs_draw = true;
                }
                _ => {}
            }

            drained_events = drained_events.saturating_add(1);
            if drained_events >= MAX_EVENTS_PER_FRAME || app.should_quit {
                break;
            }
            if !event::poll(Duration::from_millis(0)).context("event poll drain")? {
                break;
            }
        }

        if wheel_delta < 0 {
            app.scroll_up(wheel_delta.unsigned_abs().min(64) as u16 * 3);
            needs_draw = true;
        } else if wheel_delta > 0 {
            app.scroll_down(wheel_delta.min(64) as u16 * 3);
            needs_draw = true;
        }
    }

    log::info!("session closed with {} history entries", app.history.len());
    terminal.draw(ui::draw_exit)?;
    Ok(())
}
