use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use engine_logging::{engine_debug, engine_info};
use newsdesk_core::{update, AppState, AppViewModel, Msg, ResultsStatus};
use newsdesk_engine::viewport::ViewportAnimator;
use newsdesk_engine::ReqwestNewsSource;

use super::config::Cli;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::input::{parse_command, Command};
use super::ui::viewport::TerminalViewport;

/// Everything the event loop reacts to, funnelled through one channel.
pub enum AppEvent {
    Msg(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let destination = if cli.log_stderr {
        LogDestination::Terminal
    } else {
        LogDestination::File(&cli.log_file)
    };
    logging::initialize(destination, cli.log_level());

    let settings = cli.api_settings();
    engine_info!("starting newsdesk with {:?}", settings);
    let source = ReqwestNewsSource::new(settings).context("invalid news API settings")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(source), event_tx.clone())
        .context("failed to start fetch engine")?;
    spawn_input_reader(event_tx);

    let mut app = App::new(runner, TerminalViewport::new(cli.rows), io::stdout());
    for msg in cli.startup_messages() {
        app.dispatch(msg);
    }
    app.render()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => app.dispatch(msg),
            AppEvent::Input(line) => match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => app.handle_command(command),
                Err(err) => app.set_notice(err.to_string()),
            },
            AppEvent::InputClosed => break,
        }
        app.render_if_needed()?;
    }

    app.shutdown();
    engine_info!("newsdesk session ended");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    animator: ViewportAnimator<TerminalViewport>,
    out: W,
    notice: Option<String>,
    needs_render: bool,
}

impl<W: Write> App<W> {
    fn new(runner: EffectRunner, viewport: TerminalViewport, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            animator: ViewportAnimator::new(viewport),
            out,
            notice: None,
            needs_render: true,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects, &mut self.animator);

        if was_dirty {
            self.needs_render = true;
            self.sync_viewport();
        }
    }

    fn handle_command(&mut self, command: Command) {
        self.notice = None;
        self.needs_render = true;
        match command {
            Command::Dispatch(msg) => self.dispatch(msg),
            Command::Retry => {
                let page = self.state.query().page();
                self.dispatch(Msg::PageSelected(page));
            }
            Command::Scroll(delta) => {
                self.animator.port_mut().scroll_by(delta);
                self.sync_viewport();
            }
            Command::Help => self.notice = Some(ui::constants::HELP_TEXT.to_string()),
            Command::Redraw | Command::Quit => {}
        }
    }

    fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.needs_render = true;
    }

    /// Re-lays out the cards and reveals whatever crossed the threshold.
    ///
    /// Skipped while loading so the scroll position survives a failed refresh.
    fn sync_viewport(&mut self) {
        let view = self.state.view();
        if view.status == ResultsStatus::Loading {
            return;
        }
        self.animator.port_mut().set_layout(ui::render::card_heights(&view));

        let changes = self.animator.port().visibility();
        let entered: Vec<_> = changes
            .into_iter()
            .filter_map(|change| self.animator.on_visibility(change))
            .collect();

        for card in entered {
            engine_debug!("card {} revealed (generation {})", card.handle, card.session);
            let state = std::mem::take(&mut self.state);
            let (mut state, _effects) = update(
                state,
                Msg::CardEnteredViewport {
                    generation: card.session,
                    index: card.handle,
                },
            );
            state.consume_dirty();
            self.state = state;
        }
    }

    fn render_if_needed(&mut self) -> io::Result<()> {
        if self.needs_render {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let view: AppViewModel = self.state.view();
        let screen = ui::render::render(&view, self.animator.port(), self.notice.as_deref());
        write!(self.out, "\x1b[2J\x1b[H{screen}\n> ")?;
        self.out.flush()?;
        self.needs_render = false;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.animator.disconnect();
        self.runner.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::{Article, ErrorKind};
    use newsdesk_engine::{FetchError, NewsPage, NewsRequest, NewsSource};
    use pretty_assertions::assert_eq;

    /// Never completes, so only hand-fed completions reach the app.
    struct PendingSource;

    #[async_trait::async_trait]
    impl NewsSource for PendingSource {
        async fn fetch(&self, _request: &NewsRequest) -> Result<NewsPage, FetchError> {
            std::future::pending().await
        }
    }

    fn article(index: usize) -> Article {
        Article {
            title: format!("Story {index}"),
            description: "short".to_string(),
            url: format!("https://example.com/{index}"),
            image: None,
            source_name: None,
            published_at: None,
        }
    }

    // Each card renders as four lines: title, description, link, spacer.
    fn test_app(rows: usize) -> (App<Vec<u8>>, mpsc::Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let runner = EffectRunner::new(Arc::new(PendingSource), event_tx).unwrap();
        (App::new(runner, TerminalViewport::new(rows), Vec::new()), event_rx)
    }

    fn complete(app: &mut App<Vec<u8>>, result: Result<Vec<Article>, ErrorKind>) {
        let request = app.state.query().fetch_request();
        app.dispatch(Msg::FetchCompleted { request, result });
    }

    fn revealed(app: &App<Vec<u8>>) -> Vec<bool> {
        app.state
            .view()
            .articles
            .iter()
            .map(|card| card.revealed)
            .collect()
    }

    #[test]
    fn cards_reveal_as_they_scroll_into_view() {
        let (mut app, _events) = test_app(8);
        app.dispatch(Msg::SessionStarted);
        complete(&mut app, Ok((0..5).map(article).collect()));

        assert_eq!(revealed(&app), vec![true, true, false, false, false]);

        app.handle_command(Command::Scroll(100));
        assert_eq!(revealed(&app), vec![true, true, false, true, true]);

        app.handle_command(Command::Scroll(-100));
        assert_eq!(revealed(&app), vec![true, true, false, true, true]);
        app.shutdown();
    }

    #[test]
    fn failed_refresh_keeps_scroll_position() {
        let (mut app, _events) = test_app(8);
        app.dispatch(Msg::SessionStarted);
        complete(&mut app, Ok((0..5).map(article).collect()));
        app.handle_command(Command::Scroll(6));
        assert_eq!(app.animator.port().offset(), 6);

        app.handle_command(Command::Retry);
        assert_eq!(app.state.view().status, ResultsStatus::Loading);
        complete(&mut app, Err(ErrorKind::NetworkError));

        assert_eq!(app.state.view().status, ResultsStatus::Results);
        assert_eq!(app.animator.port().offset(), 6);
        app.shutdown();
    }

    #[test]
    fn new_results_start_unrevealed_at_the_top() {
        let (mut app, _events) = test_app(8);
        app.dispatch(Msg::SessionStarted);
        complete(&mut app, Ok((0..5).map(article).collect()));
        app.handle_command(Command::Scroll(100));

        app.dispatch(Msg::NextPageClicked);
        complete(&mut app, Ok((0..3).map(article).collect()));

        assert_eq!(app.animator.port().offset(), 0);
        assert_eq!(revealed(&app), vec![true, true, false]);
        app.shutdown();
    }
}
