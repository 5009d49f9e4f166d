#![forbid(unsafe_code)]

//! folio-demo binary entry point.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use folio::core::logging::{self, LoggingConfig};
use folio::{ProfileCard, ProfileList, Translator, TypewriterConfig};
use folio_demo::app::{App, action_for};
use folio_demo::cli::{Opts, Parsed};
use folio_demo::session::TerminalSession;
use folio_demo::view::{self, ColorMode};

/// Longest sleep between redraws while the card is at rest.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let opts = match Opts::parse() {
        Parsed::Run(opts) => opts,
        Parsed::Print(text) => {
            println!("{text}");
            return Ok(());
        }
        Parsed::Error(msg) => {
            eprintln!("{msg}\n\nRun with --help for usage.");
            std::process::exit(2);
        }
    };

    // Logs go to a file only; stderr would tear the alternate screen.
    let log_config = LoggingConfig::from_env();
    if log_config.file.is_some()
        && let Err(err) = logging::init(&log_config)
    {
        eprintln!("logging disabled: {err}");
    }

    let config = if opts.reduced_motion {
        TypewriterConfig::reduced_motion()
    } else {
        TypewriterConfig::from_env()
    };
    let mut card = ProfileCard::new(ProfileList::bundled(), config);
    card.select_profile(opts.profile);

    let mut translator = Translator::bundled().map_err(io::Error::other)?;
    translator.set_locale(opts.locale.as_str());

    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));
    let mut app = App::new(card, translator).exit_after(exit_after);
    let mode = if opts.ansi256 {
        ColorMode::Ansi256
    } else {
        ColorMode::detect(|key| std::env::var(key).ok())
    };

    let session = TerminalSession::enter()?;
    let result = run(&mut app, &session, mode);
    app.shutdown();
    drop(session);
    result
}

fn run(app: &mut App, session: &TerminalSession, mode: ColorMode) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut last = Instant::now();
    loop {
        view::draw(&mut stdout, &view::card_lines(app), session.size()?, mode)?;

        if event::poll(app.poll_timeout(IDLE_POLL))?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            app.apply(action);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last));
        last = now;

        if app.should_quit() {
            tracing::info!("demo exiting");
            return Ok(());
        }
    }
}
