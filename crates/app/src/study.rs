use std::fmt::{self, Write as _};

use lingo_core::model::Language;
use lingo_core::stats::ProgressReport;
use lingo_core::time::format_duration_secs;
use services::{CardView, Screen, SessionController, SessionError, View};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
commands:
  login <name> [language]   start or resume studying
  next | prev               move through the current category
  flip                      show the other side
  known                     mark or unmark the card as known
  category <name|All>       filter the deck
  language <name>           switch language pack
  stats | cards             dashboard or card view
  reset                     forget progress for this language
  logout | quit
";

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Login { user: String, language: Language },
    Next,
    Previous,
    Flip,
    Known,
    Category(String),
    Language(Language),
    Stats,
    Cards,
    Reset,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Unknown(String),
    MissingArgument(&'static str),
    BadLanguage(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Unknown(cmd) => write!(f, "unknown command: {cmd} (try `help`)"),
            InputError::MissingArgument(cmd) => write!(f, "{cmd} needs an argument"),
            InputError::BadLanguage(raw) => write!(
                f,
                "unknown language {raw:?}, pick one of: {}",
                Language::ALL.map(Language::key).join(", ")
            ),
        }
    }
}

impl std::error::Error for InputError {}

fn parse_language(raw: &str) -> Result<Language, InputError> {
    raw.parse()
        .map_err(|_| InputError::BadLanguage(raw.to_owned()))
}

/// Parse one line of input. Blank lines yield `None`.
///
/// # Errors
///
/// Returns `InputError` for unknown commands or bad arguments.
pub fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()));

    let input = match cmd.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "login" => {
            let mut words = rest.split_whitespace();
            let user = words.next().ok_or(InputError::MissingArgument("login"))?;
            let language = words.next().map_or(Ok(Language::default()), parse_language)?;
            Input::Login {
                user: user.to_owned(),
                language,
            }
        }
        "n" | "next" => Input::Next,
        "p" | "prev" | "previous" => Input::Previous,
        "f" | "flip" => Input::Flip,
        "k" | "known" => Input::Known,
        "category" | "cat" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("category"));
            }
            Input::Category(rest.to_owned())
        }
        "language" | "lang" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("language"));
            }
            Input::Language(parse_language(rest)?)
        }
        "stats" | "dashboard" => Input::Stats,
        "cards" => Input::Cards,
        "reset" => Input::Reset,
        "logout" => Input::Logout,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(InputError::Unknown(other.to_owned())),
    };
    Ok(Some(input))
}

//
// ─── RENDERING ─────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn render_card(view: &CardView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} | {} | filter: {}",
        view.language.flag(),
        view.title,
        view.username,
        view.filter
    );
    match &view.card {
        Some(card) => {
            let _ = writeln!(
                out,
                "[{}/{}] {} {}{}",
                view.progress.position,
                view.progress.total,
                card.emoji(),
                card.category(),
                if view.is_known { " ✓" } else { "" }
            );
            if view.is_flipped {
                let _ = writeln!(out, "  {}", card.back());
                if card.has_notes() {
                    let _ = writeln!(out, "  ({})", card.notes());
                }
            } else {
                let _ = writeln!(out, "  {}", card.front());
            }
        }
        None => {
            let _ = writeln!(out, "no cards in this category");
        }
    }
    let _ = writeln!(out, "known {}/{}", view.known_count, view.deck_size);
    let _ = writeln!(out, "categories: {}", view.categories.join(", "));
    out
}

#[must_use]
pub fn render_dashboard(report: &ProgressReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "overall: {}/{} known ({}%), time {}",
        report.overall.known,
        report.overall.total,
        report.overall.percentage,
        format_duration_secs(report.total_time_secs)
    );
    for (name, stats) in &report.categories {
        let _ = writeln!(
            out,
            "  {name:<16} {:>3}/{:<3} {:>3}%  {}",
            stats.known,
            stats.total,
            stats.percentage,
            format_duration_secs(stats.time_spent_secs)
        );
    }
    let _ = writeln!(out, "badges {}/{}:", report.earned_count(), report.badges.len());
    for status in &report.badges {
        let badge = status.badge;
        let mark = if status.earned { badge.emoji } else { "·" };
        let _ = writeln!(out, "  {mark} {} - {}", badge.name, badge.description);
    }
    out
}

fn render_screen(session: &SessionController) -> String {
    match session.state().screen() {
        Screen::Loading => String::from("loading...\n"),
        Screen::LoggedOut => String::from("log in with `login <name> [language]`\n"),
        Screen::LoggedIn(View::Cards) => session
            .card_view()
            .map(|view| render_card(&view))
            .unwrap_or_default(),
        Screen::LoggedIn(View::Dashboard) => session
            .dashboard()
            .map(|report| render_dashboard(&report))
            .unwrap_or_default(),
    }
}

//
// ─── LOOP ──────────────────────────────────────────────────────────────────────
//

enum Flow {
    Continue,
    Quit,
}

async fn apply(session: &mut SessionController, input: Input) -> Result<Flow, SessionError> {
    let flow = if input == Input::Quit {
        Flow::Quit
    } else {
        Flow::Continue
    };
    match input {
        Input::Login { user, language } => session.login(&user, language).await?,
        Input::Next => session.next().await?,
        Input::Previous => session.previous().await?,
        Input::Flip => session.flip()?,
        Input::Known => {
            session.toggle_known().await?;
        }
        Input::Category(name) => session.set_category(&name).await?,
        Input::Language(language) => session.switch_language(language).await?,
        Input::Stats => {
            session.show_dashboard().await?;
        }
        Input::Cards => session.show_cards()?,
        Input::Reset => session.reset_progress().await?,
        Input::Logout => session.logout().await?,
        Input::Help | Input::Quit => {}
    }
    Ok(flow)
}

/// Read commands from `input` until EOF or `quit`, writing each screen to `output`.
///
/// The session is suspended on the way out so category time is saved.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub async fn run<R, W>(
    session: &mut SessionController,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    session.startup().await;
    let result = relay(session, input, &mut output).await;
    session.suspend().await;
    result
}

async fn relay<R, W>(session: &mut SessionController, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(render_screen(session).as_bytes()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let text = match parse_input(&line) {
            Ok(None) => continue,
            Ok(Some(Input::Help)) => HELP.to_owned(),
            Ok(Some(input)) => match apply(session, input).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => render_screen(session),
                Err(err) => format!("{err}\n"),
            },
            Err(err) => format!("{err}\n"),
        };
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}
