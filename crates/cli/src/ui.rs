//! Terminal menu: draws the widgets of a menu and dispatches key presses.

use std::io::{stdout, Write};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color::{DarkGreen, DarkGrey, Green, Red, Reset};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{queue, terminal};
use itertools::Itertools;
use log::{debug, warn};
use menu_args_core::definitions::Menu;
use menu_args_core::display::{Face, Rendered};
use menu_args_core::error::Result;
use menu_args_core::prompt::Prompter;

/// How the menu was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Run,
    Quit,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Widget(char),
    Run,
    Quit,
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Maps a key press to an action. Widget keys win over `q`.
pub fn key_action(key_event: &KeyEvent, widget_keys: &[char]) -> Option<KeyAction> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Enter => Some(KeyAction::Run),
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(c) if widget_keys.contains(&c) => Some(KeyAction::Widget(c)),
        KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Joins a command line for display, quoting words that contain whitespace.
pub fn format_command_line(command_line: &[String]) -> String {
    command_line
        .iter()
        .map(|word| {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                format!("'{}'", word.replace('\'', "'\\''"))
            } else {
                word.clone()
            }
        })
        .join(" ")
}

/// Runs the menu until the user runs the command or quits.
///
/// Widget prompts are given the terminal in cooked mode. A failing widget
/// leaves its value untouched and shows the error on the status line.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn run_menu(menu: &mut Menu, prompter: &mut dyn Prompter) -> Result<MenuAction> {
    let widget_keys: Vec<char> = menu.widgets.iter().map(|widget| widget.key()).collect();
    let mut status: Option<String> = None;

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard;

    loop {
        redraw_menu(menu, status.as_deref())?;

        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(&key_event, &widget_keys) {
            Some(KeyAction::Run) => {
                finish_screen()?;
                return Ok(MenuAction::Run);
            }
            Some(KeyAction::Quit) => {
                finish_screen()?;
                return Ok(MenuAction::Quit);
            }
            Some(KeyAction::Widget(key)) => {
                status = read_widget(menu, key, prompter)?;
            }
            None => {}
        }
    }
}

fn read_widget(menu: &mut Menu, key: char, prompter: &mut dyn Prompter) -> Result<Option<String>> {
    let Some(widget) = menu.widget_mut(key) else {
        return Ok(None);
    };
    debug!("Reading widget `{}`", key);

    disable_raw_mode()?;
    let mut stdout = stdout();
    queue!(stdout, Print("\r\n"))?;
    stdout.flush()?;

    let result = widget.read(prompter);
    enable_raw_mode()?;

    Ok(match result {
        Ok(()) => None,
        Err(e) => {
            warn!("Reading `{}` failed: {}", key, e);
            Some(e.to_string())
        }
    })
}

fn finish_screen() -> Result<()> {
    let mut stdout = stdout();
    queue!(stdout, Print("\r\n"))?;
    stdout.flush()?;
    Ok(())
}

fn redraw_menu(menu: &Menu, status: Option<&str>) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    print_header(menu)?;

    let description_width = menu
        .widgets
        .iter()
        .map(|widget| widget.description().chars().count())
        .max()
        .unwrap_or(0);

    for widget in &menu.widgets {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!(" {} ", widget.key())),
            SetAttribute(Attribute::Reset),
            Print(format!(" {:<description_width$}  ", widget.description())),
        )?;
        print_rendered(&widget.render())?;
        queue!(stdout, MoveToNextLine(1))?;
    }

    queue!(stdout, MoveToNextLine(1))?;
    match menu.assemble() {
        Ok(command_line) => queue!(
            stdout,
            Print(format!("Command: {}", format_command_line(&command_line)))
        )?,
        Err(e) => queue!(
            stdout,
            SetForegroundColor(Red),
            Print(format!("Command: {e}")),
            SetForegroundColor(Reset)
        )?,
    }
    queue!(stdout, MoveToNextLine(1))?;

    if let Some(status) = status {
        queue!(
            stdout,
            SetForegroundColor(Red),
            Print(status),
            SetForegroundColor(Reset),
            MoveToNextLine(1)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

fn print_header(menu: &Menu) -> Result<()> {
    let mut stdout = stdout();
    let (width, _) = terminal::size()?;

    let title = match &menu.description {
        Some(description) => format!("  {} ({})", menu.id, description),
        None => format!("  {}", menu.id),
    };
    let instructions = "<key>: Change   |   <enter>: Run   |   q: Quit  ";
    let padding = " ".repeat(
        (width as usize)
            .saturating_sub(title.chars().count())
            .saturating_sub(instructions.len()),
    );

    queue!(
        stdout,
        SetBackgroundColor(DarkGreen),
        Print(title),
        Print(padding),
        Print(instructions),
        SetBackgroundColor(Reset),
        MoveToNextLine(2),
    )?;
    Ok(())
}

fn print_rendered(rendered: &Rendered) -> Result<()> {
    let mut stdout = stdout();
    for segment in rendered.segments() {
        match segment.face {
            Face::Active => queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Green),
                Print(&segment.text),
            )?,
            Face::Inactive => queue!(
                stdout,
                SetForegroundColor(DarkGrey),
                Print(&segment.text)
            )?,
        }
        queue!(stdout, SetAttribute(Attribute::Reset), SetForegroundColor(Reset))?;
    }
    Ok(())
}
