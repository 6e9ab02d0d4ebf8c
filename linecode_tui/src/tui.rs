use std::{
    io::{self, Stdout},
    panic::{self, PanicHookInfo},
    process,
};

use crossterm::{
    cursor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::LinecodeTuiResult;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> LinecodeTuiResult<CrosstermTerminal> {
    terminal::enable_raw_mode()?;
    io::stdout()
        .execute(EnterAlternateScreen)?
        .execute(cursor::Hide)?;
    restore_on_panic();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal() -> LinecodeTuiResult<()> {
    io::stdout()
        .execute(cursor::Show)?
        .execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

// Leaves raw mode before the default hook prints, otherwise the message is garbled.
fn restore_on_panic() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo| {
        let _ = restore_terminal();
        default_hook(info);
        process::exit(1);
    }));
}
