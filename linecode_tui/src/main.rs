use linecode_tui::{
    component::{Component, HandleResult},
    components::Root,
    error::LinecodeTuiResult,
    tui::{self, CrosstermTerminal},
};

fn main() -> LinecodeTuiResult<()> {
    let mut terminal = tui::init_terminal()?;
    let mut root = Root::default();
    let res = run(&mut terminal, &mut root);
    tui::restore_terminal()?;
    res
}

fn run(terminal: &mut CrosstermTerminal, root: &mut Root) -> LinecodeTuiResult<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            root.render(frame, area);
        })?;
        if root.handle_event(&crossterm::event::read()?) == HandleResult::Quit {
            return Ok(());
        }
    }
}
