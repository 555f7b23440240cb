use termlist_core::Result;
use termlist_core::input::Command;
use termlist_core::input::Direction;
use termlist_core::input::Key;
use termlist_core::reader::KeyReader;

/// The operations the input loop needs from a list variant.
pub(crate) trait Interactive {
    /// Whether space toggles the selection of the cursor row.
    const SELECTABLE: bool;

    fn redraw(&mut self) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn is_exited(&self) -> bool;
    fn has_items(&self) -> bool;
    fn exit(&mut self);
    fn navigate(&mut self, direction: Direction) -> Result<()>;

    /// Toggles the selection of the cursor row. Only called when `SELECTABLE` is set.
    fn toggle_current(&mut self) -> Result<()> {
        Ok(())
    }

    fn dispatch(&mut self, key: Key) -> Result<()>;
}

/// Runs a list until it exits.
///
/// Every iteration draws the current state before blocking on the next key, so the screen
/// always matches the state the user is reacting to. Once the list has exited, the screen is
/// cleared one last time and the loop returns.
pub(crate) fn run<W, R>(widget: &mut W, mut reader: R) -> Result<()>
where
    W: Interactive,
    R: KeyReader,
{
    loop {
        widget.redraw()?;
        if widget.is_exited() {
            widget.clear()?;
            return Ok(());
        }

        let key = reader.read_key()?;
        match Command::interpret(key, widget.has_items(), W::SELECTABLE) {
            Command::Exit => widget.exit(),
            Command::Navigate(direction) => widget.navigate(direction)?,
            Command::ToggleSelect => widget.toggle_current()?,
            Command::Custom(key) => widget.dispatch(key)?,
        }
    }
}
