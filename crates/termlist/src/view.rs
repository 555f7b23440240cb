use std::fmt;
use std::io;
use std::io::Write;
use termlist_core::Result;
use termlist_core::field::FieldAccessor;
use termlist_core::options::DisplayOptions;
use termlist_core::render;
use termlist_core::render::Frame;
use termlist_core::selection::SelectionSet;
use termlist_core::state::ListState;

/// State, layout, and output shared by both list variants.
pub(crate) struct ListView<T> {
    pub(crate) state: ListState<T>,
    pub(crate) options: DisplayOptions,
    accessor: Box<dyn FieldAccessor<T>>,
    out: Box<dyn Write>,
}

impl<T> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("len", &self.state.len())
            .field("cursor", &self.state.cursor())
            .field("exited", &self.state.is_exited())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T> ListView<T> {
    pub(crate) fn new(accessor: impl FieldAccessor<T> + 'static, options: DisplayOptions) -> Self {
        Self {
            state: ListState::new(),
            options,
            accessor: Box::new(accessor),
            out: Box::new(io::stdout()),
        }
    }

    pub(crate) fn set_output(&mut self, out: impl Write + 'static) {
        self.out = Box::new(out);
    }

    pub(crate) fn frame(&self, selection: Option<&SelectionSet>) -> Frame {
        render::render_frame(&self.state, &self.options, self.accessor.as_ref(), selection)
    }

    pub(crate) fn redraw(&mut self, selection: Option<&SelectionSet>) -> Result<()> {
        let frame = self.frame(selection);
        frame.write_to(self.out.as_mut())
    }

    pub(crate) fn clear(&mut self) -> Result<()> {
        render::clear_screen(self.out.as_mut())
    }

    pub(crate) fn erase_lines(&mut self, lines: usize) -> Result<()> {
        render::erase_lines(self.out.as_mut(), lines)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::io;
    use std::io::Write;
    use std::rc::Rc;
    use termlist_core::render::CLEAR_SCREEN;

    /// An in-memory terminal that records everything written to it.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct Screen(Rc<RefCell<Vec<u8>>>);

    impl Write for Screen {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Screen {
        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }

        /// Number of full-screen clears, which is one per frame plus the final clear.
        pub(crate) fn clears(&self) -> usize {
            self.text().matches(CLEAR_SCREEN).count()
        }

        /// Every frame written so far, in order. The final bare clear shows up as an empty frame.
        pub(crate) fn frames(&self) -> Vec<String> {
            self.text()
                .split(CLEAR_SCREEN)
                .skip(1)
                .map(str::to_string)
                .collect()
        }
    }
}
