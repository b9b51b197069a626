//! Link opening backend

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Opens a hyperlink outside the terminal.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

impl<T: LinkOpener + ?Sized> LinkOpener for Rc<T> {
    fn open(&self, url: &str) -> io::Result<()> {
        (**self).open(url)
    }
}

/// Opens links in the system browser (a new browsing context).
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

/// Records opened links instead of launching a browser.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every call fails.
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
