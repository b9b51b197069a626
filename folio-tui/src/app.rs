//! Application State

use std::time::Instant;

use folio_core::hero::Hero;
use folio_core::i18n::{translate_with_args, Locale};
use folio_core::reveal::{Reveal, RevealFrame};
use folio_core::social::{Activation, LinkDispatcher, RenderedLink};
use folio_core::{FolioResult, Route, SiteConfig};

use crate::backend::{LinkOpener, SystemOpener};

/// Current screen in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with the hero section
    Home,
    /// Self-introduction page
    About,
    /// Help screen
    Help,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::About => Screen::About,
        }
    }
}

/// Application state.
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Screens to return to with Esc
    history: Vec<Screen>,
    /// Status message
    pub status_message: Option<String>,
    /// Selected link index in the social bar
    pub selected_link: usize,
    pub locale: Locale,
    pub hero: Hero,
    pub dispatcher: LinkDispatcher,
    /// One reveal per hero slot, in slot order
    reveals: Vec<Reveal>,
    /// Frames sampled by the last `tick`
    frames: Vec<RevealFrame>,
    reduced_motion: bool,
    opener: Box<dyn LinkOpener>,
}

impl App {
    /// Create a new application opening links in the system browser.
    pub fn new(config: &SiteConfig) -> FolioResult<Self> {
        Self::with_opener(config, Box::new(SystemOpener))
    }

    pub fn with_opener(config: &SiteConfig, opener: Box<dyn LinkOpener>) -> FolioResult<Self> {
        let hero = Hero::new(config.locale);
        let dispatcher = config.dispatcher()?;

        let mut app = App {
            screen: Screen::Home,
            history: Vec::new(),
            status_message: None,
            selected_link: 0,
            locale: config.locale,
            hero,
            dispatcher,
            reveals: Vec::new(),
            frames: Vec::new(),
            reduced_motion: config.reduced_motion,
            opener,
        };
        app.mount_home(Instant::now());
        Ok(app)
    }

    /// (Re)creates the hero reveals and starts them at `now`.
    pub fn mount_home(&mut self, now: Instant) {
        self.reveals = self
            .hero
            .slots()
            .iter()
            .map(|slot| {
                let mut reveal = Reveal::new(slot.reveal);
                if self.reduced_motion {
                    reveal.finish();
                } else {
                    reveal.mount(now);
                }
                reveal
            })
            .collect();
        self.tick(now);
    }

    /// Samples every hero reveal at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.frames = self.reveals.iter_mut().map(|r| r.sample(now)).collect();
    }

    /// Frames of the hero slots as of the last `tick`.
    pub fn frames(&self) -> &[RevealFrame] {
        &self.frames
    }

    /// True while at least one hero reveal is still moving.
    pub fn is_animating(&self) -> bool {
        self.screen == Screen::Home && self.reveals.iter().any(|r| !r.is_settled())
    }

    /// Navigate to a screen.
    pub fn goto(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.leave_screen();
        self.history.push(self.screen);
        self.screen = screen;
        self.enter_screen();
    }

    /// Go back to the previous screen.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.leave_screen();
            self.screen = previous;
            self.enter_screen();
        }
    }

    fn leave_screen(&mut self) {
        if self.screen == Screen::Home {
            for reveal in &mut self.reveals {
                reveal.cancel();
            }
            self.reveals.clear();
        }
    }

    fn enter_screen(&mut self) {
        self.status_message = None;
        if self.screen == Screen::Home {
            self.mount_home(Instant::now());
        }
    }

    /// Rendered social links.
    pub fn links(&self) -> Vec<RenderedLink> {
        self.dispatcher.render()
    }

    pub fn select_next_link(&mut self) {
        let count = self.dispatcher.visible_len();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }

    pub fn select_previous_link(&mut self) {
        let count = self.dispatcher.visible_len();
        if count > 0 {
            self.selected_link = (self.selected_link + count - 1) % count;
        }
    }

    /// Activates the selected social link.
    pub fn activate_selected_link(&mut self) -> Option<Activation> {
        let key = self
            .links()
            .get(self.selected_link)
            .map(|link| link.key().to_string())?;
        let activation = self.dispatcher.activate(&key)?;

        if let Activation::Open { href, .. } = &activation {
            if let Err(e) = self.opener.open(href) {
                tracing::warn!(%href, error = %e, "failed to open link");
                self.status_message = Some(translate_with_args(
                    self.locale,
                    "social.open.failed",
                    "无法打开 {href}",
                    &[("href", href.as_str())],
                ));
            }
        }
        Some(activation)
    }

    /// Runs the hero call-to-action.
    pub fn activate_action(&mut self) {
        let route = self.hero.activate_action();
        self.goto(Screen::from(route));
    }
}
