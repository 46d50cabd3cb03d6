//! Option screens
//!
//! Every screen is a method on [`MenuSession`]. A screen pushes its own
//! selection frame, rebuilds its labels from the live [`Config`] on every
//! pass, dispatches on the [`MenuOutcome`] and pops the frame when it
//! returns.

mod controls;
mod files;
mod load;
mod main_menu;
mod options;
mod sound;
mod system;
mod video;

pub use main_menu::{MainMenuExit, RunOutcome};

use crate::host::Host;
use crate::settings::{Config, StorageDevice};
use menu_core::{
    Direction, MenuDriver, MenuError, MenuInput, MenuOutcome, MenuRenderer, MenuScreen, NavStack,
    Selection,
};

/// Title used by every screen below the main menu
pub const RETURN_TITLE: &str = "Press B to return";

fn on_off(value: bool) -> &'static str {
    if value {
        " ON"
    } else {
        "OFF"
    }
}

/// Item and direction a settings screen should apply, `None` on cancel.
///
/// A plain confirm counts as an increase so toggles and cycles respond to
/// both confirm and the alternate "right" control.
fn adjustment(outcome: MenuOutcome) -> Option<(usize, Direction)> {
    match outcome {
        MenuOutcome::Cancelled => None,
        MenuOutcome::Confirmed(item) => Some((item, Direction::Increase)),
        MenuOutcome::Adjusted(item, direction) => Some((item, direction)),
    }
}

/// Menu state for one run of the front-end
pub struct MenuSession<I, R, H> {
    driver: MenuDriver<I, R>,
    host: H,
    config: Config,
    stack: NavStack,
    /// Load screen selection, kept between visits
    load_selection: Selection,
    /// Load/save device, kept between visits
    device: StorageDevice,
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    pub fn new(driver: MenuDriver<I, R>, host: H, config: Config) -> Self {
        Self {
            driver,
            host,
            config,
            stack: NavStack::new(),
            load_selection: Selection::default(),
            device: StorageDevice::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn driver(&self) -> &MenuDriver<I, R> {
        &self.driver
    }

    /// Current screen nesting depth
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn into_parts(self) -> (MenuDriver<I, R>, H, Config) {
        (self.driver, self.host, self.config)
    }

    /// Run `body` on a fresh stack frame starting at `initial`.
    ///
    /// The frame is popped whether or not `body` fails, and is returned
    /// alongside the body's value.
    fn in_frame<T, F>(
        &mut self,
        initial: Selection,
        body: F,
    ) -> Result<(T, Selection), MenuError>
    where
        F: FnOnce(&mut Self) -> Result<T, MenuError>,
    {
        self.stack.push(initial);
        let result = body(self);
        let frame = self.stack.pop()?;
        result.map(|value| (value, frame))
    }

    /// Show one screen on the innermost stack frame
    fn visit<S: Into<String>>(
        &mut self,
        title: &str,
        labels: Vec<S>,
        fast_move: bool,
    ) -> Result<MenuOutcome, MenuError> {
        let screen = MenuScreen::new(title, labels)?.with_fast_move(fast_move);
        let selection = self.stack.current_mut()?;
        self.driver.navigate(&screen, selection)
    }
}
