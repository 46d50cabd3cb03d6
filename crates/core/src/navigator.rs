//! Menu navigation state machine
//!
//! A [`MenuScreen`] is a list of labels rebuilt by the caller on every visit.
//! [`Navigator`] walks a [`Selection`] over it one input sample at a time and
//! stops with a [`MenuOutcome`]. [`MenuDriver`] owns the input and render
//! collaborators and runs the blocking poll loop.
//!
//! # States
//!
//! - `Rendering`: the selection changed (or the screen was just entered) and
//!   the next iteration redraws.
//! - `Idle`: the frame on screen is current, waiting for input.
//!
//! Confirm and cancel leave the loop from either state.

use crate::input::{MenuButtons, MenuInput};
use crate::logging::{log, LogCategory, LogLevel};
use crate::pager::InfoPager;
use crate::render::{draw_menu, MenuLayout, MenuRenderer};
use crate::MenuError;

/// One page of selectable labels
#[derive(Debug, Clone, PartialEq)]
pub struct MenuScreen {
    title: String,
    labels: Vec<String>,
    fast_move: bool,
}

impl MenuScreen {
    /// Create a screen; an empty label list is rejected since no selection
    /// index would be valid.
    pub fn new<S, I>(title: impl Into<String>, labels: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(MenuError::EmptyScreen);
        }
        Ok(Self {
            title: title.into(),
            labels,
            fast_move: false,
        })
    }

    /// Enable left/right as alternate confirm/cancel
    pub fn with_fast_move(mut self, fast_move: bool) -> Self {
        self.fast_move = fast_move;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn item_count(&self) -> usize {
        self.labels.len()
    }

    pub fn fast_move(&self) -> bool {
        self.fast_move
    }
}

/// Index of the highlighted item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(usize);

impl Selection {
    pub fn new(index: usize) -> Self {
        Selection(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Move up one item, wrapping to the last one
    pub fn move_up(&mut self, count: usize) {
        debug_assert!(count > 0);
        self.0 = if self.0 == 0 { count - 1 } else { self.0 - 1 };
    }

    /// Move down one item, wrapping to the first one
    pub fn move_down(&mut self, count: usize) {
        debug_assert!(count > 0);
        self.0 = if self.0 + 1 >= count { 0 } else { self.0 + 1 };
    }

    /// Pull an out-of-range index back inside `0..count`.
    ///
    /// Needed when a screen shrinks between visits (e.g. the video menu
    /// hiding its scale items).
    pub fn clamp_to(&mut self, count: usize) {
        if self.0 >= count {
            self.0 = count.saturating_sub(1);
        }
    }
}

/// Which way a fast-move adjustment goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// +1 or -1
    pub fn sign(self) -> i32 {
        match self {
            Direction::Increase => 1,
            Direction::Decrease => -1,
        }
    }
}

/// Result of one screen visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOutcome {
    /// Confirm pressed on the item
    Confirmed(usize),
    /// Cancel pressed
    Cancelled,
    /// Alternate control pressed on the item (fast-move screens only)
    Adjusted(usize, Direction),
}

impl MenuOutcome {
    /// Index of the item the outcome refers to, if any
    pub fn index(self) -> Option<usize> {
        match self {
            MenuOutcome::Confirmed(i) | MenuOutcome::Adjusted(i, _) => Some(i),
            MenuOutcome::Cancelled => None,
        }
    }

    /// Signed exit code: `N` for a confirm (or increase) on item N, `-1` for
    /// cancel and `-(2+N)` for a decrease on item N.
    pub fn exit_code(self) -> i32 {
        match self {
            MenuOutcome::Confirmed(i) | MenuOutcome::Adjusted(i, Direction::Increase) => i as i32,
            MenuOutcome::Cancelled => -1,
            MenuOutcome::Adjusted(i, Direction::Decrease) => -2 - i as i32,
        }
    }

    /// Inverse of [`MenuOutcome::exit_code`]. Non-negative codes always
    /// decode to `Confirmed` since an increase is indistinguishable there.
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            -1 => MenuOutcome::Cancelled,
            c if c >= 0 => MenuOutcome::Confirmed(c as usize),
            c => MenuOutcome::Adjusted((-2 - c) as usize, Direction::Decrease),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    Rendering,
    Idle,
}

/// Pure navigation state for one visit of a screen
#[derive(Debug)]
pub struct Navigator<'a> {
    screen: &'a MenuScreen,
    selection: Selection,
    state: NavState,
}

impl<'a> Navigator<'a> {
    pub fn new(screen: &'a MenuScreen, mut selection: Selection) -> Self {
        selection.clamp_to(screen.item_count());
        Self {
            screen,
            selection,
            state: NavState::Rendering,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// True if the next iteration must redraw
    pub fn needs_redraw(&self) -> bool {
        self.state == NavState::Rendering
    }

    /// Mark the current frame as drawn
    pub fn rendered(&mut self) {
        self.state = NavState::Idle;
    }

    /// Apply one input sample.
    ///
    /// Up is checked before down so it wins when both are held. Movement is
    /// applied before terminal buttons, and terminal buttons are checked in
    /// the order confirm, cancel, alt-confirm, alt-cancel.
    pub fn step(&mut self, buttons: MenuButtons) -> Option<MenuOutcome> {
        let count = self.screen.item_count();

        if buttons.contains(MenuButtons::UP) {
            self.selection.move_up(count);
            self.state = NavState::Rendering;
        } else if buttons.contains(MenuButtons::DOWN) {
            self.selection.move_down(count);
            self.state = NavState::Rendering;
        }

        let index = self.selection.index();
        if buttons.contains(MenuButtons::CONFIRM) {
            return Some(MenuOutcome::Confirmed(index));
        }
        if buttons.contains(MenuButtons::CANCEL) {
            return Some(MenuOutcome::Cancelled);
        }

        if self.screen.fast_move() {
            if buttons.contains(MenuButtons::ALT_CONFIRM) {
                return Some(MenuOutcome::Adjusted(index, Direction::Increase));
            }
            if buttons.contains(MenuButtons::ALT_CANCEL) {
                return Some(MenuOutcome::Adjusted(index, Direction::Decrease));
            }
        }

        None
    }
}

/// Runs menu screens against an input source and a renderer
pub struct MenuDriver<I, R> {
    input: I,
    renderer: R,
    layout: MenuLayout,
}

impl<I: MenuInput, R: MenuRenderer> MenuDriver<I, R> {
    pub fn new(input: I, renderer: R) -> Self {
        Self {
            input,
            renderer,
            layout: MenuLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: MenuLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }

    /// Block on one input sample
    pub fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
        self.input.read_buttons()
    }

    /// Show a read-only pager until it is dismissed
    pub fn page(&mut self, pager: &mut InfoPager) -> Result<(), MenuError> {
        pager.show(&mut self.input, &mut self.renderer, &self.layout)
    }

    /// Run the poll loop for `screen` until a terminal button is pressed.
    ///
    /// `selection` is both the starting item and, on return, the item that
    /// was highlighted when the loop ended.
    pub fn navigate(
        &mut self,
        screen: &MenuScreen,
        selection: &mut Selection,
    ) -> Result<MenuOutcome, MenuError> {
        let mut nav = Navigator::new(screen, *selection);

        loop {
            if nav.needs_redraw() {
                draw_menu(
                    &mut self.renderer,
                    &self.layout,
                    screen.title(),
                    screen.labels(),
                    nav.selection().index(),
                )?;
                nav.rendered();
            }

            let buttons = self.input.read_buttons()?;
            if buttons.is_empty() {
                continue;
            }
            log(LogCategory::Input, LogLevel::Trace, || {
                format!("menu input {:?}", buttons)
            });

            if let Some(outcome) = nav.step(buttons) {
                *selection = nav.selection();
                log(LogCategory::Navigation, LogLevel::Debug, || {
                    format!(
                        "'{}' finished with {:?} (exit code {})",
                        screen.title(),
                        outcome,
                        outcome.exit_code()
                    )
                });
                return Ok(outcome);
            }
        }
    }
}
