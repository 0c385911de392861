use std::sync::{Mutex, PoisonError};

use maud::{html, Markup, Render};

pub const RESULT_ID: &str = "result";

/// What the result area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultView {
    #[default]
    Empty,
    /// Absolute URL of the created snippet.
    Link(String),
    /// Message shown after `Error: `.
    Error(String),
}

impl Render for ResultView {
    fn render(&self) -> Markup {
        match self {
            ResultView::Empty => html! {
                div id=(RESULT_ID) {}
            },
            ResultView::Link(url) => html! {
                div id=(RESULT_ID) {
                    "Success! Your link is: "
                    a href=(url) target="_blank" rel="noopener" { (url) }
                }
            },
            ResultView::Error(message) => html! {
                div id=(RESULT_ID) style="color: red" {
                    "Error: " (message)
                }
            },
        }
    }
}

/// A place the submitter renders into. Every call replaces what was shown
/// before.
pub trait ResultArea {
    fn replace(&self, view: ResultView);
}

impl<A: ResultArea + ?Sized> ResultArea for &A {
    fn replace(&self, view: ResultView) {
        (**self).replace(view)
    }
}

/// Keeps the latest view so it can be sent back to the browser.
#[derive(Debug, Default)]
pub struct CapturedArea(Mutex<ResultView>);

impl CapturedArea {
    pub fn snapshot(&self) -> ResultView {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultArea for CapturedArea {
    fn replace(&self, view: ResultView) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = view;
    }
}
