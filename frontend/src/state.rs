//! Page-local state that does not need a DOM: scroll metrics, the reveal
//! latch and the contact draft reducer.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

use crate::config::{REVEAL_THRESHOLD, SCROLL_THRESHOLD_PX};

/// One sample of the window's vertical scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn is_scrolled(&self) -> bool {
        is_scrolled(self.scroll_y)
    }

    pub fn progress(&self) -> f64 {
        scroll_progress(self.scroll_y, self.scroll_height, self.viewport_height)
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Fraction of the document scrolled, in `[0, 1]`. A document that fits in
/// the viewport reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Fire-once guard for reveal-on-view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    played: bool,
}

impl RevealLatch {
    /// Feeds one intersection sample. Returns `true` only for the sample that
    /// trips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.played || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.played = true;
        true
    }

    /// Used when the intersection signal is unavailable.
    pub fn force(&mut self) -> bool {
        !std::mem::replace(&mut self.played, true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field `{0}` is empty")]
    MissingField(ContactField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub enum ContactAction {
    Edit(ContactField, String),
    Clear,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Mirrors the browser's `required` check: a field is missing only when
    /// it is the empty string.
    pub fn validate(&self) -> Result<(), SubmitError> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
            .map_or(Ok(()), |field| Err(SubmitError::MissingField(field)))
    }
}

impl Reducible for ContactDraft {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactAction::Edit(field, value) => {
                let mut next = (*self).clone();
                match field {
                    ContactField::Name => next.name = value,
                    ContactField::Email => next.email = value,
                    ContactField::Message => next.message = value,
                }
                Rc::new(next)
            }
            ContactAction::Clear => Rc::new(ContactDraft::default()),
        }
    }
}
