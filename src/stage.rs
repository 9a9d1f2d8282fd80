//! Top-level handle tying the drawing surface to the input tracker.
//!
//! [`Stage::boot`] is the one-call startup path: locate the canvas, acquire
//! its context, and subscribe the input listeners. The stage owns the input
//! tracker and shares it with the event layer; nothing else writes to it.
//! Applications that need several independent instances (or that deliver
//! events themselves) can construct stages around explicit canvases with
//! [`Stage::with_canvas`].

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use web_sys::{Document, EventTarget, HtmlCanvasElement};

use crate::error::EaselError;
use crate::input::{InputTracker, MouseButton};
use crate::listen;
use crate::surface::Surface;
use crate::vec2::Vec2;

/// The drawing surface plus the live input state, bundled for an application.
pub struct Stage {
    surface: Surface,
    input: Rc<RefCell<InputTracker>>,
}

impl Stage {
    /// Locate the canvas in `document`, acquire its context, and subscribe
    /// the input listeners on the document body.
    ///
    /// # Errors
    ///
    /// Fails when no canvas exists, when the canvas refuses a 2d context, or
    /// when listener registration is rejected. No partially initialized
    /// stage escapes.
    pub fn boot(document: &Document) -> Result<Self, EaselError> {
        let surface = Surface::locate(document)?;
        let input = Rc::new(RefCell::new(InputTracker::new()));

        let body = document
            .body()
            .ok_or_else(|| EaselError::ListenerRegistration("document has no body".to_owned()))?;
        let target: &EventTarget = body.as_ref();
        listen::bind(target, &input)
            .map_err(|e| EaselError::ListenerRegistration(format!("{e:?}")))?;

        log::info!(
            "easel booted: canvas {}x{}",
            surface.canvas().width(),
            surface.canvas().height()
        );
        Ok(Self { surface, input })
    }

    /// Build a stage around an explicit canvas, without subscribing any
    /// listeners. The host feeds events through [`Stage::input_handle`].
    ///
    /// # Errors
    ///
    /// Fails when the canvas refuses a 2d context.
    pub fn with_canvas(canvas: HtmlCanvasElement) -> Result<Self, EaselError> {
        let surface = Surface::from_canvas(canvas)?;
        let input = Rc::new(RefCell::new(InputTracker::new()));
        Ok(Self { surface, input })
    }

    /// The active drawing surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Replace the active canvas; the surface swaps its canvas and context
    /// together.
    ///
    /// # Errors
    ///
    /// Fails when the new canvas refuses a 2d context; the previous pair is
    /// kept in that case.
    pub fn set_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), EaselError> {
        self.surface.set_canvas(canvas)
    }

    /// Read access to the input tracker.
    ///
    /// # Panics
    ///
    /// Panics if called while an event callback holds the write borrow,
    /// which cannot happen under single-threaded cooperative dispatch.
    #[must_use]
    pub fn input(&self) -> Ref<'_, InputTracker> {
        self.input.borrow()
    }

    /// Shared handle to the tracker, for hosts that feed events directly.
    #[must_use]
    pub fn input_handle(&self) -> Rc<RefCell<InputTracker>> {
        Rc::clone(&self.input)
    }

    /// Whether the key with code `code` is currently held.
    #[must_use]
    pub fn is_key_pressed(&self, code: u8) -> bool {
        self.input.borrow().is_key_pressed(code)
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.input.borrow().is_button_pressed(button)
    }

    /// Last observed pointer position.
    #[must_use]
    pub fn pointer_position(&self) -> Vec2 {
        self.input.borrow().pointer_position()
    }
}
