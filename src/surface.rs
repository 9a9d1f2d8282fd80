//! Drawing surface handle: the canvas element and its 2d context.
//!
//! A `Surface` owns exactly one canvas/context pair. Rebinding to another
//! canvas ([`Surface::set_canvas`]) swaps both references together, so a
//! caller can never observe a context belonging to a previous canvas. No
//! other code path re-derives a context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::consts::DEFAULT_CANVAS_ID;
use crate::error::EaselError;

/// The active drawing target and its 2d rendering context.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    /// Locate the drawing surface in `document`.
    ///
    /// The well-known id is probed twice before falling back to the first
    /// `<canvas>` element in the document.
    ///
    /// # Errors
    ///
    /// [`EaselError::CanvasNotFound`] when the document holds no canvas at
    /// all; [`EaselError::ContextUnavailable`] when the canvas refuses a 2d
    /// context.
    pub fn locate(document: &Document) -> Result<Self, EaselError> {
        let canvas = find_canvas(document)?;
        Self::from_canvas(canvas)
    }

    /// Wrap an explicit canvas element.
    ///
    /// # Errors
    ///
    /// [`EaselError::ContextUnavailable`] when the canvas refuses a 2d
    /// context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, EaselError> {
        let ctx = context_of(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Replace the active canvas.
    ///
    /// The canvas and its context are swapped as a pair. Callers must finish
    /// any in-progress drawing sequence first; context references taken
    /// before the swap are stale afterwards.
    ///
    /// # Errors
    ///
    /// [`EaselError::ContextUnavailable`] when the new canvas refuses a 2d
    /// context; the surface keeps its previous pair in that case.
    pub fn set_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), EaselError> {
        let ctx = context_of(&canvas)?;
        self.canvas = canvas;
        self.ctx = ctx;
        Ok(())
    }

    /// The active canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The active 2d rendering context.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Clear the whole surface and reset stroke/fill styles to black.
    pub fn clear(&self) {
        let w = f64::from(self.canvas.client_width());
        let h = f64::from(self.canvas.client_height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_stroke_style_str("#000000");
        self.ctx.set_fill_style_str("#000000");
    }

    /// Set the stroke width used by subsequent draw calls.
    pub fn set_line_width(&self, width: f64) {
        self.ctx.set_line_width(width);
    }

    /// Resize the canvas bitmap to fill the browser viewport.
    pub fn fill_viewport(&self, window: &Window) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
    }
}

fn find_canvas(document: &Document) -> Result<HtmlCanvasElement, EaselError> {
    // The id is probed twice before the fallback query.
    for _ in 0..2 {
        if let Some(element) = document.get_element_by_id(DEFAULT_CANVAS_ID) {
            if let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() {
                return Ok(canvas);
            }
        }
    }

    log::warn!("no #{DEFAULT_CANVAS_ID} element; falling back to the first <canvas>");
    document
        .query_selector("canvas")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| EaselError::CanvasNotFound { id: DEFAULT_CANVAS_ID.to_owned() })
}

fn context_of(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, EaselError> {
    canvas
        .get_context("2d")
        .map_err(|_| EaselError::ContextUnavailable)?
        .ok_or(EaselError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| EaselError::ContextUnavailable)
}
