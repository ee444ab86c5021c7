use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::anim::{AnimationLoop, Visual};
use crate::error::{Result, SiteError};
use crate::geom::{Point, Size};
use crate::paint::{Painter, Rgba, Stroke, Surface};
use crate::rng::XorShift;

/// A `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Looks up canvas `id`. An absent element is `Ok(None)`; an element that
    /// is not a usable canvas is an error.
    pub fn find(document: &Document, id: &str) -> Result<Option<Self>> {
        let Some(el) = document.get_element_by_id(id) else {
            return Ok(None);
        };
        let canvas = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SiteError::WrongElement {
                id: id.to_owned(),
                expected: "canvas",
            })?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SiteError::NoContext(id.to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::NoContext(id.to_owned()))?;
        Ok(Some(Self { canvas, ctx }))
    }

    fn circle(&self, center: Point, radius: f64) -> bool {
        self.ctx.begin_path();
        match self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("arc rejected: {err:?}");
                false
            }
        }
    }

    fn stroke_style(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_string());
        self.ctx.set_line_width(stroke.width);
    }
}

impl Painter for CanvasSurface {
    fn clear(&mut self, size: Size) {
        self.ctx.clear_rect(0.0, 0.0, size.w(), size.h());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.stroke_style(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        if self.circle(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.stroke_style(stroke);
        if self.circle(center, radius) {
            self.ctx.stroke();
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.stroke_style(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn layout_size(&self) -> Size {
        Size::from_offsets(self.canvas.offset_width(), self.canvas.offset_height())
    }

    fn apply_size(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }
}

/// Starts `visual` on canvas `id`: binds the resize listener, draws the first
/// frame and keeps drawing every animation frame for the page's lifetime.
/// A missing canvas is a silent no-op.
pub fn mount<V: Visual + 'static>(
    window: &Window,
    document: &Document,
    id: &str,
    visual: V,
) -> Result<()> {
    let surface = CanvasSurface::find(document, id)?;
    let Some(anim) = AnimationLoop::initialize(surface, visual, XorShift::from_entropy()) else {
        return Ok(());
    };
    log::info!(
        "#{id}: {} running at {}x{}",
        anim.visual().name(),
        anim.size().width,
        anim.size().height
    );
    let anim = Rc::new(RefCell::new(anim));

    // Resize canvas to fit its layout box. Deliberately not debounced.
    let on_resize = {
        let anim = anim.clone();
        Closure::<dyn FnMut()>::new(move || anim.borrow_mut().resize())
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    let frame_anim = anim.clone();
    *g.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        frame_anim.borrow_mut().render_frame();
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }));

    // The first frame renders synchronously and schedules the next.
    anim.borrow_mut().render_frame();
    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
