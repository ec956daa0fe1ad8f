use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::motion::error::MotionError;
use crate::motion::style::{Style, Viewport};
use crate::motion::timeline::Stage;

/// Scroll position and layout reads the motion engine needs on top of [`Stage`].
pub trait ScrollStage: Stage {
    /// Resolves and caches every element matching `selectors`.
    fn prepare(&mut self, selectors: &[&str]) -> Result<(), MotionError>;
    fn refresh_viewport(&mut self) -> Result<(), MotionError>;
    fn scroll_y(&self) -> f64;
    /// Furthest the page can scroll, in pixels.
    fn max_scroll(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
    /// Document-relative top and height of the first match.
    fn document_rect(&self, selector: &str) -> Option<(f64, f64)>;
    /// Viewport-relative top of the first match.
    fn viewport_top(&self, selector: &str) -> Option<f64>;
    /// Drops every inline style this stage wrote.
    fn clear(&mut self);
}

/// Browser-backed `Stage`. Selectors are resolved once by `prepare` and cached;
/// elements that do not exist are simply never written.
pub struct DomStage {
    window: Window,
    document: Document,
    viewport: Viewport,
    elements: HashMap<String, Vec<HtmlElement>>,
}

impl DomStage {
    pub fn acquire() -> Result<Self, MotionError> {
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let document = window.document().ok_or(MotionError::NoDocument)?;
        let viewport = read_viewport(&window)?;
        Ok(Self {
            window,
            document,
            viewport,
            elements: HashMap::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn first(&self, selector: &str) -> Option<&HtmlElement> {
        self.elements.get(selector).and_then(|found| found.first())
    }
}

impl Stage for DomStage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn count(&self, target: &str) -> usize {
        self.elements.get(target).map_or(0, Vec::len)
    }

    fn apply(&mut self, target: &str, index: usize, style: &Style) {
        if let Some(element) = self.elements.get(target).and_then(|found| found.get(index)) {
            let css = element.style();
            let _ = css.set_property("will-change", "transform, opacity");
            let _ = css.set_property("transform", &style.css_transform());
            let _ = css.set_property("opacity", &style.css_opacity());
        }
    }
}

impl ScrollStage for DomStage {
    fn prepare(&mut self, selectors: &[&str]) -> Result<(), MotionError> {
        for selector in selectors {
            if self.elements.contains_key(*selector) {
                continue;
            }
            let list = self.document.query_selector_all(selector)?;
            let found: Vec<HtmlElement> = (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect();
            self.elements.insert(selector.to_string(), found);
        }
        Ok(())
    }

    fn refresh_viewport(&mut self) -> Result<(), MotionError> {
        self.viewport = read_viewport(&self.window)?;
        Ok(())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn max_scroll(&self) -> f64 {
        let height = self
            .document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        (height - self.viewport.height).max(0.0)
    }

    fn scroll_to(&mut self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn document_rect(&self, selector: &str) -> Option<(f64, f64)> {
        let rect = self.first(selector)?.get_bounding_client_rect();
        Some((rect.top() + self.scroll_y(), rect.height()))
    }

    fn viewport_top(&self, selector: &str) -> Option<f64> {
        Some(self.first(selector)?.get_bounding_client_rect().top())
    }

    fn clear(&mut self) {
        for element in self.elements.values().flatten() {
            let style = element.style();
            let _ = style.remove_property("transform");
            let _ = style.remove_property("opacity");
            let _ = style.remove_property("will-change");
        }
    }
}

fn read_viewport(window: &Window) -> Result<Viewport, MotionError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport { width, height })
}
