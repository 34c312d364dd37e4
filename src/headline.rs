use crate::style;
use landing_core::{TextScramble, DEFAULT_FRAME_BUDGET};
use web_sys as web;

enum Phase {
    Waiting,
    Running,
    Done,
}

/// A `data-scramble` element. Its text stays readable until it scrolls into
/// view, then scrambles once and settles back on the same text.
pub struct Headline {
    el: web::HtmlElement,
    /// Authored markup, put back once the effect settles.
    markup: String,
    /// Plain text the scramble runs over.
    text: String,
    scramble: TextScramble,
    phase: Phase,
}

impl Headline {
    pub fn new(el: web::HtmlElement) -> Self {
        let markup = el.inner_html();
        let text = el.text_content().unwrap_or_default();
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self {
            el,
            markup,
            text,
            scramble: TextScramble::new(seed),
            phase: Phase::Waiting,
        }
    }

    pub fn frame(&mut self, viewport_height: f32) {
        match self.phase {
            Phase::Waiting => {
                let top = self.el.get_bounding_client_rect().top() as f32;
                if style::has_entered_view(top, viewport_height) {
                    self.scramble
                        .set_text(&self.text, &self.text, DEFAULT_FRAME_BUDGET);
                    self.phase = Phase::Running;
                }
            }
            Phase::Running => {
                let f = self.scramble.step();
                self.el
                    .set_inner_html(&style::headline_markup(&f, &self.markup));
                if f.done {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    /// Leave the element showing its real text.
    pub fn restore(&mut self) {
        if let Phase::Running = self.phase {
            self.el.set_inner_html(&self.markup);
        }
        self.phase = Phase::Done;
    }
}
