//! Render boundary: writes computed parameters onto the section's elements.
//!
//! Any element may be missing from the markup; its parameter is then simply
//! not applied and the page stays static in that respect.

use crate::constants::*;
use crate::dom;
use crate::style;
use landing_core::ParameterBundle;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct RenderTargets {
    section: web::HtmlElement,
    stage: Option<web::HtmlElement>,
    mask: Option<web::HtmlElement>,
    overlay: Option<web::HtmlElement>,
    video: Option<web::HtmlVideoElement>,
    last: Option<ParameterBundle>,
}

impl RenderTargets {
    pub fn find(section: &web::HtmlElement) -> Self {
        let stage = dom::query_html(section, STAGE_SELECTOR);
        let mask = dom::query_html(section, MASK_SELECTOR);
        let overlay = dom::query_html(section, OVERLAY_SELECTOR);
        let video = section
            .query_selector(VIDEO_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());
        if stage.is_none() && mask.is_none() && overlay.is_none() && video.is_none() {
            log::warn!("[render] section #{} has no effect targets", section.id());
        }
        if let Some(v) = &video {
            // playback is driven by scroll, not by the media clock
            _ = v.pause();
        }
        Self {
            section: section.clone(),
            stage,
            mask,
            overlay,
            video,
            last: None,
        }
    }

    pub fn section(&self) -> &web::HtmlElement {
        &self.section
    }

    pub fn apply(&mut self, b: &ParameterBundle) {
        let plan = style::plan_frame(
            self.last.as_ref(),
            b,
            self.video
                .as_ref()
                .map(|v| (v.duration(), v.current_time())),
        );
        if let (Some(video), Some(t)) = (&self.video, plan.seek_to) {
            video.set_current_time(t);
        }
        if !plan.restyle {
            return;
        }
        _ = self
            .section
            .style()
            .set_property(PROGRESS_CSS_VAR, &format!("{:.4}", b.outer_progress));
        if let Some(stage) = &self.stage {
            _ = stage
                .style()
                .set_property("transform", &style::stage_transform(b.rotate_x, b.rotate_y));
        }
        if let Some(mask) = &self.mask {
            let clip = style::mask_clip_path(b.mask_diameter_px);
            let css = mask.style();
            _ = css.set_property("clip-path", &clip);
            _ = css.set_property("-webkit-clip-path", &clip);
        }
        if let Some(overlay) = &self.overlay {
            _ = overlay
                .style()
                .set_property("opacity", &style::opacity_value(b.overlay_opacity));
        }
        if let Some(video) = &self.video {
            _ = video
                .style()
                .set_property("transform", &style::video_transform(b.video_playback_scale));
        }
        self.last = Some(*b);
    }

    /// Put every element back to its stylesheet defaults.
    pub fn reset(&mut self) {
        _ = self.section.style().remove_property(PROGRESS_CSS_VAR);
        if let Some(stage) = &self.stage {
            _ = stage.style().remove_property("transform");
        }
        if let Some(mask) = &self.mask {
            _ = mask.style().remove_property("clip-path");
            _ = mask.style().remove_property("-webkit-clip-path");
        }
        if let Some(overlay) = &self.overlay {
            _ = overlay.style().remove_property("opacity");
        }
        if let Some(video) = &self.video {
            _ = video.style().remove_property("transform");
        }
        self.last = None;
    }
}
