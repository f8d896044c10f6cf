use crate::constants::*;
use crate::core::confetti::ConfettiSystem;
use crate::core::hearts::{HeartDescriptor, HeartField};
use crate::core::text::CardText;
use crate::core::{CardView, ProposalApp};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// DOM nodes of the card, built once and restyled every frame.
pub struct CardDom {
    heart_layer: web::HtmlElement,
    hearts: Vec<(u64, web::HtmlElement)>,
    prompt: web::HtmlElement,
    prompt_icon: web::HtmlElement,
    celebration: web::HtmlElement,
    celebration_icon: web::HtmlElement,
    pub accept: web::HtmlElement,
    pub decline: web::HtmlElement,
    pub restart: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CardDom {
    pub fn build(document: &web::Document, root: &web::Element, text: &CardText) -> anyhow::Result<Self> {
        let heart_layer = dom::create_html(document, "div", HEART_LAYER_CLASS)?;
        dom::append(root, &heart_layer)?;

        // Prompt card
        let prompt = dom::create_html(document, "div", CARD_CLASS)?;
        let prompt_icon = dom::create_html(document, "div", ICON_CLASS)?;
        prompt_icon.set_inner_html(&dom::heart_svg(&format!("{}px", PROMPT_ICON_PX), ICON_COLOR));
        let question = dom::create_html(document, "h1", QUESTION_CLASS)?;
        question.set_text_content(Some(&text.question()));
        let buttons = dom::create_html(document, "div", BUTTON_ROW_CLASS)?;
        let accept = dom::create_html(document, "button", ACCEPT_BUTTON_CLASS)?;
        accept.set_text_content(Some(&text.accept_label));
        let decline = dom::create_html(document, "button", DECLINE_BUTTON_CLASS)?;
        decline.set_text_content(Some(&text.decline_label));
        dom::append(&buttons, &accept)?;
        dom::append(&buttons, &decline)?;
        dom::append(&prompt, &prompt_icon)?;
        dom::append(&prompt, &question)?;
        dom::append(&prompt, &buttons)?;
        dom::append(root, &prompt)?;

        // Celebration card
        let celebration = dom::create_html(document, "div", CARD_CLASS)?;
        let celebration_icon = dom::create_html(document, "div", ICON_CLASS)?;
        celebration_icon.set_inner_html(&dom::heart_svg(
            &format!("{}px", CELEBRATION_ICON_PX),
            ICON_COLOR,
        ));
        let title = dom::create_html(document, "h2", SUCCESS_TITLE_CLASS)?;
        title.set_text_content(Some(&text.success_title));
        let message = dom::create_html(document, "p", SUCCESS_MESSAGE_CLASS)?;
        message.set_text_content(Some(&text.success_message));
        let note = dom::create_html(document, "p", SUCCESS_NOTE_CLASS)?;
        note.set_text_content(Some(&text.success_note));
        let restart = dom::create_html(document, "button", RESTART_BUTTON_CLASS)?;
        restart.set_text_content(Some(&text.restart_label));
        for child in [&celebration_icon, &title, &message, &note, &restart] {
            dom::append(&celebration, child)?;
        }
        dom::set_shown(&celebration, false);
        dom::append(root, &celebration)?;

        // Confetti overlay
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create <canvas>: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_id(CONFETTI_CANVAS_ID);
        dom::append(root, &canvas)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        Ok(Self {
            heart_layer,
            hearts: Vec::new(),
            prompt,
            prompt_icon,
            celebration,
            celebration_icon,
            accept,
            decline,
            restart,
            canvas,
            ctx,
        })
    }

    pub fn render<R>(&mut self, app: &ProposalApp<R>, now_ms: f64) {
        self.sync_hearts(app.field(), now_ms);

        let stage = app.stage();
        let presence = stage.presence(now_ms);
        let (card, icon, hidden) = match stage.view() {
            CardView::Prompt => (&self.prompt, &self.prompt_icon, &self.celebration),
            CardView::Celebration => (&self.celebration, &self.celebration_icon, &self.prompt),
        };
        dom::set_shown(hidden, false);
        dom::set_shown(card, true);
        dom::set_style(card, "opacity", &format!("{:.3}", presence.opacity));
        dom::set_style(card, "transform", &format!("scale({:.3})", presence.scale));

        let (scale, rotate_deg) = app.heart_icon(now_ms);
        dom::set_style(
            icon,
            "transform",
            &format!("scale({:.3}) rotate({:.2}deg)", scale, rotate_deg),
        );

        let offset = app.evasive().map(|e| e.rendered()).unwrap_or_default();
        dom::set_style(
            &self.decline,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
        );

        self.draw_confetti(app.confetti());
    }

    /// Reconcile heart nodes with the field by id, then apply each pose.
    fn sync_hearts(&mut self, field: &HeartField, now_ms: f64) {
        let mut previous = std::mem::take(&mut self.hearts);
        for heart in field.hearts() {
            let node = match previous.iter().position(|(id, _)| *id == heart.id) {
                Some(i) => previous.swap_remove(i).1,
                None => match self.create_heart(heart) {
                    Ok(node) => node,
                    Err(e) => {
                        log::error!("[hearts] node for {}: {:?}", heart.id, e);
                        continue;
                    }
                },
            };
            let pose = heart.pose(now_ms, field.fall_to_px());
            dom::set_style(&node, "opacity", &format!("{:.3}", pose.opacity));
            dom::set_style(
                &node,
                "transform",
                &format!("translateY({:.1}px) rotate({:.1}deg)", pose.y_px, pose.rotation_deg),
            );
            self.hearts.push((heart.id, node));
        }
        for (_, node) in previous {
            node.remove();
        }
    }

    fn create_heart(&self, heart: &HeartDescriptor) -> anyhow::Result<web::HtmlElement> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let node = dom::create_html(&document, "div", HEART_CLASS)?;
        dom::set_style(&node, "left", &format!("{:.2}%", heart.left_pct));
        dom::set_style(&node, "width", &format!("{:.1}px", heart.size_px));
        dom::set_style(&node, "height", &format!("{:.1}px", heart.size_px));
        node.set_inner_html(&dom::heart_svg("100%", heart.color));
        dom::append(&self.heart_layer, &node)?;
        Ok(node)
    }

    fn draw_confetti(&self, confetti: &ConfettiSystem) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let ctx = &self.ctx;
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        if confetti.is_empty() {
            return;
        }
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        for p in confetti.particles() {
            let [a, b, c, d] = p.quad();
            ctx.set_global_alpha(p.alpha() as f64);
            #[allow(deprecated)]
            ctx.set_fill_style(&JsValue::from_str(p.color));
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.line_to(c.x as f64, c.y as f64);
            ctx.line_to(d.x as f64, d.y as f64);
            ctx.close_path();
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }
}
