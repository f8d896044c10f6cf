/// DOM names and layering used by the browser shell.
///
/// Class names must match the stylesheet in `index.html`.
// Mount point provided by the host page
pub const ROOT_ID: &str = "app";

// Layers, back to front
pub const HEART_LAYER_CLASS: &str = "heart-layer";
pub const CARD_CLASS: &str = "card";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";

pub const HEART_CLASS: &str = "falling-heart";
pub const ICON_CLASS: &str = "card-heart";
pub const QUESTION_CLASS: &str = "card-question";
pub const BUTTON_ROW_CLASS: &str = "card-buttons";
pub const ACCEPT_BUTTON_CLASS: &str = "btn-accept";
pub const DECLINE_BUTTON_CLASS: &str = "btn-decline";
pub const SUCCESS_TITLE_CLASS: &str = "card-title";
pub const SUCCESS_MESSAGE_CLASS: &str = "card-message";
pub const SUCCESS_NOTE_CLASS: &str = "card-note";
pub const RESTART_BUTTON_CLASS: &str = "btn-restart";

// Heart glyph (24x24 viewBox)
pub const HEART_PATH: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";
pub const ICON_COLOR: &str = "#ff1744";
pub const PROMPT_ICON_PX: u32 = 60;
pub const CELEBRATION_ICON_PX: u32 = 80;
