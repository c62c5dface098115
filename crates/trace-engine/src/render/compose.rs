use crate::core::session::Session;
use crate::render::frame::Frame;

/// Rebuild the host-facing frame from session state.
/// Runs once per host frame, after the logic steps.
pub fn build_frame(session: &Session, frame: &mut Frame) {
    frame.clear();
    if !session.is_active() {
        return;
    }

    for mark in session.marks() {
        frame.push_mark(*mark);
    }
    frame.glyph_letter = session.current_letter();
    frame.glyph_alpha = session.config().glyph_overlay_alpha;
    frame.fade_alpha = session.fade_alpha();
    frame.pointer = session.pointer();
    frame.pointer_visible = true;
}
