use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notes::NotesState;
use crate::ui::view::{body_lines, error_lines, hints};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

/// Compose header, mode body and footer. Hints live in the footer here;
/// the error banner stays at the bottom of the body.
pub fn draw(frame: &mut Frame<'_>, state: &NotesState) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(state), header);
    frame.render_widget(Clear, body);

    let mut lines = body_lines(state);
    lines.extend(error_lines(state));
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, body);

    frame.render_widget(Footer::new().widget(footer, hints(state)), footer);
}
