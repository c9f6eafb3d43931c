use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::CounterScreen;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draws one frame from the app's current snapshot.
///
/// Returns the button's rect for click hit-testing.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> Rect {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);

    frame.render_widget(Clear, body);
    let state = app.snapshot();
    let screen = CounterScreen::new(&state);
    let button = screen.layout(body).button;
    frame.render_widget(screen, body);

    frame.render_widget(Footer::new().widget(footer), footer);

    button
}
