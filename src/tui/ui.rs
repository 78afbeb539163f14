use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{App, ChannelView, LoadState, Mode, SearchView};
use crate::tui::component::Component;
use crate::tui::components::{ChannelList, Menu, PlaylistFormView, StatusBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _gap, main_area, status_area] = layout.areas(frame.area());

    TitleBar::new(title_context(&app.mode)).render(frame, title_area);

    match &app.mode {
        Mode::Menu(menu) => {
            let items = app.menu_items();
            Menu::new(&items, menu.cursor).render(frame, main_area);
        }
        Mode::AddPlaylist(form) => PlaylistFormView::new(form).render(frame, main_area),
        Mode::ChannelList(view) => draw_channel_view(frame, main_area, app, view),
        Mode::SearchInput(search) => draw_search(frame, main_area, search, true),
        Mode::SearchBrowse(search) => draw_search(frame, main_area, search, false),
        Mode::FavouritesList(favs) => {
            ChannelList::new(&favs.channels, favs.cursor)
                .noun("favourites")
                .empty_text("No favourites yet.")
                .render(frame, main_area);
        }
    }

    StatusBar::new(app.status.as_ref(), hints(&app.mode)).render(frame, status_area);
}

fn title_context(mode: &Mode) -> String {
    match mode {
        Mode::Menu(_) => String::new(),
        Mode::AddPlaylist(_) => "New playlist".to_string(),
        Mode::ChannelList(view) => format!("Playlist: {}", view.playlist_name),
        Mode::SearchInput(search) | Mode::SearchBrowse(search) => {
            format!("Search in {}", search.base.playlist_name)
        }
        Mode::FavouritesList(favs) => format!("Favourites for playlist: {}", favs.base.playlist_name),
    }
}

/// Key hints for the bottom line.
pub fn hints(mode: &Mode) -> &'static str {
    match mode {
        Mode::Menu(_) => "[j/k] move  [enter] select  [q] quit",
        Mode::AddPlaylist(_) => "[tab] switch field  [enter] submit  [esc] cancel  [ctrl+c] quit",
        Mode::ChannelList(view) if view.load_error().is_some() => "[esc] back  [ctrl+c] quit",
        Mode::ChannelList(_) => {
            "[j/k] move  [enter] play  [/] search  [m] mark/unmark  [b] favourites  [esc] back"
        }
        Mode::SearchInput(_) => "[↑/↓] move  [enter] play  [esc] browse filtered  [ctrl+c] quit",
        Mode::SearchBrowse(_) => {
            "[j/k] move  [enter] play  [/] search again  [m] mark/unmark  [esc] show all"
        }
        Mode::FavouritesList(_) => "[j/k] move  [enter] play  [m] remove  [esc] back",
    }
}

fn draw_channel_view(frame: &mut Frame, area: Rect, app: &App, view: &ChannelView) {
    match &view.load {
        LoadState::Loading { .. } => {
            let loading = Paragraph::new(format!("Loading {}…", view.playlist_name))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(loading, area);
        }
        LoadState::Failed(error) => {
            let error = Paragraph::new(format!("[!] {error}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, area);
        }
        LoadState::Ready => {
            ChannelList::new(&view.channels, view.cursor)
                .with_stars(&app.config.favourites, &view.playlist_name)
                .render(frame, area);
        }
    }
}

fn draw_search(frame: &mut Frame, area: Rect, search: &SearchView, editing: bool) {
    use Constraint::{Length, Min};
    let [prompt_area, _gap, list_area] =
        Layout::vertical([Length(1), Length(1), Min(0)]).areas(area);

    let prompt = if editing {
        Line::from(vec![
            Span::styled("Search: /", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(search.query.as_str()),
        ])
    } else {
        Line::from(Span::styled(
            format!("Filtered results for /{}", search.query),
            Style::default().fg(Color::Gray),
        ))
    };
    frame.render_widget(prompt, prompt_area);

    if editing {
        let column = "Search: /".width() + search.query.width();
        let x = prompt_area
            .x
            .saturating_add(column.min(usize::from(u16::MAX)) as u16)
            .min(prompt_area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, prompt_area.y));
    }

    ChannelList::new(&search.filtered, search.cursor).render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::config::Config;
    use crate::core::state::Status;
    use crate::test_support::{config_with, news_app};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_menu() {
        let app = App::new(config_with(&[("News", "news.m3u")]));
        let text = render(&app);
        assert!(text.contains("Vibecast"));
        assert!(text.contains("➜ Add playlist"));
        assert!(text.contains("  News"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_draw_channel_list_with_star() {
        let mut app = news_app();
        update(&mut app, Action::ToggleFavourite);
        let text = render(&app);
        assert!(text.contains("Playlist: News"));
        assert!(text.contains("➜ ★ BBC"));
        assert!(text.contains("Showing 1-3 of 3 channels"));
    }

    #[test]
    fn test_draw_loading_and_failed_playlist() {
        let mut app = App::new(config_with(&[("News", "news.m3u")]));
        update(&mut app, Action::Down);
        let effects = update(&mut app, Action::Select);
        assert!(render(&app).contains("Loading News…"));

        let Some(crate::core::action::Effect::LoadPlaylist { generation, .. }) =
            effects.into_iter().next()
        else {
            panic!("expected a load");
        };
        update(
            &mut app,
            Action::PlaylistLoaded {
                generation,
                result: Err("HTTP 404".to_string()),
            },
        );
        let text = render(&app);
        assert!(text.contains("[!] Failed to load playlist: HTTP 404"));
        assert!(text.contains("[esc] back"));
    }

    #[test]
    fn test_draw_search_input() {
        let mut app = news_app();
        update(&mut app, Action::ToggleSearch);
        update(&mut app, Action::Text('c'));
        update(&mut app, Action::Text('n'));
        let text = render(&app);
        assert!(text.contains("Search: /cn"));
        assert!(text.contains("➜ CNN"));
        assert!(!text.contains("BBC"));
    }

    #[test]
    fn test_draw_empty_favourites() {
        let mut app = news_app();
        update(&mut app, Action::ShowFavourites);
        let text = render(&app);
        assert!(text.contains("Favourites for playlist: News"));
        assert!(text.contains("No favourites yet."));
    }

    #[test]
    fn test_status_overrides_hints() {
        let mut app = App::new(Config::default());
        app.status = Some(Status::warning("Could not save config: disk full"));
        let text = render(&app);
        assert!(text.contains("Could not save config: disk full"));
        assert!(!text.contains("[q] quit"));
    }

    #[test]
    fn test_every_mode_has_hints() {
        let mut app = news_app();
        for action in [Action::ToggleSearch, Action::Text('x'), Action::Back] {
            update(&mut app, action);
            assert!(!hints(&app.mode).is_empty());
        }
    }
}
