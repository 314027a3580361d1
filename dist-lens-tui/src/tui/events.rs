use crate::tui::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            if app.view == View::Help {
                app.view = View::Histogram;
                app.help_scroll = 0;
            } else {
                app.view = View::Help;
            }
            return;
        }
        KeyCode::Char('j') | KeyCode::Down if app.view == View::Help => {
            app.help_scroll += 1;
            return;
        }
        KeyCode::Char('k') | KeyCode::Up if app.view == View::Help => {
            if app.help_scroll > 0 {
                app.help_scroll -= 1;
            }
            return;
        }
        KeyCode::Esc if app.view == View::Help => {
            app.view = View::Histogram;
            app.help_scroll = 0;
            return;
        }
        _ => {}
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.bin_down(),
        KeyCode::Char('k') | KeyCode::Up => app.bin_up(),
        KeyCode::PageDown => {
            for _ in 0..10 {
                app.bin_down();
            }
        }
        KeyCode::PageUp => {
            for _ in 0..10 {
                app.bin_up();
            }
        }
        KeyCode::Char('g') | KeyCode::Home => app.jump_first(),
        KeyCode::Char('G') | KeyCode::End => app.jump_last(),
        KeyCode::Char('H') => app.view = View::Histogram,
        KeyCode::Char('S') => app.view = View::Stats,
        KeyCode::Enter => {
            // jump to the selected bin's detail
            app.view = View::Stats;
        }
        KeyCode::Esc if app.view == View::Stats => app.view = View::Histogram,
        _ => {}
    }
}

#[cfg(test)]
mod tests_handle_key {
    use super::*;
    use dist_lens_common::Config;
    use dist_lens_core::Histogram;
    use crossterm::event::KeyModifiers;

    fn app_with_bins(n: usize) -> App {
        let samples: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let mut app = App::new("Output.txt".into(), Config::default());
        app.histogram = Some(Histogram::build(&samples, n).unwrap());
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits() {
        let mut app = app_with_bins(4);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with_bins(3);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_bin, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected_bin, 2);
    }

    #[test]
    fn help_toggles() {
        let mut app = app_with_bins(4);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Help);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Histogram);
    }

    #[test]
    fn g_and_shift_g_jump() {
        let mut app = app_with_bins(5);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_bin, 4);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_bin, 0);
    }
}
