use crate::tui::session::Session;
use crate::tui::theme::Theme;
use dist_lens_common::Config;
use dist_lens_core::{Histogram, SampleSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Histogram,
    Stats,
    Help,
}

pub struct App {
    pub input_path: String,
    pub summary: Option<SampleSummary>,
    pub histogram: Option<Histogram>,
    pub view: View,
    pub selected_bin: usize,
    pub status_msg: String,
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub help_scroll: usize, // scroll offset for help keybind list
}

impl App {
    pub fn new(input_path: String, config: Config) -> Self {
        Self {
            input_path,
            summary: None,
            histogram: None,
            view: View::Histogram,
            selected_bin: 0,
            status_msg: String::from("Loading..."),
            should_quit: false,
            theme: Theme::from_name(&config.display.theme),
            config,
            help_scroll: 0,
        }
    }

    pub fn bin_count(&self) -> usize {
        self.histogram.as_ref().map(|h| h.bins.len()).unwrap_or(0)
    }

    pub fn bin_down(&mut self) {
        let max = self.bin_count().saturating_sub(1);
        if self.selected_bin < max {
            self.selected_bin += 1;
        }
    }

    pub fn bin_up(&mut self) {
        if self.selected_bin > 0 {
            self.selected_bin -= 1;
        }
    }

    pub fn jump_first(&mut self) {
        self.selected_bin = 0;
    }

    pub fn jump_last(&mut self) {
        self.selected_bin = self.bin_count().saturating_sub(1);
    }

    pub fn to_session(&self) -> Session {
        let view = match self.view {
            View::Histogram => "histogram",
            View::Stats => "stats",
            View::Help => "histogram", // help is transient
        };
        Session {
            input_path: self.input_path.clone(),
            view: view.into(),
            selected_bin: self.selected_bin,
            bins: self.bin_count(),
        }
    }

    pub fn restore_from_session(&mut self, s: &Session) {
        if s.input_path != self.input_path {
            return;
        }
        self.view = match s.view.as_str() {
            "stats" => View::Stats,
            _ => View::Histogram,
        };
        // a saved selection only carries over when the bin layout matches
        if s.bins == self.bin_count() {
            self.selected_bin = s.selected_bin.min(self.bin_count().saturating_sub(1));
        }
    }
}
