use eframe::egui::{Button, RichText, Ui};

use crate::ui::Action;

/// What the sidebar presents this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus<'a> {
    /// No board yet; the initial fetch is still running.
    Loading,
    /// The last fetch failed.
    Failed(&'a str),
    /// A puzzle is on the table.
    Playing {
        /// Rejected placements so far.
        error_count: u32,
        /// Whether the solution board has arrived.
        solution_loaded: bool,
        /// Whether every cell is filled.
        solved: bool,
    },
}

pub fn show(ui: &mut Ui, status: BoardStatus<'_>) -> Vec<Action> {
    let mut actions = vec![];
    ui.vertical(|ui| {
        match status {
            BoardStatus::Loading => {
                ui.spinner();
                ui.label("Fetching a fresh board…");
            }
            BoardStatus::Failed(message) => {
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
                if ui.button(RichText::new("Retry").size(16.0)).clicked() {
                    actions.push(Action::NewBoard);
                }
            }
            BoardStatus::Playing {
                error_count,
                solution_loaded,
                solved,
            } => {
                ui.label(RichText::new(format!("Error Count: {error_count}")).size(18.0));
                let text = if solved {
                    "Solved! Congratulations!"
                } else {
                    "Game in progress"
                };
                ui.label(text);
                if !solution_loaded {
                    ui.label("Fetching the solution…");
                }
                ui.add_space(8.0);

                let solve = Button::new(RichText::new("Solve Board").size(16.0));
                if ui.add_enabled(solution_loaded, solve).clicked() {
                    actions.push(Action::SolveBoard);
                }
                if ui.button(RichText::new("New Board").size(16.0)).clicked() {
                    actions.push(Action::NewBoard);
                }
            }
        }
    });
    actions
}
