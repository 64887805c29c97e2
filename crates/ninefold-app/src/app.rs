//! Ninefold desktop application UI.
//!
//! # Design Notes
//! - One fixed-size board view fed by the pure render engine; the app only
//!   replays draw commands and routes input.
//! - Mouse selects a cell, digit keys 1-9 attempt a placement; wrong digits
//!   bump the error counter shown in the sidebar.
//! - Boards come from the puzzle service in two steps (puzzle first,
//!   solution later); play starts as soon as the puzzle is in.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use egui_extras::{Size, StripBuilder};
use log::{debug, info};
use ninefold_board::BoardController;
use ninefold_core::layout;
use ninefold_render::RenderEngine;

use crate::{
    config::AppConfig,
    fetch::{BoardSource, FetchEvent},
    ui::{self, Action, sidebar::BoardStatus},
};

pub struct NinefoldApp {
    source: BoardSource,
    controller: Option<BoardController>,
    engine: RenderEngine,
    fetch_error: Option<String>,
}

impl NinefoldApp {
    pub fn new(_cc: &CreationContext<'_>, config: AppConfig) -> Self {
        let mut source = BoardSource::new(config.api_base_url);
        source.refresh();
        Self {
            source,
            controller: None,
            engine: RenderEngine::default(),
            fetch_error: None,
        }
    }

    fn poll_fetch(&mut self) {
        for event in self.source.poll() {
            match event {
                FetchEvent::PuzzleReady(puzzle) => {
                    info!("fresh puzzle arrived");
                    self.fetch_error = None;
                    self.controller = Some(BoardController::new(puzzle));
                }
                FetchEvent::SolutionReady(solution) => {
                    info!("solution arrived");
                    if let Some(controller) = &mut self.controller {
                        controller.set_solution(solution);
                    }
                }
                FetchEvent::Failed(message) => {
                    self.fetch_error = Some(message);
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectCell { x, y } => {
                if let Some(controller) = &mut self.controller {
                    controller.select_cell(x, y);
                }
            }
            Action::PressDigit(digit) => {
                if let Some(controller) = &mut self.controller {
                    let outcome = controller.attempt_place(digit);
                    if outcome.is_rejected() {
                        debug!(
                            "rejected digit {digit}; error count now {}",
                            controller.error_count()
                        );
                    }
                }
            }
            Action::SolveBoard => {
                if let Some(controller) = &mut self.controller
                    && !controller.reveal_solution()
                {
                    debug!("solution not loaded yet; solve request ignored");
                }
            }
            Action::NewBoard => {
                self.fetch_error = None;
                self.controller = None;
                self.source.refresh();
            }
        }
    }

    fn status(&self) -> BoardStatus<'_> {
        if let Some(controller) = &self.controller {
            BoardStatus::Playing {
                error_count: controller.error_count(),
                solution_loaded: controller.has_solution(),
                solved: controller.board().is_full(),
            }
        } else if let Some(message) = &self.fetch_error {
            BoardStatus::Failed(message)
        } else {
            BoardStatus::Loading
        }
    }
}

impl App for NinefoldApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_fetch();

        let mut actions = ctx.input(ui::input::digit_actions);

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(layout::BOARD_SIZE + 16.0))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        if let Some(controller) = &self.controller {
                            let commands = self
                                .engine
                                .render(controller.board(), controller.selection());
                            actions.extend(ui::board_view::show(ui, &commands));
                        } else {
                            ui::board_view::show_placeholder(ui, self.fetch_error.is_none());
                        }
                    });
                    strip.cell(|ui| {
                        actions.extend(ui::sidebar::show(ui, self.status()));
                    });
                });
        });

        for action in actions {
            self.apply(action);
        }

        // A solution can arrive without any input event; keep polling.
        if self.controller.as_ref().is_some_and(|c| !c.has_solution())
            || (self.controller.is_none() && self.fetch_error.is_none())
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
