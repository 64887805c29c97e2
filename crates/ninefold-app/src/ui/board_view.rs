use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, Ui, Vec2};
use ninefold_core::layout;
use ninefold_render::{Color, DrawCommand, Point, Rect};

use crate::ui::Action;

/// Replays the draw-command list onto the egui painter and translates clicks
/// into board-local coordinates.
pub fn show(ui: &mut Ui, commands: &[DrawCommand]) -> Vec<Action> {
    let mut actions = vec![];

    let (response, painter) =
        ui.allocate_painter(Vec2::splat(layout::BOARD_SIZE), Sense::click());
    let origin = response.rect.min;

    for command in commands {
        paint_command(&painter, origin, command);
    }

    if response.clicked()
        && let Some(pointer) = response.interact_pointer_pos()
    {
        let local = pointer - origin;
        actions.push(Action::SelectCell {
            x: local.x,
            y: local.y,
        });
    }

    actions
}

/// Placeholder for the board area while no board is on the table.
pub fn show_placeholder(ui: &mut Ui, loading: bool) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(layout::BOARD_SIZE), Sense::hover());
    let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    child.centered_and_justified(|ui| {
        if loading {
            ui.spinner();
        } else {
            ui.label("No board");
        }
    });
}

fn paint_command(painter: &Painter, origin: Pos2, command: &DrawCommand) {
    match command {
        DrawCommand::Clear { area, color } => {
            painter.rect_filled(to_rect(origin, *area), 0.0, to_color32(*color));
        }
        DrawCommand::Line {
            from,
            to,
            width,
            color,
        } => {
            painter.line_segment(
                [to_pos(origin, *from), to_pos(origin, *to)],
                Stroke::new(*width, to_color32(*color)),
            );
        }
        DrawCommand::FillRect { rect, color } => {
            painter.rect_filled(to_rect(origin, *rect), 0.0, to_color32(*color));
        }
        DrawCommand::FillPath { rects, color } => {
            // The engine emits disjoint rects, so filling them one by one
            // lays the translucent color down exactly once per pixel.
            for rect in rects {
                painter.rect_filled(to_rect(origin, *rect), 0.0, to_color32(*color));
            }
        }
        DrawCommand::Text {
            center,
            text,
            size,
            color,
        } => {
            painter.text(
                to_pos(origin, *center),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(*size),
                to_color32(*color),
            );
        }
    }
}

fn to_pos(origin: Pos2, point: Point) -> Pos2 {
    origin + Vec2::new(point.x, point.y)
}

fn to_rect(origin: Pos2, rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_pos(origin, Point::new(rect.x, rect.y)),
        Vec2::new(rect.width, rect.height),
    )
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
