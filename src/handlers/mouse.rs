//! Mouse Input Handler

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::App;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
            app.pointer_clicked(mouse.column, mouse.row);
        }
        _ => {}
    }
}
