//! Applications built on the store: a counter widget and a kanban board.

pub mod counter;
pub mod kanban;
