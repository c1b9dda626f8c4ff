use payloads::forms::listing::{
    ListRow, PendingDeletes, with_published, without_row,
};
use std::rc::Rc;
use yew::prelude::*;

/// Rows shown by a list page, with the deletes currently in flight.
pub struct ListRows<T: ListRow> {
    pub rows: Vec<T>,
    pub deleting: PendingDeletes<T::Id>,
}

impl<T: ListRow> Clone for ListRows<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            deleting: self.deleting.clone(),
        }
    }
}

impl<T: ListRow + PartialEq> PartialEq for ListRows<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.deleting == other.deleting
    }
}

impl<T: ListRow> Default for ListRows<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            deleting: PendingDeletes::default(),
        }
    }
}

pub enum RowsAction<T: ListRow> {
    Show(Vec<T>),
    /// Applied to the rows current when it is reduced.
    SetPublished { id: T::Id, is_published: bool },
    BeginDelete(T::Id),
    /// The delete finished; remove the row if it succeeded.
    FinishDelete { id: T::Id, removed: bool },
}

impl<T: ListRow + 'static> Reducible for ListRows<T> {
    type Action = RowsAction<T>;

    fn reduce(self: Rc<Self>, action: RowsAction<T>) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RowsAction::Show(rows) => next.rows = rows,
            RowsAction::SetPublished { id, is_published } => {
                next.rows = with_published(&next.rows, id, is_published);
            }
            RowsAction::BeginDelete(id) => {
                next.deleting.begin(id);
            }
            RowsAction::FinishDelete { id, removed } => {
                next.deleting.finish(id);
                if removed {
                    next.rows = without_row(&next.rows, id);
                }
            }
        }
        Rc::new(next)
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        tracing::error!("{message}");
    }
}
