//! Row actions shared by the blog and villa list pages.

use std::collections::BTreeSet;
use std::future::Future;

use crate::{BlogPostId, ClientError, VillaId, requests::SetPublished, responses};

/// A record shown as one row of a list page.
pub trait ListRow: Clone {
    type Id: Copy + Ord;

    fn row_id(&self) -> Self::Id;

    /// Label used in the delete confirmation.
    fn label(&self) -> &str;

    /// Rows without a publish flag ignore this.
    fn set_published(&mut self, _is_published: bool) {}
}

impl ListRow for responses::BlogPost {
    type Id = BlogPostId;

    fn row_id(&self) -> BlogPostId {
        self.blog_post_id
    }

    fn label(&self) -> &str {
        &self.post_details.title
    }

    fn set_published(&mut self, is_published: bool) {
        self.post_details.is_published = is_published;
    }
}

impl ListRow for responses::Villa {
    type Id = VillaId;

    fn row_id(&self) -> VillaId {
        self.villa_id
    }

    fn label(&self) -> &str {
        &self.villa_details.name
    }
}

/// Shown in place of the table when the backing table does not exist.
pub fn missing_collection_message(collection: &str) -> String {
    format!("{collection} table does not exist. Please run migration.")
}

/// Message for a failed list fetch.
pub fn load_error_message(collection: &str, error: &ClientError) -> String {
    if error.is_missing_collection() {
        missing_collection_message(collection)
    } else {
        error.to_string()
    }
}

pub fn delete_confirmation<T: ListRow>(row: &T) -> String {
    format!("Delete \"{}\"?", row.label())
}

pub fn delete_failed_message(error: &ClientError) -> String {
    format!("Failed to delete: {error}")
}

pub fn update_failed_message(error: &ClientError) -> String {
    format!("Failed to update: {error}")
}

/// Rows without the record `id`.
pub fn without_row<T: ListRow>(rows: &[T], id: T::Id) -> Vec<T> {
    rows.iter().filter(|r| r.row_id() != id).cloned().collect()
}

/// Rows with the publish flag of post `id` set to `is_published`.
pub fn with_published<T: ListRow>(
    rows: &[T],
    id: T::Id,
    is_published: bool,
) -> Vec<T> {
    rows.iter()
        .map(|p| {
            let mut p = p.clone();
            if p.row_id() == id {
                p.set_published(is_published);
            }
            p
        })
        .collect()
}

/// Flip the visible status first, then issue one write. A failed write is
/// reported but the flipped status stays on screen.
///
/// `show` receives the new flag, to be applied to whatever rows are current
/// by then.
pub async fn toggle_published<W, Fut>(
    rows: &[responses::BlogPost],
    id: BlogPostId,
    show: impl FnOnce(bool),
    write: W,
) -> Result<(), String>
where
    W: FnOnce(SetPublished) -> Fut,
    Fut: Future<Output = Result<responses::BlogPost, ClientError>>,
{
    let Some(current) = rows.iter().find(|p| p.blog_post_id == id) else {
        return Ok(());
    };
    let is_published = !current.is_published();
    show(is_published);
    write(SetPublished {
        blog_post_id: id,
        is_published,
    })
    .await
    .map(|_| ())
    .map_err(|e| update_failed_message(&e))
}

/// Deletes currently in flight, keyed by record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletes<Id: Ord> {
    in_flight: BTreeSet<Id>,
}

impl<Id: Ord> Default for PendingDeletes<Id> {
    fn default() -> Self {
        Self {
            in_flight: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Copy> PendingDeletes<Id> {
    /// Mark a delete as started; false if one is already in flight.
    pub fn begin(&mut self, id: Id) -> bool {
        self.in_flight.insert(id)
    }

    pub fn finish(&mut self, id: Id) {
        self.in_flight.remove(&id);
    }

    pub fn is_deleting(&self, id: Id) -> bool {
        self.in_flight.contains(&id)
    }
}

/// Issue one delete; `remove` runs only once the write has succeeded.
pub async fn delete_row<Id, W, Fut>(
    id: Id,
    remove: impl FnOnce(Id),
    write: W,
) -> Result<(), String>
where
    Id: Copy,
    W: FnOnce(Id) -> Fut,
    Fut: Future<Output = Result<(), ClientError>>,
{
    write(id).await.map_err(|e| delete_failed_message(&e))?;
    remove(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use jiff::Timestamp;
    use reqwest::StatusCode;
    use uuid::Uuid;

    use super::*;
    use crate::{BlogCategory, BlogPost};

    fn post(title: &str, is_published: bool) -> responses::BlogPost {
        responses::BlogPost {
            blog_post_id: BlogPostId(Uuid::new_v4()),
            post_details: BlogPost {
                title: title.into(),
                slug: title.to_lowercase(),
                excerpt: String::new(),
                content: String::new(),
                category: BlogCategory::Travel,
                author: "Admin".into(),
                image_url: None,
                is_published,
            },
            published_at: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn server_error() -> ClientError {
        ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, "boom".into())
    }

    #[tokio::test]
    async fn failed_toggle_keeps_flipped_status() {
        let rows = vec![post("Ubud", false), post("Canggu", true)];
        let id = rows[0].blog_post_id;
        let shown = RefCell::new(rows.clone());
        let sent = RefCell::new(None);

        let result = toggle_published(
            &rows,
            id,
            |flag| {
                shown.replace_with(|r| with_published(r, id, flag));
            },
            |req| {
                *sent.borrow_mut() = Some(req.is_published);
                async { Err(server_error()) }
            },
        )
        .await;

        assert_eq!(result, Err("Failed to update: boom".to_string()));
        assert_eq!(*sent.borrow(), Some(true));
        let shown = shown.into_inner();
        assert!(shown[0].is_published());
        assert!(shown[1].is_published());
    }

    #[tokio::test]
    async fn successful_toggle_unpublishes() {
        let rows = vec![post("Ubud", true)];
        let id = rows[0].blog_post_id;
        let shown = RefCell::new(rows.clone());
        let saved = {
            let mut p = rows[0].clone();
            p.post_details.is_published = false;
            p
        };

        let result = toggle_published(
            &rows,
            id,
            |flag| {
                shown.replace_with(|r| with_published(r, id, flag));
            },
            |_| async move { Ok(saved) },
        )
        .await;

        assert_eq!(result, Ok(()));
        assert!(!shown.into_inner()[0].is_published());
    }

    #[tokio::test]
    async fn toggling_unknown_post_is_noop() {
        let rows = vec![post("Ubud", true)];
        let result = toggle_published(
            &rows,
            BlogPostId(Uuid::nil()),
            |_| panic!("nothing to show"),
            |_| async { Err(server_error()) },
        )
        .await;
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn publish_flag_applies_to_current_rows() {
        let ubud = post("Ubud", false);
        let id = ubud.blog_post_id;
        // a concurrent delete already removed the other row
        let current = vec![ubud];
        let next = with_published(&current, id, true);
        assert_eq!(next.len(), 1);
        assert!(next[0].is_published());
    }

    #[tokio::test]
    async fn delete_removes_row_only_on_success() {
        let rows = RefCell::new(vec![post("Ubud", true), post("Sidemen", false)]);
        let id = rows.borrow()[1].blog_post_id;

        let failed = delete_row(
            id,
            |id| {
                rows.replace_with(|r| without_row(r, id));
            },
            |_| async { Err(server_error()) },
        )
        .await;
        assert_eq!(failed, Err("Failed to delete: boom".to_string()));
        assert_eq!(rows.borrow().len(), 2);

        delete_row(
            id,
            |id| {
                rows.replace_with(|r| without_row(r, id));
            },
            |_| async { Ok(()) },
        )
        .await
        .unwrap();
        let after = rows.into_inner();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].post_details.title, "Ubud");
    }

    #[test]
    fn pending_deletes_block_repeats() {
        let id = BlogPostId(Uuid::new_v4());
        let mut pending = PendingDeletes::default();
        assert!(pending.begin(id));
        assert!(!pending.begin(id));
        assert!(pending.is_deleting(id));
        pending.finish(id);
        assert!(!pending.is_deleting(id));
    }

    #[test]
    fn messages() {
        assert_eq!(
            delete_confirmation(&post("Rice & Spice", true)),
            "Delete \"Rice & Spice\"?"
        );
        assert_eq!(
            load_error_message(
                "Blog posts",
                &ClientError::MissingCollection("blog_posts".into())
            ),
            "Blog posts table does not exist. Please run migration."
        );
        assert_eq!(load_error_message("Villas", &server_error()), "boom");
    }
}
