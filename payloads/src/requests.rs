use serde::{Deserialize, Serialize};

use crate::{BlogPost, BlogPostId, Villa, VillaId};

pub const VILLA_NAME_MAX_LEN: usize = 255;
pub const BLOG_TITLE_MAX_LEN: usize = 255;
pub const BLOG_SLUG_MAX_LEN: usize = 255;
pub const AUTHOR_MAX_LEN: usize = 255;

/// Reasons a submitted record is rejected at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

fn check_required(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn check_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

impl Villa {
    /// Only the name is required; numeric fields were already coerced by the
    /// form and never block a submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required("Villa name", &self.name)?;
        check_len("Villa name", &self.name, VILLA_NAME_MAX_LEN)
    }
}

impl BlogPost {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required("Title", &self.title)?;
        check_len("Title", &self.title, BLOG_TITLE_MAX_LEN)?;
        check_required("Slug", &self.slug)?;
        check_len("Slug", &self.slug, BLOG_SLUG_MAX_LEN)?;
        check_len("Author", &self.author, AUTHOR_MAX_LEN)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVilla {
    pub villa_id: VillaId,
    pub villa_details: Villa,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlogPost {
    pub blog_post_id: BlogPostId,
    pub post_details: BlogPost,
}

/// Flip a post between draft and published from the list page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetPublished {
    pub blog_post_id: BlogPostId,
    pub is_published: bool,
}
