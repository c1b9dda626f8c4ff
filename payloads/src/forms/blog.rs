use crate::{BlogCategory, BlogPost, responses};

use super::slug::generate_slug;

pub const DEFAULT_AUTHOR: &str = "Admin";

/// Local state of the blog post create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: String,
    pub is_published: bool,
}

impl Default for BlogPostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: BlogCategory::default(),
            author: DEFAULT_AUTHOR.into(),
            image_url: String::new(),
            is_published: false,
        }
    }
}

impl BlogPostForm {
    /// Editing the title regenerates the slug.
    pub fn set_title(&mut self, title: String) {
        self.slug = generate_slug(&title);
        self.title = title;
    }

    /// The slug can be overridden; the title is left alone.
    pub fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    pub fn into_details(self) -> BlogPost {
        let image_url = Some(self.image_url.trim().to_string())
            .filter(|url| !url.is_empty());
        BlogPost {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            author: self.author,
            image_url,
            is_published: self.is_published,
        }
    }
}

impl From<&responses::BlogPost> for BlogPostForm {
    fn from(post: &responses::BlogPost) -> Self {
        let details = post.post_details.clone();
        Self {
            title: details.title,
            slug: details.slug,
            excerpt: details.excerpt,
            content: details.content,
            category: details.category,
            author: details.author,
            image_url: details.image_url.unwrap_or_default(),
            is_published: details.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_defaults() {
        let form = BlogPostForm::default();
        assert_eq!(form.category, BlogCategory::Travel);
        assert_eq!(form.author, "Admin");
        assert!(!form.is_published);
    }

    #[test]
    fn title_drives_slug_until_slug_edited() {
        let mut form = BlogPostForm::default();
        form.set_title("Hidden Waterfalls of Bali".into());
        assert_eq!(form.slug, "hidden-waterfalls-of-bali");

        form.set_slug("waterfalls".into());
        assert_eq!(form.title, "Hidden Waterfalls of Bali");
        assert_eq!(form.slug, "waterfalls");

        // a later title edit regenerates it again
        form.set_title("Waterfalls!".into());
        assert_eq!(form.slug, "waterfalls");
        form.set_title("Rice Terraces".into());
        assert_eq!(form.slug, "rice-terraces");
    }

    #[test]
    fn blank_image_is_omitted() {
        let mut form = BlogPostForm::default();
        form.image_url = "   ".into();
        assert_eq!(form.clone().into_details().image_url, None);

        form.image_url = "https://img.example/a.jpg".into();
        assert_eq!(
            form.into_details().image_url.as_deref(),
            Some("https://img.example/a.jpg")
        );
    }
}
