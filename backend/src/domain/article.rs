//! Article entity and its transfer view.

use serde::{Deserialize, Serialize};

/// Store-assigned article identifier.
pub type ArticleId = i64;

/// Editable article fields, used for creation and wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    /// Article headline.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Author name.
    pub writer: String,
}

/// A persisted article.
///
/// The identifier is assigned by the store on creation and never changes.
/// Articles do not hold their comments; comments point back through
/// [`crate::domain::Comment::article_id`].
///
/// # Examples
/// ```
/// use article_board::domain::{Article, ArticleDraft};
///
/// let article = Article::new(
///     1,
///     ArticleDraft {
///         title: "Hello".into(),
///         content: "World".into(),
///         writer: "Alice".into(),
///     },
/// );
/// assert_eq!(article.id(), 1);
/// assert_eq!(article.title(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: String,
    content: String,
    writer: String,
}

impl Article {
    /// Build an article from its identifier and field values.
    pub fn new(id: ArticleId, draft: ArticleDraft) -> Self {
        let ArticleDraft {
            title,
            content,
            writer,
        } = draft;
        Self {
            id,
            title,
            content,
            writer,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// Article headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Article body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author name.
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// Replace every editable field, keeping the identifier.
    #[must_use]
    pub fn replaced_with(self, draft: ArticleDraft) -> Self {
        Self::new(self.id, draft)
    }
}

/// Article shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleView {
    /// Store-assigned identifier.
    pub id: ArticleId,
    /// Article headline.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Author name.
    pub writer: String,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        let Article {
            id,
            title,
            content,
            writer,
        } = article;
        Self {
            id,
            title,
            content,
            writer,
        }
    }
}
