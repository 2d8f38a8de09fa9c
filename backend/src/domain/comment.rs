//! Comment entity and its transfer view.

use serde::{Deserialize, Serialize};

use super::ArticleId;

/// Store-assigned comment identifier.
pub type CommentId = i64;

/// Editable comment fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    /// Comment text.
    pub content: String,
    /// Author name.
    pub writer: String,
}

/// A persisted comment bound to one article.
///
/// The owning article is recorded as an identifier, set at creation and never
/// reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    content: String,
    writer: String,
    article_id: ArticleId,
}

impl Comment {
    /// Build a comment from its identifiers and field values.
    pub fn new(id: CommentId, article_id: ArticleId, draft: CommentDraft) -> Self {
        let CommentDraft { content, writer } = draft;
        Self {
            id,
            content,
            writer,
            article_id,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> CommentId {
        self.id
    }

    /// Comment text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author name.
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// Identifier of the owning article.
    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    /// True when this comment belongs to `article_id`.
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }

    /// Replace the editable fields, keeping both identifiers.
    #[must_use]
    pub fn replaced_with(self, draft: CommentDraft) -> Self {
        Self::new(self.id, self.article_id, draft)
    }
}

/// Comment shape returned to callers. The owning article is implied by the
/// request path and is not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    /// Store-assigned identifier.
    pub id: CommentId,
    /// Comment text.
    pub content: String,
    /// Author name.
    pub writer: String,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            writer: comment.writer,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn comment() -> Comment {
        Comment::new(
            3,
            1,
            CommentDraft {
                content: "Nice post".to_owned(),
                writer: "Bob".to_owned(),
            },
        )
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, false)]
    fn ownership_compares_article_ids(#[case] article_id: ArticleId, #[case] expected: bool) {
        assert_eq!(comment().belongs_to(article_id), expected);
    }

    #[rstest]
    fn replacement_keeps_owner() {
        let edited = comment().replaced_with(CommentDraft {
            content: "Edited".to_owned(),
            writer: "Bob".to_owned(),
        });
        assert_eq!(edited.id(), 3);
        assert_eq!(edited.article_id(), 1);
        assert_eq!(edited.content(), "Edited");
    }

    #[rstest]
    fn view_omits_article_reference() {
        let value = serde_json::to_value(CommentView::from(comment())).expect("serialise view");
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "content": "Nice post", "writer": "Bob"})
        );
    }
}
