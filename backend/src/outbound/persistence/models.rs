//! Internal Diesel row structs for database operations.
//!
//! Row types never leave the persistence layer; repositories convert them
//! into domain entities.

use diesel::prelude::*;

use crate::domain::{Article, ArticleDraft, Comment, CommentDraft};

use super::schema::{article, comment};

/// Row struct for reading from the article table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = article)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let ArticleRow {
            id,
            title,
            content,
            writer,
        } = row;
        Article::new(
            id,
            ArticleDraft {
                title,
                content,
                writer,
            },
        )
    }
}

/// Insertable struct for creating article records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = article)]
pub(crate) struct NewArticleRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub writer: &'a str,
}

impl<'a> From<&'a ArticleDraft> for NewArticleRow<'a> {
    fn from(draft: &'a ArticleDraft) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
            writer: &draft.writer,
        }
    }
}

/// Changeset replacing every editable article column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = article)]
pub(crate) struct ArticleUpdate<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub writer: &'a str,
}

impl<'a> From<&'a Article> for ArticleUpdate<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            title: article.title(),
            content: article.content(),
            writer: article.writer(),
        }
    }
}

/// Row struct for reading from the comment table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub content: String,
    pub writer: String,
    pub article_id: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        let CommentRow {
            id,
            content,
            writer,
            article_id,
        } = row;
        Comment::new(id, article_id, CommentDraft { content, writer })
    }
}

/// Insertable struct for creating comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment)]
pub(crate) struct NewCommentRow<'a> {
    pub content: &'a str,
    pub writer: &'a str,
    pub article_id: i64,
}

/// Changeset for the editable comment columns. The owning article is never
/// rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = comment)]
pub(crate) struct CommentUpdate<'a> {
    pub content: &'a str,
    pub writer: &'a str,
}

impl<'a> From<&'a Comment> for CommentUpdate<'a> {
    fn from(comment: &'a Comment) -> Self {
        Self {
            content: comment.content(),
            writer: comment.writer(),
        }
    }
}
