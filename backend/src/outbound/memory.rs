//! Process-local storage used when no database is configured.
//!
//! One [`InMemoryStore`] implements both repository ports over a single
//! lock so comment rows can see which articles exist. Identifiers count up
//! from one and are never reused, and deleting an article that still has
//! comments fails the way the foreign key does. Contents are lost on
//! restart.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use article_board::domain::ArticleService;
//! use article_board::outbound::memory::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::default());
//! let _articles = ArticleService::new(store.clone());
//! assert_eq!(store.article_count(), 0);
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{
    ArticleRepository, ArticleRepositoryError, CommentRepository, CommentRepositoryError,
};
use crate::domain::{Article, ArticleDraft, ArticleId, Comment, CommentDraft, CommentId};

#[derive(Debug, Default)]
struct Tables {
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
    last_article_id: ArticleId,
    last_comment_id: CommentId,
}

/// Article and comment tables held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Number of stored articles.
    pub fn article_count(&self) -> usize {
        self.lock().articles.len()
    }

    /// Number of stored comments across all articles.
    pub fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    /// Stored copy of the comment with `id`, bypassing the services.
    pub fn comment(&self, id: CommentId) -> Option<Comment> {
        self.lock().comments.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticleRepositoryError> {
        let mut tables = self.lock();
        tables.last_article_id += 1;
        let article = Article::new(tables.last_article_id, draft.clone());
        tables.articles.insert(article.id(), article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError> {
        Ok(self.lock().articles.get(&id).cloned())
    }

    async fn find_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        let tables = self.lock();
        let offset = usize::try_from(request.offset())
            .map_err(|_| ArticleRepositoryError::query("page offset out of range"))?;
        let size = usize::try_from(request.size())
            .map_err(|_| ArticleRepositoryError::query("page size out of range"))?;
        let ordered: Box<dyn Iterator<Item = &Article>> = if request.sort().is_descending() {
            Box::new(tables.articles.values().rev())
        } else {
            Box::new(tables.articles.values())
        };
        let content = ordered.skip(offset).take(size).cloned().collect();
        let total = tables.articles.len() as u64;
        Ok(Page::new(content, request.clone(), total))
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError> {
        Ok(self.lock().articles.contains_key(&id))
    }

    async fn update(&self, article: &Article) -> Result<Option<Article>, ArticleRepositoryError> {
        let mut tables = self.lock();
        let Some(stored) = tables.articles.get_mut(&article.id()) else {
            return Ok(None);
        };
        *stored = article.clone();
        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError> {
        let mut tables = self.lock();
        if tables.comments.values().any(|comment| comment.belongs_to(id)) {
            return Err(ArticleRepositoryError::query(format!(
                "article {id} is still referenced by comments"
            )));
        }
        Ok(tables.articles.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(
        &self,
        article_id: ArticleId,
        draft: &CommentDraft,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut tables = self.lock();
        if !tables.articles.contains_key(&article_id) {
            return Err(CommentRepositoryError::query(format!(
                "article {article_id} does not exist"
            )));
        }
        tables.last_comment_id += 1;
        let comment = Comment::new(tables.last_comment_id, article_id, draft.clone());
        tables.comments.insert(comment.id(), comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self.lock().comments.get(&id).cloned())
    }

    async fn list_by_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(self
            .lock()
            .comments
            .values()
            .filter(|comment| comment.belongs_to(article_id))
            .cloned()
            .collect())
    }

    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut tables = self.lock();
        let Some(stored) = tables.comments.get_mut(&comment.id()) else {
            return Ok(None);
        };
        *stored = comment.clone();
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        Ok(self.lock().comments.remove(&id).is_some())
    }
}
