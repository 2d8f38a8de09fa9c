//! Diesel table definitions for the PostgreSQL schema.
//!
//! Kept in step with `backend/migrations` by hand or via
//! `diesel print-schema`.

diesel::table! {
    /// Top-level articles.
    article (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Headline text.
        title -> Text,
        /// Body text.
        content -> Text,
        /// Author name.
        writer -> Text,
    }
}

diesel::table! {
    /// Comments attached to exactly one article.
    comment (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Comment text.
        content -> Text,
        /// Author name.
        writer -> Text,
        /// Owning article; a plain foreign key without cascade.
        article_id -> Int8,
    }
}

diesel::joinable!(comment -> article (article_id));
diesel::allow_tables_to_appear_in_same_query!(article, comment);
