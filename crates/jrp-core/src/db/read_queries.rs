//! Phrase reads and keyword searches.

use jiff::Zoned;
use rusqlite::{types::Type, Row, ToSql};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Phrase,
};

const SELECT_PHRASES_SQL: &str =
    "SELECT id, phrase, prefix, suffix, is_favorited, created_at, updated_at FROM jrp";

/// Row predicate shared by the history and favorite queries.
///
/// Each keyword becomes a `phrase LIKE '%keyword%'` term; the terms are
/// joined with `AND` when `match_all` is set and with `OR` otherwise. An
/// empty keyword matches every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseFilter<'a> {
    pub keywords: &'a [String],
    pub match_all: bool,
    pub favorites_only: bool,
}

impl<'a> PhraseFilter<'a> {
    /// Matches every phrase.
    pub fn history() -> Self {
        Self::default()
    }

    /// Matches every favorited phrase.
    pub fn favorites() -> Self {
        Self {
            favorites_only: true,
            ..Self::default()
        }
    }

    /// Restricts the filter to phrases containing the keywords.
    pub fn with_keywords(self, keywords: &'a [String], match_all: bool) -> Self {
        Self {
            keywords,
            match_all,
            ..self
        }
    }

    /// Builds the `WHERE` clause (empty when unrestricted) and its bound
    /// parameters.
    fn where_clause(&self) -> (String, Vec<Box<dyn ToSql>>) {
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if self.favorites_only {
            conditions.push("is_favorited = 1".to_string());
        }

        if !self.keywords.is_empty() {
            let joiner = if self.match_all { " AND " } else { " OR " };
            let terms = vec!["phrase LIKE ? ESCAPE '\\'"; self.keywords.len()];
            conditions.push(format!("({})", terms.join(joiner)));
            for keyword in self.keywords {
                params_vec.push(Box::new(format!("%{}%", escape_like(keyword))));
            }
        }

        if conditions.is_empty() {
            (String::new(), params_vec)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), params_vec)
        }
    }
}

/// Escapes LIKE wildcards so keywords match literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl super::Database {
    /// Helper function to construct a Phrase from a database row
    fn build_phrase_from_row(row: &Row) -> rusqlite::Result<Phrase> {
        Ok(Phrase {
            id: row.get::<_, i64>(0)? as u64,
            phrase: row.get(1)?,
            prefix: row.get(2)?,
            suffix: row.get(3)?,
            is_favorited: row.get::<_, i64>(4)? != 0,
            created_at: row.get::<_, String>(5)?.parse::<Zoned>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(6)?.parse::<Zoned>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Returns every phrase matching the filter in ascending id order.
    pub fn select_phrases(&self, filter: &PhraseFilter<'_>) -> Result<Vec<Phrase>> {
        let (where_clause, params_vec) = filter.where_clause();
        let query = format!("{SELECT_PHRASES_SQL}{where_clause} ORDER BY id ASC");
        self.query_phrases(&query, &params_vec)
    }

    /// Returns at most `limit` phrases matching the filter, highest ids
    /// first, exactly as the engine produces them.
    pub fn select_latest_phrases(
        &self,
        filter: &PhraseFilter<'_>,
        limit: i64,
    ) -> Result<Vec<Phrase>> {
        let (where_clause, mut params_vec) = filter.where_clause();
        let query = format!("{SELECT_PHRASES_SQL}{where_clause} ORDER BY id DESC LIMIT ?");
        params_vec.push(Box::new(limit));
        self.query_phrases(&query, &params_vec)
    }

    fn query_phrases(&self, query: &str, params_vec: &[Box<dyn ToSql>]) -> Result<Vec<Phrase>> {
        let mut stmt = self
            .connection
            .prepare(query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let phrases = stmt
            .query_map(&params_refs[..], Self::build_phrase_from_row)
            .db_context("Failed to query phrases")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch phrases")?;

        Ok(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_filter_has_no_where_clause() {
        let (clause, params) = PhraseFilter::history().where_clause();
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_favorites_filter() {
        let (clause, params) = PhraseFilter::favorites().where_clause();
        assert_eq!(clause, " WHERE is_favorited = 1");
        assert!(params.is_empty());
    }

    #[test]
    fn test_keywords_joined_with_or() {
        let keywords = vec!["a".to_string(), "b".to_string()];
        let (clause, params) = PhraseFilter::history()
            .with_keywords(&keywords, false)
            .where_clause();
        assert_eq!(
            clause,
            " WHERE (phrase LIKE ? ESCAPE '\\' OR phrase LIKE ? ESCAPE '\\')"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_keywords_joined_with_and_for_favorites() {
        let keywords = vec!["a".to_string(), "b".to_string()];
        let (clause, params) = PhraseFilter::favorites()
            .with_keywords(&keywords, true)
            .where_clause();
        assert_eq!(
            clause,
            " WHERE is_favorited = 1 AND (phrase LIKE ? ESCAPE '\\' AND phrase LIKE ? ESCAPE '\\')"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
        assert_eq!(escape_like(""), "");
    }
}
