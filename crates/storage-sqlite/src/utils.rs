//! Utility functions for SQLite storage operations.

/// Maximum number of parameters for SQLite IN (...) queries.
///
/// SQLite caps the number of bound parameters per statement (historically
/// 999). Lists of ids passed to `eq_any` are split into chunks of this size.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Chunk a slice into smaller slices for batch SQLite queries.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_for_sqlite_empty() {
        let items: Vec<i64> = vec![];
        let chunks: Vec<_> = chunk_for_sqlite(&items).collect();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_for_sqlite_over_limit() {
        let items: Vec<i64> = (0..1200).collect();
        let chunks: Vec<_> = chunk_for_sqlite(&items).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), SQLITE_MAX_PARAMS_CHUNK);
        assert_eq!(chunks[2].len(), 200);
    }
}
