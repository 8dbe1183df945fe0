use crate::index::{SearchOpts, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};

/// Разбор строки REPL: вытаскиваем `--limit N` и `--min-score X` из любого
/// места строки, остальное — текст запроса. Непарсящиеся значения падают
/// на дефолты, ошибок нет.
pub fn parse_query_line(s: &str) -> (String, SearchOpts) {
    let mut parts: Vec<&str> = s.split_whitespace().collect();
    let mut opts = SearchOpts::default();

    let mut i = 0;
    while i < parts.len() {
        if parts[i] == "--limit" && i + 1 < parts.len() {
            opts.limit = parts[i + 1].parse().unwrap_or(DEFAULT_LIMIT);
            parts.drain(i..=i + 1);
        } else if parts[i] == "--min-score" && i + 1 < parts.len() {
            opts.min_score = parts[i + 1].parse().unwrap_or(DEFAULT_MIN_SCORE);
            parts.drain(i..=i + 1);
        } else {
            i += 1;
        }
    }

    (parts.join(" "), opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query() {
        let (q, opts) = parse_query_line("кошка дома");
        assert_eq!(q, "кошка дома");
        assert_eq!(opts.limit, DEFAULT_LIMIT);
        assert_eq!(opts.min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_trailing_options() {
        let (q, opts) = parse_query_line("neko --limit 3 --min-score 0.5");
        assert_eq!(q, "neko");
        assert_eq!(opts.limit, 3);
        assert_eq!(opts.min_score, 0.5);
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let (q, opts) = parse_query_line("neko --limit abc");
        assert_eq!(q, "neko");
        assert_eq!(opts.limit, DEFAULT_LIMIT);
    }
}
