use unicode_normalization::UnicodeNormalization;

/// Каноническая форма текста для сравнения: lowercase, NFKD-декомпозиция,
/// диакритика отброшена, пунктуация заменена пробелом, пробелы схлопнуты,
/// края обрезаны. Функция тотальная и идемпотентная: повторная нормализация
/// возвращает строку без изменений.
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_space = false;
    for ch in lower.nfkd() {
        if is_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            // Схлопывание: сколько бы разделителей ни накопилось, пробел один.
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Пробелы и любая пунктуация — один потенциальный разделитель.
            pending_space = true;
        }
    }
    out
}

fn is_mark(c: char) -> bool {
    // Комбинируемая диакритика после декомпозиции.
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("КоШКи"), "кошки");
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("naïve"), "naive");
        // ё декомпозируется в е + U+0308
        assert_eq!(normalize("котёнок"), "котенок");
    }

    #[test]
    fn test_normalize_collapses_punctuation() {
        assert_eq!(normalize("  hello,   world!! "), "hello world");
        assert_eq!(normalize("a-b_c"), "a b c");
    }

    #[test]
    fn test_normalize_empty_and_noise() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!...---"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Héllo,  WORLD!!", "ねこ", "КоШКи — дома", "café au lait"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
