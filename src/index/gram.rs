use std::collections::HashSet;

/// Собрать множество уникальных триграмм нормализованного текста.
///
/// Каждый токен дополняется двумя пробелами с обеих сторон, чтобы граница
/// слова участвовала в характерных граммах: "de" -> "  de  " -> {"  d", " de",
/// "de ", "e  "}. Триграммы посимвольные, так что многобайтовый текст
/// ("ねこ") работает как есть. Пустая строка даёт пустое множество.
pub fn trigram_set(text_norm: &str) -> HashSet<String> {
    let mut grams = HashSet::new();
    for token in text_norm.split(' ') {
        if token.is_empty() {
            continue;
        }
        let mut padded: Vec<char> = Vec::with_capacity(token.chars().count() + 4);
        padded.push(' ');
        padded.push(' ');
        padded.extend(token.chars());
        padded.push(' ');
        padded.push(' ');
        for w in padded.windows(3) {
            grams.insert(w.iter().collect());
        }
    }
    grams
}

/// Число общих грамм двух множеств: идём по меньшему, проверяя большее.
pub fn intersection_size(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    let (small, big) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|g| big.contains(g.as_str())).count()
}
