pub mod gram;
pub mod inverted;
pub mod normalizer;

use gram::{intersection_size, trigram_set};
use inverted::{DocId, InvertedIndex};
use normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Фиксированный балл подстрочного совпадения без общих триграмм.
/// Значение поведенческое: от его места в ранжировании может зависеть
/// клиентский код, поэтому не пересматриваем.
pub const SUBSTRING_FALLBACK_SCORE: f32 = 0.2;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_MIN_SCORE: f32 = 0.15;

/// Параметры поиска.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchOpts {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_min_score")]
    pub min_score: f32,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_min_score() -> f32 {
    DEFAULT_MIN_SCORE
}

impl Default for SearchOpts {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Результат поиска: балл и ссылка на исходный payload.
#[derive(Debug)]
pub struct Hit<'a, T> {
    pub score: f32,
    pub item: &'a T,
}

struct Doc<T> {
    item: T,
    text: String, // нормализованный текст, для подстрочного fallback
    grams: HashSet<String>,
}

/// Индекс нечёткого поиска по коротким строкам.
///
/// Payload `T` непрозрачен: хранится и возвращается как есть, никаких
/// требований к типу. Id документов — порядковые, начиная с 0, и никогда
/// не переиспользуются (удаления в контракте нет; перестройка — новый
/// индекс).
pub struct TrigramIndex<T> {
    inv: InvertedIndex,
    docs: Vec<Doc<T>>,
}

impl<T> TrigramIndex<T> {
    pub fn new() -> Self {
        Self {
            inv: InvertedIndex::new(),
            docs: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn gram_count(&self) -> usize {
        self.inv.gram_count()
    }

    /// Добавить документ. Принимает любую строку, включая пустую
    /// (у пустой просто не будет грамм). Возвращает присвоенный id.
    pub fn add(&mut self, text: &str, item: T) -> DocId {
        let text = normalize(text);
        let grams = trigram_set(&text);
        let id = self.docs.len() as DocId;
        self.inv.add_doc(id, &grams);
        self.docs.push(Doc { item, text, grams });
        id
    }

    /// Массовое добавление: эквивалентно последовательности `add`,
    /// id присваиваются в порядке обхода.
    pub fn add_all<I, F>(&mut self, mut get_text: F, items: I)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
    {
        for item in items {
            let text = get_text(&item);
            self.add(&text, item);
        }
    }

    /// Поиск: кандидаты по объединению posting-сетов грамм запроса,
    /// балл — Жаккар по множествам триграмм, отсечка по `min_score`,
    /// сортировка по убыванию балла, усечение до `limit`.
    pub fn search(&self, query: &str, opts: SearchOpts) -> Vec<Hit<'_, T>> {
        let q_norm = normalize(query);
        if q_norm.is_empty() {
            // Запрос из одной пунктуации/пробелов не матчит ничего.
            return Vec::new();
        }
        let q_grams = trigram_set(&q_norm);

        let mut candidates = self.inv.union(&q_grams);
        if candidates.is_empty() && q_grams.is_empty() {
            // Запрос слишком короткий, чтобы дать граммы: кандидаты — все
            // документы, дальше решает подстрочная проверка.
            if !self.docs.is_empty() {
                candidates.add_range(0..self.docs.len() as u32);
            }
        }

        let mut hits = Vec::new();
        for id in candidates.iter() {
            let doc = &self.docs[id as usize];
            if let Some(score) = score_doc(&q_norm, &q_grams, doc) {
                if score >= opts.min_score {
                    hits.push(Hit {
                        score,
                        item: &doc.item,
                    });
                }
            }
        }

        // Битмап отдаёт id по возрастанию, сортировка стабильная:
        // при равных баллах порядок вставки сохраняется.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(opts.limit);
        hits
    }
}

/// Балл кандидата или None, если кандидат отбрасывается.
fn score_doc<T>(q_norm: &str, q_grams: &HashSet<String>, doc: &Doc<T>) -> Option<f32> {
    if q_grams.is_empty() {
        // Грамм нет вообще — только подстрочное вхождение.
        return doc.text.contains(q_norm).then_some(1.0);
    }
    let inter = intersection_size(q_grams, &doc.grams);
    if inter == 0 {
        return doc
            .text
            .contains(q_norm)
            .then_some(SUBSTRING_FALLBACK_SCORE);
    }
    let union = q_grams.len() + doc.grams.len() - inter;
    if union == 0 {
        return Some(0.0);
    }
    Some(inter as f32 / union as f32)
}
