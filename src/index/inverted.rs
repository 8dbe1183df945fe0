use croaring::Bitmap;
use std::collections::{HashMap, HashSet};

pub type DocId = u32;

/// Обратный индекс: gram -> posting-сет (битмап id документов).
/// Удаления нет, posting-сеты только растут.
pub struct InvertedIndex {
    grams: HashMap<String, Bitmap>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self {
            grams: HashMap::new(),
        }
    }

    /// Зарегистрировать документ во всех его граммах.
    pub fn add_doc(&mut self, doc: DocId, grams: &HashSet<String>) {
        for g in grams {
            self.grams
                .entry(g.clone())
                .or_insert_with(Bitmap::new)
                .add(doc);
        }
    }

    /// Объединение posting-сетов всех запрошенных грамм.
    /// Отсутствующие граммы просто пропускаются.
    pub fn union(&self, grams: &HashSet<String>) -> Bitmap {
        let mut acc = Bitmap::new();
        for g in grams {
            if let Some(bm) = self.grams.get(g) {
                acc.or_inplace(bm);
            }
        }
        acc
    }

    pub fn gram_count(&self) -> usize {
        self.grams.len()
    }

    pub fn posting(&self, gram: &str) -> Option<&Bitmap> {
        self.grams.get(gram)
    }
}
