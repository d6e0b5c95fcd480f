//! Универсальные утилиты для работы со списками (поиск, сортировка)

use std::cmp::Ordering;

/// Минимальная длина строки поиска, при которой фильтр активен
const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;

    /// Возвращает значение указанного поля для подсветки
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

fn filter_active(filter: &str) -> bool {
    filter.trim().len() >= MIN_FILTER_LEN
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_active(filter) {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .collect()
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Байтовые диапазоны совпадений фильтра в тексте (для подсветки).
/// Регистр игнорируется в пределах ASCII; совпадения не перекрываются.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if !filter_active(filter) {
        return Vec::new();
    }

    let needle = filter.trim();
    let len = needle.len();
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos + len <= text.len() {
        if let Some(window) = text.get(pos..pos + len) {
            if window.eq_ignore_ascii_case(needle) {
                ranges.push((pos, pos + len));
                pos += len;
                continue;
            }
        }
        pos += 1;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        amount: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self.amount.cmp(&other.amount),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Acme Trading".into(), amount: 30 },
            Row { name: "Global Foods".into(), amount: 10 },
            Row { name: "Acme Retail".into(), amount: 20 },
        ]
    }

    #[test]
    fn test_short_filter_is_inactive() {
        let filtered = filter_list(rows(), "ac");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_matches_case_insensitive() {
        let filtered = filter_list(rows(), "acme");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_sort_descending() {
        let mut items = rows();
        sort_list(&mut items, "amount", false);
        assert_eq!(items[0].amount, 30);
        assert_eq!(items[2].amount, 10);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Acme and ACME", "acme"), vec![(0, 4), (9, 13)]);
        assert_eq!(match_ranges("Acme", "xyz"), Vec::<(usize, usize)>::new());
        // короткий фильтр не подсвечивается
        assert_eq!(match_ranges("Acme", "ac"), Vec::<(usize, usize)>::new());
    }
}
