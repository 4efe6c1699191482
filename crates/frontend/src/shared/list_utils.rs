//! Утилиты для работы со списками (поиск, подсветка, строка поиска)

use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу; пустой запрос оставляет все
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Разбить текст на фрагменты `(кусок, совпадение?)` для подсветки (case-insensitive)
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if filter_lower.is_empty()
        || !lowercase_keeps_offsets(text)
        || !text_lower.contains(&filter_lower)
    {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((&text[last_pos..actual_pos], false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((&text[actual_pos..match_end], true));
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push((&text[last_pos..], false));
    }

    parts
}

/// Смещения в `to_lowercase()` совпадают с исходными: каждый символ
/// переходит ровно в один символ той же длины
fn lowercase_keeps_offsets(text: &str) -> bool {
    text.chars().all(|c| {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l.len_utf8() == c.len_utf8(),
            _ => false,
        }
    })
}

/// Подсветка совпадений в тексте
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="search-match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Строка поиска с кнопкой очистки; значение обновляется на каждый ввод
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    value: RwSignal<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| value.set(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Word(&'static str);

    impl Searchable for Word {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.contains(filter)
        }
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Word("alpha"), Word("beta")];
        assert_eq!(filter_list(&items, ""), items);
        assert_eq!(filter_list(&items, "et"), vec![Word("beta")]);
        assert!(filter_list(&items, "zzz").is_empty());
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Acme and ACME", "acme"),
            vec![("Acme", true), (" and ", false), ("ACME", true)]
        );
        assert_eq!(split_matches("Globex", "acme"), vec![("Globex", false)]);
        assert_eq!(split_matches("Globex", ""), vec![("Globex", false)]);
        assert_eq!(split_matches("İstanbul Tekstil", "tek"), vec![("İstanbul Tekstil", false)]);
    }
}
