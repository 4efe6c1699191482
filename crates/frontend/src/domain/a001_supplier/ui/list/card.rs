use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_supplier::{item_count_label, Supplier};
use leptos::prelude::*;
use thaw::*;

/// Ссылка на сайт поставщика; без схемы считается https
pub fn website_href(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Строка контакта на карточке; пустые поля не выводятся
fn contact_line(
    icon_name: &'static str,
    value: Option<String>,
    query: &str,
    searchable: bool,
) -> Option<AnyView> {
    let value = value.filter(|v| !v.trim().is_empty())?;
    let text = if searchable {
        highlight_matches(&value, query)
    } else {
        view! { <span>{value}</span> }.into_any()
    };
    Some(
        view! {
            <div class="supplier-card__line">
                {icon(icon_name)}
                {text}
            </div>
        }
        .into_any(),
    )
}

#[component]
pub fn SupplierCard(
    supplier: Supplier,
    item_count: usize,
    /// Текущая поисковая строка (для подсветки)
    #[prop(into)]
    query: String,
    on_select: Callback<Supplier>,
) -> impl IntoView {
    let initials = supplier.avatar_initials();
    let avatar_style = format!("background-color: {};", supplier.avatar_color());
    let badge = item_count_label(item_count);
    let title = highlight_matches(&supplier.name, &query);

    let website = supplier
        .website
        .clone()
        .filter(|w| !w.trim().is_empty())
        .map(|url| {
            let href = website_href(&url);
            view! {
                <div class="supplier-card__line">
                    {icon("globe")}
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {url}
                    </a>
                </div>
            }
        });

    let lines = vec![
        contact_line("mail", supplier.email.clone(), &query, true),
        contact_line("user", supplier.sales_person.clone(), &query, true),
        contact_line("message", supplier.wechat_whatsapp.clone(), &query, false),
        contact_line("map-pin", supplier.address.clone(), &query, true),
    ];

    view! {
        <div class="supplier-card" on:click=move |_| on_select.run(supplier.clone())>
            <div class="supplier-card__header">
                <div class="supplier-card__avatar" style=avatar_style>{initials}</div>
                <div class="supplier-card__title">{title}</div>
                {badge.map(|label| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{label}</Badge>
                })}
            </div>
            <div class="supplier-card__body">
                {lines}
                {website}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_href() {
        assert_eq!(website_href("acme.com"), "https://acme.com");
        assert_eq!(website_href(" http://acme.com "), "http://acme.com");
        assert_eq!(website_href("https://acme.com/en"), "https://acme.com/en");
    }
}
