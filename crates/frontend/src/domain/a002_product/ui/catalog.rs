use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{Product, ProductQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::list_utils::{filter_list, Searchable, Sortable};
use crate::shared::money::format_price;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Catalog ordering: featured listings first, then the chosen sort within
/// each group.
pub fn order_catalog(mut products: Vec<Product>, field: &str, ascending: bool) -> Vec<Product> {
    products.sort_by(|a, b| {
        b.featured.cmp(&a.featured).then_with(|| {
            let cmp = a.compare_by_field(b, field);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        })
    });
    products
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let id = product.id.clone();
    let name = product.name.clone();
    let featured = product.featured;
    let price = product.price;
    let image = product.image_urls.first().cloned();

    view! {
        <div
            class=if featured { "product-card featured" } else { "product-card" }
            on:click=move |_| ctx.navigate(Page::Product { id: id.clone() })
        >
            {image.map(|url| {
                let alt = name.clone();
                view! { <img class="product-thumb" src=url alt=alt /> }
            })}
            <Show when=move || featured>
                <span class="featured-ribbon">"Featured"</span>
            </Show>
            <h3>{name.clone()}</h3>
            <p class="price">{format_price(price)}</p>
        </div>
    }
}

/// Storefront landing page: browse and search active listings.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let toast = use_toast();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (search, set_search) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (sort_field, set_sort_field) = signal("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match category_api::fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => toast.error(e),
            }
        });
    });

    // Fetches are not cancelable; the generation counter keeps a slow
    // response for a superseded category filter from overwriting the
    // newer result.
    let fetch_generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let cat = category_id.get();
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);
        spawn_local(async move {
            let query = ProductQuery {
                search: String::new(),
                category_id: (!cat.is_empty()).then_some(cat),
            };
            match api::fetch_catalog(&query).await {
                Ok(list) => {
                    if fetch_generation.get_value() == generation {
                        set_products.set(list);
                    }
                }
                Err(e) => toast.error(e),
            }
        });
    });

    let visible = move || {
        let filtered = filter_list(products.get(), &search.get());
        order_catalog(filtered, &sort_field.get(), sort_ascending.get())
    };

    view! {
        <div class="page catalog-page">
            <div class="catalog-controls">
                <input
                    type="search"
                    placeholder="Search second-hand finds..."
                    value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_category_id.set(event_target_value(&ev))>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=|c: Category| {
                            view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                        }
                    />
                </select>
                <select on:change=move |ev| {
                    match event_target_value(&ev).as_str() {
                        "price_asc" => {
                            set_sort_field.set("price".into());
                            set_sort_ascending.set(true);
                        }
                        "price_desc" => {
                            set_sort_field.set("price".into());
                            set_sort_ascending.set(false);
                        }
                        "name" => {
                            set_sort_field.set("name".into());
                            set_sort_ascending.set(true);
                        }
                        _ => {
                            set_sort_field.set("created_at".into());
                            set_sort_ascending.set(false);
                        }
                    }
                }>
                    <option value="newest">"Newest"</option>
                    <option value="price_asc">"Price: low to high"</option>
                    <option value="price_desc">"Price: high to low"</option>
                    <option value="name">"Name"</option>
                </select>
            </div>

            <div class="product-grid">
                <For
                    each=visible
                    key=|p| p.id.clone()
                    children=|product: Product| view! { <ProductCard product=product /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64, featured: bool) -> Product {
        Product {
            id: id.into(),
            seller_id: "s1".into(),
            category_id: "c1".into(),
            name: name.into(),
            description: String::new(),
            price,
            image_urls: vec![],
            active: true,
            featured,
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_featured_listings_sort_first() {
        let items = vec![
            product("1", "Cheap scarf", 5.0, false),
            product("2", "Promoted coat", 90.0, true),
            product("3", "Mid boots", 30.0, false),
        ];
        let ordered = order_catalog(items, "price", true);
        assert_eq!(ordered[0].id, "2");
        assert_eq!(ordered[1].id, "1");
        assert_eq!(ordered[2].id, "3");
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let mut p = product("1", "Denim jacket", 40.0, false);
        p.description = "vintage levis".into();
        assert!(p.matches_filter("denim"));
        assert!(p.matches_filter("Levis"));
        assert!(!p.matches_filter("boots"));
    }
}
