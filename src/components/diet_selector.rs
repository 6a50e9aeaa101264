//! Diet Selector Component
//!
//! Dropdown of diet categories understood by the catalog.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Diet filter options, `""` meaning no filter
const DIET_OPTIONS: &[(&str, &str)] = &[
    ("", "All diets"),
    ("balanced", "Balanced"),
    ("high-fiber", "High-Fiber"),
    ("high-protein", "High-Protein"),
    ("low-carb", "Low-Carb"),
    ("low-fat", "Low-Fat"),
    ("low-sodium", "Low-Sodium"),
    ("vegan", "Vegan"),
    ("vegetarian", "Vegetarian"),
];

#[component]
pub fn DietSelector(
    current_diet: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="diet-select"
            class="diet-select"
            on:change=move |ev| {
                let select = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok());
                if let Some(select) = select {
                    on_change(select.value());
                }
            }
        >
            {DIET_OPTIONS.iter().map(|(value, label)| {
                let val = value.to_string();
                let is_selected = move || current_diet.get() == val;
                view! {
                    <option value=*value selected=is_selected>
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
