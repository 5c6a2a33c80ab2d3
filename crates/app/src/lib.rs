pub mod catalog;
pub mod components;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use components::products::ProductsPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Product Belissimo"/>

        <main class="container">
            <h1>"Product Belissimo"</h1>
            <ProductsPage/>
        </main>
    }
}
