use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use client::HttpCatalog;
use data::{DraftField, Product};

use crate::catalog::{CatalogEvent, CatalogState, Feedback, run_refresh, submit_product};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = HttpCatalog::new(
        window()
            .location()
            .origin()
            .expect("Failed to read window origin"),
    );
    let state = RwSignal::new(CatalogState::default());

    {
        let api = api.clone();
        spawn_local(async move {
            let event = run_refresh(&api).await;
            state.update(|s| s.apply(event));
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One submission at a time.
        if state.with_untracked(|s| s.in_flight) {
            return;
        }
        let draft = state.with_untracked(|s| s.draft.clone());
        state.update(|s| s.apply(CatalogEvent::SubmitStarted));

        let api = api.clone();
        spawn_local(async move {
            let result = submit_product(&api, &draft).await;
            state.update(|s| s.apply(CatalogEvent::SubmitFinished(result)));
        });
    };

    let edit = move |field: DraftField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| s.apply(CatalogEvent::DraftEdited(field, value)));
        }
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="text"
                name="title"
                placeholder="Product Title"
                prop:value=move || state.with(|s| s.draft.title.clone())
                on:input=edit(DraftField::Title)
            />
            <input
                type="number"
                name="price"
                placeholder="Price"
                prop:value=move || state.with(|s| s.draft.price.clone())
                on:input=edit(DraftField::Price)
            />
            <input
                type="text"
                name="description"
                placeholder="Description"
                prop:value=move || state.with(|s| s.draft.description.clone())
                on:input=edit(DraftField::Description)
            />
            <input
                type="text"
                name="img"
                placeholder="Image URL"
                prop:value=move || state.with(|s| s.draft.img.clone())
                on:input=edit(DraftField::Img)
            />
            <button type="submit" disabled=move || state.with(|s| s.in_flight)>
                "Add"
            </button>
            {move || state.with(|s| feedback_line(&s.feedback))}
        </form>
        <div class="gallery">
            <For
                each=move || state.with(|s| s.products.clone())
                key=|product| product.id
                let:product
            >
                <ProductCard product/>
            </For>
        </div>
    }
}

fn feedback_line(feedback: &Feedback) -> Option<AnyView> {
    match feedback {
        Feedback::None => None,
        Feedback::Error(msg) => {
            Some(view! { <p class="feedback error">{msg.clone()}</p> }.into_any())
        }
        Feedback::Success(msg) => {
            Some(view! { <p class="feedback success">{msg.clone()}</p> }.into_any())
        }
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let alt = product.title.clone();

    view! {
        <div class="product-card">
            <h2>{product.title}</h2>
            <p>"Price: $" {product.price.to_string()}</p>
            {product.description.map(|description| view! { <p>"Description: " {description}</p> })}
            {product.img.map(|src| view! { <img src=src alt=alt/> })}
        </div>
    }
}
