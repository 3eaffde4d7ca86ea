//! Story catalog page used to inspect the clickable box in a browser.

use gloo::console;
use yew::prelude::*;

use crate::components::{Activation, ClickableBox, Is};
use crate::core::catalog::{Story, StoryCatalog};

#[derive(Properties, PartialEq)]
struct StoryViewProps {
    story: Story,
}

#[function_component(StoryView)]
fn story_view(props: &StoryViewProps) -> Html {
    let story = &props.story;
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        let name = story.name.clone();
        use_effect_with_deps(
            move |_| {
                if node_ref.get().is_none() {
                    console::error!("story node was not bound", name);
                }
                || ()
            },
            (),
        );
    }

    let onclick = {
        let name = story.name.clone();
        Callback::from(move |activation: Activation| {
            console::log!("activated", name.clone(), activation.is_keyboard());
        })
    };
    let onkeypress = {
        let name = story.name.clone();
        let veto_enter = story.veto_enter;
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            if veto_enter && key == "Enter" {
                event.prevent_default();
            }
            console::log!("key press", name.clone(), key);
        })
    };
    // Validated when the catalog was loaded.
    let element = story.element().unwrap_or_default();

    html! {
        <section class="story">
            <h2>{ story.name.clone() }</h2>
            <ClickableBox
                is={Is::Element(element)}
                onclick={onclick}
                onkeypress={onkeypress}
                disabled={story.disabled}
                tab_index={story.tab_index}
                node_ref={node_ref}
                attrs={story.attrs.clone()}
            >
                { story.label.clone() }
            </ClickableBox>
        </section>
    }
}

#[function_component(CatalogPage)]
fn catalog_page() -> Html {
    match StoryCatalog::bundled() {
        Ok(catalog) => html! {
            <main class="catalog">
                <h1>{ "ClickableBox" }</h1>
                { for catalog.stories.into_iter().map(|story| html! { <StoryView {story} /> }) }
            </main>
        },
        Err(err) => {
            console::error!("story catalog failed to load", err.to_string());
            html! { <p role="alert">{ "Story catalog failed to load." }</p> }
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CatalogPage>::with_root(root).render();
    } else {
        yew::Renderer::<CatalogPage>::new().render();
    }
}
