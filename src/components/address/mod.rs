//! Server address with copy-to-clipboard button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{SERVER_ADDRESS, dom_ids};
use crate::core::copy_server_address;

stylance::import_crate_style!(css, "src/components/address/address.module.css");

/// Server address, copy button and the "copied" acknowledgment.
///
/// The acknowledgment element carries only the `copiado` state class; its
/// look lives in the global stylesheet under `#copiado`.
#[component]
pub fn ServerAddress() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let source = NodeRef::<leptos::html::Span>::new();

    let on_copy = move |_: leptos::ev::MouseEvent| copy_server_address(ctx, source);

    view! {
        <div class=css::row>
            <span id=dom_ids::SERVER_ADDRESS class=css::address node_ref=source>
                {SERVER_ADDRESS}
            </span>
            <button class=css::copyButton on:click=on_copy title="Copiar IP">
                <Icon icon=ic::COPY />
            </button>
            <span
                id=dom_ids::COPY_ACK
                class=move || ctx.copy_ack.get().class_name()
            >
                <Icon icon=ic::CHECK />
                " ¡IP copiada!"
            </span>
        </div>
    }
}
