//! Landing page layout.

use leptos::prelude::*;

use crate::components::address::ServerAddress;
use crate::components::socials::Socials;
use crate::components::status::StatusBadge;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Page body: title, status badge, server address and socials.
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <main class=css::page>
            <section class=css::card>
                <h1 class=css::title>"CraftCeres"</h1>
                <p class=css::subtitle>"Servidor de Minecraft Java"</p>
                <StatusBadge />
                <ServerAddress />
            </section>
            <Socials />
        </main>
    }
}
