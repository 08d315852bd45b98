use desktop_runtime::{DesktopProvider, DesktopShell, WindowId};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Retro Desktop" />
        <Meta name="description" content="A personal portfolio styled as a retro desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/windows/:id" view=WindowLinkRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Shareable `/windows/<id>` page that hands off to the desktop's `?open=` deep link.
#[component]
fn WindowLinkRoute() -> impl IntoView {
    let params = use_params_map();
    let window = move || {
        params
            .with(|map| map.get("id").cloned())
            .and_then(|raw| raw.parse::<WindowId>().ok())
    };

    view! {
        <section class="canonical-content canonical-window">
            {move || match window() {
                Some(id) => view! {
                    <h1>{id.title()}</h1>
                    <A href=format!("/?open={}", id.token())>"Open in Desktop"</A>
                }
                .into_view(),
                None => view! {
                    <h1>"Unknown window"</h1>
                    <A href="/">"Back to Desktop"</A>
                }
                .into_view(),
            }}
        </section>
    }
}
