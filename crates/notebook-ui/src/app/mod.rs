use crate::components::shell::AppShell;
use crate::core::store::{AppStore, app_dispatch, hydrate};
use crate::core::theme::ThemeMode;
use crate::features::editor::view::NewNotePage;
use crate::features::notes::view::{NoteDetailPage, NoteListPage};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::utils::window;
use preferences::{
    load_locale, load_notebook, load_theme, persist_locale, persist_notebook, persist_theme,
};
pub(crate) use routes::Route;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

mod preferences;
mod routes;

#[function_component(NotebookApp)]
pub(crate) fn notebook_app() -> Html {
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let dispatch = app_dispatch();
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let slice = use_selector(|store: &AppStore| store.notebook.clone());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let notebook = load_notebook();
                dispatch.reduce_mut(|store| hydrate(store, notebook));
                || ()
            },
            (),
        );
    }
    {
        use_effect_with_deps(
            move |slice| {
                if slice.should_persist() {
                    persist_notebook(&slice.data);
                }
                || ()
            },
            slice,
        );
    }
    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }
    {
        let rtl = bundle.rtl();
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                apply_direction(rtl);
                persist_locale(locale);
                || ()
            },
            locale,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };
    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <AppShell
                    theme={*theme}
                    on_toggle_theme={toggle_theme}
                    locale={*locale}
                    on_locale_change={set_locale}
                >
                    <Switch<Route> render={switch} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::NoteList => html! { <NoteListPage /> },
        Route::NewNote => html! { <NewNotePage /> },
        Route::NoteDetail { id } => match Uuid::parse_str(&id) {
            Ok(id) => html! { <NoteDetailPage id={id} /> },
            Err(_) => html! { <NotFound /> },
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("not_found.title", "Not found")}</h2>
            <p class="muted">{bundle.text("not_found.body", "")}</p>
            <Link<Route> to={Route::NoteList} classes="btn btn-ghost btn-sm">
                {bundle.text("detail.back", "Back")}
            </Link<Route>>
        </div>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn apply_direction(is_rtl: bool) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("dir", if is_rtl { "rtl" } else { "ltr" });
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<NotebookApp>::with_root(root).render();
    } else {
        yew::Renderer::<NotebookApp>::new().render();
    }
}
