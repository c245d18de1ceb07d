//! Application chrome: top bar with brand, theme toggle, and locale picker.

use crate::app::Route;
use crate::components::daisy::{Button, DaisySize, DaisyVariant};
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub locale: LocaleCode,
    pub on_locale_change: Callback<LocaleCode>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);

    let theme_label = match props.theme {
        ThemeMode::Light => t("shell.theme_dark", "Dark"),
        ThemeMode::Dark => t("shell.theme_light", "Light"),
    };
    let toggle_theme = {
        let on_toggle = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };
    let on_locale = {
        let on_change = props.on_locale_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    on_change.emit(locale);
                }
            }
        })
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <header class="navbar bg-base-100 shadow-sm px-6">
                <div class="flex-1">
                    <Link<Route> to={Route::NoteList} classes="text-xl font-bold">
                        {t("shell.brand", "Notebook")}
                    </Link<Route>>
                </div>
                <div class="flex items-center gap-2">
                    <Button
                        variant={DaisyVariant::Ghost}
                        size={DaisySize::Sm}
                        onclick={toggle_theme}
                    >
                        {theme_label}
                    </Button>
                    <select
                        class="select select-sm"
                        aria-label={t("shell.language", "Language")}
                        onchange={on_locale}
                    >
                        {for LocaleCode::all().iter().map(|lc| html! {
                            <option value={lc.code()} selected={*lc == props.locale}>{lc.label()}</option>
                        })}
                    </select>
                </div>
            </header>
            <main class="container mx-auto p-6">
                {for props.children.iter()}
            </main>
        </div>
    }
}
