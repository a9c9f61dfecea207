use crate::interaction::{Theme, ThemeSetting, PREFERS_DARK_QUERY};
use crate::media::use_media_query;
use crate::storage::{is_preferences_key, load_preferences, save_preferences, StoredPreferences};
use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsCast;

/// Theme state handed to components through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub setting: ReadSignal<ThemeSetting>,
    pub set_setting: WriteSignal<ThemeSetting>,
    system_prefers_dark: ReadSignal<bool>,
}

impl ThemeContext {
    /// The color scheme currently applied.
    pub fn theme(&self) -> Theme {
        self.setting.get().resolve(self.system_prefers_dark.get())
    }

    pub fn toggle(&self) {
        self.set_setting.update(|s| *s = s.toggled());
    }
}

/// Create the theme context at the root of the app.
///
/// Loads the stored setting, keeps the `<html>` class and localStorage in
/// step with it, and picks up changes made in other tabs.
pub fn provide_theme() {
    let stored = load_preferences();
    let (setting, set_setting) = create_signal(stored.theme);
    let system_prefers_dark = use_media_query(PREFERS_DARK_QUERY);

    let ctx = ThemeContext {
        setting,
        set_setting,
        system_prefers_dark,
    };

    create_effect(move |_| {
        apply_theme_class(ctx.theme());
    });

    create_effect(move |_| {
        save_preferences(&StoredPreferences {
            theme: setting.get(),
        });
    });

    listen_for_cross_tab_changes(set_setting);

    provide_context(ctx);
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let stale = match theme {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    let _ = classes.remove_1(stale.class_name());
    let _ = classes.add_1(theme.class_name());
}

/// Follow theme changes saved by other tabs.
///
/// `storage` events only fire in tabs other than the writer, so applying the
/// new value here does not echo back.
fn listen_for_cross_tab_changes(set_setting: WriteSignal<ThemeSetting>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let listener = EventListener::new(&window, "storage", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
            return;
        };
        if is_preferences_key(event.key().as_deref()) {
            set_setting.set(load_preferences().theme);
        }
    });
    on_cleanup(move || drop(listener));
}
