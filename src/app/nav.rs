use leptos::prelude::*;

use crate::content::{Icon, BRAND};
use crate::section::Section;
use crate::state::UiState;

use super::{scroll_to_section, toggle_theme, transition, IconSvg};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-slate-900/80 backdrop-blur-xl border-b border-slate-100 dark:border-slate-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent">
                        {BRAND}
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        <SectionLinks mobile=false />
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            on:click=move |_| transition(state, UiState::toggle_menu)
                            class="p-2 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors duration-300"
                            aria-label="Toggle menu"
                        >
                            {move || {
                                let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                                view! { <IconSvg icon class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-white/95 dark:bg-slate-900/95 backdrop-blur-xl border-t border-slate-100 dark:border-slate-800">
                                <div class="px-4 py-4 space-y-3">
                                    <SectionLinks mobile=true />
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

/// One button per section. The desktop variant underlines the active entry,
/// the mobile overlay fills it.
#[component]
fn SectionLinks(mobile: bool) -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| state.with(|s| s.active_section));

    Section::ALL
        .into_iter()
        .map(|section| {
            let is_active = move || active.get() == section;
            let class = move || match (mobile, is_active()) {
                (false, true) => "capitalize transition-all duration-300 hover:text-purple-600 dark:hover:text-purple-400 relative text-purple-600 dark:text-purple-400 font-medium",
                (false, false) => "capitalize transition-all duration-300 hover:text-purple-600 dark:hover:text-purple-400 relative text-slate-600 dark:text-slate-300",
                (true, true) => "block w-full text-left px-4 py-3 rounded-xl capitalize transition-all bg-gradient-to-r from-purple-50 to-pink-50 dark:from-purple-900/30 dark:to-pink-900/30 text-purple-600 dark:text-purple-400 font-medium",
                (true, false) => "block w-full text-left px-4 py-3 rounded-xl capitalize transition-all text-slate-600 dark:text-slate-300 hover:bg-slate-50 dark:hover:bg-slate-800",
            };
            view! {
                <button class=class on:click=move |_| scroll_to_section(state, section)>
                    {section.id()}
                    {move || {
                        (!mobile && is_active())
                            .then(|| {
                                view! {
                                    <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full"></div>
                                }
                            })
                    }}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let dark = Memo::new(move |_| state.with(|s| s.dark_mode));

    view! {
        <button
            on:click=move |_| toggle_theme(state)
            class="p-2 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors duration-300"
            aria-label="Toggle dark mode"
        >
            {move || {
                if dark.get() {
                    view! { <IconSvg icon=Icon::Sun class="w-5 h-5 text-yellow-500" /> }
                } else {
                    view! {
                        <IconSvg
                            icon=Icon::Moon
                            class="w-5 h-5 text-slate-600 dark:text-slate-300"
                        />
                    }
                }
            }}
        </button>
    }
}
