use leptos::prelude::*;

use crate::content::{copyright_year, HEADLINE, SOCIAL_LINKS};

use super::IconSvg;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 dark:bg-slate-950 text-white py-16 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <div class="text-3xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                        {HEADLINE}
                    </div>
                    <p class="text-slate-400 mb-8 text-lg">
                        "Crafting beautiful experiences, one design at a time."
                    </p>
                    <div class="flex justify-center space-x-6 mb-12">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.opens_new_tab().then_some("_blank")
                                        rel=link.opens_new_tab().then_some("noopener noreferrer")
                                        aria-label=link.label
                                        class=format!(
                                            "w-12 h-12 bg-slate-800 dark:bg-slate-900 rounded-xl flex items-center justify-center hover:bg-gradient-to-r {} transition-all duration-300 group",
                                            link.hover_gradient,
                                        )
                                    >
                                        <IconSvg
                                            icon=link.icon
                                            class="w-5 h-5 group-hover:scale-110 transition-transform"
                                        />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="border-t border-slate-800 dark:border-slate-700 pt-8">
                        <p class="text-slate-400">
                            {format!("© {} {HEADLINE}. All rights reserved.", copyright_year())}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
