use leptos::prelude::*;

use crate::content::{Icon, SERVICES};
use crate::section::Section;

use super::{IconSvg, SectionHeading};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section
            id=Section::Services.id()
            class="py-24 bg-white dark:bg-slate-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="What I Do"
                    subtitle="Specialized services focused on creating exceptional user experiences through thoughtful design"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="group relative bg-white dark:bg-slate-800 rounded-3xl p-8 shadow-lg hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 border border-slate-100 dark:border-slate-700">
                                    <div class=format!(
                                        "inline-flex p-4 rounded-2xl bg-gradient-to-r {} text-white mb-6 group-hover:scale-110 transition-transform duration-300",
                                        service.gradient,
                                    )>
                                        <IconSvg icon=service.icon class="w-8 h-8" />
                                    </div>
                                    <h3 class="text-xl font-bold text-slate-800 dark:text-slate-100 mb-4 group-hover:text-purple-600 dark:group-hover:text-purple-400 transition-colors">
                                        {service.title}
                                    </h3>
                                    <p class="text-slate-600 dark:text-slate-300 leading-relaxed">
                                        {service.description}
                                    </p>
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-5 rounded-3xl transition-opacity duration-300",
                                        service.gradient,
                                    )></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-20 text-center">
                    <h3 class="text-2xl font-bold text-slate-800 dark:text-slate-100 mb-8">
                        "Primary Design Tool"
                    </h3>
                    <div class="inline-flex items-center space-x-4 bg-gradient-to-r from-purple-50 to-pink-50 dark:from-purple-900/30 dark:to-pink-900/30 px-8 py-6 rounded-2xl border border-purple-100 dark:border-purple-800">
                        <IconSvg
                            icon=Icon::Figma
                            class="w-12 h-12 text-purple-600 dark:text-purple-400"
                        />
                        <div class="text-left">
                            <div class="text-xl font-bold text-slate-800 dark:text-slate-100">"Figma"</div>
                            <div class="text-slate-600 dark:text-slate-300">
                                "Complete design workflow from wireframes to prototypes"
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
