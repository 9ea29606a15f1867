use leptos::prelude::*;

use crate::content::{DESIGN_PROCESS, STATS};
use crate::section::Section;

use super::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id=Section::About.id()
            class="py-24 bg-gradient-to-b from-white to-slate-50 dark:from-slate-900 dark:to-slate-800 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="About Me"
                    subtitle="Passionate about creating digital experiences that delight users and drive business success"
                />

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-3xl font-bold text-slate-800 dark:text-slate-100 mb-6">
                                "Designing with Purpose & Passion"
                            </h3>
                            <p class="text-slate-600 dark:text-slate-300 mb-6 leading-relaxed text-lg">
                                "With 4+ years of experience in UI/UX design, I specialize in creating user-centered digital products that solve real problems. My approach combines creative thinking with data-driven insights to deliver exceptional user experiences."
                            </p>
                            <p class="text-slate-600 dark:text-slate-300 mb-8 leading-relaxed text-lg">
                                "I believe great design is invisible - it should feel natural and effortless to users while achieving business objectives. Every pixel has a purpose, and every interaction tells a story."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-6">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-6 bg-white dark:bg-slate-800 rounded-2xl shadow-lg hover:shadow-xl transition-shadow">
                                            <div class=format!(
                                                "text-3xl font-bold bg-gradient-to-r {} bg-clip-text text-transparent mb-2",
                                                stat.gradient,
                                            )>{stat.value}</div>
                                            <div class="text-slate-600 dark:text-slate-300 font-medium">
                                                {stat.label}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <div class="bg-gradient-to-br from-purple-100 to-pink-100 dark:from-purple-900/30 dark:to-pink-900/30 rounded-3xl p-8">
                            <h4 class="text-2xl font-bold text-slate-800 dark:text-slate-100 mb-8 text-center">
                                "My Design Process"
                            </h4>
                            <div class="space-y-6">
                                {DESIGN_PROCESS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class="flex items-center space-x-4 group">
                                                <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-r from-purple-500 to-pink-500 rounded-xl flex items-center justify-center text-white font-bold group-hover:scale-110 transition-transform">
                                                    {item.step}
                                                </div>
                                                <div>
                                                    <h5 class="font-semibold text-slate-800 dark:text-slate-100 group-hover:text-purple-600 dark:group-hover:text-purple-400 transition-colors">
                                                        {item.title}
                                                    </h5>
                                                    <p class="text-slate-600 dark:text-slate-300 text-sm">
                                                        {item.description}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
