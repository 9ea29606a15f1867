use leptos::prelude::*;

use crate::content::{Icon, PortfolioItem, PORTFOLIO_ITEMS};
use crate::section::Section;

use super::{IconSvg, SectionHeading};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section
            id=Section::Portfolio.id()
            class="py-24 bg-gradient-to-b from-slate-50 to-white dark:from-slate-800 dark:to-slate-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Work"
                    subtitle="A showcase of recent projects demonstrating my approach to user-centered design"
                />
                <div class="grid md:grid-cols-2 gap-10">
                    {PORTFOLIO_ITEMS.iter().map(|item| view! { <PortfolioCard item=*item /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="group bg-white dark:bg-slate-800 rounded-3xl shadow-lg hover:shadow-2xl transition-all duration-500 overflow-hidden hover:-translate-y-2">
            <div class="relative overflow-hidden">
                <img
                    src=item.image_url
                    alt=item.title
                    loading="lazy"
                    class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-700"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                <div class="absolute bottom-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="w-12 h-12 bg-white/20 backdrop-blur-sm rounded-full flex items-center justify-center">
                        <IconSvg icon=Icon::ExternalLink class="w-5 h-5 text-white" />
                    </div>
                </div>
                <div class="absolute top-4 left-4">
                    <span class="px-3 py-1 bg-white/20 backdrop-blur-sm text-white text-sm rounded-full font-medium">
                        {item.category}
                    </span>
                </div>
            </div>

            <div class="p-8">
                <h3 class="text-2xl font-bold text-slate-800 dark:text-slate-100 mb-3 group-hover:text-purple-600 dark:group-hover:text-purple-400 transition-colors">
                    {item.title}
                </h3>
                <p class="text-slate-600 dark:text-slate-300 mb-6 leading-relaxed">{item.description}</p>
                <div class="flex flex-wrap gap-2">
                    {item
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <span class="px-4 py-2 bg-gradient-to-r from-purple-50 to-pink-50 dark:from-purple-900/30 dark:to-pink-900/30 text-purple-700 dark:text-purple-300 text-sm rounded-xl font-medium border border-purple-100 dark:border-purple-800">
                                    {*tool}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
