use leptos::{ev::SubmitEvent, prelude::*};

use crate::content::{CONTACT_DETAILS, PROJECT_TYPES, SOCIAL_LINKS};
use crate::section::Section;

use super::{IconSvg, SectionHeading};

const FIELD_CLASS: &str = "w-full px-6 py-4 border border-slate-200 dark:border-slate-600 rounded-2xl focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-all duration-300 bg-slate-50 dark:bg-slate-700 focus:bg-white dark:focus:bg-slate-600 text-slate-800 dark:text-slate-100";
const LABEL_CLASS: &str = "block text-sm font-semibold text-slate-700 dark:text-slate-300 mb-3";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="py-24 bg-gradient-to-br from-purple-50 via-white to-pink-50 dark:from-slate-900 dark:via-slate-800 dark:to-slate-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Let's Create Together"
                    subtitle="Ready to bring your ideas to life? Let's discuss how we can create something amazing together"
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-3xl font-bold text-slate-800 dark:text-slate-100 mb-8">
                                "Get In Touch"
                            </h3>
                            <div class="space-y-6">
                                {CONTACT_DETAILS
                                    .iter()
                                    .map(|detail| {
                                        view! {
                                            <div class="flex items-center space-x-4 p-6 bg-white dark:bg-slate-800 rounded-2xl shadow-lg hover:shadow-xl transition-shadow group">
                                                <div class=format!(
                                                    "w-12 h-12 bg-gradient-to-r {} rounded-xl flex items-center justify-center group-hover:scale-110 transition-transform",
                                                    detail.gradient,
                                                )>
                                                    <IconSvg icon=detail.icon class="w-5 h-5 text-white" />
                                                </div>
                                                <div>
                                                    <div class="font-semibold text-slate-800 dark:text-slate-100">
                                                        {detail.label}
                                                    </div>
                                                    <div class="text-slate-600 dark:text-slate-300">
                                                        {detail.value}
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h4 class="font-semibold text-slate-800 dark:text-slate-100 mb-6">
                                "Connect With Me"
                            </h4>
                            <div class="flex space-x-4">
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
                                                    "w-12 h-12 bg-white dark:bg-slate-800 rounded-xl shadow-lg hover:shadow-xl flex items-center justify-center hover:bg-gradient-to-r {} hover:text-white transition-all duration-300 group",
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
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

/// The form has nowhere to send to. Submitting only keeps the page from
/// reloading.
#[component]
fn ContactForm() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted; no submission endpoint is configured");
    };

    view! {
        <form on:submit=on_submit class="bg-white dark:bg-slate-800 rounded-3xl p-8 shadow-xl">
            <div class="space-y-6">
                <div>
                    <label for="name" class=LABEL_CLASS>
                        "Full Name"
                    </label>
                    <input type="text" id="name" name="name" class=FIELD_CLASS placeholder="Your name" />
                </div>
                <div>
                    <label for="email" class=LABEL_CLASS>
                        "Email Address"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class=FIELD_CLASS
                        placeholder="your.email@example.com"
                    />
                </div>
                <div>
                    <label for="project" class=LABEL_CLASS>
                        "Project Type"
                    </label>
                    <select id="project" name="project" class=FIELD_CLASS>
                        {PROJECT_TYPES.iter().map(|kind| view! { <option>{*kind}</option> }).collect_view()}
                    </select>
                </div>
                <div>
                    <label for="message" class=LABEL_CLASS>
                        "Project Details"
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        class=format!("{FIELD_CLASS} resize-none")
                        placeholder="Tell me about your project..."
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 text-white rounded-2xl font-semibold hover:shadow-2xl hover:shadow-purple-500/25 transform hover:scale-[1.02] transition-all duration-300"
                >
                    "Send Message"
                </button>
            </div>
        </form>
    }
}
