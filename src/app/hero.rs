use leptos::{html, prelude::*};
use web_sys::{Event, HtmlInputElement};

use crate::content::{Icon, HEADLINE};
use crate::profile::ACCEPTED_IMAGE_TYPES;
use crate::section::Section;
use crate::state::UiState;

use super::{scroll_to_section, upload_avatar, IconSvg};

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center pt-16 px-4 sm:px-6 lg:px-8 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-purple-50 via-white to-pink-50 dark:from-slate-900 dark:via-slate-800 dark:to-slate-900"></div>
            <div class="absolute top-20 left-10 w-72 h-72 bg-purple-200 dark:bg-purple-800/30 rounded-full mix-blend-multiply dark:mix-blend-screen filter blur-xl opacity-30 animate-blob"></div>
            <div class="absolute top-40 right-10 w-72 h-72 bg-pink-200 dark:bg-pink-800/30 rounded-full mix-blend-multiply dark:mix-blend-screen filter blur-xl opacity-30 animate-blob animation-delay-2000"></div>
            <div class="absolute -bottom-8 left-20 w-72 h-72 bg-blue-200 dark:bg-blue-800/30 rounded-full mix-blend-multiply dark:mix-blend-screen filter blur-xl opacity-30 animate-blob animation-delay-4000"></div>

            <div class="max-w-7xl mx-auto text-center relative z-10">
                <AvatarUploader />

                <h1 class="text-4xl sm:text-5xl lg:text-7xl font-bold mb-6">
                    <span class="bg-gradient-to-r from-purple-600 via-pink-600 to-blue-600 bg-clip-text text-transparent">
                        {HEADLINE}
                    </span>
                </h1>
                <p class="text-xl sm:text-2xl text-slate-600 dark:text-slate-300 mb-4 max-w-4xl mx-auto font-light">
                    "UI/UX Designer specializing in creating beautiful, user-centered digital experiences"
                </p>
                <p class="text-lg text-slate-500 dark:text-slate-400 mb-12 max-w-2xl mx-auto">
                    "Crafting intuitive interfaces and meaningful user journeys using Figma and design thinking principles"
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-16">
                    <button
                        on:click=move |_| scroll_to_section(state, Section::Portfolio)
                        class="group px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 text-white rounded-2xl font-medium hover:shadow-2xl hover:shadow-purple-500/25 transform hover:scale-105 transition-all duration-300"
                    >
                        <span class="flex items-center space-x-2">
                            <span>"View My Work"</span>
                            <IconSvg
                                icon=Icon::ExternalLink
                                class="w-5 h-5 group-hover:translate-x-1 transition-transform"
                            />
                        </span>
                    </button>
                    <button
                        on:click=move |_| scroll_to_section(state, Section::Contact)
                        class="px-8 py-4 border-2 border-slate-200 dark:border-slate-700 text-slate-700 dark:text-slate-300 rounded-2xl font-medium hover:border-purple-300 hover:text-purple-600 dark:hover:text-purple-400 hover:bg-purple-50 dark:hover:bg-purple-900/20 transition-all duration-300"
                    >
                        "Let's Collaborate"
                    </button>
                </div>

                <div class="animate-bounce">
                    <IconSvg
                        icon=Icon::ChevronDown
                        class="w-6 h-6 text-slate-400 dark:text-slate-500 mx-auto"
                    />
                </div>
            </div>
        </section>
    }
}

/// Profile photo with a camera button that opens a hidden image picker.
#[component]
fn AvatarUploader() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let file_input = NodeRef::<html::Input>::new();
    let avatar = Memo::new(move |_| state.with(|s| s.avatar.clone()));

    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        upload_avatar(state, &file);
    };

    view! {
        <div class="relative inline-block mb-8">
            <div class="relative group">
                <div class="absolute -inset-8 bg-gradient-to-r from-purple-500 via-pink-500 to-blue-500 rounded-full opacity-20 blur-2xl group-hover:opacity-30 transition-opacity duration-500"></div>
                <div class="absolute -inset-4 bg-gradient-to-r from-purple-400 via-pink-400 to-blue-400 rounded-full opacity-40 animate-spin-slow"></div>
                <div class="absolute -inset-2 bg-white dark:bg-slate-800 rounded-full shadow-2xl"></div>
                <div class="relative">
                    <img
                        src=move || avatar.get().as_str().to_owned()
                        alt="UI/UX Designer"
                        class="relative w-48 h-48 sm:w-56 sm:h-56 lg:w-64 lg:h-64 rounded-full object-cover border-4 border-white dark:border-slate-700 shadow-2xl group-hover:scale-105 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 rounded-full bg-gradient-to-tr from-transparent via-white/10 to-transparent"></div>

                    <button
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                        class="absolute bottom-2 right-2 w-12 h-12 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full flex items-center justify-center text-white shadow-lg hover:shadow-xl hover:scale-110 transition-all duration-300 group/upload"
                        aria-label="Upload profile photo"
                    >
                        <IconSvg
                            icon=Icon::Camera
                            class="w-5 h-5 group-hover/upload:scale-110 transition-transform"
                        />
                    </button>

                    <input
                        node_ref=file_input
                        type="file"
                        accept=ACCEPTED_IMAGE_TYPES
                        on:change=on_change
                        class="hidden"
                    />
                </div>

                <div class="absolute -top-4 -right-4 w-8 h-8 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg rotate-12 animate-bounce"></div>
                <div class="absolute -bottom-2 -left-6 w-6 h-6 bg-gradient-to-r from-blue-500 to-cyan-500 rounded-full animate-pulse"></div>
            </div>
        </div>
    }
}
