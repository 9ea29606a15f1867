mod about;
mod contact;
#[cfg(feature = "hydrate")]
mod dom;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod services;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
#[cfg(feature = "hydrate")]
use leptos_use::{use_event_listener, use_window};

use crate::content::Icon;
use crate::section::Section;
use crate::state::UiState;
#[cfg(feature = "hydrate")]
use crate::storage::LocalStore;

use about::About;
use contact::Contact;
#[cfg(feature = "hydrate")]
use dom::{DocumentScope, DomSectionLocator};
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use portfolio::Portfolio;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/designer-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Creative Designer | UI/UX Portfolio" />
        <Meta
            name="description"
            content="UI/UX Designer specializing in creating beautiful, user-centered digital experiences"
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Replaces the state with `f(state)`, notifying subscribers only when
/// something actually changed.
pub(crate) fn transition(state: RwSignal<UiState>, f: impl FnOnce(&UiState) -> UiState) {
    let next = state.with_untracked(f);
    if state.with_untracked(|current| *current != next) {
        state.set(next);
    }
}

/// Smooth-scrolls to `section` and closes the mobile menu.
pub(crate) fn scroll_to_section(state: RwSignal<UiState>, section: Section) {
    #[cfg(feature = "hydrate")]
    dom::scroll_into_view(section);
    transition(state, |s| s.navigate_to(section));
}

pub(crate) fn toggle_theme(state: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    transition(state, |s| s.toggle_theme(&LocalStore, &DocumentScope));
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

/// Reads `file` and, once the read completes, makes it the avatar.
pub(crate) fn upload_avatar(state: RwSignal<UiState>, file: &web_sys::File) {
    log::info!("reading profile image '{}' ({} bytes)", file.name(), file.size());
    #[cfg(feature = "hydrate")]
    {
        let started = dom::read_image(file, move |res| match res {
            Ok(image) => transition(state, move |s| s.with_avatar(image, &LocalStore)),
            Err(e) => log::warn!("profile image ignored: {e}"),
        });
        if let Err(e) = started {
            log::warn!("{e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(UiState::default());
    provide_context(state);

    // rehydrate persisted theme and avatar once, after hydration
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let mounted = UiState::mount(&LocalStore, &DocumentScope);
            log::debug!(
                "mounted with theme={} avatar_embedded={}",
                mounted.theme(),
                mounted.avatar.is_embedded()
            );
            transition(state, |_| mounted);
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        transition(state, |s| s.on_scroll(&DomSectionLocator));
    });

    let dark = Memo::new(move |_| state.with(|s| s.dark_mode));

    view! {
        <div class=move || {
            if dark.get() {
                "min-h-screen transition-colors duration-300 dark"
            } else {
                "min-h-screen transition-colors duration-300"
            }
        }>
            <div class="min-h-screen bg-white dark:bg-slate-900 text-slate-800 dark:text-slate-100 transition-colors duration-300">
                <NavBar />
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Contact />
                <Footer />
            </div>
        </div>
    }
}

/// Underlined section heading shared by every content section.
#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-20">
            <h2 class="text-4xl sm:text-5xl font-bold text-slate-800 dark:text-slate-100 mb-6">
                {title}
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-purple-500 to-pink-500 mx-auto mb-8"></div>
            <p class="text-xl text-slate-600 dark:text-slate-300 max-w-3xl mx-auto leading-relaxed">
                {subtitle}
            </p>
        </div>
    }
}

/// Inline stroke icon, sized by the caller's classes (`w-5 h-5` by default).
#[component]
fn IconSvg(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "w-5 h-5" } else { class };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
