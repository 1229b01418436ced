use crate::{
    api::Role,
    components::toast::ToastHost,
    state::auth::{self, use_auth},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

const COMMON_NAV: &[NavItem] = &[
    NavItem {
        href: "/dashboard",
        label: "Dashboard",
    },
    NavItem {
        href: "/profile",
        label: "Profile",
    },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        href: "/admin/students",
        label: "Students",
    },
    NavItem {
        href: "/admin/programs",
        label: "Programs",
    },
    NavItem {
        href: "/admin/courses",
        label: "Courses",
    },
    NavItem {
        href: "/admin/trimesters",
        label: "Trimesters",
    },
    NavItem {
        href: "/admin/program-courses",
        label: "Offerings",
    },
    NavItem {
        href: "/admin/enrollments",
        label: "Enrollments",
    },
    NavItem {
        href: "/admin/enrollment-requests",
        label: "Requests",
    },
    NavItem {
        href: "/admin/fees",
        label: "Fees",
    },
    NavItem {
        href: "/admin/bulk",
        label: "Bulk CSV",
    },
];

const STUDENT_NAV: &[NavItem] = &[
    NavItem {
        href: "/student/catalog",
        label: "Programs",
    },
    NavItem {
        href: "/student/courses",
        label: "My Courses",
    },
    NavItem {
        href: "/student/fees",
        label: "My Fees",
    },
    NavItem {
        href: "/student/records",
        label: "Records",
    },
];

pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let role_items = match role {
        Some(Role::Admin) => ADMIN_NAV,
        Some(Role::Student) => STUDENT_NAV,
        None => &[],
    };
    COMMON_NAV.iter().chain(role_items).copied().collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let items = create_memo(move |_| nav_items(auth.get().role()));
    let user_label = move || {
        auth.get()
            .user
            .map(|user| format!("{} · {}", user.display_name(), user.role.label()))
            .unwrap_or_default()
    };
    let logout = auth::use_logout();
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">
                            "Academic Portal"
                        </h1>
                        <span class="hidden md:inline text-sm text-fg-muted">{user_label}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-2">
                            <For
                                each=move || items.get()
                                key=|item| item.href
                                children=move |item| view! {
                                    <a href=item.href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                        {item.label}
                                    </a>
                                }
                            />
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log out"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <For
                                each=move || items.get()
                                key=|item| item.href
                                children=move |item| view! {
                                    <a
                                        href=item.href
                                        class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            />
                            <button
                                on:click=on_logout
                                class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <ToastHost/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
