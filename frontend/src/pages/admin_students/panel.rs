use super::{
    utils::GENDERS,
    view_model::{use_admin_students_view_model, AdminStudentsViewModel},
};
use crate::{
    api::User,
    components::{
        common::{Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::{format_date, or_dash},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2";

#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(optional)] input_type: Option<&'static str>,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg">{label}</label>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

macro_rules! bind {
    ($vm:ident, $field:ident) => {
        (
            Signal::derive(move || $vm.form.with(|form| form.$field.clone())),
            Callback::new(move |value: String| $vm.form.update(|form| form.$field = value)),
        )
    };
}

#[component]
fn StudentForm(vm: AdminStudentsViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let (registration_value, registration_input) = bind!(vm, registration_number);
    let (first_value, first_input) = bind!(vm, first_name);
    let (last_value, last_input) = bind!(vm, last_name);
    let (id_value, id_input) = bind!(vm, id_or_passport_number);
    let (email_value, email_input) = bind!(vm, university_email);
    let (password_value, password_input) = bind!(vm, password);
    let (dob_value, dob_input) = bind!(vm, date_of_birth);
    let (phone_value, phone_input) = bind!(vm, phone_number);
    let (personal_value, personal_input) = bind!(vm, personal_email);
    let (postal_value, postal_input) = bind!(vm, postal_address);
    let (disability_value, disability_input) = bind!(vm, disability);
    let (billed_value, billed_input) = bind!(vm, total_billed);
    let (paid_value, paid_input) = bind!(vm, total_paid);
    view! {
        <Card title="New student">
            <form class="grid gap-4 md:grid-cols-3" on:submit=on_submit>
                <FormField label="Registration number *" value=registration_value on_input=registration_input />
                <FormField label="First name *" value=first_value on_input=first_input />
                <FormField label="Last name *" value=last_value on_input=last_input />
                <FormField label="ID / passport number *" value=id_value on_input=id_input />
                <div>
                    <label class="block text-sm font-medium text-fg">"Gender *"</label>
                    <select
                        class=INPUT_CLASS
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.gender = value);
                        }
                    >
                        <option value="" selected=move || vm.form.with(|form| form.gender.is_empty())>
                            "Select gender"
                        </option>
                        {GENDERS.into_iter().map(|gender| view! {
                            <option value=gender selected=move || vm.form.with(|form| form.gender == gender)>
                                {gender}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <FormField label="University email *" input_type="email" value=email_value on_input=email_input />
                <FormField label="Password *" input_type="password" value=password_value on_input=password_input />
                <FormField label="Date of birth" input_type="date" value=dob_value on_input=dob_input />
                <FormField label="Phone number" value=phone_value on_input=phone_input />
                <FormField label="Personal email" input_type="email" value=personal_value on_input=personal_input />
                <FormField label="Postal address" value=postal_value on_input=postal_input />
                <FormField label="Disability" value=disability_value on_input=disability_input />
                <FormField label="Opening total billed" input_type="number" value=billed_value on_input=billed_input />
                <FormField label="Opening total paid" input_type="number" value=paid_value on_input=paid_input />
                <div class="md:col-span-3 flex gap-2">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create student" }}
                    </button>
                    <Button variant=ButtonVariant::Secondary on:click=move |_| vm.toggle_form()>
                        "Cancel"
                    </Button>
                </div>
            </form>
        </Card>
    }
}

#[component]
fn StudentTable(vm: AdminStudentsViewModel) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between gap-3 mb-4">
                <input
                    class="w-full md:w-80 border border-border rounded px-3 py-2"
                    placeholder="Search by name, registration number or email"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
            </div>
            {move || {
                let list = vm.students.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                let rows = vm.visible.get();
                if rows.is_empty() {
                    return view! { <EmptyState title="No students found" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Registration"</th>
                                <th class="py-2">"Name"</th>
                                <th class="py-2">"Email"</th>
                                <th class="py-2">"Gender"</th>
                                <th class="py-2 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rows.into_iter().map(|student| {
                                let id = student.id;
                                let name = student.display_name();
                                let email = or_dash(student.contact_email());
                                let for_delete = student.clone();
                                view! {
                                    <tr>
                                        <td class="py-2 font-mono">{or_dash(student.registration_number.as_deref())}</td>
                                        <td class="py-2">{name}</td>
                                        <td class="py-2">{email}</td>
                                        <td class="py-2">{or_dash(student.gender.as_deref())}</td>
                                        <td class="py-2 text-right space-x-2">
                                            <Button variant=ButtonVariant::Secondary on:click=move |_| vm.open_detail(id)>
                                                "View"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.request_delete(for_delete.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </Card>
    }
}

fn detail_rows(student: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Registration number", or_dash(student.registration_number.as_deref())),
        ("Name", student.display_name()),
        ("ID / passport", or_dash(student.id_or_passport_number.as_deref())),
        ("Gender", or_dash(student.gender.as_deref())),
        ("Date of birth", format_date(student.date_of_birth)),
        ("University email", or_dash(student.university_email.as_deref())),
        ("Personal email", or_dash(student.personal_email.as_deref())),
        ("Phone", or_dash(student.phone_number.as_deref())),
        ("Postal address", or_dash(student.postal_address.as_deref())),
        ("Enrolled", format_date(student.enrollment_date)),
    ]
}

#[component]
fn StudentDrawer(vm: AdminStudentsViewModel) -> impl IntoView {
    let pending = vm.reset_action.pending();
    let on_reset = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.reset_password();
    };
    view! {
        <Show when=move || vm.selected_id.get().is_some()>
            <div class="fixed inset-0 z-40 flex justify-end bg-black/30">
                <aside class="h-full w-full max-w-md overflow-y-auto bg-surface-elevated p-6 shadow-xl space-y-6">
                    <div class="flex items-center justify-between">
                        <h3 class="text-lg font-semibold text-fg">"Student details"</h3>
                        <Button variant=ButtonVariant::Ghost on:click=move |_| vm.close_detail()>"Close"</Button>
                    </div>
                    {move || match vm.detail.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        Some(Ok(student)) => view! {
                            <dl class="grid grid-cols-2 gap-x-4 gap-y-2 text-sm">
                                {detail_rows(&student).into_iter().map(|(label, value)| view! {
                                    <dt class="text-fg-muted">{label}</dt>
                                    <dd class="text-fg">{value}</dd>
                                }).collect_view()}
                            </dl>
                        }.into_view(),
                    }}
                    <form class="space-y-3 border-t border-border pt-4" on:submit=on_reset>
                        <h4 class="font-medium text-fg">"Reset password"</h4>
                        <FeedbackMessages state=vm.drawer_messages.into() />
                        <input
                            type="password"
                            class="w-full border border-border rounded px-3 py-2"
                            placeholder="New password (min. 6 characters)"
                            prop:value=move || vm.new_password.get()
                            on:input=move |ev| vm.new_password.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class=format!(
                                "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                                ButtonVariant::Danger.classes()
                            )
                            disabled=move || pending.get() || vm.new_password.with(|p| p.trim().is_empty())
                        >
                            {move || if pending.get() { "Resetting password..." } else { "Reset password" }}
                        </button>
                    </form>
                </aside>
            </div>
        </Show>
    }
}

#[component]
pub fn AdminStudentsPage() -> impl IntoView {
    let vm = use_admin_students_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|student| format!("Delete {}? This cannot be undone.", student.display_name()))
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Students"</h2>
                    <Show when=move || !vm.show_form.get()>
                        <Button variant=ButtonVariant::Primary on:click=move |_| vm.toggle_form()>
                            "Add student"
                        </Button>
                    </Show>
                </div>
                <FeedbackMessages state=vm.messages.into() />
                <Show when=move || vm.show_form.get()>
                    <StudentForm vm=vm />
                </Show>
                <StudentTable vm=vm />
            </div>
            <StudentDrawer vm=vm />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete student"
                message=delete_message
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::{
        helpers::{admin_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn students_page_lists_loaded_rows() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            let vm = use_admin_students_view_model();
            vm.students.update(|list| {
                list.upsert(User {
                    id: 1,
                    registration_number: Some("STU001".into()),
                    first_name: Some("Jane".into()),
                    last_name: Some("Wanjiru".into()),
                    university_email: Some("jane@uni.example".into()),
                    role: Role::Student,
                    ..User::default()
                })
            });
            view! { <StudentTable vm=vm /> }
        });
        assert!(html.contains("STU001"));
        assert!(html.contains("Jane Wanjiru"));
        assert!(html.contains("jane@uni.example"));
    }

    #[test]
    fn drawer_shows_reset_form_for_selected_student() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            let vm = use_admin_students_view_model();
            vm.selected_id.set(Some(1));
            vm.detail.set(Some(Ok(User {
                id: 1,
                registration_number: Some("STU001".into()),
                gender: Some("Female".into()),
                ..User::default()
            })));
            view! { <StudentDrawer vm=vm /> }
        });
        assert!(html.contains("Student details"));
        assert!(html.contains("Female"));
        assert!(html.contains("Reset password"));
    }

    #[test]
    fn form_is_hidden_until_requested() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminStudentsPage /> }
        });
        assert!(html.contains("Add student"));
        assert!(!html.contains("Registration number *"));
        assert!(html.contains("No students found"));
    }
}
