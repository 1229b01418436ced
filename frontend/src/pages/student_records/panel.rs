use super::{
    utils::{format_gpa, graded_count, DocumentKind},
    view_model::{use_student_records_view_model, StudentRecordsViewModel},
};
use crate::{
    api::Transcript,
    components::{
        common::{Button, ButtonVariant, Card},
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::or_dash,
};
use leptos::*;

#[component]
fn TranscriptView(transcript: Transcript) -> impl IntoView {
    let graded = graded_count(&transcript);
    let total = transcript.courses.len();
    view! {
        <Card title="Transcript">
            <dl class="grid gap-2 md:grid-cols-4 text-sm">
                <dt class="text-fg-muted">"Student"</dt>
                <dd class="text-fg">{transcript.student_name}</dd>
                <dt class="text-fg-muted">"Registration number"</dt>
                <dd class="font-mono">{transcript.registration_number}</dd>
                <dt class="text-fg-muted">"Program"</dt>
                <dd class="text-fg">{or_dash(transcript.program_title.as_deref())}</dd>
                <dt class="text-fg-muted">"GPA"</dt>
                <dd class="text-2xl font-bold text-fg">{format_gpa(transcript.gpa)}</dd>
            </dl>
            <p class="text-sm text-fg-muted">{format!("{} of {} courses graded", graded, total)}</p>
            {if transcript.courses.is_empty() {
                view! { <EmptyState title="No courses on record" /> }.into_view()
            } else {
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Code"</th>
                                <th class="py-2">"Course"</th>
                                <th class="py-2">"Grade"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {transcript.courses.into_iter().map(|course| view! {
                                <tr>
                                    <td class="py-2 font-mono">{course.course_code}</td>
                                    <td class="py-2">{course.course_title}</td>
                                    <td class="py-2 font-semibold">{or_dash(course.grade.as_deref())}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </Card>
    }
}

#[component]
fn Documents(vm: StudentRecordsViewModel) -> impl IntoView {
    let pending = vm.download_action.pending();
    view! {
        <Card title="Official documents">
            <p class="text-sm text-fg-muted">"Documents are generated as PDF files."</p>
            <div class="flex flex-wrap gap-2">
                {[DocumentKind::Transcript, DocumentKind::Certificate]
                    .into_iter()
                    .map(|kind| view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            loading=Signal::derive(move || pending.get())
                            on:click=move |_| vm.download(kind)
                        >
                            {kind.label()}
                        </Button>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
pub fn StudentRecordsPage() -> impl IntoView {
    let vm = use_student_records_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Academic records"</h2>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
                </div>
                <FeedbackMessages state=vm.messages.into() />
                <Documents vm=vm />
                {move || match vm.transcript.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(transcript)) => view! { <TranscriptView transcript=transcript /> }.into_view(),
                }}
            </div>
        </Layout>
    }
}
