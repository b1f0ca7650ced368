//! Assistant Panel - View Component

use super::model::request_completion;
use super::view_model::{accept_query, AssistantPanelVm};
use crate::assistant::insights;
use contracts::enums::DashboardSection;
use contracts::shared::assistant::{fallback_response, CompletionOutcome, InsightContext};
use leptos::prelude::*;
use thaw::*;

/// Conversational assistant bound to the active dashboard section.
///
/// One invocation in flight per panel instance: while `is_sending` is set the
/// input is disabled and re-entrant submits are silent no-ops. The remote
/// completion service is preferred; any failure produces a deterministic
/// local answer instead of an error state.
#[component]
#[allow(non_snake_case)]
pub fn AssistantPanel(section: ReadSignal<DashboardSection>) -> impl IntoView {
    let vm = AssistantPanelVm::new();

    let handle_ask = Callback::new(move |_| {
        let Some(query) = accept_query(&vm.query.get_untracked(), vm.is_sending.get_untracked())
        else {
            return;
        };

        vm.is_sending.set(true);
        vm.response.set(None);

        let ctx = InsightContext::for_section(section.get_untracked());
        wasm_bindgen_futures::spawn_local(async move {
            let answer = match request_completion(&ctx, &query).await {
                CompletionOutcome::Answer(text) => text,
                outcome => {
                    // The reason never reaches the user; the local answer does.
                    log::debug!("assistant completion fell back: {:?}", outcome);
                    fallback_response(&query, &ctx)
                }
            };

            vm.response.set(Some(answer));
            vm.is_sending.set(false);
        });
    });

    let suggestions = [
        "What are the peak hours?",
        "Which products sell best?",
        "Customer behavior insights",
        "Revenue optimization tips",
    ];

    view! {
        <div class="assistant-panel">
            <div
                style="display: flex; justify-content: space-between; align-items: center; cursor: pointer;"
                on:click=move |_| vm.is_expanded.update(|v| *v = !*v)
            >
                <h3 style="font-weight: 600;">
                    {move || insights::for_section(section.get()).title}
                </h3>
                <span>{move || if vm.is_expanded.get() { "▾" } else { "▸" }}</span>
            </div>

            <Show when=move || vm.is_expanded.get()>
                <div style="margin-top: 12px; display: flex; flex-direction: column; gap: 16px;">
                    // Key insights
                    <div>
                        <p style="font-size: 13px; font-weight: 500; margin-bottom: 6px;">"Key Insights"</p>
                        <For
                            each=move || insights::for_section(section.get()).insights.to_vec()
                            key=|line| *line
                            let:line
                        >
                            <div style="font-size: 13px; padding: 6px 8px; margin-bottom: 4px; background: var(--colorNeutralBackground2); border-radius: 6px;">
                                {line}
                            </div>
                        </For>
                    </div>

                    // Recommendations
                    <div>
                        <p style="font-size: 13px; font-weight: 500; margin-bottom: 6px;">"Recommendations"</p>
                        <For
                            each=move || insights::for_section(section.get()).recommendations.to_vec()
                            key=|line| *line
                            let:line
                        >
                            <div style="font-size: 13px; padding: 6px 8px; margin-bottom: 4px; border-left: 2px solid var(--colorBrandBackground); background: var(--colorNeutralBackground1);">
                                {line}
                            </div>
                        </For>
                    </div>

                    // Latest answer (replaced by the next invocation)
                    {move || {
                        vm.response
                            .get()
                            .map(|text| {
                                view! {
                                    <div style="padding: 12px; background: var(--colorBrandBackground2); border-radius: 8px;">
                                        <h4 style="font-size: 13px; font-weight: 600; margin-bottom: 6px;">"Suqi's Analysis"</h4>
                                        <p style="font-size: 13px; white-space: pre-wrap;">{text}</p>
                                    </div>
                                }
                            })
                    }}

                    // Query input
                    <Flex style="gap: 8px;">
                        <Input
                            value=vm.query
                            placeholder="Ask Suqi about this data..."
                            disabled=vm.is_sending
                            attr:style="flex: 1;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    handle_ask.run(());
                                }
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.is_sending
                            on_click=move |_| handle_ask.run(())
                        >
                            {move || if vm.is_sending.get() { "Analyzing..." } else { "Ask Suqi" }}
                        </Button>
                    </Flex>

                    // Quick suggestion buttons
                    <Flex style="gap: 6px; flex-wrap: wrap;">
                        {suggestions
                            .into_iter()
                            .map(|suggestion| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        disabled=vm.is_sending
                                        on_click=move |_| {
                                            vm.query.set(suggestion.to_string());
                                            handle_ask.run(());
                                        }
                                    >
                                        {suggestion}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Flex>
                </div>
            </Show>
        </div>
    }
}
