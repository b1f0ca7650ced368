//! Application Shell - корневой layout приложения
//!
//! Содержит:
//! - шапку с переключателем разделов
//! - центральную область с дашбордом активного раздела
//! - правую панель ассистента, привязанную к активному разделу

use crate::assistant::ui::panel::AssistantPanel;
use crate::dashboards::d410_product_mix::ui::ProductMixChart;
use contracts::enums::DashboardSection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let section = RwSignal::new(DashboardSection::ProductMix);

    view! {
        <div style="height: 100vh; display: flex; flex-direction: column;">
            <header style="display: flex; align-items: center; gap: 16px; padding: 12px 20px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                <h1 style="font-size: 18px; font-weight: bold;">"Scout Retail Analytics"</h1>
                <Flex style="gap: 4px;">
                    <For
                        each=|| DashboardSection::all()
                        key=|s| s.code()
                        let:entry
                    >
                        <Button
                            appearance=Signal::derive(move || {
                                if section.get() == entry {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            on_click=move |_| section.set(entry)
                        >
                            {entry.display_name()}
                        </Button>
                    </For>
                </Flex>
            </header>

            <div style="flex: 1; display: flex; min-height: 0;">
                <main style="flex: 1; overflow-y: auto; padding: 20px;">
                    {move || match section.get() {
                        DashboardSection::ProductMix => view! { <ProductMixChart /> }.into_any(),
                        other => view! { <SectionPlaceholder section=other /> }.into_any(),
                    }}
                </main>

                <aside style="width: 360px; overflow-y: auto; border-left: 1px solid var(--colorNeutralStroke2); padding: 16px;">
                    <AssistantPanel section=section.read_only() />
                </aside>
            </div>
        </div>
    }
}

/// Заглушка для разделов без собственного дашборда
#[component]
fn SectionPlaceholder(section: DashboardSection) -> impl IntoView {
    view! {
        <div style="padding: 24px; border: 1px dashed var(--colorNeutralStroke2); border-radius: 8px;">
            <h2 style="font-size: 16px; font-weight: 600; margin-bottom: 8px;">
                {section.display_name()}
            </h2>
            <p style="color: var(--colorNeutralForeground3);">
                "Charts for this section are served by other dashboards. Use the assistant panel to query "
                {section.focus()}
                "."
            </p>
        </div>
    }
}
