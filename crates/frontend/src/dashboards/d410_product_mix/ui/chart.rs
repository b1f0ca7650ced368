use crate::dashboards::d410_product_mix::api;
use chrono::{DateTime, Utc};
use contracts::dashboards::d410_product_mix::{
    build_tree, select_category, CategoryShare, MixTreeNode, ProductMixResponse,
};
use js_sys::{Function, Reflect};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlIFrameElement;

/// Aspect ratio requested from the proportional-area renderer
const CHART_ASPECT_RATIO: f64 = 4.0 / 3.0;

/// Product Mix treemap with category -> brand drill-down.
///
/// The component owns the session focus state; all layout geometry is
/// computed by the iframe-hosted renderer, which reports clicks back as
/// `d410_node_click` messages carrying the node name and depth.
#[component]
pub fn ProductMixChart() -> impl IntoView {
    // Data state
    let (data, set_data) = signal(None::<ProductMixResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Drill-down focus: None = categories, Some = brands of one category.
    // Starts cleared; owned by this component instance only.
    let focus = RwSignal::new(None::<CategoryShare>);

    // Iframe state (HtmlIFrameElement is not Send+Sync, store locally)
    let iframe_element = StoredValue::new_local(None::<HtmlIFrameElement>);
    let (iframe_loaded, set_iframe_loaded) = signal(false);

    // Load the dataset on mount
    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_product_mix().await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Handle node clicks reported by the renderer iframe
    Effect::new(move |_| {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };

        let handler = Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
            let payload = event.data();
            let Ok(msg_type) = Reflect::get(&payload, &JsValue::from_str("type")) else {
                return;
            };
            if msg_type.as_string().as_deref() != Some("d410_node_click") {
                return;
            }

            let Ok(name_value) = Reflect::get(&payload, &JsValue::from_str("name")) else {
                return;
            };
            let Some(name) = name_value.as_string() else {
                return;
            };
            let depth = Reflect::get(&payload, &JsValue::from_str("depth"))
                .ok()
                .and_then(|v| v.as_f64());

            // Only depth-1 category nodes with brands drill in; everything
            // else (brand tiles, the container, stale names) keeps the
            // current focus.
            if depth != Some(1.0) {
                return;
            }
            let Some(response) = data.get_untracked() else {
                return;
            };
            match select_category(&response.categories, &name) {
                Some(category) if !category.brands.is_empty() => {
                    focus.set(Some(category.clone()));
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);

        let _ =
            window.add_event_listener_with_callback("message", handler.as_ref().unchecked_ref());
        handler.forget();
    });

    // Re-render the treemap whenever data, focus or the iframe change.
    // The display tree is rebuilt from scratch on purpose: the renderer
    // diffs nodes by reference.
    Effect::new(move |_| {
        let current_data = data.get();
        let current_focus = focus.get();
        let is_loaded = iframe_loaded.get();

        let Some(current_data) = current_data else {
            return;
        };
        if !is_loaded {
            return;
        }
        let Some(iframe) = iframe_element.get_value() else {
            return;
        };

        let tree = build_tree(&current_data.categories, current_focus.as_ref());
        if let Err(err) = render_chart_in_iframe(&iframe, &tree) {
            log::error!("Failed to render D410 treemap: {:?}", err);
        }
    });

    view! {
        <div id="d410_product_mix--dashboard" class="d410-dashboard">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 12px;">
                <h2 style="font-size: 16px; font-weight: 600;">"Product Category Distribution"</h2>
                {move || {
                    data.get()
                        .map(|d| {
                            let as_of = format_stamp(&d.as_of);
                            view! {
                                <span style="font-size: 12px; color: var(--colorNeutralForeground3);">
                                    "as of " {as_of}
                                </span>
                            }
                        })
                }}
            </Flex>

            {move || {
                data.get()
                    .map(|d| {
                        view! {
                            <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 12px;">
                                <StatTile label="Total SKUs" value=d.sku_stats.total_skus />
                                <StatTile label="Active SKUs" value=d.sku_stats.active_skus />
                                <StatTile label="New SKUs" value=d.sku_stats.new_skus />
                            </div>
                        }
                    })
            }}

            {move || {
                if loading.get() {
                    Some(view! {
                        <div class="d410-loading">
                            <span>"Loading product mix..."</span>
                        </div>
                    })
                } else {
                    None
                }
            }}

            {move || {
                error.get()
                    .map(|err| {
                        view! {
                            <div class="d410-error">
                                <strong>"⚠ "</strong>
                                {err}
                            </div>
                        }
                    })
            }}

            // Back affordance during brand drill-down
            {move || {
                focus.get()
                    .map(|category| {
                        view! {
                            <Flex align=FlexAlign::Center style="gap: 8px; margin-bottom: 8px;">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| focus.set(None)
                                >
                                    "← Back to Categories"
                                </Button>
                                <span style="font-size: 13px; color: var(--colorNeutralForeground3);">
                                    "Showing brands in " {category.name.clone()}
                                </span>
                            </Flex>
                        }
                    })
            }}

            <iframe
                src="assets/dashboards/d410/treemap.html"
                style="width: 100%; height: 420px; border: none;"
                on:load=move |ev| {
                    let iframe = ev
                        .target()
                        .and_then(|t| t.dyn_into::<HtmlIFrameElement>().ok());
                    iframe_element.set_value(iframe);
                    set_iframe_loaded.set(true);
                }
            ></iframe>

            <div style="margin-top: 12px; padding: 10px 12px; background: var(--colorNeutralBackground2); border-radius: 8px;">
                <p style="font-size: 13px;">{move || insight_line(focus.get())}</p>
            </div>
        </div>
    }
}

#[component]
fn StatTile(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <p style="font-size: 12px; color: var(--colorNeutralForeground3);">{label}</p>
            <p style="font-size: 20px; font-weight: bold;">{value}</p>
        </div>
    }
}

fn format_stamp(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M UTC").to_string()
}

/// One-line takeaway under the chart, switching with the drill-down state
fn insight_line(focus: Option<CategoryShare>) -> String {
    match focus {
        Some(category) => {
            let leader = category
                .brands
                .iter()
                .max_by(|a, b| a.value.total_cmp(&b.value));
            match leader {
                Some(brand) => format!(
                    "{} category: {} leads with {}% market share.",
                    category.name, brand.name, brand.value
                ),
                None => format!("{} category has no brand breakdown.", category.name),
            }
        }
        None => "Tobacco Products dominate with 45% share. Click categories in the treemap \
                 to explore brand breakdown."
            .to_string(),
    }
}

fn render_chart_in_iframe(iframe: &HtmlIFrameElement, tree: &MixTreeNode) -> Result<(), JsValue> {
    let window = iframe
        .content_window()
        .ok_or_else(|| JsValue::from_str("Iframe window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Iframe document not available"))?;
    let container = document
        .get_element_by_id("treemap-root")
        .ok_or_else(|| JsValue::from_str("treemap-root element not found"))?;

    let render_value = Reflect::get(&window, &JsValue::from_str("render"))?;
    if !render_value.is_function() {
        return Err(JsValue::from_str("render is not a function"));
    }
    let render_fn: Function = render_value.dyn_into()?;
    let tree_value = tree
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let options = js_sys::Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("aspectRatio"),
        &JsValue::from_f64(CHART_ASPECT_RATIO),
    )?;

    // Clicks come back through the parent as postMessage events; the
    // renderer itself never mutates focus.
    let on_node_click = Function::new_with_args(
        "name, depth",
        "window.parent.postMessage({type:'d410_node_click', name: name, depth: depth}, '*');",
    );
    Reflect::set(&options, &JsValue::from_str("onNodeClick"), &on_node_click)?;

    render_fn.call3(&window, &container.into(), &tree_value, &options)?;
    Ok(())
}
