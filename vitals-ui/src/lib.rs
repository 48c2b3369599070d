//! Thành phần biểu đồ huyết áp cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::styles;
    use serde_wasm_bindgen::from_value;
    use vitals_core::{
        build_vitals_series, AxisBounds, BloodPressureSeries, DiagnosisEntry, RangeWindow, Reading,
    };
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlSelectElement, Window};
    use yew::prelude::*;
    use yew::TargetCast;

    const CHART_WIDTH: f64 = 600.0;
    const CHART_HEIGHT: f64 = 220.0;
    const CHART_PADDING: f64 = 14.0;

    #[derive(Properties, PartialEq)]
    pub struct BloodPressureViewProps {
        /// Mảng `diagnosis_history` thô, kể cả bản ghi cụt.
        pub history: Vec<DiagnosisEntry>,
    }

    #[function_component(BloodPressureView)]
    fn blood_pressure_view(props: &BloodPressureViewProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let selector = use_state(|| "1".to_string());
        let range = RangeWindow::from_selector(selector.as_str());

        // Chuỗi được dựng lại mỗi khi lịch sử hoặc khoảng chọn đổi, không
        // giữ cache nội bộ nào khác.
        let series = use_memo((props.history.clone(), range), |(history, range)| {
            build_vitals_series(Some(history.as_slice()), *range)
        });

        let on_range = {
            let selector = selector.clone();
            Callback::from(move |event: Event| {
                let input: HtmlSelectElement = event.target_unchecked_into();
                selector.set(input.value());
            })
        };

        html! {
            <section class="bp-root">
                <header class="bp-header">
                    <h3>{"Huyết áp"}</h3>
                    <select class="bp-select" onchange={on_range} aria-label="Chọn khoảng thời gian">
                        <option value="1" selected={*selector == "1"}>{"1 năm gần đây"}</option>
                        <option value="15" selected={*selector == "15"}>{"15 tháng gần đây"}</option>
                        <option value="2" selected={*selector == "2"}>{"2 năm gần đây"}</option>
                    </select>
                </header>
                {
                    match &*series {
                        Some(series) => html! {
                            <div class="bp-body">
                                { render_chart(series) }
                                <aside class="bp-legend">
                                    { render_reading("systolic", "Systolic", &series.current.systolic) }
                                    <hr class="bp-divider" />
                                    { render_reading("diastolic", "Diastolic", &series.current.diastolic) }
                                </aside>
                            </div>
                        },
                        None => html! {
                            <p class="bp-empty">{"Chưa có dữ liệu huyết áp"}</p>
                        },
                    }
                }
            </section>
        }
    }

    fn render_chart(series: &BloodPressureSeries) -> Html {
        let bounds = AxisBounds::fit(series);
        let systolic = chart_points(&series.systolic, &bounds);
        let diastolic = chart_points(&series.diastolic, &bounds);

        html! {
            <div class="bp-plot">
                <svg
                    viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                    preserveAspectRatio="none"
                    role="img"
                    aria-label="Biểu đồ huyết áp theo tháng"
                >
                    <text class="bp-scale-label" x="4" y="16">{ format!("{:.0}", bounds.max) }</text>
                    <text class="bp-scale-label" x="4" y={format!("{}", CHART_HEIGHT - 6.0)}>
                        { format!("{:.0}", bounds.min) }
                    </text>
                    <polyline class="bp-line" data-series="systolic" points={systolic} />
                    <polyline class="bp-line" data-series="diastolic" points={diastolic} />
                </svg>
                <div class="bp-axis">
                    { for series.labels.iter().map(|label| html! { <span>{ label.clone() }</span> }) }
                </div>
            </div>
        }
    }

    /// Chiếu dãy giá trị lên hệ tọa độ SVG của biểu đồ.
    fn chart_points(values: &[f64], bounds: &AxisBounds) -> String {
        let span = (bounds.max - bounds.min).max(f64::EPSILON);
        let inner_width = CHART_WIDTH - 2.0 * CHART_PADDING;
        let inner_height = CHART_HEIGHT - 2.0 * CHART_PADDING;
        let count = values.len();

        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let x = if count <= 1 {
                    CHART_WIDTH / 2.0
                } else {
                    CHART_PADDING + index as f64 * inner_width / (count as f64 - 1.0)
                };
                let norm = ((value - bounds.min) / span).clamp(0.0, 1.0);
                let y = CHART_HEIGHT - CHART_PADDING - norm * inner_height;
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_reading(kind: &'static str, label: &'static str, reading: &Reading) -> Html {
        html! {
            <div class="bp-reading" data-series={kind}>
                <div class="bp-reading-name">
                    <span class="bp-dot" data-series={kind}></span>
                    <span>{ label }</span>
                </div>
                <div class="bp-reading-value">{ format_value(reading.value) }</div>
                { render_levels(reading.levels.as_deref()) }
            </div>
        }
    }

    fn render_levels(levels: Option<&str>) -> Html {
        let Some(levels) = levels else {
            return Html::default();
        };
        let arrow = if levels.contains("Higher") { "▲" } else { "▼" };
        html! {
            <div class="bp-reading-levels">
                <span class="bp-arrow">{ arrow }</span>
                { levels.to_string() }
            </div>
        }
    }

    fn format_value(value: f64) -> String {
        if value.fract().abs() < f64::EPSILON {
            format!("{value:.0}")
        } else {
            format!("{value}")
        }
    }

    #[wasm_bindgen]
    pub fn mount_blood_pressure_view(selector: &str, history: JsValue) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let history_value: serde_json::Value = from_value(history)?;
        let history = vitals_patient::extract_history(&history_value);

        yew::Renderer::<BloodPressureView>::with_root_and_props(
            target,
            BloodPressureViewProps { history },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_blood_pressure_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_blood_pressure_view(
    _: &str,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "vitals-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
