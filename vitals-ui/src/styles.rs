#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-vitals-ui]";

/// Default CSS for the component along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --bp-font-family: 'Manrope', 'Inter', system-ui, -apple-system, sans-serif;
  --bp-bg: #f8f5ff;
  --bp-heading: #072635;
  --bp-muted: #707070;
  --bp-systolic: #c26eb4;
  --bp-systolic-dot: #e66fd2;
  --bp-diastolic: #7e6cab;
  --bp-diastolic-dot: #8c6fe6;
  --bp-divider: #e0e0e0;
  --bp-radius: 12px;
}

.bp-root {
  font-family: var(--bp-font-family);
  background: var(--bp-bg);
  color: var(--bp-heading);
  border-radius: var(--bp-radius);
  padding: 16px;
}

.bp-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-bottom: 10px;
}

.bp-header h3 {
  margin: 0;
  font-size: 1.08rem;
  font-weight: 700;
}

.bp-select {
  background: var(--bp-bg);
  border: none;
  border-radius: 8px;
  padding: 4px 8px;
  font-size: 0.85rem;
  color: var(--bp-heading);
  cursor: pointer;
}

.bp-select:focus-visible {
  outline: 2px solid rgba(140, 111, 230, 0.4);
}

.bp-body {
  display: flex;
  gap: 18px;
}

.bp-plot {
  flex: 2;
  display: flex;
  flex-direction: column;
  gap: 6px;
  min-width: 0;
}

.bp-plot svg {
  width: 100%;
  height: 208px;
  background: #ffffff;
  border-radius: 10px;
}

.bp-line {
  fill: none;
  stroke-width: 2.2;
  stroke-linejoin: round;
  stroke-linecap: round;
}

.bp-line[data-series="systolic"] {
  stroke: var(--bp-systolic);
}

.bp-line[data-series="diastolic"] {
  stroke: var(--bp-diastolic);
}

.bp-scale-label {
  font-size: 11px;
  fill: var(--bp-muted);
}

.bp-axis {
  display: flex;
  justify-content: space-between;
  font-size: 0.72rem;
  color: var(--bp-muted);
  font-variant-numeric: tabular-nums;
}

.bp-legend {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 12px;
  padding-left: 6px;
}

.bp-reading-name {
  display: flex;
  align-items: center;
  gap: 8px;
  font-size: 0.9rem;
  font-weight: 700;
}

.bp-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
}

.bp-dot[data-series="systolic"] {
  background: var(--bp-systolic-dot);
}

.bp-dot[data-series="diastolic"] {
  background: var(--bp-diastolic-dot);
}

.bp-reading-value {
  font-size: 1.6rem;
  font-weight: 800;
}

.bp-reading-levels {
  display: flex;
  align-items: center;
  gap: 5px;
  font-size: 0.85rem;
  color: var(--bp-muted);
}

.bp-divider {
  border: none;
  border-top: 1px solid var(--bp-divider);
  margin: 4px 0;
}

.bp-empty {
  min-height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
  margin: 0;
  color: var(--bp-muted);
  font-style: italic;
}

@media (max-width: 720px) {
  .bp-body {
    flex-direction: column;
  }

  .bp-legend {
    padding-left: 0;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-vitals-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
