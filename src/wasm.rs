use crate::member::Roster;
use crate::overlap::WeeklyOverlap;
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;

/// Entry point for the web presentation layer: a roster plus an array of
/// selected member ids in, the weekly grid and ranked recommendations out.
#[wasm_bindgen(js_name = planWeek)]
pub fn plan_week(roster: JsValue, selected: JsValue) -> Result<JsValue, JsValue> {
    let roster: Roster = serde_wasm_bindgen::from_value(roster).map_err(JsValue::from)?;
    let selected: BTreeSet<String> =
        serde_wasm_bindgen::from_value(selected).map_err(JsValue::from)?;

    let overlap = WeeklyOverlap::plan(&roster, &selected);

    serde_wasm_bindgen::to_value(&overlap).map_err(JsValue::from)
}
